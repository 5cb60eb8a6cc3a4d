//! # pokeget Main Entry Point

use anyhow::Result;
use pokeget::{
    cmd_args::{Command, CommandLineArgs},
    commands,
    config::{self, ClientConfig},
    PokeApiClient,
};

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    // Diagnostics go to stderr so stdout only carries the summary
    tracing_subscriber::fmt()
        .with_max_level(config::get_log_level(args.verbose()))
        .with_writer(std::io::stderr)
        .init();

    let client = PokeApiClient::new(&ClientConfig::default())?;
    let mut stdout = std::io::stdout().lock();

    match args.command() {
        Command::Get { identifier } => commands::get::run(&client, identifier, &mut stdout),
    }
}
