use std::ffi::OsString;

pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    #[command(subcommand)]
    command: ClapCommand,

    /// Verbose mode
    /// Optional. Print diagnostic messages to stderr.
    #[clap(
        short = 'v',
        long,
        global = true,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Get related information from PokeAPI by using a pokemon name as the argument
    Get {
        /// Pokemon name or pokedex number, e.g. 'ditto' or '132'
        identifier: String,
    },
}

/// The subcommand requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { identifier: String },
}

impl From<ClapCommand> for Command {
    fn from(command: ClapCommand) -> Self {
        match command {
            ClapCommand::Get { identifier } => Command::Get { identifier },
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    command: Command,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    /// Same as [`CommandLineArgs::parse_from`] but reports usage errors instead of exiting
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from_clap)
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            command: args.command.into(),
            verbose: args.verbose,
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
