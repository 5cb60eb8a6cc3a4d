//! `pokeget get <identifier>`

use std::io::Write;

use anyhow::{Context, Result};

use crate::pokeapi::{PokeApiClient, Pokemon};

/// Fetch one pokemon and print its summary
pub fn run(client: &PokeApiClient, identifier: &str, out: &mut impl Write) -> Result<()> {
    let pokemon = client
        .fetch_by_name(identifier)
        .with_context(|| format!("Failed to get pokemon '{identifier}'"))?;

    write_summary(&pokemon, out).context("Failed to write output")?;
    Ok(())
}

/// Print the name, order and official artwork of a pokemon
pub fn write_summary(pokemon: &Pokemon, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "name:  {}", pokemon.name)?;
    writeln!(out, "pokemon#:  {}", pokemon.order)?;
    writeln!(out, "Artwork URL:  {}", pokemon.artwork())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary_of(value: serde_json::Value) -> String {
        let pokemon: Pokemon = serde_json::from_value(value).unwrap();
        let mut out = Vec::new();
        write_summary(&pokemon, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn write_summary_should_print_three_lines() {
        let output = summary_of(json!({
            "id": 132,
            "name": "ditto",
            "order": 123,
            "sprites": {
                "other": {
                    "official-artwork": {"front_default": "https://example/ditto.png"}
                }
            }
        }));

        assert_eq!(
            output,
            "name:  ditto\npokemon#:  123\nArtwork URL:  {https://example/ditto.png}\n"
        );
    }

    #[test]
    fn write_summary_should_render_missing_artwork_as_empty_braces() {
        let output = summary_of(json!({"id": 10093, "name": "pikachu-rock-star", "order": -1}));

        assert_eq!(
            output,
            "name:  pikachu-rock-star\npokemon#:  -1\nArtwork URL:  {}\n"
        );
    }

    #[test]
    fn run_should_fail_without_touching_output_on_bad_identifier() {
        let client = PokeApiClient::new(&crate::config::ClientConfig::default()).unwrap();
        let mut out = Vec::new();

        let err = run(&client, " ", &mut out).unwrap_err();
        assert!(out.is_empty());
        assert!(err.to_string().contains("Failed to get pokemon"));
    }
}
