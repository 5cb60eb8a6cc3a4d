//! Response model for the pokemon endpoint
//!
//! The shape is dictated by PokeAPI. Every JSON key that differs from the
//! Rust field name is mapped with an explicit `rename`, nullable values are
//! `Option`s, and unknown keys are ignored so new API fields never break
//! decoding.

pub mod pokemon;
pub mod resource;
pub mod sprites;

pub use pokemon::{
    Pokemon, PokemonAbility, PokemonCries, PokemonHeldItem, PokemonHeldItemVersion, PokemonMove,
    PokemonMoveVersion, PokemonStat, PokemonType, VersionGameIndex,
};
pub use resource::NamedApiResource;
pub use sprites::{OfficialArtwork, PokemonSprites};
