//! # PokeAPI Client
//!
//! Typed access to the `/api/v2/pokemon/{identifier}` endpoint: the
//! response model, the blocking client that fetches it, and the errors it
//! can fail with.

pub mod client;
pub mod error;
pub mod models;

pub use client::{fetch_by_name, PokeApiClient};
pub use error::FetchError;
pub use models::{NamedApiResource, OfficialArtwork, Pokemon, PokemonSprites};
