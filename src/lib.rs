//! # pokeget - PokeAPI lookups from the command line
//!
//! Fetches a single pokemon from PokeAPI and prints its name, order and
//! official artwork.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────┐  args   ┌────────────┐  fetch   ┌───────────────┐  GET  ┌─────────┐
//! │ cmd_args │────────►│  commands  │─────────►│ PokeApiClient │──────►│ PokeAPI │
//! └──────────┘         │   (get)    │◄─────────│               │◄──────│         │
//!                      └────────────┘  Pokemon └───────────────┘  JSON └─────────┘
//!                            │
//!                            ▼ stdout
//! ```
//!
//! The library never exits the process. Every failure comes back as a
//! [`pokeapi::FetchError`] and the binary decides what to do with it.

pub mod cmd_args;
pub mod commands;
pub mod config;
pub mod pokeapi;

// Re-export main types for easy access
pub use pokeapi::{fetch_by_name, FetchError, PokeApiClient, Pokemon};
