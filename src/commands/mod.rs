//! # Subcommands
//!
//! Each subcommand takes its dependencies explicitly and writes to the
//! given output, so `main` only wires things together.

pub mod get;
