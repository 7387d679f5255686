//! Second-order Markov chain generation library.
//!
//! This crate provides a token-level Markov chain system including:
//! - A generic, ordered token store with pair and single-token lookups
//! - A seeded random walk producing phrases with retry/teleport fallback
//! - String and integer front-ends over the generic engine
//! - Internal utilities for I/O
//!
//! Generation is fully deterministic for a given corpus, starting pair
//! and `GenerationConfig`.

/// Core chain store, random walk and token adapters.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (corpus and configuration loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::ChainError;
