//! Top-level module for the Markov chain generation system.
//!
//! This module provides a second-order, token-level Markov chain, including:
//! - A generic ordered token store (`Chain`)
//! - A reseed-per-draw random source (`SeededRandom`)
//! - The random walk producing phrases (`PhraseGenerator`)
//! - Generation parameters (`GenerationConfig`)
//! - String and integer front-ends (`StringChain`, `IntChain`)

/// Deterministic integer source, reseeded before every draw.
pub mod seeded_random;

/// Generic ordered token list and its transition lookups.
pub mod chain;

/// Random walk over a chain with retry and teleport fallback.
pub mod generator;

/// Generation parameters and their defaults.
pub mod generation_config;

/// Word-level chain built from delimited text.
pub mod string_chain;

/// Chain over integer values.
pub mod int_chain;

pub use chain::Chain;
pub use generation_config::GenerationConfig;
pub use generator::{PhraseGenerator, Walk};
pub use int_chain::IntChain;
pub use seeded_random::SeededRandom;
pub use string_chain::StringChain;
