use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ChainError;

/// Deterministic integer source over an inclusive range.
///
/// Unlike a conventional generator, the engine is rebuilt from the stored
/// seed before **every** draw. Two consecutive calls to [`SeededRandom::next`]
/// with the same seed and range return the same value; variation only comes
/// from changing the range (or the seed) between draws.
///
/// ## Invariants
/// - `lower <= upper`
#[derive(Clone, Debug)]
pub struct SeededRandom {
	seed: u64,
	lower: usize,
	upper: usize,
}

impl SeededRandom {
	/// Creates a generator over `[lower, upper]` with a seed of 0.
	///
	/// # Errors
	/// Returns `ChainError::InvalidRange` if `upper < lower`.
	pub fn new(lower: usize, upper: usize) -> Result<Self, ChainError> {
		Self::check_range(lower, upper)?;
		Ok(Self { seed: 0, lower, upper })
	}

	/// Resets the seed. The range is left untouched.
	pub fn seed(&mut self, seed: u64) {
		self.seed = seed;
	}

	/// Changes the bounds without touching the seed.
	///
	/// # Errors
	/// Returns `ChainError::InvalidRange` if `upper < lower`; the previous
	/// range is kept in that case.
	pub fn set_range(&mut self, lower: usize, upper: usize) -> Result<(), ChainError> {
		Self::check_range(lower, upper)?;
		self.lower = lower;
		self.upper = upper;
		Ok(())
	}

	/// Reseeds the engine, then draws one value uniformly from `[lower, upper]`.
	pub fn next(&self) -> usize {
		StdRng::seed_from_u64(self.seed).random_range(self.lower..=self.upper)
	}

	pub fn range(&self) -> (usize, usize) {
		(self.lower, self.upper)
	}

	fn check_range(lower: usize, upper: usize) -> Result<(), ChainError> {
		if upper < lower {
			return Err(ChainError::InvalidRange { lower, upper });
		}
		Ok(())
	}
}
