use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::io;

/// Parameters of a phrase generation.
///
/// # Fields
/// - `max_len`: soft cap on the phrase length (clamped to at least 2).
/// - `retries`: number of fallback attempts once the walk dead-ends.
/// - `repeatings`: maximum number of tokens committed per accepted transition.
/// - `seed`: seed for every random draw of the generation.
///
/// Missing fields in a serialized config take their default value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
	pub max_len: usize,
	pub retries: usize,
	pub repeatings: usize,
	pub seed: u64,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { max_len: 255, retries: 10, repeatings: 1, seed: 1991 }
	}
}

impl GenerationConfig {
	/// Loads a configuration from a JSON file.
	///
	/// # Errors
	/// Returns `ChainError::Io` if the file cannot be read and
	/// `ChainError::Config` if it is not a valid configuration.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, ChainError> {
		let contents = io::read_to_string(filepath)?;
		Ok(serde_json::from_str(&contents)?)
	}

	pub fn with_max_len(mut self, max_len: usize) -> Self {
		self.max_len = max_len;
		self
	}

	pub fn with_retries(mut self, retries: usize) -> Self {
		self.retries = retries;
		self
	}

	pub fn with_repeatings(mut self, repeatings: usize) -> Self {
		self.repeatings = repeatings;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = seed;
		self
	}

	/// Length cap actually used by the walk.
	pub(crate) fn effective_max_len(&self) -> usize {
		self.max_len.max(2)
	}

	/// Commit budget actually used by the walk. Zero would never extend the phrase.
	pub(crate) fn effective_repeatings(&self) -> usize {
		self.repeatings.max(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = GenerationConfig::default();
		assert_eq!(config.max_len, 255);
		assert_eq!(config.retries, 10);
		assert_eq!(config.repeatings, 1);
		assert_eq!(config.seed, 1991);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: GenerationConfig = serde_json::from_str(r#"{ "max_len": 8, "seed": 42 }"#).unwrap();
		assert_eq!(config, GenerationConfig::default().with_max_len(8).with_seed(42));
	}

	#[test]
	fn effective_values_are_clamped() {
		let config = GenerationConfig::default().with_max_len(0).with_repeatings(0);
		assert_eq!(config.effective_max_len(), 2);
		assert_eq!(config.effective_repeatings(), 1);
	}

	#[test]
	fn from_file_reports_bad_json() {
		let path = std::env::temp_dir().join(format!("rs-chain-config-{}.json", std::process::id()));
		std::fs::write(&path, "{ max_len: ").unwrap();
		assert!(matches!(GenerationConfig::from_file(&path), Err(ChainError::Config(_))));
		std::fs::remove_file(path).unwrap();
	}
}
