use thiserror::Error;

/// Errors returned by the chain engine and its adapters.
///
/// Dead ends during a walk (no transition, exhausted retries) are not errors:
/// they are handled by the fallback logic and always yield a phrase.
#[derive(Debug, Error)]
pub enum ChainError {
	#[error("invalid random range: upper bound {upper} is below lower bound {lower}")]
	InvalidRange { lower: usize, upper: usize },

	#[error("cannot generate from an empty corpus")]
	EmptyCorpus,

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid configuration: {0}")]
	Config(#[from] serde_json::Error),
}
