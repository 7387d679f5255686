use crate::error::ChainError;
use crate::model::chain::Chain;
use crate::model::generation_config::GenerationConfig;
use crate::model::generator::PhraseGenerator;
use crate::model::seeded_random::SeededRandom;

/// Markov chain over integer sequences.
///
/// Values are appended as-is; nothing is ever re-split or cleared.
#[derive(Clone, Debug, Default)]
pub struct IntChain {
	chain: Chain<i64>,
}

impl IntChain {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn append_int(&mut self, value: i64) {
		self.chain.append(value);
	}

	pub fn append_ints(&mut self, values: &[i64]) {
		self.chain.append_all(values.iter().copied());
	}

	/// Generates a sequence starting with `word0, word1`.
	///
	/// # Errors
	/// Returns `ChainError::EmptyCorpus` if no value was appended.
	pub fn generate_int_phrase(&self, word0: i64, word1: i64, config: &GenerationConfig) -> Result<Vec<i64>, ChainError> {
		PhraseGenerator::new(&self.chain).generate(word0, word1, config)
	}

	/// Generates a sequence starting with `word0` only.
	///
	/// The second value is a random follower of `word0` in the corpus, or
	/// `word0 + 1` when `word0` is never followed by anything.
	///
	/// # Errors
	/// Returns `ChainError::EmptyCorpus` if no value was appended.
	pub fn generate_int_phrase_single(&self, word0: i64, config: &GenerationConfig) -> Result<Vec<i64>, ChainError> {
		let near = self.chain.near_words(&word0, config.seed);
		let word1 = if near.is_empty() {
			word0.wrapping_add(1)
		} else {
			let mut rnd = SeededRandom::new(0, near.len() - 1)?;
			rnd.seed(config.seed);
			near[rnd.next()]
		};
		self.generate_int_phrase(word0, word1, config)
	}

	pub fn chain(&self) -> &Chain<i64> {
		&self.chain
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn numbers() -> IntChain {
		let mut chain = IntChain::new();
		chain.append_ints(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
		chain.append_int(11);
		chain
	}

	fn demo_config() -> GenerationConfig {
		GenerationConfig { max_len: 8, retries: 10, repeatings: 10, seed: 12398 }
	}

	#[test]
	fn appends_in_order() {
		assert_eq!(numbers().chain().to_vec(), (0..=11).collect::<Vec<i64>>());
	}

	#[test]
	fn good_sequence() {
		let phrase = numbers().generate_int_phrase(1, 2, &demo_config()).unwrap();
		assert_eq!(phrase, vec![1, 2, 3, 4, 5, 6, 7, 8]);
	}

	#[test]
	fn bad_sequence_falls_back_to_corpus_values() {
		let phrase = numbers().generate_int_phrase(4, 2, &demo_config()).unwrap();
		assert_eq!(&phrase[..2], &[4, 2]);
		assert!(phrase[2..].iter().all(|v| (0..=11).contains(v)));
	}

	#[test]
	fn single_start_uses_follower() {
		let phrase = numbers().generate_int_phrase_single(3, &demo_config()).unwrap();
		assert_eq!(&phrase[..3], &[3, 4, 5]);
	}

	#[test]
	fn single_start_without_follower_uses_successor() {
		let phrase = numbers().generate_int_phrase_single(11, &demo_config()).unwrap();
		assert_eq!(&phrase[..2], &[11, 12]);
	}

	#[test]
	fn empty_chain_is_an_error() {
		let chain = IntChain::new();
		assert!(matches!(chain.generate_int_phrase(1, 2, &demo_config()), Err(ChainError::EmptyCorpus)));
		assert!(matches!(chain.generate_int_phrase_single(1, &demo_config()), Err(ChainError::EmptyCorpus)));
	}
}
