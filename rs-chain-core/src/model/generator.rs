use std::fmt::Debug;

use log::{debug, trace};

use crate::error::ChainError;
use crate::model::chain::Chain;
use crate::model::generation_config::GenerationConfig;
use crate::model::seeded_random::SeededRandom;

/// Outcome of a random walk.
///
/// - `tokens`: the generated phrase, starting with the two seed tokens.
/// - `fallbacks`: number of retries consumed after dead ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Walk<T> {
	pub tokens: Vec<T>,
	pub fallbacks: usize,
}

/// Random walk over a [`Chain`].
///
/// # Responsibilities
/// - Extend a phrase from an ordered pair using observed transitions
/// - Commit one or more tokens per accepted transition (`repeatings`)
/// - Teleport to a random corpus pivot when the walk dead-ends (`retries`)
///
/// The generator only borrows the chain; it never mutates it.
#[derive(Debug)]
pub struct PhraseGenerator<'a, T> {
	chain: &'a Chain<T>,
}

impl<'a, T: Clone + PartialEq + Debug> PhraseGenerator<'a, T> {
	pub fn new(chain: &'a Chain<T>) -> Self {
		Self { chain }
	}

	/// Generates a phrase starting with `word0, word1`.
	///
	/// See [`PhraseGenerator::walk`].
	pub fn generate(&self, word0: T, word1: T, config: &GenerationConfig) -> Result<Vec<T>, ChainError> {
		Ok(self.walk(word0, word1, config)?.tokens)
	}

	/// Walks the chain from `(word0, word1)` and reports the phrase and the
	/// number of fallbacks consumed.
	///
	/// # Behavior
	/// - While a transition exists and the phrase is shorter than `max_len`,
	///   one option is drawn and committed. Committing repeats (up to
	///   `repeatings` times) as long as the drawn token equals the token two
	///   steps back, and stops as soon as a different one is drawn.
	/// - Otherwise a retry is consumed. If the phrase is still shorter than
	///   `max_len`, the state teleports to a random corpus token followed by
	///   one of its observed followers (or by another random token).
	/// - The walk ends once retries are exhausted or the phrase is longer
	///   than `max_len`.
	///
	/// # Notes
	/// - `max_len` is a soft cap: a commit started at `max_len - 1` can add up
	///   to `repeatings` tokens, so the phrase is at most
	///   `max(2, max_len - 1 + repeatings)` long.
	/// - Every draw reseeds the random source, so draws only vary when their
	///   range does.
	///
	/// # Errors
	/// Returns `ChainError::EmptyCorpus` if the chain holds no token.
	pub fn walk(&self, word0: T, word1: T, config: &GenerationConfig) -> Result<Walk<T>, ChainError> {
		let words = self.chain.words();
		if words.is_empty() {
			return Err(ChainError::EmptyCorpus);
		}

		let max_len = config.effective_max_len();
		let repeatings = config.effective_repeatings();
		let mut tries_left = config.retries;
		let mut fallbacks = 0;

		let mut rnd = SeededRandom::new(0, words.len() - 1)?;
		rnd.seed(config.seed);

		debug!(
			"Walk start: ({:?}, {:?}), corpus size {}, max_len {}, seed {}",
			word0, word1, words.len(), max_len, config.seed
		);

		let mut prev = word0.clone();
		let mut curr = word1.clone();
		let mut tokens = vec![word0, word1];

		loop {
			let options = self.chain.possible_next(&prev, &curr);
			if !options.is_empty() && tokens.len() < max_len {
				rnd.set_range(0, options.len() - 1)?;
				for _ in 0..repeatings {
					let next = options[rnd.next()].clone();
					let breaks_repeat = next != prev;
					trace!("Commit {:?} after ({:?}, {:?})", next, prev, curr);
					prev = std::mem::replace(&mut curr, next.clone());
					tokens.push(next);
					if breaks_repeat {
						break;
					}
				}
				continue;
			}

			if tries_left == 0 || tokens.len() > max_len {
				break;
			}

			if tokens.len() < max_len {
				rnd.set_range(0, words.len() - 1)?;
				let r0 = rnd.next();
				let r1 = rnd.next();

				let pivot = words[r0].clone();
				// Prefer an observed follower of the pivot, any token otherwise
				let mut follower = words[r1].clone();
				let near = self.chain.near_words(&pivot, config.seed);
				if !near.is_empty() {
					rnd.set_range(0, near.len() - 1)?;
					follower = near[rnd.next()].clone();
				}

				trace!("Teleport to ({:?}, {:?}), {} tries left", pivot, follower, tries_left - 1);
				prev = pivot;
				curr = follower;
			}
			tries_left -= 1;
			fallbacks += 1;
		}

		debug!("Walk done: {} tokens, {} fallbacks", tokens.len(), fallbacks);
		Ok(Walk { tokens, fallbacks })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn numbers() -> Chain<i64> {
		let mut chain = Chain::new();
		chain.append_all(0..=11);
		chain
	}

	fn config(max_len: usize, retries: usize, repeatings: usize, seed: u64) -> GenerationConfig {
		GenerationConfig { max_len, retries, repeatings, seed }
	}

	#[test]
	fn follows_a_linear_corpus() {
		let chain = numbers();
		let walk = PhraseGenerator::new(&chain).walk(1, 2, &config(8, 10, 10, 12398)).unwrap();
		assert_eq!(walk.tokens, vec![1, 2, 3, 4, 5, 6, 7, 8]);
		// Length reached: every remaining retry is consumed without teleporting
		assert_eq!(walk.fallbacks, 10);
	}

	#[test]
	fn unknown_pair_without_retries_returns_seeds() {
		let chain = numbers();
		let walk = PhraseGenerator::new(&chain).walk(4, 2, &config(8, 0, 1, 12398)).unwrap();
		assert_eq!(walk.tokens, vec![4, 2]);
		assert_eq!(walk.fallbacks, 0);
	}

	#[test]
	fn unknown_pair_teleports_into_corpus() {
		let chain = numbers();
		let walk = PhraseGenerator::new(&chain).walk(4, 2, &config(8, 10, 10, 12398)).unwrap();
		assert_eq!(&walk.tokens[..2], &[4, 2]);
		assert!(walk.tokens[2..].iter().all(|t| (0..=11).contains(t)));
		assert!(walk.fallbacks >= 1 && walk.fallbacks <= 10);
		assert!(walk.tokens.len() <= 8 - 1 + 10);
	}

	#[test]
	fn singleton_corpus_exhausts_retries() {
		let mut chain = Chain::new();
		chain.append(7_i64);
		let walk = PhraseGenerator::new(&chain).walk(1, 2, &config(8, 5, 1, 1)).unwrap();
		assert_eq!(walk.tokens, vec![1, 2]);
		assert_eq!(walk.fallbacks, 5);
	}

	#[test]
	fn max_len_is_clamped_to_two() {
		let chain = numbers();
		let walk = PhraseGenerator::new(&chain).walk(1, 2, &config(0, 3, 1, 1)).unwrap();
		assert_eq!(walk.tokens, vec![1, 2]);
		assert_eq!(walk.fallbacks, 3);
	}

	#[test]
	fn commit_loop_overshoots_max_len() {
		let mut chain = Chain::new();
		chain.append_all(["a", "a", "a", "a"]);
		let tokens = PhraseGenerator::new(&chain).generate("a", "a", &config(3, 10, 5, 1)).unwrap();
		assert_eq!(tokens, vec!["a"; 7]);
	}

	#[test]
	fn single_repeating_stops_at_max_len() {
		let mut chain = Chain::new();
		chain.append_all(["a", "a", "a", "a"]);
		let tokens = PhraseGenerator::new(&chain).generate("a", "a", &config(3, 10, 1, 1)).unwrap();
		assert_eq!(tokens, vec!["a"; 3]);
	}

	#[test]
	fn generation_is_deterministic() {
		let mut chain = Chain::new();
		chain.append_all("the fire burns and the fire dies and the ash remains".split(' '));
		let generator = PhraseGenerator::new(&chain);
		let cfg = config(20, 10, 3, 42);
		assert_eq!(
			generator.walk("the", "fire", &cfg).unwrap(),
			generator.walk("the", "fire", &cfg).unwrap()
		);
	}

	#[test]
	fn empty_corpus_is_an_error() {
		let chain: Chain<i64> = Chain::new();
		let result = PhraseGenerator::new(&chain).generate(1, 2, &GenerationConfig::default());
		assert!(matches!(result, Err(ChainError::EmptyCorpus)));
	}
}
