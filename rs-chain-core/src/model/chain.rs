use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Ordered token list backing a second-order Markov chain.
///
/// Tokens are kept in corpus order; adjacency in the list *is* the
/// transition table. Lookups scan the whole list, which keeps the store
/// trivially mergeable and is fast enough for the small corpora it is
/// meant for.
///
/// # Responsibilities
/// - Accumulate tokens in corpus order
/// - List every token observed after an ordered pair (`possible_next`)
/// - List every token observed after a single token (`near_words`)
///
/// # Invariants
/// - Index order is corpus order; duplicates are kept
/// - Lookups never mutate the list
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<T> {
	words: Vec<T>,
}

impl<T> Default for Chain<T> {
	fn default() -> Self {
		Self { words: Vec::new() }
	}
}

impl<T: Clone + PartialEq> Chain<T> {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a single token.
	pub fn append(&mut self, word: T) {
		self.words.push(word);
	}

	/// Appends every token of `words`, preserving their order.
	pub fn append_all<I: IntoIterator<Item = T>>(&mut self, words: I) {
		self.words.extend(words);
	}

	/// Drops every token. Used by adapters that rebuild the list from scratch.
	pub(crate) fn clear(&mut self) {
		self.words.clear();
	}

	/// Returns the tokens observed right after the ordered pair `(word0, word1)`.
	///
	/// Matches are returned in corpus order, duplicates included. A pair
	/// sitting at the very end of the list contributes nothing.
	pub fn possible_next(&self, word0: &T, word1: &T) -> Vec<T> {
		self.words
			.windows(3)
			.filter(|w| w[0] == *word0 && w[1] == *word1)
			.map(|w| w[2].clone())
			.collect()
	}

	/// Returns the tokens observed right after `word0`, shuffled.
	///
	/// Duplicates are kept so that a uniform pick over the result follows the
	/// observed frequencies. The shuffle is driven by `seed`, so the order is
	/// reproducible.
	pub fn near_words(&self, word0: &T, seed: u64) -> Vec<T> {
		let mut result: Vec<T> = self.words
			.windows(2)
			.filter(|w| w[0] == *word0)
			.map(|w| w[1].clone())
			.collect();
		result.shuffle(&mut StdRng::seed_from_u64(seed));
		result
	}

	/// Number of tokens in the corpus.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Read-only view of the token list.
	pub fn words(&self) -> &[T] {
		&self.words
	}

	/// Copy of the token list.
	pub fn to_vec(&self) -> Vec<T> {
		self.words.clone()
	}
}
