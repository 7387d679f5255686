use std::path::Path;

use log::debug;

use crate::error::ChainError;
use crate::io::read_corpus;
use crate::model::chain::Chain;
use crate::model::generation_config::GenerationConfig;
use crate::model::generator::PhraseGenerator;
use crate::model::seeded_random::SeededRandom;

/// Word-level Markov chain built from raw text.
///
/// Text is accumulated in a raw buffer. Every call to
/// [`StringChain::append_text`] re-splits the **whole** buffer and rebuilds
/// the token list, so a token can span two appended fragments
/// (`"fi"` + `"re"` gives `"fire"`). This is quadratic over many appends;
/// callers with large corpora should append once.
#[derive(Clone, Debug, Default)]
pub struct StringChain {
	chain: Chain<String>,
	text: String,
}

impl StringChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a chain from a text file.
	///
	/// Lines are joined with a single space, then split on `delimiter`.
	///
	/// # Errors
	/// Returns `ChainError::Io` if the file cannot be read.
	pub fn from_corpus_file<P: AsRef<Path>>(filepath: P, delimiter: char) -> Result<Self, ChainError> {
		let mut chain = Self::new();
		chain.append_text(&read_corpus(filepath, " ")?, delimiter);
		Ok(chain)
	}

	/// Splits `text` on every `delimiter`.
	///
	/// The remainder after the last delimiter is always kept, even when
	/// empty: `"a b "` gives `["a", "b", ""]`.
	pub fn split(text: &str, delimiter: char) -> Vec<String> {
		text.split(delimiter).map(str::to_owned).collect()
	}

	/// Appends `data` to the raw buffer and rebuilds the token list from it.
	pub fn append_text(&mut self, data: &str, delimiter: char) {
		self.text.push_str(data);
		self.chain.clear();
		self.chain.append_all(Self::split(&self.text, delimiter));
		debug!("Rebuilt word list: {} words from {} bytes", self.chain.len(), self.text.len());
	}

	/// Generates a text starting with `word0 word1`, joined with `separator`.
	///
	/// # Behavior
	/// - An empty `word0` is replaced by a random corpus word.
	/// - An empty `word1` is replaced by a random follower of `word0`, or by a
	///   random corpus word when `word0` has no follower.
	///
	/// # Errors
	/// Returns `ChainError::EmptyCorpus` if no text was appended.
	pub fn generate_text(
		&self,
		word0: &str,
		word1: &str,
		separator: &str,
		config: &GenerationConfig,
	) -> Result<String, ChainError> {
		let words = self.chain.words();
		if words.is_empty() {
			return Err(ChainError::EmptyCorpus);
		}

		let mut rnd = SeededRandom::new(0, words.len() - 1)?;
		rnd.seed(config.seed);
		let r0 = rnd.next();
		let r1 = rnd.next();

		let start = if word0.is_empty() { words[r0].clone() } else { word0.to_owned() };
		let follower = if word1.is_empty() {
			let near = self.chain.near_words(&start, config.seed);
			if near.is_empty() {
				words[r1].clone()
			} else {
				rnd.set_range(0, near.len() - 1)?;
				near[rnd.next()].clone()
			}
		} else {
			word1.to_owned()
		};

		let phrase = PhraseGenerator::new(&self.chain).generate(start, follower, config)?;
		Ok(phrase.join(separator))
	}

	pub fn chain(&self) -> &Chain<String> {
		&self.chain
	}

	/// Raw text accumulated so far.
	pub fn text(&self) -> &str {
		&self.text
	}
}
