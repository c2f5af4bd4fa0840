use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::io::{build_output_path, load_word_list};
use super::chain_builder::ChainBuilder;
use super::table::TransitionTable;

/// The trained Markov model: one transition table per context width.
///
/// This struct manages:
/// - `tables`: a map from context width to its `TransitionTable`, for
///   every width in `1..=width`. The widest table drives steady-state
///   sampling; the shorter ones back up contexts that were never
///   observed at full width.
/// - `words`: the set of corpus words, kept so generation can avoid
///   returning words that already exist in the training data.
///
/// Built once from a corpus, read-only afterwards, and serializable for
/// binary caching next to the word list it was trained on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProbabilityModel {
	width: usize,
	tables: BTreeMap<usize, TransitionTable>,
	words: BTreeSet<String>,
}

impl ProbabilityModel {
	/// Trains a model of the given maximum context width over a corpus.
	///
	/// One table is built per width in `1..=width`, each independent of
	/// the others. The corpus is expected to be clean already (lowercase,
	/// alphabetic), see `io::load_word_list`.
	///
	/// # Errors
	/// - `ModelError::InvalidWidth` if `width` is 0, before any building.
	/// - `ModelError::EmptyCorpus` if the corpus has no words.
	pub fn train(corpus: &[String], width: usize) -> Result<Self, ModelError> {
		if width == 0 {
			return Err(ModelError::InvalidWidth(width));
		}
		if corpus.is_empty() {
			return Err(ModelError::EmptyCorpus);
		}

		let mut tables = BTreeMap::new();
		for w in 1..=width {
			let mut builder = ChainBuilder::new(w)?;
			for word in corpus {
				builder.add_word(word);
			}
			tables.insert(w, builder.build());
		}

		Ok(Self {
			width,
			tables,
			words: corpus.iter().cloned().collect(),
		})
	}

	/// Loads a word list, trains a model over it and writes the binary
	/// cache next to it.
	///
	/// The cache file shares the word list's stem with a `bin` extension
	/// and holds the postcard serialization of the trained model.
	pub fn train_from_wordlist<P: AsRef<Path>>(
		wordlist_path: P,
		width: usize,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let cache_path = build_output_path(&wordlist_path, "bin")?;

		let corpus = load_word_list(&wordlist_path)?;
		let model = Self::train(&corpus, width)?;

		let bytes = postcard::to_stdvec(&model)?;
		std::fs::write(cache_path, bytes)?;

		Ok(model)
	}

	/// Loads a cached model if a binary sibling of the word list exists
	/// and covers the requested width, otherwise trains from the word
	/// list and writes the cache.
	///
	/// # Notes
	/// - A corrupt cache, or one trained with a smaller width, triggers a
	///   retrain instead of an error.
	/// - The cache does not track edits to the word list itself; callers
	///   that need a fresh model use `train_from_wordlist` directly.
	pub fn load_or_train<P: AsRef<Path>>(
		wordlist_path: P,
		width: usize,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let cache_path = build_output_path(&wordlist_path, "bin")?;

		if cache_path.exists() {
			let bytes = std::fs::read(&cache_path)?;
			if let Ok(model) = postcard::from_bytes::<Self>(&bytes) {
				if model.width >= width {
					return Ok(model);
				}
			}
		}

		Self::train_from_wordlist(wordlist_path, width)
	}

	/// The maximum context width this model was trained with.
	pub fn width(&self) -> usize {
		self.width
	}

	/// Returns the table trained for exactly `width` characters of
	/// context, if that width was trained.
	pub fn table(&self, width: usize) -> Option<&TransitionTable> {
		self.tables.get(&width)
	}

	/// True if `word` appeared in the training corpus.
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Number of distinct words the model was trained on.
	pub fn word_count(&self) -> usize {
		self.words.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn corpus(words: &[&str]) -> Vec<String> {
		words.iter().map(|word| (*word).to_owned()).collect()
	}

	#[test]
	fn empty_corpus_is_fatal() {
		assert_eq!(
			ProbabilityModel::train(&[], 2).unwrap_err(),
			ModelError::EmptyCorpus
		);
	}

	#[test]
	fn width_zero_is_fatal() {
		assert_eq!(
			ProbabilityModel::train(&corpus(&["cat"]), 0).unwrap_err(),
			ModelError::InvalidWidth(0)
		);
	}

	#[test]
	fn one_table_per_width() {
		let model = ProbabilityModel::train(&corpus(&["cat", "car"]), 3).unwrap();

		assert_eq!(model.width(), 3);
		for w in 1..=3 {
			let table = model.table(w).unwrap();
			assert_eq!(table.width(), w);
			assert!(!table.is_empty());
		}
		assert!(model.table(4).is_none());
	}

	#[test]
	fn training_twice_yields_identical_models() {
		let words = corpus(&["cat", "car", "can", "cart", "corn"]);

		let first = ProbabilityModel::train(&words, 3).unwrap();
		let second = ProbabilityModel::train(&words, 3).unwrap();

		assert_eq!(first, second);
	}

	#[test]
	fn corpus_membership_is_tracked() {
		let model = ProbabilityModel::train(&corpus(&["cat", "cat", "car"]), 2).unwrap();

		assert!(model.contains("cat"));
		assert!(!model.contains("dog"));
		assert_eq!(model.word_count(), 2);
	}
}
