use std::collections::{BTreeMap, HashMap};
use std::iter;

use crate::error::ModelError;
use super::state::State;
use super::table::{Distribution, TransitionTable};

/// Reserved symbol marking "before the word begins": every word is padded
/// on the left with `width` of these so short prefixes act as valid
/// contexts.
pub const BOUNDARY_CHAR: char = '#';

/// Reserved symbol marking "end of word". It shares the boundary glyph,
/// since both mean "outside the word", and `#` sorts before every
/// alphabetic character, which fixes the terminal's place at the head of
/// an entry list.
pub const TERMINAL_CHAR: char = '#';

/// Builds the transition table for one context width.
///
/// # Responsibilities
/// - Pad and window corpus words into (context, destination) observations
/// - Accumulate occurrence counts per context
/// - Freeze the counts into cumulative distributions
///
/// # Invariants
/// - `width` is always >= 1
/// - A context with zero observations never gets an entry
#[derive(Debug)]
pub struct ChainBuilder {
	/// Number of characters of context (the chain order).
	width: usize,
	/// Mapping from an observed context to its accumulated counts.
	states: HashMap<String, State>,
}

impl ChainBuilder {
	/// Creates a builder for contexts of `width` characters.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWidth` if `width` is 0.
	pub fn new(width: usize) -> Result<Self, ModelError> {
		if width == 0 {
			return Err(ModelError::InvalidWidth(width));
		}
		Ok(Self { width, states: HashMap::new() })
	}

	/// The context width this builder accumulates for.
	pub fn width(&self) -> usize {
		self.width
	}

	/// Adds one corpus word to the accumulated counts.
	///
	/// The word is padded with `width` boundary symbols on the left and
	/// one terminal on the right; a window of `width` characters slides
	/// over the padded form, recording the character after the window as
	/// the destination for the window's content. The destination is the
	/// terminal exactly when the window ends at the word's last letter.
	///
	/// # Notes
	/// - Duplicate corpus words count every occurrence.
	/// - The word is expected to be clean already (lowercase, alphabetic).
	pub fn add_word(&mut self, word: &str) {
		let padded: Vec<char> = iter::repeat(BOUNDARY_CHAR)
			.take(self.width)
			.chain(word.chars())
			.chain(iter::once(TERMINAL_CHAR))
			.collect();

		// One window per original character, plus one for the terminal.
		for window in padded.windows(self.width + 1) {
			let context: String = window[..self.width].iter().collect();
			let destination = window[self.width];

			self.states
				.entry(context)
				.or_insert_with(State::new)
				.add_transition(destination);
		}
	}

	/// Freezes the accumulated counts into a `TransitionTable`.
	///
	/// Contexts land in a sorted map and each state's destinations are
	/// visited in lexicographic order, so two builds over the same corpus
	/// produce bit-identical tables.
	pub fn build(self) -> TransitionTable {
		let contexts: BTreeMap<String, Distribution> = self
			.states
			.into_iter()
			.map(|(context, state)| (context, state.into_distribution()))
			.collect();

		TransitionTable::new(self.width, contexts)
	}
}
