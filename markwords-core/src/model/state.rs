use std::collections::HashMap;

use super::table::Distribution;

/// Transition counts observed for a single context.
///
/// A `State` accumulates how many times each destination symbol followed
/// one fixed context in the corpus. Conceptually, a node of the Markov
/// chain whose outgoing edges are weighted by their observation counts.
///
/// ## Responsibilities
/// - Accumulate destination occurrences during building
/// - Freeze the counts into a cumulative `Distribution`
///
/// ## Invariants
/// - Every recorded occurrence count is strictly positive
/// - `total` equals the sum of all destination counts
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
	/// Destination occurrences indexed by the next symbol.
	/// Example: { 'e' => 42, 'a' => 3 }
	occurrences: HashMap<char, usize>,
	/// Total number of observations for this context.
	total: usize,
}

impl State {
	/// Creates a new empty state.
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Records one observation of a transition toward `symbol`.
	pub(crate) fn add_transition(&mut self, symbol: char) {
		*self.occurrences.entry(symbol).or_insert(0) += 1;
		self.total += 1;
	}

	/// Freezes the counts into a cumulative distribution.
	///
	/// Destinations are visited in lexicographic order, so the same counts
	/// always produce the same entry sequence, bit for bit. Each entry's
	/// cumulative probability is the previous one plus count / total.
	pub(crate) fn into_distribution(self) -> Distribution {
		let mut symbols: Vec<char> = self.occurrences.keys().copied().collect();
		symbols.sort_unstable();

		let total = self.total as f64;
		let mut cumulative = 0.0;
		let mut entries = Vec::with_capacity(symbols.len());
		for symbol in symbols {
			cumulative += self.occurrences[&symbol] as f64 / total;
			entries.push((symbol, cumulative));
		}

		Distribution::new(entries)
	}
}
