use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Tolerance accepted when a distribution's final cumulative value is
/// compared against 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Cumulative probability distribution over the symbols that may follow
/// one context.
///
/// Entries are sorted by symbol and carry monotonically non-decreasing
/// cumulative probabilities; the last entry equals 1.0 within
/// `PROBABILITY_TOLERANCE`. This shape supports inverse-CDF sampling
/// from a single uniform draw.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Distribution {
	entries: Vec<(char, f64)>,
}

impl Distribution {
	/// Wraps a prepared entry list.
	///
	/// Callers must supply entries already sorted by symbol with
	/// non-decreasing cumulative values ending at 1.0.
	pub(crate) fn new(entries: Vec<(char, f64)>) -> Self {
		debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
		debug_assert!(
			entries
				.last()
				.map_or(true, |(_, p)| (p - 1.0).abs() < PROBABILITY_TOLERANCE)
		);
		Self { entries }
	}

	/// Returns the (symbol, cumulative probability) pairs in symbol order.
	pub fn entries(&self) -> &[(char, f64)] {
		&self.entries
	}

	/// Draws a symbol by inverse-CDF lookup.
	///
	/// Returns the first symbol whose cumulative probability exceeds `r`.
	/// Float accumulation can leave the last entry a hair under 1.0, in
	/// which case the last symbol is returned. `None` only for an empty
	/// distribution, which building never produces.
	pub fn sample(&self, r: f64) -> Option<char> {
		let mut fallback = None;
		for (symbol, cumulative) in &self.entries {
			if *cumulative > r {
				return Some(*symbol);
			}
			fallback = Some(*symbol);
		}
		fallback
	}
}

/// Transition table for a single context width.
///
/// Maps every observed context of exactly `width` characters (boundary
/// padding included) to the cumulative distribution of its successors.
/// Built once by `ChainBuilder`, read-only afterwards. The sorted map
/// keeps iteration and serialization order deterministic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitionTable {
	width: usize,
	contexts: BTreeMap<String, Distribution>,
}

impl TransitionTable {
	pub(crate) fn new(width: usize, contexts: BTreeMap<String, Distribution>) -> Self {
		Self { width, contexts }
	}

	/// The context width this table was built for.
	pub fn width(&self) -> usize {
		self.width
	}

	/// Number of distinct contexts observed.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	/// True when no context was ever observed.
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Looks up the distribution for a context, if it was ever observed.
	pub fn distribution(&self, context: &str) -> Option<&Distribution> {
		self.contexts.get(context)
	}

	/// Draws the next symbol for `context` using the uniform value `r`.
	///
	/// # Errors
	/// `ModelError::UnknownContext` when the context has no entry. This
	/// is an expected condition when a seed prefix contains letter
	/// combinations absent from the corpus; the generator recovers from
	/// it by falling back to a shorter width.
	pub fn sample(&self, context: &str, r: f64) -> Result<char, ModelError> {
		self.distribution(context)
			.and_then(|distribution| distribution.sample(r))
			.ok_or_else(|| ModelError::UnknownContext(context.to_owned()))
	}

	/// Iterates over (context, distribution) pairs in context order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.contexts.iter().map(|(context, distribution)| (context.as_str(), distribution))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn thirds() -> Distribution {
		Distribution::new(vec![('n', 1.0 / 3.0), ('r', 2.0 / 3.0), ('t', 1.0)])
	}

	#[test]
	fn sample_returns_first_entry_exceeding_r() {
		let distribution = thirds();
		assert_eq!(distribution.sample(0.0), Some('n'));
		assert_eq!(distribution.sample(0.5), Some('r'));
		assert_eq!(distribution.sample(0.9), Some('t'));
	}

	#[test]
	fn sample_falls_back_to_last_entry_near_one() {
		// 1.0 is outside [0, 1) but float accumulation can leave the last
		// cumulative value slightly below the draw.
		let distribution = Distribution::new(vec![('a', 0.999_999_999_9)]);
		assert_eq!(distribution.sample(0.999_999_999_95), Some('a'));
	}

	#[test]
	fn unknown_context_is_reported() {
		let table = TransitionTable::new(2, BTreeMap::from([("ca".to_owned(), thirds())]));

		assert_eq!(table.sample("ca", 0.5), Ok('r'));
		assert_eq!(
			table.sample("zz", 0.5),
			Err(ModelError::UnknownContext("zz".to_owned()))
		);
	}
}
