use std::iter;

use super::chain_builder::{BOUNDARY_CHAR, TERMINAL_CHAR};
use super::generation_input::GenerationInput;
use super::probability_model::ProbabilityModel;
use super::random::{RandomSource, ThreadRandom};

/// High-level word generator: a trained model plus a randomness source.
///
/// # Responsibilities
/// - Resolve the trailing context for each draw, boundary-padded while
///   the word is still shorter than the context width
/// - Fall back to shorter widths when a context was never observed
/// - Stop on the terminal symbol, the step cap, or an unresolvable
///   context
#[derive(Debug)]
pub struct Generator<R: RandomSource = ThreadRandom> {
	model: ProbabilityModel,
	random: R,
}

impl Generator<ThreadRandom> {
	/// Creates a generator using the process-default randomness source.
	pub fn new(model: ProbabilityModel) -> Self {
		Self::with_random_source(model, ThreadRandom)
	}
}

impl<R: RandomSource> Generator<R> {
	/// Creates a generator with an injected randomness source.
	pub fn with_random_source(model: ProbabilityModel, random: R) -> Self {
		Self { model, random }
	}

	/// Read access to the trained model.
	pub fn model(&self) -> &ProbabilityModel {
		&self.model
	}

	/// Generates one word.
	///
	/// The buffer starts from the lower-cased seed prefix, or empty.
	/// Each step draws the next symbol conditioned on the trailing
	/// context and appends it, until the terminal symbol is drawn, the
	/// step cap is reached, or no table resolves the context (possible
	/// only when a prefix contains letter combinations absent from the
	/// corpus). Early termination returns whatever accumulated; it is a
	/// documented outcome, not an error.
	///
	/// The result never contains the boundary or terminal symbol and
	/// never drops the caller's prefix.
	pub fn generate(&mut self, input: &GenerationInput) -> String {
		let width = input.width().min(self.model.width());

		let mut word = input
			.seed_prefix
			.as_deref()
			.map(str::to_lowercase)
			.unwrap_or_default();

		for _ in 0..input.max_steps() {
			match self.next_symbol(&word, width) {
				Some(symbol) if symbol != TERMINAL_CHAR => word.push(symbol),
				_ => break,
			}
		}

		word
	}

	/// Generates `word_count` independent words.
	///
	/// When `nb_try` is positive, a word that already exists in the
	/// training corpus is re-generated up to that many times; the last
	/// attempt is kept regardless (best effort).
	pub fn generate_batch(&mut self, input: &GenerationInput) -> Vec<String> {
		(0..input.word_count)
			.map(|_| self.generate_avoiding_corpus(input))
			.collect()
	}

	/// Generates one word, re-rolling corpus duplicates up to `nb_try`
	/// times.
	fn generate_avoiding_corpus(&mut self, input: &GenerationInput) -> String {
		let mut word = self.generate(input);

		let mut nb_try = input.nb_try;
		while nb_try > 0 && self.model.contains(&word) {
			word = self.generate(input);
			nb_try -= 1;
		}

		word
	}

	/// Draws the next symbol for the current buffer.
	///
	/// Tries the requested width first; on a context miss, reduces the
	/// width one step at a time down to 1, consuming one uniform draw
	/// per emitted symbol. Returns `None` when every table misses, which
	/// ends the word early.
	fn next_symbol(&mut self, word: &str, width: usize) -> Option<char> {
		for w in (1..=width).rev() {
			let table = self.model.table(w)?;
			let context = Self::trailing_context(word, w);
			if let Some(distribution) = table.distribution(&context) {
				let r = self.random.next_uniform();
				return distribution.sample(r);
			}
		}

		None
	}

	/// Returns the last `width` characters of the buffer as sampling
	/// context, left-padded with boundary symbols while the buffer is
	/// still shorter than `width`. The padded form matches the context
	/// keys the builder recorded, so the first letters of a word
	/// condition on "start of word" rather than on an arbitrary
	/// mid-word window.
	fn trailing_context(word: &str, width: usize) -> String {
		let chars: Vec<char> = word.chars().collect();

		if chars.len() >= width {
			chars[chars.len() - width..].iter().collect()
		} else {
			iter::repeat(BOUNDARY_CHAR)
				.take(width - chars.len())
				.chain(chars)
				.collect()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::random::SequenceRandom;

	fn model(words: &[&str], width: usize) -> ProbabilityModel {
		let corpus: Vec<String> = words.iter().map(|word| (*word).to_owned()).collect();
		ProbabilityModel::train(&corpus, width).unwrap()
	}

	#[test]
	fn trailing_context_pads_short_buffers() {
		assert_eq!(Generator::<ThreadRandom>::trailing_context("", 3), "###");
		assert_eq!(Generator::<ThreadRandom>::trailing_context("a", 3), "##a");
		assert_eq!(Generator::<ThreadRandom>::trailing_context("abc", 3), "abc");
		assert_eq!(Generator::<ThreadRandom>::trailing_context("abcd", 3), "bcd");
	}

	#[test]
	fn injected_draws_make_generation_deterministic() {
		let input = GenerationInput::new(2).unwrap();

		// ## -> c, #c -> a, ca -> {n, r, t}, then the terminal.
		let mut generator = Generator::with_random_source(
			model(&["cat", "car", "can"], 2),
			SequenceRandom::new(vec![0.0, 0.0, 0.5, 0.0]),
		);

		assert_eq!(generator.generate(&input), "car");
		assert_eq!(generator.generate(&input), "car");
	}

	#[test]
	fn third_draw_picks_the_branch() {
		let words = ["cat", "car", "can"];
		let input = GenerationInput::new(2).unwrap();

		for (r, expected) in [(0.1, "can"), (0.5, "car"), (0.9, "cat")] {
			let mut generator = Generator::with_random_source(
				model(&words, 2),
				SequenceRandom::new(vec![0.0, 0.0, r, 0.0]),
			);
			assert_eq!(generator.generate(&input), expected);
		}
	}

	#[test]
	fn seed_prefix_is_kept_and_lowercased() {
		let mut input = GenerationInput::new(2).unwrap();
		input.seed_prefix = Some("CA".to_owned());

		let mut generator = Generator::with_random_source(
			model(&["cat", "car", "can"], 2),
			SequenceRandom::new(vec![0.9, 0.0]),
		);

		assert_eq!(generator.generate(&input), "cat");
	}

	#[test]
	fn unseen_prefix_terminates_early_with_prefix_intact() {
		let mut input = GenerationInput::new(2).unwrap();
		input.seed_prefix = Some("xy".to_owned());

		// No width resolves a context ending in 'y'; the prefix comes
		// back untouched.
		let mut generator = Generator::new(model(&["cat", "car", "can"], 2));
		assert_eq!(generator.generate(&input), "xy");
	}

	#[test]
	fn context_misses_fall_back_to_shorter_widths() {
		let mut input = GenerationInput::new(3).unwrap();
		input.seed_prefix = Some("qc".to_owned());

		// "#qc" and "qc" were never observed, but "c" was: the width-1
		// table carries the word to "qcat".
		let mut generator = Generator::with_random_source(
			model(&["cat"], 3),
			SequenceRandom::new(vec![0.0]),
		);

		assert_eq!(generator.generate(&input), "qcat");
	}

	#[test]
	fn generated_words_never_contain_reserved_symbols() {
		let input = GenerationInput::new(2).unwrap();

		let mut generator = Generator::new(model(&["cat", "car", "can", "cart", "corn"], 2));
		for _ in 0..200 {
			let word = generator.generate(&input);
			assert!(!word.contains(BOUNDARY_CHAR));
		}
	}

	#[test]
	fn step_cap_bounds_pathological_loops() {
		let mut input = GenerationInput::new(1).unwrap();
		input.set_max_steps(10);

		// In ["aa"], 'a' is followed by 'a' or the terminal with equal
		// mass; a draw of 0.9 always lands on 'a'.
		let mut generator = Generator::with_random_source(
			model(&["aa"], 1),
			SequenceRandom::new(vec![0.9]),
		);

		assert_eq!(generator.generate(&input), "aaaaaaaaaa");
	}

	#[test]
	fn requested_width_is_clamped_to_the_trained_width() {
		let input = GenerationInput::new(5).unwrap();

		let mut generator = Generator::with_random_source(
			model(&["cat"], 2),
			SequenceRandom::new(vec![0.0]),
		);

		assert_eq!(generator.generate(&input), "cat");
	}

	#[test]
	fn batch_generates_the_requested_count() {
		let mut input = GenerationInput::new(2).unwrap();
		input.word_count = 5;

		let mut generator = Generator::new(model(&["cat", "car", "can"], 2));
		assert_eq!(generator.generate_batch(&input).len(), 5);
	}

	#[test]
	fn duplicate_avoidance_rerolls_corpus_words() {
		let mut input = GenerationInput::new(1).unwrap();
		input.nb_try = 10;

		// First roll lands on "ab", which exists in the corpus; the
		// re-roll walks a->b->a and stops, yielding the novel "aba".
		let mut generator = Generator::with_random_source(
			model(&["ab", "ba"], 1),
			SequenceRandom::new(vec![0.0, 0.9, 0.0, 0.0, 0.9, 0.9, 0.0]),
		);

		let word = generator.generate_batch(&input).remove(0);
		assert_eq!(word, "aba");
	}
}
