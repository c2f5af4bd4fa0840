use crate::error::ModelError;

/// Default cap on the number of letters appended to one word.
pub const DEFAULT_MAX_STEPS: usize = 256;

/// Input parameters for word generation.
///
/// `GenerationInput` carries the configuration the surrounding layers
/// (CLI, server) collect: context width, batch size, optional seed
/// prefix, and the bounds that keep generation finite.
///
/// # Invariants
/// - `width` is always >= 1 (validated at construction and by the setter)
/// - `max_steps` is always >= 1
#[derive(Clone, Debug)]
pub struct GenerationInput {
	/// Context width to sample with. Requests above the model's trained
	/// width are clamped by the generator.
	width: usize,

	/// Number of words to generate in a batch.
	pub word_count: usize,

	/// Forces generated words to begin with this text (lower-cased on
	/// use). The chain fills in the remainder.
	pub seed_prefix: Option<String>,

	/// Attempts to re-generate a word that already exists in the training
	/// corpus. 0 disables duplicate avoidance.
	pub nb_try: usize,

	/// Hard cap on letters appended per word; generation stops there even
	/// when no terminal was drawn.
	max_steps: usize,
}

impl GenerationInput {
	/// Creates an input for the given context width with defaults: one
	/// word, no prefix, no duplicate avoidance, `DEFAULT_MAX_STEPS`.
	///
	/// # Errors
	/// `ModelError::InvalidWidth` if `width` is 0.
	pub fn new(width: usize) -> Result<Self, ModelError> {
		if width == 0 {
			return Err(ModelError::InvalidWidth(width));
		}

		Ok(Self {
			width,
			word_count: 1,
			seed_prefix: None,
			nb_try: 0,
			max_steps: DEFAULT_MAX_STEPS,
		})
	}

	/// Returns the configured context width.
	pub fn width(&self) -> usize {
		self.width
	}

	/// Sets the context width.
	///
	/// # Errors
	/// `ModelError::InvalidWidth` if `width` is 0.
	pub fn set_width(&mut self, width: usize) -> Result<(), ModelError> {
		if width == 0 {
			return Err(ModelError::InvalidWidth(width));
		}
		self.width = width;
		Ok(())
	}

	/// Returns the per-word step cap.
	pub fn max_steps(&self) -> usize {
		self.max_steps
	}

	/// Sets the per-word step cap. Values below 1 are clamped to 1 so the
	/// generation loop always terminates without spinning.
	pub fn set_max_steps(&mut self, max_steps: usize) {
		self.max_steps = max_steps.max(1);
	}
}
