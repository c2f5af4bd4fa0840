use thiserror::Error;

/// Errors produced while building or sampling a Markov model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// The corpus contained no usable words; no model can be built.
	#[error("corpus contains no usable words")]
	EmptyCorpus,

	/// The requested context width cannot condition a chain.
	#[error("context width must be >= 1, got {0}")]
	InvalidWidth(usize),

	/// A context has no recorded transitions.
	///
	/// Raised by the sampling primitive; the generator recovers from it
	/// by falling back to a shorter width, so callers of the high-level
	/// API never see this variant.
	#[error("no transitions recorded for context '{0}'")]
	UnknownContext(String),
}
