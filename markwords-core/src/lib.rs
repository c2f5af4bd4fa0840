//! Markov-chain word generation library.
//!
//! This crate provides a letter-level Markov word generator including:
//! - Per-width transition tables with cumulative probability entries
//! - Multi-width models so short prefixes act as valid starting contexts
//! - Inverse-CDF sampling with an injectable randomness source
//! - Word-list loading and binary model caching
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Typed errors shared by model building and sampling.
pub mod error;

/// I/O utilities (word-list loading, path helpers).
///
/// Used by the front-end crates; the model itself never touches the
/// filesystem outside the explicit cache entry points.
pub mod io;

/// Core Markov models and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal count accumulation private.
pub mod model;
