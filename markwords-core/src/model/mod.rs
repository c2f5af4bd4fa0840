//! Top-level module for the Markov word generation system.
//!
//! This module provides a letter-level Markov word generator, including:
//! - Per-width chain construction (`ChainBuilder`)
//! - Frozen cumulative probability tables (`TransitionTable`)
//! - Multi-width trained models (`ProbabilityModel`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// Builds the transition table for one context width.
///
/// Handles boundary padding, window sliding, occurrence counting and
/// the conversion of counts into cumulative distributions.
pub mod chain_builder;

/// Generation configuration structure.
///
/// Carries the width, batch size, seed prefix and termination bounds
/// collected by the surrounding CLI or server layer.
pub mod generation_input;

/// High-level interface for generating words from a trained model.
///
/// Exposes single-word and batch generation with prefix seeding,
/// shorter-width fallback and duplicate avoidance.
pub mod generator;

/// Multi-width trained model composed of one `TransitionTable` per width.
///
/// Supports training from a corpus and binary caching on disk.
pub mod probability_model;

/// Injectable source of uniform randomness.
///
/// The process-default source draws from rand's thread-local generator;
/// a replayable source makes sampling deterministic under test.
pub mod random;

/// Internal per-context transition accumulation.
///
/// Tracks destination occurrence counts during building and freezes them
/// into a cumulative distribution. This module is not exposed publicly.
mod state;

/// Frozen probability tables.
///
/// Cumulative distributions over next symbols and the per-width mapping
/// from contexts to distributions, both read-only after building.
pub mod table;
