//! Top-level module for the word-chain model.
//!
//! This module provides an order-n word Markov chain, including:
//! - Table construction from a tokenized corpus (`MarkovModel`)
//! - Walker state over prefixes (`State`)
//! - Run parameters (`Params`)
//! - Seeded text generation (`Generator`)

/// Seeded random walk over a prefix table.
///
/// Produces a `Generation`: the emitted words and why the walk stopped.
pub mod generator;

/// Prefix → suffix table construction (`n >= 1`).
///
/// Handles prefix windowing over the sentinel-padded word list.
pub mod markov_model;

/// Sliding window of the last `n` words of a walk.
///
/// Builds table keys and picks the next word among observed suffixes.
mod state;

/// Validated run parameters: corpus, table size, prefix size, text size, seed.
pub mod params;
