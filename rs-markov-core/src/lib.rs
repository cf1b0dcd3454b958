//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - A fixed-capacity hash table whose probe stride is the key's own hash
//! - Order-n prefix → suffix model construction on top of it
//! - Reproducible, seeded text generation from that model
//! - Corpus reading and word splitting
//!
//! The three entry points are [`io::build_word_list`],
//! [`model::markov_model::build_markov_table`] and
//! [`model::generator::generate`].

/// Error type shared by every module.
pub mod error;

/// Corpus loading and word lists.
pub mod io;

/// Word chain construction and generation.
pub mod model;

/// Open-addressing table with hash-derived stride.
pub mod table;

pub use error::{MarkovError, Result};
