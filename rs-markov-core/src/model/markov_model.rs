use log::debug;

use crate::error::{MarkovError, Result};
use crate::io::SENTINEL;
use crate::table::ProbingTable;

/// Builds the prefix → suffix table of an order-`prefix_len` word chain.
///
/// Every position whose token is not the sentinel starts a prefix of
/// `prefix_len` tokens, as long as that prefix and its follower both fit in
/// `word_list`. The follower is appended to the prefix's suffix list, or
/// becomes the first entry of a new one.
///
/// # Errors
/// - [`MarkovError::InvalidPrefixLength`] if `prefix_len < 1`
/// - [`MarkovError::InvalidCapacity`] if `capacity` is 0
/// - [`MarkovError::TableFull`] or [`MarkovError::ProbeCycleExhausted`] if
///   `capacity` is too small for the distinct prefixes of the corpus
pub fn build_markov_table(
	capacity: usize,
	word_list: &[String],
	prefix_len: usize,
) -> Result<ProbingTable> {
	if prefix_len < 1 {
		return Err(MarkovError::InvalidPrefixLength(prefix_len));
	}
	let mut table = ProbingTable::new(capacity)?;

	for i in 0..word_list.len() {
		if word_list[i] == SENTINEL || i + prefix_len >= word_list.len() {
			continue;
		}
		let key = word_list[i..i + prefix_len].join(" ");
		let next = &word_list[i + prefix_len];

		if table.contains(&key) {
			table.append(&key, next.as_str())?;
		} else {
			table.put(key, vec![next.clone()])?;
		}
	}

	debug!(
		"built order-{} table: {} prefixes in {} slots",
		prefix_len,
		table.len(),
		table.capacity()
	);
	Ok(table)
}

/// A word-level Markov chain: the prefix table and the order it was built with.
///
/// # Invariants
/// - `prefix_len` is always >= 1
/// - Every key of `table` holds exactly `prefix_len` space-separated words
#[derive(Clone, Debug)]
pub struct MarkovModel {
	prefix_len: usize,
	table: ProbingTable,
}

impl MarkovModel {
	/// Builds a model from a sentinel-padded word list.
	///
	/// # Errors
	/// See [`build_markov_table`].
	pub fn build(capacity: usize, word_list: &[String], prefix_len: usize) -> Result<Self> {
		let table = build_markov_table(capacity, word_list, prefix_len)?;
		Ok(Self { prefix_len, table })
	}

	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	pub fn table(&self) -> &ProbingTable {
		&self.table
	}

	/// Suffixes observed after `prefix`, or `None` for an unknown prefix.
	pub fn suffixes(&self, prefix: &str) -> Option<&[String]> {
		self.table.get(prefix)
	}
}
