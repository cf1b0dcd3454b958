use std::io::BufRead;
use std::path::PathBuf;

use crate::error::{MarkovError, Result};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 8;

/// Parameters of one build-and-generate run.
///
/// # Responsibilities
/// - Hold where the corpus lives and how large the table is
/// - Hold the chain order, the requested output size and the random seed
/// - Reject out-of-range values before any work starts
///
/// # Invariants
/// - `capacity`, `prefix_len` and `text_size` are all >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
	/// Corpus file.
	pub source: PathBuf,

	/// Number of slots of the prefix table.
	capacity: usize,

	/// Number of words in a prefix.
	prefix_len: usize,

	/// Number of words to generate.
	text_size: usize,

	/// Seed of the random source; same seed, same text.
	pub seed: u64,
}

impl Params {
	/// Creates validated parameters with the default seed.
	///
	/// # Errors
	/// Returns an error if any of the sizes is out of range.
	pub fn new<P: Into<PathBuf>>(
		source: P,
		capacity: usize,
		prefix_len: usize,
		text_size: usize,
	) -> Result<Self> {
		let mut params = Self {
			source: source.into(),
			capacity: 1,
			prefix_len: 1,
			text_size: 1,
			seed: DEFAULT_SEED,
		};
		params.set_capacity(capacity)?;
		params.set_prefix_len(prefix_len)?;
		params.set_text_size(text_size)?;
		Ok(params)
	}

	/// Reads the parameters one per line: source file, table size, prefix
	/// size, generated text size, and optionally the seed.
	///
	/// # Errors
	/// - [`MarkovError::MissingParameter`] if one of the first four lines is absent
	/// - [`MarkovError::InvalidParameter`] if a value does not parse
	/// - the validation errors of the setters
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		let mut lines = reader.lines();
		let mut next_line = || -> Result<Option<String>> {
			match lines.next() {
				Some(line) => {
					let line = line?.trim().to_owned();
					Ok((!line.is_empty()).then_some(line))
				}
				None => Ok(None),
			}
		};

		let source = next_line()?.ok_or(MarkovError::MissingParameter("source"))?;
		let capacity = parse_line(next_line()?, "capacity")?;
		let prefix_len = parse_line(next_line()?, "prefix_len")?;
		let text_size = parse_line(next_line()?, "text_size")?;

		let mut params = Self::new(source, capacity, prefix_len, text_size)?;
		if let Some(seed) = next_line()? {
			params.seed = parse_value(&seed, "seed")?;
		}
		Ok(params)
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	pub fn text_size(&self) -> usize {
		self.text_size
	}

	/// # Errors
	/// Returns [`MarkovError::InvalidCapacity`] if `capacity` is 0.
	pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
		if capacity < 1 {
			return Err(MarkovError::InvalidCapacity(capacity));
		}
		self.capacity = capacity;
		Ok(())
	}

	/// # Errors
	/// Returns [`MarkovError::InvalidPrefixLength`] if `prefix_len` is 0.
	pub fn set_prefix_len(&mut self, prefix_len: usize) -> Result<()> {
		if prefix_len < 1 {
			return Err(MarkovError::InvalidPrefixLength(prefix_len));
		}
		self.prefix_len = prefix_len;
		Ok(())
	}

	/// # Errors
	/// Returns [`MarkovError::InvalidTextSize`] if `text_size` is 0.
	pub fn set_text_size(&mut self, text_size: usize) -> Result<()> {
		if text_size < 1 {
			return Err(MarkovError::InvalidTextSize(text_size));
		}
		self.text_size = text_size;
		Ok(())
	}
}

fn parse_line<T: std::str::FromStr>(line: Option<String>, name: &'static str) -> Result<T> {
	let line = line.ok_or(MarkovError::MissingParameter(name))?;
	parse_value(&line, name)
}

fn parse_value<T: std::str::FromStr>(value: &str, name: &'static str) -> Result<T> {
	value.parse().map_err(|_| MarkovError::InvalidParameter { name, value: value.to_owned() })
}
