use thiserror::Error;

/// Errors raised while validating input, building the table or reading a corpus.
///
/// A generation that stops on an unknown prefix is not an error, see
/// [`Stop::DeadEnd`](crate::model::generator::Stop::DeadEnd).
#[derive(Debug, Error)]
pub enum MarkovError {
	#[error("table capacity must be at least 1, got {0}")]
	InvalidCapacity(usize),
	#[error("key `{key}` is already present in the table")]
	DuplicateKey { key: String },
	#[error("key `{key}` is not present in the table")]
	KeyNotFound { key: String },
	#[error("key `{key}` cannot be inserted without a suffix")]
	EmptySuffixList { key: String },
	#[error("table is full ({capacity} slots occupied)")]
	TableFull { capacity: usize },
	#[error("no free slot on the probe cycle of `{key}` after {probes} probes")]
	ProbeCycleExhausted { key: String, probes: usize },
	#[error("specified prefix size is less than one ({0})")]
	InvalidPrefixLength(usize),
	#[error("specified size of the generated text is less than one ({0})")]
	InvalidTextSize(usize),
	#[error("missing parameter `{0}`")]
	MissingParameter(&'static str),
	#[error("invalid value `{value}` for parameter `{name}`")]
	InvalidParameter { name: &'static str, value: String },
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarkovError>;
