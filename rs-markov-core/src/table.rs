use std::fmt;

use log::trace;

use crate::error::{MarkovError, Result};

/// Polynomial string hash: `h = h * 31 + c` over the key's scalar values,
/// with 32-bit signed wrapping arithmetic.
///
/// Equal keys always hash identically; nothing more is promised.
pub fn string_hash(key: &str) -> i32 {
	key.chars()
		.fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(u32::from(c) as i32))
}

/// An occupied slot: a key and every suffix observed after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
	key: String,
	/// Never empty, only grows.
	values: Vec<String>,
}

impl Entry {
	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn values(&self) -> &[String] {
		&self.values
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
	#[default]
	Empty,
	Occupied(Entry),
}

impl Slot {
	pub fn entry(&self) -> Option<&Entry> {
		match self {
			Slot::Occupied(entry) => Some(entry),
			Slot::Empty => None,
		}
	}
}

/// Outcome of walking a key's probe sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
	/// The key lives at this index.
	Found(usize),
	/// The key is absent; this is the first free slot on its sequence.
	Vacant(usize),
	/// The key is absent and the sequence went full circle without a free slot.
	Exhausted { probes: usize },
}

/// Fixed-capacity open-addressing table mapping a prefix to its suffix list.
///
/// The reduced hash of a key is used twice: as the probe stride and, minus one,
/// as the first probed index. On collision the position advances by the stride
/// and wraps with `|capacity - (pos + stride)|` once it would run past the end.
///
/// # Invariants
/// - A key occupies at most one slot
/// - A suffix list is never empty and only grows by appends
/// - The table never resizes; `len() <= capacity()`
#[derive(Clone, Debug)]
pub struct ProbingTable {
	slots: Vec<Slot>,
	len: usize,
}

impl ProbingTable {
	/// Allocates `capacity` empty slots.
	///
	/// # Errors
	/// Returns [`MarkovError::InvalidCapacity`] if `capacity` is 0.
	pub fn new(capacity: usize) -> Result<Self> {
		if capacity == 0 {
			return Err(MarkovError::InvalidCapacity(capacity));
		}
		Ok(Self { slots: vec![Slot::Empty; capacity], len: 0 })
	}

	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Number of occupied slots.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Probe stride of `key`: its hash reduced modulo the capacity, at least 1.
	pub fn stride_of(&self, key: &str) -> usize {
		let reduced = i64::from(string_hash(key)).rem_euclid(self.slots.len() as i64) as usize;
		reduced.max(1)
	}

	/// Next position on a probe sequence.
	fn advance(&self, pos: usize, stride: usize) -> usize {
		let next = pos + stride;
		if next > self.slots.len() - 1 {
			self.slots.len().abs_diff(next)
		} else {
			next
		}
	}

	/// Walks the probe sequence of `key` and reports where it stands.
	///
	/// The walk ends on a match, on the first empty slot, or when it comes back
	/// to its starting index. Stopping at an empty slot is exact because inserts
	/// always take the first empty slot of their sequence and slots are never
	/// freed: a present key can never sit behind an empty slot of its own sequence.
	pub fn probe(&self, key: &str) -> Probe {
		let stride = self.stride_of(key);
		let start = stride - 1;
		let mut pos = start;
		let mut probes = 0;
		loop {
			probes += 1;
			match &self.slots[pos] {
				Slot::Empty => return Probe::Vacant(pos),
				Slot::Occupied(entry) if entry.key == key => return Probe::Found(pos),
				Slot::Occupied(_) => {}
			}
			pos = self.advance(pos, stride);
			if pos == start {
				return Probe::Exhausted { probes };
			}
		}
	}

	/// Inserts a new key with its initial suffix list.
	///
	/// # Errors
	/// - [`MarkovError::DuplicateKey`] if the key is already present
	/// - [`MarkovError::EmptySuffixList`] if `values` is empty
	/// - [`MarkovError::TableFull`] if every slot is occupied
	/// - [`MarkovError::ProbeCycleExhausted`] if free slots exist but none
	///   lies on the key's probe sequence
	pub fn put(&mut self, key: impl Into<String>, values: Vec<String>) -> Result<()> {
		let key = key.into();
		if values.is_empty() {
			return Err(MarkovError::EmptySuffixList { key });
		}
		match self.probe(&key) {
			Probe::Found(_) => Err(MarkovError::DuplicateKey { key }),
			Probe::Vacant(index) => {
				trace!("put `{}` at slot {}", key, index);
				self.slots[index] = Slot::Occupied(Entry { key, values });
				self.len += 1;
				Ok(())
			}
			Probe::Exhausted { .. } if self.len == self.slots.len() => {
				Err(MarkovError::TableFull { capacity: self.slots.len() })
			}
			Probe::Exhausted { probes } => Err(MarkovError::ProbeCycleExhausted { key, probes }),
		}
	}

	/// Returns the suffix list of `key`, or `None` if it is absent.
	///
	/// Never loops, whatever the table contents.
	pub fn get(&self, key: &str) -> Option<&[String]> {
		match self.probe(key) {
			Probe::Found(index) => self.slots[index].entry().map(Entry::values),
			_ => None,
		}
	}

	/// Appends one suffix to the list of an existing key.
	///
	/// # Errors
	/// Returns [`MarkovError::KeyNotFound`] if the key is absent.
	pub fn append(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
		if let Probe::Found(index) = self.probe(key) {
			if let Slot::Occupied(entry) = &mut self.slots[index] {
				entry.values.push(value.into());
				return Ok(());
			}
		}
		Err(MarkovError::KeyNotFound { key: key.to_owned() })
	}

	pub fn contains(&self, key: &str) -> bool {
		matches!(self.probe(key), Probe::Found(_))
	}

	/// Slot index holding `key`, for comparing slot layouts.
	pub fn slot_of(&self, key: &str) -> Option<usize> {
		match self.probe(key) {
			Probe::Found(index) => Some(index),
			_ => None,
		}
	}

	/// Iterates over occupied slots in slot order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.slots.iter().filter_map(Slot::entry).map(|entry| (entry.key(), entry.values()))
	}
}

impl fmt::Display for ProbingTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (i, slot) in self.slots.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			match slot {
				Slot::Empty => write!(f, "None")?,
				Slot::Occupied(entry) => write!(f, "[{:?}, {:?}]", entry.key, entry.values)?,
			}
		}
		write!(f, "]")
	}
}
