use std::collections::VecDeque;

use rand::Rng;

/// Current position of a walk: the last `n` words emitted.
///
/// Conceptually, this is a node of the word chain; its key is the words
/// joined by single spaces, exactly as the table stores prefixes.
///
/// ## Invariants
/// - The window never holds more words than it was seeded with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	window: VecDeque<String>,
}

impl State {
	/// Creates a state from the words of the starting prefix.
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { window: words.into_iter().map(Into::into).collect() }
	}

	/// Table key of this state.
	pub fn key(&self) -> String {
		self.window.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
	}

	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.window.iter().map(String::as_str)
	}

	/// Moves the window one word forward: drops the oldest word, appends `word`.
	pub fn shift(&mut self, word: &str) {
		self.window.pop_front();
		self.window.push_back(word.to_owned());
	}

	/// Picks one suffix uniformly over the list, duplicates included.
	///
	/// A single-element list is taken as is, without drawing from `rng`.
	/// Returns `None` if the list is empty.
	pub fn choose<'a, R: Rng>(suffixes: &'a [String], rng: &mut R) -> Option<&'a str> {
		match suffixes.len() {
			0 => None,
			1 => Some(suffixes[0].as_str()),
			len => Some(suffixes[rng.random_range(0..len)].as_str()),
		}
	}
}
