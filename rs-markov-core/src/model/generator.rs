use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MarkovError, Result};
use crate::model::markov_model::MarkovModel;
use crate::model::state::State;
use crate::table::ProbingTable;

/// Why a walk ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stop {
	/// Every requested step was taken.
	Completed,
	/// The walk reached a prefix that was never followed by a word in the corpus.
	DeadEnd { key: String },
}

/// Text produced by a walk, already trimmed of its trailing lookahead words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	pub tokens: Vec<String>,
	pub stop: Stop,
}

impl Generation {
	pub fn is_complete(&self) -> bool {
		self.stop == Stop::Completed
	}
}

/// Walks a prefix table to produce text.
///
/// # Responsibilities
/// - Own the random source, so that a seed fully determines the output
/// - Start from the first real prefix of the corpus
/// - Stop early, without failing, on a prefix the table does not know
#[derive(Debug)]
pub struct Generator<R: Rng = StdRng> {
	rng: R,
}

impl Generator<StdRng> {
	/// Creates a generator whose output depends only on `seed` and its inputs.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator drawing from an existing random source.
	pub fn from_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Generates text from a model; see [`Generator::walk`].
	///
	/// # Errors
	/// Returns [`MarkovError::InvalidTextSize`] if `text_size < 1`.
	pub fn generate(
		&mut self,
		model: &MarkovModel,
		text_size: usize,
		word_list: &[String],
	) -> Result<Generation> {
		self.walk(model.table(), text_size, word_list, model.prefix_len())
	}

	/// Walks `table` for `text_size - 1` steps from the prefix made of
	/// `word_list[prefix_len..2 * prefix_len]`, i.e. the first real words
	/// after the sentinel padding.
	///
	/// The starting words are emitted first. Each step picks a suffix of the
	/// current prefix uniformly over its list, emits it, and slides the prefix
	/// one word forward. The last `prefix_len - 1` emitted words are only
	/// lookahead and are dropped from the result.
	///
	/// # Errors
	/// - [`MarkovError::InvalidTextSize`] if `text_size < 1`
	/// - [`MarkovError::InvalidPrefixLength`] if `prefix_len < 1`
	pub fn walk(
		&mut self,
		table: &ProbingTable,
		text_size: usize,
		word_list: &[String],
		prefix_len: usize,
	) -> Result<Generation> {
		if prefix_len < 1 {
			return Err(MarkovError::InvalidPrefixLength(prefix_len));
		}
		if text_size < 1 {
			return Err(MarkovError::InvalidTextSize(text_size));
		}

		let mut state = State::new(word_list.iter().skip(prefix_len).take(prefix_len).cloned());
		let mut tokens: Vec<String> = state.words().map(str::to_owned).collect();
		let mut stop = Stop::Completed;

		for _ in 1..text_size {
			let key = state.key();
			let choice = table
				.get(&key)
				.and_then(|suffixes| State::choose(suffixes, &mut self.rng));
			let Some(word) = choice else {
				debug!("walk stopped on unknown prefix `{}` after {} words", key, tokens.len());
				stop = Stop::DeadEnd { key };
				break;
			};
			tokens.push(word.to_owned());
			state.shift(word);
		}

		tokens.truncate(tokens.len().saturating_sub(prefix_len - 1));
		Ok(Generation { tokens, stop })
	}
}

/// Walks `table` with a fresh generator seeded with `seed`.
///
/// # Errors
/// See [`Generator::walk`].
pub fn generate(
	table: &ProbingTable,
	text_size: usize,
	word_list: &[String],
	prefix_len: usize,
	seed: u64,
) -> Result<Generation> {
	Generator::seeded(seed).walk(table, text_size, word_list, prefix_len)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::build_word_list;
	use crate::model::markov_model::build_markov_table;

	#[test]
	fn same_seed_same_text() {
		let words = build_word_list("the cat sat on the mat and the cat ran off the mat", 1);
		let table = build_markov_table(67, &words, 1).unwrap();

		let first = generate(&table, 30, &words, 1, 8).unwrap();
		let second = generate(&table, 30, &words, 1, 8).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn every_step_follows_an_observed_transition() {
		let words = build_word_list("the cat sat on the mat and the cat ran off the mat", 2);
		let table = build_markov_table(97, &words, 2).unwrap();

		for seed in 0..20 {
			let generation = generate(&table, 25, &words, 2, seed).unwrap();
			assert_eq!(&generation.tokens[..2], &["the", "cat"]);
			for window in generation.tokens.windows(3) {
				let key = window[..2].join(" ");
				let suffixes = table.get(&key).unwrap();
				assert!(suffixes.contains(&window[2]), "`{}` never follows `{}`", window[2], key);
			}
		}
	}

	#[test]
	fn unigram_walk_is_pinned_per_seed() {
		let words = build_word_list("the cat sat the cat ran", 1);
		let table = build_markov_table(16, &words, 1).unwrap();

		// "the" always leads to "cat" and "sat" to "the"; only "cat" branches
		let completed = generate(&table, 4, &words, 1, 2).unwrap();
		assert_eq!(completed.tokens, ["the", "cat", "sat", "the"]);
		assert_eq!(completed.stop, Stop::Completed);

		let dead_end = generate(&table, 4, &words, 1, 0).unwrap();
		assert_eq!(dead_end.tokens, ["the", "cat", "ran"]);
		assert_eq!(dead_end.stop, Stop::DeadEnd { key: "ran".to_owned() });
	}

	#[test]
	fn different_seeds_take_different_walks() {
		let words = build_word_list("the cat sat the cat ran", 1);
		let table = build_markov_table(16, &words, 1).unwrap();

		let seed_0 = generate(&table, 4, &words, 1, 0).unwrap();
		let seed_2 = generate(&table, 4, &words, 1, 2).unwrap();
		assert_ne!(seed_0, seed_2);
		assert_eq!(seed_2, Generator::seeded(2).walk(&table, 4, &words, 1).unwrap());
	}

	#[test]
	fn single_word_request_returns_the_seed_window() {
		let words = build_word_list("a b c d", 1);
		let table = build_markov_table(16, &words, 1).unwrap();
		let generation = generate(&table, 1, &words, 1, 8).unwrap();
		assert_eq!(generation.tokens, ["a"]);
		assert!(generation.is_complete());

		let words = build_word_list("a b c d", 3);
		let table = build_markov_table(16, &words, 3).unwrap();
		let generation = generate(&table, 1, &words, 3, 8).unwrap();
		// Seed window "a b c" minus its two lookahead words
		assert_eq!(generation.tokens, ["a"]);
	}

	#[test]
	fn higher_order_output_is_trimmed() {
		// A single chain: every prefix has exactly one suffix
		let words = build_word_list("a b c d e f g", 2);
		let table = build_markov_table(31, &words, 2).unwrap();
		let generation = generate(&table, 4, &words, 2, 8).unwrap();
		// Emitted "a b c d e", last word dropped
		assert_eq!(generation.tokens, ["a", "b", "c", "d"]);
		assert!(generation.is_complete());
	}

	#[test]
	fn dead_end_stops_without_error() {
		let words = build_word_list("a b a c", 1);
		let table = build_markov_table(16, &words, 1).unwrap();
		assert!(!table.contains("c"));

		let generation = generate(&table, 1000, &words, 1, 8).unwrap();
		assert_eq!(generation.stop, Stop::DeadEnd { key: "c".to_owned() });
		assert_eq!(generation.tokens.last().map(String::as_str), Some("c"));
		assert!(generation.tokens.len() < 1000);
	}

	#[test]
	fn empty_corpus_generates_nothing() {
		let words = build_word_list("", 2);
		let table = build_markov_table(4, &words, 2).unwrap();
		let generation = generate(&table, 10, &words, 2, 8).unwrap();
		assert!(generation.tokens.is_empty());
		assert_eq!(generation.stop, Stop::DeadEnd { key: String::new() });
	}

	#[test]
	fn invalid_sizes_are_errors() {
		let words = build_word_list("a b", 1);
		let table = build_markov_table(4, &words, 1).unwrap();
		assert!(matches!(generate(&table, 0, &words, 1, 8), Err(MarkovError::InvalidTextSize(0))));
		assert!(matches!(
			generate(&table, 3, &words, 0, 8),
			Err(MarkovError::InvalidPrefixLength(0))
		));
	}

	#[test]
	fn generator_works_from_a_model() {
		let words = build_word_list("x y x y x y", 1);
		let model = MarkovModel::build(8, &words, 1).unwrap();
		let mut generator = Generator::seeded(3);
		let generation = generator.generate(&model, 5, &words).unwrap();
		assert_eq!(generation.tokens, ["x", "y", "x", "y", "x"]);
	}
}
