use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Padding token placed in front of the corpus. Never starts a prefix.
pub const SENTINEL: &str = "@";

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Splits `source_text` on whitespace, behind `prefix_len` sentinel tokens.
pub fn build_word_list(source_text: &str, prefix_len: usize) -> Vec<String> {
	let mut words = vec![SENTINEL.to_owned(); prefix_len];
	words.extend(source_text.split_whitespace().map(str::to_owned));
	words
}

/// Reads the corpus at `path` line by line and builds its word list.
///
/// # Errors
/// Returns [`MarkovError::Io`](crate::error::MarkovError::Io) if the file cannot be read.
pub fn read_word_list<P: AsRef<Path>>(path: P, prefix_len: usize) -> Result<Vec<String>> {
	let mut words = vec![SENTINEL.to_owned(); prefix_len];
	for line in read_file(&path)? {
		words.extend(line.split_whitespace().map(str::to_owned));
	}
	log::debug!("read {} words from {}", words.len() - prefix_len, path.as_ref().display());
	Ok(words)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn word_list_starts_with_sentinels() {
		let words = build_word_list("the cat\n  sat\tdown ", 2);
		assert_eq!(words, vec!["@", "@", "the", "cat", "sat", "down"]);
	}

	#[test]
	fn empty_text_is_only_padding() {
		assert_eq!(build_word_list(" \n ", 1), vec!["@"]);
	}

	#[test]
	fn reads_words_from_file() {
		let path = std::env::temp_dir().join(format!("rs-markov-io-{}.txt", std::process::id()));
		std::fs::write(&path, "one two\r\nthree\n\nfour\n").unwrap();
		let words = read_word_list(&path, 1).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(words, vec!["@", "one", "two", "three", "four"]);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let err = read_word_list("/definitely/not/here.txt", 1).unwrap_err();
		assert!(matches!(err, crate::error::MarkovError::Io(_)));
	}
}
