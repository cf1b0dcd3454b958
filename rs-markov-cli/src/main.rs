use std::io::{self, Write};
use std::process::ExitCode;

use log::info;
use rs_markov_core::io::read_word_list;
use rs_markov_core::model::generator::{Stop, generate};
use rs_markov_core::model::markov_model::build_markov_table;
use rs_markov_core::model::params::Params;

/// Words printed per line.
const LINE_WIDTH: usize = 10;

/// Groups `tokens` into lines of `width` words; the last line may be shorter.
fn layout_lines(tokens: &[String], width: usize) -> Vec<String> {
	tokens.chunks(width.max(1)).map(|line| line.join(" ")).collect()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
	// Parameters come one per line on stdin:
	// source file, table size, prefix size, generated text size, [seed]
	let params = Params::from_reader(io::stdin().lock())?;

	let words = read_word_list(&params.source, params.prefix_len())?;
	let table = build_markov_table(params.capacity(), &words, params.prefix_len())?;
	let generation =
		generate(&table, params.text_size(), &words, params.prefix_len(), params.seed)?;

	if let Stop::DeadEnd { key } = &generation.stop {
		info!("generation ended early on `{}` after {} words", key, generation.tokens.len());
	}

	let mut out = io::stdout().lock();
	for line in layout_lines(&generation.tokens, LINE_WIDTH) {
		writeln!(out, "{}", line)?;
	}
	Ok(())
}

fn main() -> ExitCode {
	env_logger::init();

	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			println!("ERROR: {}", e);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(count: usize) -> Vec<String> {
		(1..=count).map(|i| format!("w{}", i)).collect()
	}

	#[test]
	fn ten_words_per_line() {
		let lines = layout_lines(&tokens(23), LINE_WIDTH);
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10");
		assert_eq!(lines[2], "w21 w22 w23");
	}

	#[test]
	fn exact_multiple_has_no_trailing_line() {
		assert_eq!(layout_lines(&tokens(20), LINE_WIDTH).len(), 2);
	}

	#[test]
	fn short_and_empty_outputs() {
		assert_eq!(layout_lines(&tokens(3), LINE_WIDTH), vec!["w1 w2 w3"]);
		assert!(layout_lines(&[], LINE_WIDTH).is_empty());
	}
}
