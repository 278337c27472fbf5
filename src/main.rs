//! Generate simulated WWVB-style time-code signals for testing receivers and decoders.
//!
//! This tool drives the [`timecode`] crate to produce two kinds of decoder test input:
//!
//! - **Test corpora**: a long symbol stream of randomized, noise-wrapped frame pairs
//!   (`signals.txt`) with the expected decoded time for each case (`time.txt`). Used to
//!   exercise a decoder's synchronization and decoding logic over many inputs.
//! - **Simulator headers**: a C header (`signal_out.h`) embedding a contiguous run of
//!   consecutive minutes, for the looping hardware simulator firmware that replays the
//!   signal on an output port.
//!
//! # Command Line Arguments
//!
//! General form: `wwvbsim [options...] mode`
//!
//! In addition to one required argument (the mode, `corpus` or `header`), this application
//! supports several optional command line arguments for configuration:
//!
//! | Short form | Long form  | Argument           | Default               | Description                            |
//! | ---------- | ---------- | ------------------ | --------------------- | -------------------------------------- |
//! | `-n`, `-c` | `--count`  | Integer > 0        | 100 / 30              | Corpus cases, or header minutes        |
//! | `-t`       | `--time`   | `YYYY-MM-DD HH:MM` | Current time          | Start minute for `header`              |
//! | `-o`       | `--output` | Path               | `.` / `signal_out.h`  | Output directory (corpus) or file      |
//! |            | `--seed`   | Integer >= 0       | From entropy          | RNG seed for reproducible corpora      |
//! |            | `--clean`  |                    | Off                   | Corpus cases without noise padding     |
//!
//! All times are UTC: the time code transmits no timezone information.
//!
//! # Examples
//!
//! Generate a 100-case corpus in the current directory
//! ```sh
//! wwvbsim corpus
//! ```
//!
//! Generate a reproducible 100-case corpus of bare frame pairs
//! ```sh
//! wwvbsim -n 100 --seed 42 --clean -o testdata corpus
//! ```
//!
//! Generate a simulator header covering an hour starting at a fixed minute
//! ```sh
//! wwvbsim -n 60 -t "2014-12-06 01:07" header
//! ```

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::num::NonZero;
use std::path::PathBuf;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use timecode::Timestamp;

use args::{Arguments, ArgumentsError, Mode};
use header::SignalSource;

mod args;
mod corpus;
mod header;

/// Default number of corpus test cases.
const DEFAULT_CORPUS_CASES: usize = 100;

/// Default number of minutes embedded in a simulator header.
const DEFAULT_HEADER_MINUTES: usize = 30;

/// Start minute used for `header` when no time is given and the clock is unavailable.
const FALLBACK_START: Timestamp = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };

/// Generate the requested output files.
///
/// For [`Mode::Corpus`], writes `signals.txt` and `time.txt` into the output directory
/// (default: the current directory). For [`Mode::Header`], writes the C header to the
/// output path (default: `signal_out.h`).
///
/// # Errors
///
/// Returns [`std::io::Error`] (wrapped in `Box<dyn Error>`) if any output file cannot be
/// created or written.
fn run(args: Arguments) -> Result<ExitCode, Box<dyn Error>> {
	match args.mode {
		Mode::Corpus => {
			let cases = args.count.map(NonZero::get).unwrap_or(DEFAULT_CORPUS_CASES);
			let dir = args.output.unwrap_or_else(|| PathBuf::from("."));
			let mut rng = match args.seed {
				Some(seed) => StdRng::seed_from_u64(seed),
				None => StdRng::from_entropy()
			};
			corpus::write_corpus(&dir, cases, args.clean, &mut rng)?;
		},
		Mode::Header => {
			let minutes = args.count
				.unwrap_or(const { NonZero::new(DEFAULT_HEADER_MINUTES).unwrap() });
			let start = match args.time {
				Some(t) => t,
				None => timecode::now().unwrap_or(FALLBACK_START)
			};
			let path = args.output.unwrap_or_else(|| PathBuf::from("signal_out.h"));
			let source = SignalSource::new(start, minutes);
			let mut file = BufWriter::new(File::create(&path)?);
			header::write_header(&mut file, &source)?;
		}
	}

	Ok(ExitCode::SUCCESS)
}

/// Usage details printed for `-h`. The documented defaults must match the constants above.
const HELP: &str = "\
Generate simulated WWVB-style time-code signals for testing decoders.

Usage: wwvbsim [OPTIONS] <MODE>

Options:
  -n, -c, --count <COUNT> corpus cases or header minutes, default 100 / 30
  -t, --time <DATETIME>   the start minute for header mode, defaults to now
  -o, --output <PATH>     output directory (corpus) or file (header)
  --seed <SEED>           RNG seed for reproducible corpora, default entropy
  --clean                 corpus cases without noise padding

Modes:
  corpus  labeled decoder test corpus (signals.txt + time.txt)
  header  C header embedding a contiguous signal (signal_out.h)

Examples:
  wwvbsim corpus
  wwvbsim -n 100 --seed 42 --clean -o testdata corpus
  wwvbsim -n 60 -t \"2014-12-06 01:07\" header";

/// Main program entry point.
///
/// Parses input arguments and writes the requested signal files. See [`crate`]
/// documentation for details.
fn main() -> ExitCode {
	let args = match Arguments::parse(std::env::args_os().skip(1)) {
		Ok(a) => a,
		Err(e) => {
			return if let ArgumentsError::Help = e {
				println!("{}", HELP);
				ExitCode::SUCCESS
			} else {
				eprintln!("{}", e);
				ExitCode::FAILURE
			}
		}
	};

	if matches!(args.mode, Mode::Header) && args.seed.is_some() {
		println!("Warning: --seed does nothing in header mode");
	}
	if matches!(args.mode, Mode::Corpus) && args.time.is_some() {
		println!("Warning: -t/--time does nothing in corpus mode; case times are random");
	}

	run(args)
		.inspect_err(|e| eprintln!("{}", e))
		.unwrap_or(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_count_test() {
		assert_eq!(DEFAULT_CORPUS_CASES, 100);
		assert_eq!(DEFAULT_HEADER_MINUTES, 30);
		// The const-unwrap in run() relies on the default being nonzero
		assert!(NonZero::new(DEFAULT_HEADER_MINUTES).is_some());

		// The help text advertises the same defaults
		assert!(HELP.contains(&format!("default {} / {}", DEFAULT_CORPUS_CASES, DEFAULT_HEADER_MINUTES)));
	}
}
