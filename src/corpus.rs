//! Building labeled test corpora for a decoder under test.
//!
//! A corpus is a pair of files: `signals.txt`, one long symbol stream made of test cases
//! laid end to end, and `time.txt`, one line per case with the wall-clock time at which a
//! correct decoder should finish synchronizing, formatted `YYYY-MM-DD HH:MM`.
//!
//! Each case carries two consecutive minutes of signal, since a decoder needs a full frame
//! preceded by a marker pair to lock on. The expected label is therefore the second
//! frame's minute plus 60 seconds. In the default (noisy) layout a case is:
//!
//! ```text
//! [10-60 raw noise symbols][2-10 pulse-coded noise bits][marker][frame][frame][2-10 pulse-coded noise bits]
//! ```
//!
//! With noise padding disabled (`--clean`), cases are bare frame pairs and the stream is
//! one gap-free broadcast. Start minutes are drawn uniformly by wall-clock second over
//! the first 32 years of the century, so corpora cover leap years, year ends, and both
//! frames straddling any rollover.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use rand::Rng;
use timecode::{encode_minute, FrameSlot, Timestamp};
use timecode::calendar::UNIX_EPOCH_2000;

/// Years of the century that corpus start minutes are drawn from.
const CORPUS_YEARS: u8 = 32;

/// Seconds in the corpus window, counting 365 days per year. The few missed leap days
/// shave about a week off the end of the window, which ends decades before the
/// representable century does.
const WINDOW_SECONDS: i64 = CORPUS_YEARS as i64 * 365 * 24 * 60 * 60;

/// One labeled test case.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct TestCase {
	/// The symbol stream the decoder consumes.
	pub signal: String,
	/// The minute a correct decoder reports once synchronized.
	pub label: Timestamp
}

/// Draw a uniformly random minute within the corpus window.
///
/// Uniform over wall-clock seconds since the epoch, so longer months come up
/// proportionally more often than shorter ones.
fn random_minute(rng: &mut impl Rng) -> Timestamp {
	let secs = UNIX_EPOCH_2000 + rng.gen_range(0..WINDOW_SECONDS);
	// The draw stays inside the representable century, so the conversion cannot fail
	Timestamp::from_unix(secs).unwrap_or(Timestamp { year: 0, mon: 1, day: 1, hour: 0, min: 0 })
}

/// Generate 10-60 random raw symbols, unaligned to any pulse pattern.
fn raw_noise(rng: &mut impl Rng) -> String {
	let len = rng.gen_range(10..=60);
	(0..len).map(|_| if rng.r#gen() { '1' } else { '0' }).collect()
}

/// Generate 2-10 random data bits, each pulse-coded.
///
/// Unlike [`raw_noise`], this is well-formed signal, just not a frame: it exercises a
/// decoder's ability to discard valid-looking bits that precede frame lock.
fn pulse_noise(rng: &mut impl Rng) -> String {
	let n = rng.gen_range(2..=10);
	let mut out = String::with_capacity(n * 10);
	for _ in 0..n {
		let bit = if rng.r#gen() { FrameSlot::One } else { FrameSlot::Zero };
		out.push_str(bit.encode());
	}
	out
}

/// Generate one test case starting at a random minute.
///
/// The case carries two consecutive minutes of signal. When `clean` is false the frames
/// are wrapped in noise: raw symbols, then pulse-coded noise bits terminated by a marker
/// (so the decoder sees a plausible bit boundary), then trailing pulse-coded noise.
pub fn generate_case(rng: &mut impl Rng, clean: bool) -> TestCase {
	let first = random_minute(rng);
	let second = first.next_minute();

	let mut signal = String::new();
	if !clean {
		signal.push_str(&raw_noise(rng));
		signal.push_str(&pulse_noise(rng));
		signal.push_str(FrameSlot::Marker.encode());
	}
	signal.push_str(encode_minute(&first).as_str());
	signal.push_str(encode_minute(&second).as_str());
	if !clean {
		signal.push_str(&pulse_noise(rng));
	}

	TestCase {
		signal,
		// Synchronization completes at the end of the second frame
		label: second.next_minute()
	}
}

/// Write a labeled corpus of `cases` test cases into `dir`.
///
/// Produces `signals.txt` and `time.txt`. The signal stream always opens with one noise
/// preamble (raw noise, pulse noise, marker) regardless of `clean`, so the decoder never
/// starts exactly on a frame boundary, and closes with a single spare symbol so the last
/// case's final high run has an edge to terminate against.
///
/// The output directory is created first if it does not exist, parents included.
///
/// # Errors
///
/// Returns [`io::Error`] if the directory or either file cannot be created or written.
pub fn write_corpus(dir: &Path, cases: usize, clean: bool, rng: &mut impl Rng) -> io::Result<()> {
	fs::create_dir_all(dir)?;
	let mut signals = BufWriter::new(File::create(dir.join("signals.txt"))?);
	let mut truth = BufWriter::new(File::create(dir.join("time.txt"))?);

	signals.write_all(raw_noise(rng).as_bytes())?;
	signals.write_all(pulse_noise(rng).as_bytes())?;
	signals.write_all(FrameSlot::Marker.encode().as_bytes())?;

	for _ in 0..cases {
		let case = generate_case(rng, clean);
		signals.write_all(case.signal.as_bytes())?;
		writeln!(truth, "{}", case.label)?;
	}

	signals.write_all(b"0")?;
	signals.flush()?;
	truth.flush()
}
