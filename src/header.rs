//! Simulator integration: contiguous signal streams and the `signal_out.h` C header.
//!
//! The hardware simulator replays a fixed signal in a loop: its firmware calls
//! `signal_out()` once per 100 ms tick and drives an output port with the returned level.
//! This module builds the stream that function embeds (many consecutive minutes of
//! signal, starting at a chosen minute) and emits the header. [`SignalSource`] is the
//! same polling contract in Rust, for driving a simulated decoder in-process.
//!
//! Symbols are complemented on the way out in both cases: the simulated receiver hardware
//! idles high and pulls the line low for the carrier's full-power portion.

use std::io::{self, Write};
use std::num::NonZero;
use timecode::{encode_minute, Timestamp, SYMBOLS_PER_MINUTE};

/// A cyclic, polled source of simulator output levels.
///
/// Holds the concatenated pulse trains of consecutive minutes. Each [`poll`] returns one
/// symbol, complemented, and advances a cyclic index, so the stream repeats forever just
/// like the looping firmware.
///
/// [`poll`]: SignalSource::poll
///
/// # Examples
///
/// ```
/// # use std::num::NonZero;
/// // Dec 6, 2014. 01:07 UTC, 30 minutes of signal
/// let start = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };
/// let mut source = SignalSource::new(start, NonZero::new(30).unwrap());
/// assert_eq!(source.len(), 18000);
///
/// // Frames open with a marker: 8 low symbols, complemented to 8 high levels
/// assert_eq!(source.poll(), 1);
/// ```
pub struct SignalSource {
	/// Concatenated `'0'`/`'1'` symbols for every minute.
	symbols: String,
	/// Next symbol to emit, always in `[0, symbols.len())`.
	index: usize
}

impl SignalSource {
	/// Build a source covering `minutes` consecutive minutes starting at `start`.
	pub fn new(start: Timestamp, minutes: NonZero<usize>) -> SignalSource {
		let mut symbols = String::with_capacity(minutes.get() * SYMBOLS_PER_MINUTE);
		let mut minute = start;
		for _ in 0..minutes.get() {
			symbols.push_str(encode_minute(&minute).as_str());
			minute = minute.next_minute();
		}
		SignalSource { symbols, index: 0 }
	}

	/// Total number of symbols in one cycle of the stream.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// The raw symbol stream, uncomplemented.
	pub fn symbols(&self) -> &str {
		&self.symbols
	}

	/// Emit the next output level and advance the cyclic index.
	///
	/// Returns the next symbol complemented: `1` where the signal is low, `0` where it is
	/// high. After the last symbol the index wraps to the beginning.
	pub fn poll(&mut self) -> u8 {
		// Indexing can't panic: minutes is nonzero, so the stream is at least 600 symbols
		let bit = self.symbols.as_bytes()[self.index] - b'0';
		self.index = (self.index + 1) % self.symbols.len();
		1 - bit
	}
}

/// Write `signal_out.h` for the simulator firmware.
///
/// The emitted header defines `int signal_out()`, which walks the embedded symbol string
/// cyclically and returns each symbol complemented (`~(bits[index] - '0')`, matching the
/// firmware's active-low output port).
///
/// # Errors
///
/// Returns [`io::Error`] if writing to `w` fails.
pub fn write_header(w: &mut impl Write, source: &SignalSource) -> io::Result<()> {
	writeln!(w, "int signal_out()")?;
	writeln!(w, "{{")?;
	writeln!(w, "    static int bitsCount = {};", source.len())?;
	writeln!(w, "    static char *bits = \"{}\";", source.symbols())?;
	writeln!(w)?;
	writeln!(w, "    static int index = 0;")?;
	writeln!(w)?;
	writeln!(w, "    int retVal = ~(bits[index] - '0');")?;
	writeln!(w, "    index = (index + 1) % bitsCount;")?;
	writeln!(w)?;
	writeln!(w, "    return retVal;")?;
	writeln!(w, "}}")
}
