//! Pulse-duration coding of frame slots and whole frames.
//!
//! The broadcast distinguishes slot values by how long the carrier stays at reduced power
//! within the slot's second. At this crate's 10-symbols-per-second resolution that is a
//! run of low symbols followed by a run of high symbols:
//!
//! | Slot value | Low run | High run |
//! | ---------- | ------- | -------- |
//! | `Zero`     | 2       | 8        |
//! | `One`      | 5       | 5        |
//! | `Marker`   | 8       | 2        |
//!
//! Serializing a frame concatenates all 60 encoded slots in order, so one minute of signal
//! is always exactly 600 symbols, rendered as `'0'` (low) and `'1'` (high) characters.
//!
//! # Examples
//!
//! ```
//! # use timecode::{encode_minute, FrameSlot, Timestamp};
//! assert_eq!(FrameSlot::Marker.encode(), "0000000011");
//!
//! let minute = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };
//! let signal = encode_minute(&minute);
//! assert_eq!(signal.len(), 600);
//! assert_eq!(&signal[..10], FrameSlot::Marker.encode());
//! ```

use core::fmt;
use core::ops::Deref;
use core::str;
use crate::calendar::Timestamp;
use crate::frame::{FrameSlot, TimeFrame, SLOTS_PER_FRAME};

/// Symbols per encoded slot, i.e. per second of broadcast.
pub const SYMBOLS_PER_SLOT: usize = 10;

/// Symbols per serialized frame, i.e. per minute of broadcast.
pub const SYMBOLS_PER_MINUTE: usize = SLOTS_PER_FRAME * SYMBOLS_PER_SLOT;

impl FrameSlot {
	/// The 10-symbol pulse pattern for this slot value.
	///
	/// Pure and total: every slot value maps to exactly one pattern, a single run of low
	/// symbols followed by a single run of high symbols.
	///
	/// # Examples
	///
	/// ```
	/// # use timecode::FrameSlot;
	/// assert_eq!(FrameSlot::Zero.encode(), "0011111111");
	/// assert_eq!(FrameSlot::One.encode(), "0000011111");
	/// assert_eq!(FrameSlot::Marker.encode(), "0000000011");
	/// ```
	pub fn encode(self) -> &'static str {
		match self {
			FrameSlot::Zero => "0011111111",
			FrameSlot::One => "0000011111",
			FrameSlot::Marker => "0000000011"
		}
	}
}

/// One serialized minute of signal: 600 `'0'`/`'1'` symbols.
///
/// This is the unit downstream consumers treat as an opaque contiguous block. It
/// dereferences to [`str`] for inspection and concatenation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PulseTrain([u8; SYMBOLS_PER_MINUTE]);

impl PulseTrain {
	/// View the symbols as a string slice.
	pub fn as_str(&self) -> &str {
		// Safety: the buffer is only ever filled from FrameSlot::encode, which is ASCII
		unsafe { str::from_utf8_unchecked(&self.0) }
	}

	/// View the symbols as raw bytes (`b'0'` / `b'1'`).
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}
}

impl Deref for PulseTrain {
	type Target = str;

	fn deref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for PulseTrain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Debug for PulseTrain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl TimeFrame {
	/// Serialize the frame into its 600-symbol pulse train.
	///
	/// Slots are encoded in ascending order, 10 symbols each.
	pub fn serialize(&self) -> PulseTrain {
		let mut symbols = [0u8; SYMBOLS_PER_MINUTE];
		for (chunk, slot) in symbols.chunks_exact_mut(SYMBOLS_PER_SLOT).zip(self.slots()) {
			chunk.copy_from_slice(slot.encode().as_bytes());
		}
		PulseTrain(symbols)
	}
}

/// Encode one broadcast minute end to end.
///
/// This is the complete pipeline: timestamp to weighted BCD frame to pulse train. It is
/// the single contract the crate exposes to signal consumers; everything else is a
/// building block.
///
/// # Examples
///
/// ```
/// # use timecode::{encode_minute, Timestamp};
/// let signal = encode_minute(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 });
/// assert_eq!(signal.len(), 600);
/// ```
pub fn encode_minute(time: &Timestamp) -> PulseTrain {
	TimeFrame::new(time).serialize()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn encode_test() {
		assert_eq!(FrameSlot::Zero.encode(), "0011111111");
		assert_eq!(FrameSlot::One.encode(), "0000011111");
		assert_eq!(FrameSlot::Marker.encode(), "0000000011");
	}

	#[test]
	fn encode_run_structure_test() {
		// Every pattern is 10 symbols: one run of lows, then one run of highs
		for slot in [FrameSlot::Zero, FrameSlot::One, FrameSlot::Marker] {
			let pattern = slot.encode();
			assert_eq!(pattern.len(), 10);
			let lows = pattern.bytes().take_while(|&b| b == b'0').count();
			assert!(pattern.bytes().skip(lows).all(|b| b == b'1'), "{:?}", slot);
			assert!(lows > 0 && lows < 10, "{:?}", slot);
		}
	}

	#[test]
	fn serialize_test() {
		let time = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };
		let frame = TimeFrame::new(&time);
		let signal = frame.serialize();

		assert_eq!(signal.len(), SYMBOLS_PER_MINUTE);
		assert_eq!(&signal[..10], FrameSlot::Marker.encode());

		// Chunk i is exactly the encoding of slot i
		for (i, slot) in frame.slots().iter().enumerate() {
			let chunk = &signal[i * SYMBOLS_PER_SLOT..(i + 1) * SYMBOLS_PER_SLOT];
			assert_eq!(chunk, slot.encode(), "slot {}", i);
		}
	}

	#[test]
	fn serialize_length_test() {
		let times = [
			Timestamp { year: 0, mon: 1, day: 1, hour: 0, min: 0 },
			Timestamp { year: 16, mon: 2, day: 29, hour: 12, min: 30 },
			Timestamp { year: 99, mon: 12, day: 31, hour: 23, min: 59 }
		];
		for time in times {
			assert_eq!(encode_minute(&time).len(), 600);
		}
	}

	#[test]
	fn encode_minute_test() {
		let time = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };
		assert_eq!(encode_minute(&time), TimeFrame::new(&time).serialize());

		let signal = encode_minute(&time);
		// Minute 7: slots 5-8 encode 0111
		assert_eq!(&signal[50..60], FrameSlot::Zero.encode());
		assert_eq!(&signal[60..70], FrameSlot::One.encode());
		assert_eq!(&signal[70..80], FrameSlot::One.encode());
		assert_eq!(&signal[80..90], FrameSlot::One.encode());
		// Minute tens are all zero (7 < 10)
		assert_eq!(&signal[10..20], FrameSlot::Zero.encode());
		assert_eq!(&signal[20..30], FrameSlot::Zero.encode());
		assert_eq!(&signal[30..40], FrameSlot::Zero.encode());
		// Slot 9 is a marker
		assert_eq!(&signal[90..100], FrameSlot::Marker.encode());
		// Slot 55: 2014 is not a leap year
		assert_eq!(&signal[550..560], FrameSlot::Zero.encode());
	}
}
