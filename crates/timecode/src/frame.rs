//! Building the 60-slot time-code frame for one broadcast minute.
//!
//! A frame carries the minute, hour, day of year, and two-digit year as weighted BCD: each
//! quantity has a fixed list of (slot, weight) pairs, and a slot is set to [`FrameSlot::One`]
//! when its weight is consumed while decomposing the value. Every tenth slot carries a
//! frame-synchronization marker, and a fixed set of slots is reserved and always zero.
//!
//! The slot/weight tables below are the wire format and must match the transmitter
//! bit-for-bit; they are data rather than per-field arithmetic so that all four quantities
//! share one decomposition routine.
//!
//! # Examples
//!
//! ```
//! # use timecode::{FrameSlot, TimeFrame, Timestamp};
//! // minute 37 = 20 + 10 + 4 + 2 + 1
//! let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 37 });
//! assert_eq!(frame[1], FrameSlot::Zero); // 40
//! assert_eq!(frame[2], FrameSlot::One);  // 20
//! assert_eq!(frame[3], FrameSlot::One);  // 10
//! assert_eq!(frame[5], FrameSlot::Zero); // 8
//! assert_eq!(frame[6], FrameSlot::One);  // 4
//! assert_eq!(frame[7], FrameSlot::One);  // 2
//! assert_eq!(frame[8], FrameSlot::One);  // 1
//! ```

use core::ops::Index;
use crate::calendar::{day_of_year, Timestamp};

/// Number of slots in one frame, one per second of the broadcast minute.
pub const SLOTS_PER_FRAME: usize = 60;

/// Slots carrying a frame-synchronization marker, every tenth slot.
const MARKER_SLOTS: [usize; 7] = [0, 9, 19, 29, 39, 49, 59];

/// Reserved slots, always zero on the wire.
const RESERVED_SLOTS: [usize; 11] = [4, 10, 11, 14, 20, 21, 24, 34, 35, 44, 54];

/// Slot carrying the leap-year flag.
const LEAP_YEAR_SLOT: usize = 55;

/// Daylight-saving-time indicator slots. The format defines them, but this generator
/// always transmits zero; deriving them from the timestamp is out of scope.
const DST_SLOTS: [usize; 2] = [57, 58];

/// Slot/weight pairs for the minute [0, 59], descending by weight.
const MINUTE_WEIGHTS: &[(usize, u16)] =
	&[(1, 40), (2, 20), (3, 10), (5, 8), (6, 4), (7, 2), (8, 1)];

/// Slot/weight pairs for the hour [0, 23], descending by weight.
const HOUR_WEIGHTS: &[(usize, u16)] =
	&[(12, 20), (13, 10), (15, 8), (16, 4), (17, 2), (18, 1)];

/// Slot/weight pairs for the day of year [1, 366], descending by weight.
const DAY_OF_YEAR_WEIGHTS: &[(usize, u16)] =
	&[(22, 200), (23, 100), (25, 80), (26, 40), (27, 20), (28, 10), (30, 8), (31, 4), (32, 2), (33, 1)];

/// Slot/weight pairs for the two-digit year [0, 99], descending by weight.
const YEAR_WEIGHTS: &[(usize, u16)] =
	&[(45, 80), (46, 40), (47, 20), (48, 10), (50, 8), (51, 4), (52, 2), (53, 1)];

/// Possible values of one frame slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameSlot {
	/// Data bit 0; also the value of every reserved slot.
	#[default]
	Zero,
	/// Data bit 1.
	One,
	/// Frame-synchronization marker, distinct from both data bits.
	Marker
}

/// Decompose `value` over a weight list, setting the consumed weights' slots to one.
///
/// For each (slot, weight) pair in order: the slot receives `value / weight` as a bit, and
/// `value` is reduced modulo the weight whenever the bit is set. The weight lists are
/// chosen so the quotient is always 0 or 1 for an in-range value; an out-of-range value
/// still yields a frame, just not a meaningful one.
fn fill_weighted(slots: &mut [FrameSlot; SLOTS_PER_FRAME], mut value: u16, weights: &[(usize, u16)]) {
	for &(slot, weight) in weights {
		if value / weight > 0 {
			slots[slot] = FrameSlot::One;
			value %= weight;
		}
	}
}

/// The 60-slot time code for one broadcast minute.
///
/// Built fresh per [`Timestamp`] and never mutated afterwards. Slots default to
/// [`FrameSlot::Zero`] at construction, so slots the format leaves unused (e.g. slot 56)
/// read zero without being written explicitly.
///
/// # Examples
///
/// ```
/// # use timecode::{FrameSlot, TimeFrame, Timestamp};
/// let frame = TimeFrame::new(&Timestamp { year: 16, mon: 1, day: 1, hour: 0, min: 0 });
/// assert_eq!(frame[0], FrameSlot::Marker);
/// assert_eq!(frame[55], FrameSlot::One); // 2016 is a leap year
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeFrame([FrameSlot; SLOTS_PER_FRAME]);

impl TimeFrame {
	/// Build the frame a transmitter would emit for the given minute.
	///
	/// This function is total: it never fails, and out-of-range timestamp fields produce an
	/// incorrect but well-formed frame (markers and reserved slots are still fixed).
	pub fn new(time: &Timestamp) -> TimeFrame {
		let mut slots = [FrameSlot::Zero; SLOTS_PER_FRAME];

		fill_weighted(&mut slots, time.min as u16, MINUTE_WEIGHTS);
		fill_weighted(&mut slots, time.hour as u16, HOUR_WEIGHTS);
		fill_weighted(&mut slots, day_of_year(time.year, time.mon, time.day), DAY_OF_YEAR_WEIGHTS);
		fill_weighted(&mut slots, time.year as u16, YEAR_WEIGHTS);

		if time.is_leap_year() {
			slots[LEAP_YEAR_SLOT] = FrameSlot::One;
		}
		for slot in DST_SLOTS {
			slots[slot] = FrameSlot::Zero;
		}
		for slot in RESERVED_SLOTS {
			slots[slot] = FrameSlot::Zero;
		}
		for slot in MARKER_SLOTS {
			slots[slot] = FrameSlot::Marker;
		}

		TimeFrame(slots)
	}

	/// All 60 slots in transmission order.
	pub fn slots(&self) -> &[FrameSlot; SLOTS_PER_FRAME] {
		&self.0
	}
}

impl Index<usize> for TimeFrame {
	type Output = FrameSlot;

	fn index(&self, index: usize) -> &FrameSlot {
		&self.0[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use FrameSlot::{Marker, One, Zero};

	// Expected bits for the minute field's slots 1-8 (slot 4 is reserved)
	fn assert_minute_bits(min: u8, expected: [FrameSlot; 8]) {
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min });
		for (i, want) in expected.iter().enumerate() {
			assert_eq!(frame[i + 1], *want, "minute {}, slot {}", min, i + 1);
		}
	}

	#[test]
	fn minute_decomposition_test() {
		assert_minute_bits(0, [Zero, Zero, Zero, Zero, Zero, Zero, Zero, Zero]);
		assert_minute_bits(1, [Zero, Zero, Zero, Zero, Zero, Zero, Zero, One]);
		assert_minute_bits(9, [Zero, Zero, Zero, Zero, One, Zero, Zero, One]);
		assert_minute_bits(10, [Zero, Zero, One, Zero, Zero, Zero, Zero, Zero]);
		assert_minute_bits(37, [Zero, One, One, Zero, Zero, One, One, One]);
		assert_minute_bits(59, [One, Zero, One, Zero, One, Zero, Zero, One]);
	}

	#[test]
	fn hour_decomposition_test() {
		// hour 1 = 0 tens, 1 ones
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 });
		assert_eq!([frame[12], frame[13]], [Zero, Zero]);
		assert_eq!([frame[15], frame[16], frame[17], frame[18]], [Zero, Zero, Zero, One]);

		// hour 23 = 20 + 2 + 1
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 23, min: 7 });
		assert_eq!([frame[12], frame[13]], [One, Zero]);
		assert_eq!([frame[15], frame[16], frame[17], frame[18]], [Zero, Zero, One, One]);
	}

	#[test]
	fn day_of_year_decomposition_test() {
		// Dec 6, 2014 is day 340 = 200 + 100 + 40
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 });
		assert_eq!([frame[22], frame[23]], [One, One]);
		assert_eq!(
			[frame[25], frame[26], frame[27], frame[28]],
			[Zero, One, Zero, Zero]
		);
		assert_eq!(
			[frame[30], frame[31], frame[32], frame[33]],
			[Zero, Zero, Zero, Zero]
		);

		// Jan 1 is day 1
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 1, day: 1, hour: 0, min: 0 });
		assert_eq!([frame[22], frame[23]], [Zero, Zero]);
		assert_eq!(
			[frame[25], frame[26], frame[27], frame[28]],
			[Zero, Zero, Zero, Zero]
		);
		assert_eq!(
			[frame[30], frame[31], frame[32], frame[33]],
			[Zero, Zero, Zero, One]
		);

		// Dec 31, 2016 is day 366 = 200 + 100 + 40 + 20 + 4 + 2
		let frame = TimeFrame::new(&Timestamp { year: 16, mon: 12, day: 31, hour: 0, min: 0 });
		assert_eq!([frame[22], frame[23]], [One, One]);
		assert_eq!(
			[frame[25], frame[26], frame[27], frame[28]],
			[Zero, One, One, Zero]
		);
		assert_eq!(
			[frame[30], frame[31], frame[32], frame[33]],
			[Zero, One, One, Zero]
		);
	}

	#[test]
	fn year_decomposition_test() {
		// year 14 = 10 + 4
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 });
		assert_eq!(
			[frame[45], frame[46], frame[47], frame[48]],
			[Zero, Zero, Zero, One]
		);
		assert_eq!(
			[frame[50], frame[51], frame[52], frame[53]],
			[Zero, One, Zero, Zero]
		);

		// year 99 = 80 + 10 + 8 + 1
		let frame = TimeFrame::new(&Timestamp { year: 99, mon: 12, day: 6, hour: 1, min: 7 });
		assert_eq!(
			[frame[45], frame[46], frame[47], frame[48]],
			[One, Zero, Zero, One]
		);
		assert_eq!(
			[frame[50], frame[51], frame[52], frame[53]],
			[One, Zero, Zero, One]
		);
	}

	#[test]
	fn fixed_slots_test() {
		let times = [
			Timestamp { year: 0, mon: 1, day: 1, hour: 0, min: 0 },
			Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 },
			Timestamp { year: 16, mon: 2, day: 29, hour: 12, min: 30 },
			Timestamp { year: 99, mon: 12, day: 31, hour: 23, min: 59 }
		];
		for time in times {
			let frame = TimeFrame::new(&time);
			for slot in MARKER_SLOTS {
				assert_eq!(frame[slot], Marker, "{}, slot {}", time, slot);
			}
			for slot in RESERVED_SLOTS.into_iter().chain(DST_SLOTS) {
				assert_eq!(frame[slot], Zero, "{}, slot {}", time, slot);
			}
			// Slot 56 is unused and stays at the frame's default
			assert_eq!(frame[56], Zero, "{}, slot 56", time);
		}
	}

	#[test]
	fn leap_year_flag_test() {
		let leap = TimeFrame::new(&Timestamp { year: 16, mon: 6, day: 1, hour: 0, min: 0 });
		assert_eq!(leap[55], One);
		let leap = TimeFrame::new(&Timestamp { year: 0, mon: 6, day: 1, hour: 0, min: 0 });
		assert_eq!(leap[55], One);
		let common = TimeFrame::new(&Timestamp { year: 14, mon: 6, day: 1, hour: 0, min: 0 });
		assert_eq!(common[55], Zero);
	}

	#[test]
	fn end_to_end_frame_test() {
		// Dec 6, 2014. 01:07 UTC, checked against a hand-built frame
		let frame = TimeFrame::new(&Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 });
		let mut expected = [Zero; SLOTS_PER_FRAME];
		for slot in MARKER_SLOTS {
			expected[slot] = Marker;
		}
		for slot in [6, 7, 8, 18, 22, 23, 26, 48, 51] {
			expected[slot] = One;
		}
		assert_eq!(frame.slots(), &expected);
	}

	#[test]
	fn out_of_range_input_test() {
		// Garbage in, garbage out: nonsense fields still yield a frame with the fixed
		// slots in place
		let frame = TimeFrame::new(&Timestamp { year: 255, mon: 13, day: 42, hour: 99, min: 77 });
		for slot in MARKER_SLOTS {
			assert_eq!(frame[slot], Marker);
		}
		for slot in RESERVED_SLOTS {
			assert_eq!(frame[slot], Zero);
		}
	}
}
