//! Generate WWVB-style amplitude-modulated time codes.
//!
//! This crate converts a calendar minute into the 60-slot time-code frame a longwave time
//! broadcast would transmit for that minute, and serializes the frame into its
//! pulse-duration-coded symbol stream. The output is deterministic: the same minute always
//! produces the same 600 symbols, which makes it suitable for building reproducible test
//! inputs for a receiver/decoder.
//!
//! The crate is split into four modules:
//! - [`calendar`]: minute-granularity calendar arithmetic ([`Timestamp`], day of year, leap
//!   years).
//! - [`frame`]: building the 60-slot [`TimeFrame`] by weighted BCD decomposition.
//! - [`pulse`]: pulse-duration coding of individual slots and whole frames.
//! - [`parse`]: parsing `YYYY-MM-DD HH:MM` date time strings.
//!
//! Everything here is a pure function of its inputs. There is no shared state, so frames
//! for many minutes can be generated from multiple threads with no coordination.
//!
//! This crate is `no_std` and performs no allocation; a serialized minute is a fixed
//! 600-byte [`PulseTrain`]. The `now` feature pulls in `libc` and adds [`calendar::now`]
//! for reading the current UTC minute.
//!
//! # Examples
//! ```
//! use timecode::{encode_minute, FrameSlot, TimeFrame, Timestamp};
//!
//! // Dec 6, 2014. 01:07 UTC.
//! let minute = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };
//!
//! // The frame starts with a sync marker, and slot 55 carries the leap-year flag
//! let frame = TimeFrame::new(&minute);
//! assert_eq!(frame[0], FrameSlot::Marker);
//! assert_eq!(frame[55], FrameSlot::Zero); // 2014 is not a leap year
//!
//! // One minute of signal is always exactly 600 symbols
//! let signal = frame.serialize();
//! assert_eq!(signal.len(), 600);
//! assert_eq!(&signal[..10], "0000000011");
//!
//! // Or run the whole pipeline in one call
//! assert_eq!(encode_minute(&minute), signal);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod calendar;
pub mod frame;
pub mod parse;
pub mod pulse;

pub use calendar::{day_of_year, days_per_month, is_leap_year, Timestamp};
#[cfg(feature = "now")]
pub use calendar::now;
pub use frame::{FrameSlot, TimeFrame};
pub use parse::{parse_timestamp, ParseError};
pub use pulse::{encode_minute, PulseTrain, SYMBOLS_PER_MINUTE, SYMBOLS_PER_SLOT};
