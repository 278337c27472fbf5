//! Minute-granularity calendar arithmetic for the 2000–2099 century.
//!
//! The time-code format only carries a two-digit year, so every date in this module lives
//! in the century starting January 1, 2000. [`Timestamp`] holds one broadcast minute in
//! that century; the free functions provide the Gregorian calendar facts the frame builder
//! needs (leap years, day of year).
//!
//! All functions here are total: out-of-range input produces a wrong but well-defined
//! answer rather than a panic. Callers validate upstream.
//!
//! # Examples
//!
//! ```
//! # use timecode::calendar::{day_of_year, is_leap_year, Timestamp};
//! assert_eq!(is_leap_year(16), true);   // 2016
//! assert_eq!(day_of_year(16, 12, 31), 366);
//!
//! let minute = Timestamp { year: 16, mon: 12, day: 31, hour: 23, min: 59 };
//! assert_eq!(minute.next_minute(), Timestamp { year: 17, mon: 1, day: 1, hour: 0, min: 0 });
//! ```

use core::fmt;
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{clock_gettime, timespec, CLOCK_REALTIME};

/// Unix timestamp of January 1, 2000. 00:00:00 UTC, the first representable minute.
pub const UNIX_EPOCH_2000: i64 = 946684800;

/// Seconds per minute.
const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour.
const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
/// Seconds per day.
const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;

/// Days before the first of each month in a non-leap year, January first.
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Check whether a year of the century is a leap year.
///
/// `year` is the two-digit year of the century, i.e. `16` means 2016. Values above 99 are
/// outside the model and give the answer for `2000 + year` anyway.
///
/// # Examples
///
/// ```
/// # use timecode::calendar::is_leap_year;
/// assert_eq!(is_leap_year(0), true);   // 2000
/// assert_eq!(is_leap_year(1), false);  // 2001
/// assert_eq!(is_leap_year(4), true);   // 2004
/// assert_eq!(is_leap_year(14), false); // 2014
/// ```
#[inline(always)]
pub fn is_leap_year(year: u8) -> bool {
	let y = 2000 + year as u16;
	y % 400 == 0 || (y % 4 == 0 && y % 100 != 0)
}

/// The number of days in a given month.
///
/// `year` is the two-digit year of the century and `mon` the 1-indexed month starting at
/// January.
pub fn days_per_month(year: u8, mon: u8) -> u8 {
	if mon == 2 {
		if is_leap_year(year) { 29 } else { 28 }
	} else {
		// The 31/30 alternation tracks the low bit of the month, flipping at August
		30 | (mon ^ (mon >> 3))
	}
}

/// Ordinal day within the year, counting January 1 as 1.
///
/// `year` is the two-digit year of the century, `mon` the 1-indexed month, and `day` the
/// day of the month. The result ranges [1, 366] for valid input. Invalid (month, day)
/// pairs produce an unspecified ordinal, never a panic.
///
/// # Examples
///
/// ```
/// # use timecode::calendar::day_of_year;
/// assert_eq!(day_of_year(14, 1, 1), 1);
/// assert_eq!(day_of_year(14, 12, 31), 365);
/// assert_eq!(day_of_year(16, 12, 31), 366); // 2016 is leap
/// ```
pub fn day_of_year(year: u8, mon: u8, day: u8) -> u16 {
	let days = DAYS_BEFORE_MONTH
		.get((mon as usize).wrapping_sub(1))
		.copied()
		.unwrap_or(0);
	let leap = (mon > 2 && is_leap_year(year)) as u16;
	days + leap + day as u16
}

/// One broadcast minute in the 2000–2099 century.
///
/// This is the sole input to the encoding pipeline. Fields are plain integers with no
/// internal validation; constructing an out-of-range value is a caller bug and results in
/// a wrong (but non-crashing) frame downstream.
///
/// # Examples
///
/// ```
/// # use timecode::calendar::Timestamp;
/// // Dec 6, 2014. 01:07 UTC.
/// let minute = Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 };
/// assert_eq!(minute.year(), 2014);
/// assert_eq!(minute.to_string(), "2014-12-06 01:07");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
	/// Years since 2000, ranged [0, 99]
	pub year: u8,
	/// Month of the year, ranged [1, 12]
	pub mon: u8,
	/// Day of the month, ranged [1, 31]
	pub day: u8,
	/// Hours, ranged [0, 23]
	pub hour: u8,
	/// Minutes, ranged [0, 59]
	pub min: u8
}

impl Timestamp {
	/// Convert a Unix timestamp to the broadcast minute containing it.
	///
	/// Returns `None` outside the representable century (before 2000-01-01 00:00 UTC or on
	/// or after 2100-01-01 00:00 UTC). Seconds within the minute are discarded.
	///
	/// # Examples
	///
	/// ```
	/// # use timecode::calendar::Timestamp;
	/// assert_eq!(
	/// 	Timestamp::from_unix(1417828020), // Dec 6, 2014. 01:07:00 UTC.
	/// 	Some(Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 })
	/// );
	/// assert_eq!(Timestamp::from_unix(0), None); // 1970 is not representable
	/// ```
	pub fn from_unix(secs: i64) -> Option<Timestamp> {
		let rel = secs.checked_sub(UNIX_EPOCH_2000)?;
		if rel < 0 { return None }
		let mut days = rel / SECONDS_PER_DAY;
		let rem = rel % SECONDS_PER_DAY;

		// The century is only 36525 days, so a linear scan over years and months is
		// plenty. Year 99 is the last representable one.
		let mut year: u8 = 0;
		loop {
			let len = if is_leap_year(year) { 366 } else { 365 };
			if days < len { break }
			if year == 99 { return None }
			days -= len;
			year += 1;
		}
		let mut mon: u8 = 1;
		loop {
			let len = days_per_month(year, mon) as i64;
			if days < len { break }
			days -= len;
			mon += 1;
		}

		Some(Timestamp {
			year,
			mon,
			day: days as u8 + 1,
			hour: (rem / SECONDS_PER_HOUR) as u8,
			min: (rem % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8
		})
	}

	/// Get the absolute Gregorian calendar year.
	#[inline(always)]
	pub fn year(&self) -> u16 {
		2000 + self.year as u16
	}

	/// Check whether `self` falls in a leap year.
	#[inline(always)]
	pub fn is_leap_year(&self) -> bool {
		is_leap_year(self.year)
	}

	/// The minute that starts 60 seconds after `self`.
	///
	/// Rolls over the hour, day, month, and year as needed. The end of the century wraps
	/// back to year 0, since the two-digit year has no representation for 2100.
	///
	/// # Examples
	///
	/// ```
	/// # use timecode::calendar::Timestamp;
	/// let minute = Timestamp { year: 14, mon: 12, day: 31, hour: 23, min: 59 };
	/// assert_eq!(
	/// 	minute.next_minute(),
	/// 	Timestamp { year: 15, mon: 1, day: 1, hour: 0, min: 0 }
	/// );
	/// ```
	pub fn next_minute(mut self) -> Timestamp {
		self.min += 1;
		if self.min < 60 { return self }
		self.min = 0;
		self.hour += 1;
		if self.hour < 24 { return self }
		self.hour = 0;
		self.day += 1;
		if self.day <= days_per_month(self.year, self.mon) { return self }
		self.day = 1;
		self.mon += 1;
		if self.mon <= 12 { return self }
		self.mon = 1;
		self.year = if self.year < 99 { self.year + 1 } else { 0 };
		self
	}
}

impl fmt::Display for Timestamp {
	/// Format as `YYYY-MM-DD HH:MM`, the labeling format of decoder test corpora.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{:04}-{:02}-{:02} {:02}:{:02}",
			self.year(), self.mon, self.day, self.hour, self.min
		)
	}
}

/// Get the current UTC minute.
///
/// Returns `None` if `libc::clock_gettime` fails or the current time is outside the
/// representable century.
///
/// This function is thread safe.
#[cfg(feature = "now")]
pub fn now() -> Option<Timestamp> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => Timestamp::from_unix(time.assume_init().tv_sec),
			_ => None
		}
	}
}
