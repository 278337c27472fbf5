//! Parse date time strings like `YYYY-MM-DD HH:MM`.
//!
//! This module provides a single function, [`parse_timestamp`], which parses a date time
//! string into a [`Timestamp`]. The format matches the labels a decoder test corpus
//! carries, with trailing fields optional.
//!
//! # Examples
//! ```
//! # use timecode::{parse_timestamp, Timestamp};
//! assert_eq!(
//! 	parse_timestamp(b"2014-12-06 01:07"),
//! 	Ok(Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 })
//! );
//! assert_eq!(
//! 	parse_timestamp(b"2016"),
//! 	Ok(Timestamp { year: 16, mon: 1, day: 1, hour: 0, min: 0 })
//! );
//! ```

use core::{error, fmt};
use crate::calendar::{days_per_month, Timestamp};

/// Error type for parsing date time strings.
#[derive(Debug, PartialEq)]
pub enum ParseError {
	/// Expected a year, but it was missing or malformed.
	MissingYear,
	/// The supplied year was outside of [2000, 2099], the only representable century.
	YearOutOfRange,
	/// Expected a month, but it was missing or malformed.
	MissingMonth,
	/// The supplied month was outside of [1, 12].
	MonthOutOfRange,
	/// Expected a day, but it was missing or malformed.
	MissingDay,
	/// The supplied day was outside of [1, 28|29|30|31] depending on the month & year.
	DayOutOfRange,
	/// Expected hours, but it was missing or malformed.
	MissingHours,
	/// The supplied hour was outside of [0, 23].
	HoursOutOfRange,
	/// Hour was supplied but minutes were missing.
	MissingMinutes,
	/// The supplied minutes were outside of [0, 59].
	MinutesOutOfRange,
	/// Found unexpected bytes after a valid date time string.
	UnexpectedInput
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseError::MissingYear => write!(f, "Year missing or malformed"),
			ParseError::YearOutOfRange => write!(f, "Year outside 2000-2099"),
			ParseError::MissingMonth => write!(f, "Month missing or malformed"),
			ParseError::MonthOutOfRange => write!(f, "Month out of range"),
			ParseError::MissingDay => write!(f, "Day missing or malformed"),
			ParseError::DayOutOfRange => write!(f, "Day out of range"),
			ParseError::MissingHours => write!(f, "Hours missing or malformed"),
			ParseError::HoursOutOfRange => write!(f, "Hours out of range"),
			ParseError::MissingMinutes => write!(f, "Minutes missing or malformed"),
			ParseError::MinutesOutOfRange => write!(f, "Minutes out of range"),
			ParseError::UnexpectedInput => write!(f, "Unexpected input at end of date time string")
		}
	}
}

impl error::Error for ParseError {}

/// Parse a fixed-length, unsigned integer.
///
/// `N` must be less than 5 to ensure the parsed value fits into a u16 with no possible
/// overflow.
fn parse_num<const N: usize>(bytes: &[u8], e: ParseError) -> Result<(&[u8], u16), ParseError> {
	// Only allow numbers that can safely fit in u16
	const { assert!(N < 5); }

	if bytes.len() < N {
		return Err(e);
	}

	let mut r: u16 = 0;
	for i in 0..N {
		// Indexing won't panic because we checked bytes.len() above
		r = match bytes[i] {
			// Don't need checked math because we can't overflow
			v @ b'0'..=b'9' => r * 10 + (v - b'0') as u16,
			_ => return Err(e)
		};
	}

	Ok((&bytes[N..], r))
}

/// Parse a date time string into a [`Timestamp`].
///
/// Valid formats, with omitted fields defaulting to their minimum value:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DD HH:mm` or `YYYY-MM-DDTHH:mm`
///
/// Seconds and timezone offsets are not accepted: the time code has minute granularity
/// and all times are UTC.
///
/// # Errors
///
/// Returns [`ParseError`] if the input was malformed or invalid in any way. This includes
/// cases where a valid timestamp was read but additional characters remain in `bytes`.
///
/// # Examples
/// ```
/// # use timecode::{parse_timestamp, ParseError, Timestamp};
/// assert_eq!(
/// 	parse_timestamp(b"2014-12-06T01:07"),
/// 	Ok(Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 })
/// );
/// assert_eq!(parse_timestamp(b"1999-12-31"), Err(ParseError::YearOutOfRange));
/// ```
pub fn parse_timestamp(bytes: &[u8]) -> Result<Timestamp, ParseError> {
	let (bytes, year) = parse_num::<4>(bytes, ParseError::MissingYear)?;
	if !(2000..=2099).contains(&year) {
		return Err(ParseError::YearOutOfRange);
	}
	let mut time = Timestamp {
		year: (year - 2000) as u8,
		mon: 1,
		day: 1,
		hour: 0,
		min: 0
	};
	if bytes.is_empty() {
		return Ok(time);
	}

	// Optional month
	let (bytes, mon) = match bytes.split_first() {
		Some((b'-', b)) => parse_num::<2>(b, ParseError::MissingMonth)?,
		_ => return Err(ParseError::UnexpectedInput)
	};
	if mon == 0 || mon > 12 {
		return Err(ParseError::MonthOutOfRange);
	}
	time.mon = mon as u8;
	if bytes.is_empty() {
		return Ok(time);
	}

	// Optional day
	let (bytes, day) = match bytes.split_first() {
		Some((b'-', b)) => parse_num::<2>(b, ParseError::MissingDay)?,
		_ => return Err(ParseError::UnexpectedInput)
	};
	if day == 0 || day > days_per_month(time.year, time.mon) as u16 {
		return Err(ParseError::DayOutOfRange);
	}
	time.day = day as u8;
	if bytes.is_empty() {
		return Ok(time);
	}

	// Optional hours
	let (bytes, hour) = match bytes.split_first() {
		Some((b'T' | b' ', b)) => parse_num::<2>(b, ParseError::MissingHours)?,
		_ => return Err(ParseError::UnexpectedInput)
	};
	if hour > 23 {
		return Err(ParseError::HoursOutOfRange);
	}
	time.hour = hour as u8;
	if bytes.is_empty() {
		return Err(ParseError::MissingMinutes);
	}

	// Required minutes
	let (bytes, min) = match bytes.split_first() {
		Some((b':', b)) => parse_num::<2>(b, ParseError::MissingMinutes)?,
		_ => return Err(ParseError::UnexpectedInput)
	};
	if min > 59 {
		return Err(ParseError::MinutesOutOfRange);
	}
	time.min = min as u8;
	if bytes.is_empty() {
		Ok(time)
	} else {
		Err(ParseError::UnexpectedInput)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_timestamp_test() {
		// Year only
		assert_eq!(
			parse_timestamp(b"2016"),
			Ok(Timestamp { year: 16, mon: 1, day: 1, hour: 0, min: 0 })
		);
		assert_eq!(parse_timestamp(b""), Err(ParseError::MissingYear));
		assert_eq!(parse_timestamp(b"201"), Err(ParseError::MissingYear));
		assert_eq!(parse_timestamp(b"2016 "), Err(ParseError::UnexpectedInput));
		assert_eq!(parse_timestamp(b"1999"), Err(ParseError::YearOutOfRange));
		assert_eq!(parse_timestamp(b"2100"), Err(ParseError::YearOutOfRange));

		// Year-Month
		assert_eq!(parse_timestamp(b"2016-"), Err(ParseError::MissingMonth));
		assert_eq!(parse_timestamp(b"2016-2"), Err(ParseError::MissingMonth));
		assert_eq!(
			parse_timestamp(b"2016-02"),
			Ok(Timestamp { year: 16, mon: 2, day: 1, hour: 0, min: 0 })
		);
		assert_eq!(parse_timestamp(b"2016-00"), Err(ParseError::MonthOutOfRange));
		assert_eq!(parse_timestamp(b"2016-13"), Err(ParseError::MonthOutOfRange));

		// Year-Month-Day
		assert_eq!(parse_timestamp(b"2016-02-"), Err(ParseError::MissingDay));
		assert_eq!(parse_timestamp(b"2016-02-1"), Err(ParseError::MissingDay));
		assert_eq!(
			parse_timestamp(b"2016-02-29"),
			Ok(Timestamp { year: 16, mon: 2, day: 29, hour: 0, min: 0 })
		);
		assert_eq!(parse_timestamp(b"2015-02-29"), Err(ParseError::DayOutOfRange));
		assert_eq!(parse_timestamp(b"2016-02-00"), Err(ParseError::DayOutOfRange));

		// Date + Hours:Minutes
		assert_eq!(parse_timestamp(b"2014-12-06T"), Err(ParseError::MissingHours));
		assert_eq!(parse_timestamp(b"2014-12-06T01"), Err(ParseError::MissingMinutes));
		assert_eq!(parse_timestamp(b"2014-12-06T01:"), Err(ParseError::MissingMinutes));
		assert_eq!(
			parse_timestamp(b"2014-12-06T01:07"),
			Ok(Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 })
		);
		assert_eq!(
			parse_timestamp(b"2014-12-06 01:07"),
			Ok(Timestamp { year: 14, mon: 12, day: 6, hour: 1, min: 7 })
		);
		assert_eq!(parse_timestamp(b"2014-12-06 24:00"), Err(ParseError::HoursOutOfRange));
		assert_eq!(parse_timestamp(b"2014-12-06 01:60"), Err(ParseError::MinutesOutOfRange));
		assert_eq!(parse_timestamp(b"2014-12-06 01:07:00"), Err(ParseError::UnexpectedInput));
		assert_eq!(parse_timestamp(b"2014-12-06 01:07 Z"), Err(ParseError::UnexpectedInput));
	}
}
