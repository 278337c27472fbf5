//! Support for command line argument parsing.
//!
//! See [crate] documentation for details on command line arguments and examples.

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Debug, Display};
use std::num::NonZero;
use std::path::PathBuf;
use std::str::FromStr;
use timecode::{parse_timestamp, ParseError, Timestamp};

/// The tool's output modes.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Mode {
	/// Generate a labeled decoder test corpus (`signals.txt` + `time.txt`).
	Corpus,
	/// Generate a C header embedding a contiguous multi-minute signal for the hardware
	/// simulator.
	Header
}

impl FromStr for Mode {
	type Err = ArgumentsError;

	/// Parse a string into a [`Mode`].
	///
	/// The parsing is case insensitive. Returns [`ArgumentsError::InvalidMode`] if the input
	/// string is not one of the defined modes.
	///
	/// # Examples
	///
	/// ```
	/// assert_eq!(Mode::from_str("corpus"), Ok(Mode::Corpus));
	/// assert_eq!(Mode::from_str("HEADER"), Ok(Mode::Header));
	/// assert_eq!(
	/// 	Mode::from_str("corpuss"),
	/// 	Err(ArgumentsError::InvalidMode(String::from("corpuss")))
	/// );
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"corpus" => Ok(Mode::Corpus),
			"header" => Ok(Mode::Header),
			_ => Err(ArgumentsError::InvalidMode(s.to_string()))
		}
	}
}

/// The error type for parsing command line arguments.
#[cfg_attr(test, derive(PartialEq))]
pub enum ArgumentsError {
	/// The option was unrecognized. The option is returned as the payload of this variant.
	UnrecognizedOption(String),
	/// Error converting an option or parameter to UTF-8. The argument index and original
	/// [`OsString`] that could not be converted are returned as the payload of this variant.
	InvalidUTF8(usize, OsString),
	/// The required output mode was missing.
	MissingMode,
	/// The provided output mode was invalid. The supplied mode argument is returned as the
	/// payload of this variant.
	InvalidMode(String),
	/// The provided count was invalid. The supplied count argument is returned as the
	/// payload of this variant.
	InvalidCount(String),
	/// The provided seed was invalid. The supplied seed argument is returned as the payload
	/// of this variant.
	InvalidSeed(String),
	/// The parameter for an option was not supplied. The option is returned as the payload
	/// for this variant.
	MissingParameter(String),
	/// An error occured while parsing the provided date time string. The underlying parse
	/// error is returned as the payload for this variant.
	DateTimeParseError(ParseError),
	/// Help option (-h) was included, so print help details and exit.
	Help
}

impl Display for ArgumentsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ArgumentsError::UnrecognizedOption(s) => write!(f, "Unrecognized option: {}", s),
			ArgumentsError::InvalidUTF8(i, v) => write!(f, "Invalid UTF-8 in argument {}: {:?}", i, v),
			ArgumentsError::MissingMode => write!(f, "Missing mode input"),
			ArgumentsError::InvalidMode(s) => write!(f, "Invalid mode: {}", s),
			ArgumentsError::InvalidCount(s) => write!(f, "Invalid count: {}", s),
			ArgumentsError::InvalidSeed(s) => write!(f, "Invalid seed: {}", s),
			ArgumentsError::MissingParameter(s) => write!(f, "Missing parameter for option {}", s),
			ArgumentsError::DateTimeParseError(e) => write!(f, "Datetime parsing error: {}", e),
			ArgumentsError::Help => write!(f, "Help requested")
		}
	}
}

impl Debug for ArgumentsError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self, f)
	}
}

impl Error for ArgumentsError {}

/// Convert an argument to [`&str`].
///
/// The function takes the argument index `i`, optional argument name `a`, and the argument
/// `s`.
///
/// # Errors
///
/// Returns [`ArgumentsError::InvalidUTF8`] if the argument could not be converted to UTF-8
/// or [`ArgumentsError::MissingParameter`] if the argument is `None`.
fn arg_to_str<'a, 'b>(i: usize, a: Option<&'a str>, s: Option<&'b OsString>)
	-> Result<&'b str, ArgumentsError>
{
	match s {
		Some(v) => v.to_str().ok_or_else(|| ArgumentsError::InvalidUTF8(i, v.clone())),
		None => Err(ArgumentsError::MissingParameter(a.map(String::from).unwrap_or_default()))
	}
}

/// Parsed command line arguments.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Arguments {
	/// The output mode.
	pub mode: Mode,
	/// The number of corpus cases or header minutes (if provided).
	pub count: Option<NonZero<usize>>,
	/// The configured start time (if provided).
	pub time: Option<Timestamp>,
	/// The configured output path (if provided).
	pub output: Option<PathBuf>,
	/// The configured RNG seed (if provided).
	pub seed: Option<u64>,
	/// Whether corpus cases should omit noise padding.
	pub clean: bool
}

impl Arguments {
	/// Parse command line arguments.
	///
	/// The input can be any type that implements [`Iterator`] that yields [`OsString`],
	/// though typically this would be [`std::env::args_os`]. This function assumes that the
	/// application name is **not** supplied as the first item yielded by `args`.
	///
	/// # Errors
	///
	/// This function can return any of the variants in [`ArgumentsError`]. See that
	/// documentation for more details.
	///
	/// # Examples
	///
	/// ```
	/// let args = match Arguments::parse(std::env::args_os().skip(1)) {
	/// 	Ok(a) => a,
	/// 	Err(e) => {
	/// 		// Handle error
	/// 		panic!("{}", e);
	/// 	}
	/// };
	/// ```
	pub fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Arguments, ArgumentsError>
	{
		let mut mode: Result<Mode, ArgumentsError> = Err(ArgumentsError::MissingMode);
		let mut count: Option<NonZero<usize>> = None;
		let mut time: Option<Timestamp> = None;
		let mut output: Option<PathBuf> = None;
		let mut seed: Option<u64> = None;
		let mut clean = false;
		let mut arg = args.next();
		let mut i = 0;
		loop {
			if arg.is_none() { break; }
			match arg_to_str(i, None, arg.as_ref())? {
				n @ ("-n" | "-c" | "--count") => {
					count = Some(
						arg_to_str(i+1, Some(n), args.next().as_ref())
						.and_then(
							|v| v.parse().map_err(|_| ArgumentsError::InvalidCount(v.to_string()))
						)?
					);
					// Increment because we called args.next()
					i += 1;
				},
				t @ ("-t" | "--time") => {
					if let Some(a) = args.next() {
						time = Some(
							parse_timestamp(a.as_encoded_bytes())
								.map_err(ArgumentsError::DateTimeParseError)?
						)
					} else {
						return Err(ArgumentsError::MissingParameter(t.to_string()))
					}
					// Increment because we called args.next()
					i += 1;
				},
				o @ ("-o" | "--output") => {
					if let Some(a) = args.next() {
						output = Some(PathBuf::from(a))
					} else {
						return Err(ArgumentsError::MissingParameter(o.to_string()))
					}
					// Increment because we called args.next()
					i += 1;
				},
				"--seed" => {
					seed = Some(
						arg_to_str(i+1, Some("--seed"), args.next().as_ref())
						.and_then(
							|v| v.parse().map_err(|_| ArgumentsError::InvalidSeed(v.to_string()))
						)?
					);
					// Increment because we called args.next()
					i += 1;
				},
				"--clean" => clean = true,
				"-h" => return Err(ArgumentsError::Help),
				v => {
					if v.starts_with('-') {
						return Err(ArgumentsError::UnrecognizedOption(v.to_string()));
					}

					mode = Mode::from_str(v)
				}
			}
			arg = args.next();
			// Increment because we called args.next()
			i += 1;
		}

		Ok(Arguments {
			mode: mode?,
			count,
			time,
			output,
			seed,
			clean
		})
	}
}
