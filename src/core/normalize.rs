//! Conversions from human-formatted cell text to machine values.
//!
//! Tables are returned as raw text; these helpers are applied on demand, one column
//! at a time, by the typed series in [`crate::digrin`].

use std::num::{ParseFloatError, ParseIntError};

use chrono::NaiveDate;
use thiserror::Error;

/// Magnitude suffixes, checked in this order. The first letter found anywhere in the
/// lowercased input wins, so `t` must be tested before `b`, `m` and `k`.
pub const SUFFIXES: [(char, f64); 4] = [
    ('t', 1_000_000_000_000.0),
    ('b', 1_000_000_000.0),
    ('m', 1_000_000.0),
    ('k', 1_000.0),
];

/// Month tokens as the source site prints them, after the trailing period is removed.
///
/// The set mixes abbreviations and full names (`March`, `June`, `Sept`); `Mar` or
/// `Jun` are not recognised.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "March", "Apr", "May", "June", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Why a raw cell could not be normalized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The numeric part of the cell is not a number.
    #[error("cannot parse `{raw}` as a number: {source}")]
    InvalidNumber {
        /// The cell as given.
        raw: String,
        /// The underlying float parse error.
        #[source]
        source: ParseFloatError,
    },

    /// The month token is not in [`MONTHS`].
    #[error("unknown month `{month}` in `{raw}`")]
    UnknownMonth {
        /// The cell as given.
        raw: String,
        /// The month token after stripping its period.
        month: String,
    },

    /// The cell is not shaped like `<Mon[.]> <Day,> <Year>` or names an impossible date.
    #[error("malformed date `{raw}`: {reason}")]
    MalformedDate {
        /// The cell as given.
        raw: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Converts a human-formatted amount such as `2.5K`, `1.2 B` or `$1,234` to a float.
///
/// The suffix is detected from [`SUFFIXES`] in order; the number is the text up to the
/// first space with currency symbols, thousands separators and a trailing suffix
/// letter removed. Placeholders like `?` are not handled here, see
/// [`replace_placeholder`].
///
/// # Errors
///
/// [`NormalizeError::InvalidNumber`] when the numeric prefix does not parse.
pub fn to_number(raw: &str) -> Result<f64, NormalizeError> {
    let lower = raw.to_lowercase();
    let multiplier = SUFFIXES
        .iter()
        .find(|(suffix, _)| lower.contains(*suffix))
        .map(|(_, factor)| *factor);

    let prefix = raw.trim().split(' ').next().unwrap_or_default();
    let digits: String = prefix
        .chars()
        .filter(|c| *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    let digits = match multiplier {
        Some(_) => digits.trim_end_matches(|c: char| c.is_ascii_alphabetic()),
        None => digits.as_str(),
    };

    let value = parse_float(digits, raw)?;
    Ok(value * multiplier.unwrap_or(1.0))
}

/// Parses a price cell such as `$1,234.50`.
///
/// # Errors
///
/// [`NormalizeError::InvalidNumber`] when what remains is not a number.
pub fn parse_price(raw: &str) -> Result<f64, NormalizeError> {
    let digits: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace() && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    parse_float(&digits, raw)
}

/// Parses the first whitespace-separated token, e.g. `1.50` from `1.50 (+0.05)`.
///
/// # Errors
///
/// [`NormalizeError::InvalidNumber`] when the token is not a number.
pub fn leading_number(raw: &str) -> Result<f64, NormalizeError> {
    let token = raw.split_whitespace().next().unwrap_or_default();
    parse_float(token, raw)
}

/// Substitutes `"0"` for a cell that is exactly `placeholder` (ignoring surrounding spaces).
#[must_use]
pub fn replace_placeholder<'a>(raw: &'a str, placeholder: &str) -> &'a str {
    if raw.trim() == placeholder { "0" } else { raw }
}

/// Converts `"Dec. 31, 2023"` into `"2023-12-31"`.
///
/// # Errors
///
/// See [`to_date`].
pub fn to_iso_date(raw: &str) -> Result<String, NormalizeError> {
    to_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Parses a `<Mon[.]> <Day,> <Year>` date.
///
/// # Errors
///
/// - [`NormalizeError::MalformedDate`] unless the input has exactly three
///   whitespace-separated tokens forming a real calendar date.
/// - [`NormalizeError::UnknownMonth`] when the month token is not in [`MONTHS`].
pub fn to_date(raw: &str) -> Result<NaiveDate, NormalizeError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [month, day, year] = tokens.as_slice() else {
        return Err(malformed(raw, format!("expected 3 tokens, got {}", tokens.len())));
    };

    let month = month.replace('.', "");
    let month_num = MONTHS
        .iter()
        .position(|m| *m == month)
        .ok_or_else(|| NormalizeError::UnknownMonth {
            raw: raw.to_string(),
            month: month.clone(),
        })?;

    let day: u32 = day
        .replace(',', "")
        .parse()
        .map_err(|e: ParseIntError| malformed(raw, format!("day: {e}")))?;
    let year: i32 = year
        .parse()
        .map_err(|e: ParseIntError| malformed(raw, format!("year: {e}")))?;

    let month_num = u32::try_from(month_num + 1).unwrap_or_default();
    NaiveDate::from_ymd_opt(year, month_num, day)
        .ok_or_else(|| malformed(raw, "no such calendar day".into()))
}

/// Parses either the human format accepted by [`to_date`] or an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// The [`to_date`] error when neither format applies.
pub fn parse_any_date(raw: &str) -> Result<NaiveDate, NormalizeError> {
    to_date(raw).or_else(|err| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| err))
}

fn parse_float(s: &str, raw: &str) -> Result<f64, NormalizeError> {
    s.parse::<f64>()
        .map_err(|source| NormalizeError::InvalidNumber {
            raw: raw.to_string(),
            source,
        })
}

fn malformed(raw: &str, reason: String) -> NormalizeError {
    NormalizeError::MalformedDate {
        raw: raw.to_string(),
        reason,
    }
}
