use std::fmt::Display;
use std::str::FromStr;

use super::error::BindError;

/// Separator between tokens in a list segment
pub const DELIMITER: char = ',';

/// Parse a comma-separated list of scalars into a typed sequence.
///
/// Returns `Ok(None)` when the raw value is absent, empty or only whitespace,
/// and `Ok(Some(values))` otherwise, with values in the order they appear.
/// Tokens are trimmed and tokens left empty by repeated, leading or trailing
/// delimiters are skipped, so `","` yields `Ok(Some(vec![]))`.
///
/// Any token that does not convert to `T` fails the whole parse.
pub fn parse_delimited<T>(raw: Option<&str>) -> Result<Option<Vec<T>>, BindError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_delimited_with(raw, T::from_str)
}

/// Same as [`parse_delimited`] with an explicit converter in place of `FromStr`.
pub fn parse_delimited_with<T, E, F>(raw: Option<&str>, convert: F) -> Result<Option<Vec<T>>, BindError>
where
    E: Display,
    F: Fn(&str) -> Result<T, E>,
{
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    raw.split(DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| convert(token).map_err(|e| BindError::conversion::<T>(token, e)))
        .collect::<Result<Vec<T>, BindError>>()
        .map(Some)
}

/// Parse a path segment that may wrap its list in parentheses, e.g. `(id1,id2)`.
///
/// Only one balanced outer pair is removed; anything else is handed to
/// [`parse_delimited`] untouched.
pub fn parse_segment<T>(raw: Option<&str>) -> Result<Option<Vec<T>>, BindError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_delimited(raw.map(unwrap_group))
}

fn unwrap_group(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(raw)
}
