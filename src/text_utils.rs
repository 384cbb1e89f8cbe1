use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Front-matter dates look like `2022-05-01 14:30`.
pub const INPUT_DATE_FORMAT: &str = "%F %R";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// The input carries no offset, so feed dates are stamped as GMT.
pub const FEED_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formatted dates must fit a 64 byte buffer, terminator included.
const MAX_FORMATTED_LEN: usize = 63;

pub fn parse_date_time(value: &str, pattern: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, pattern).map_err(|_| Error::InvalidDate {
        value: value.to_string(),
        pattern: pattern.to_string(),
    })
}

pub fn format_date_time(date_time: &NaiveDateTime, pattern: &str) -> Result<String> {
    let mut buf = String::new();
    // An unknown specifier surfaces as fmt::Error here instead of a panic
    if write!(&mut buf, "{}", date_time.format(pattern)).is_err()
        || buf.is_empty()
        || buf.len() >= MAX_FORMATTED_LEN
    {
        return Err(Error::DateFormat {
            pattern: pattern.to_string(),
        });
    }
    Ok(buf)
}
