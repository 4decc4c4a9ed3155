//! Time-of-day normalisation.
//!
//! Times are reduced to a single `HHMMSS` integer so they sort in
//! chronological order. The difference of two such integers is used as the
//! matching distance; it is not elapsed seconds (`100000 - 095959` is 4041,
//! not 1) and across an hour or minute boundary it overstates the gap.

use crate::error::Error;

/// Largest valid normalised time, `23:59:59`.
pub const MAX_TIME: u32 = 235959;

/// Delimiters tried in order; the first one present in the value is used.
const DELIMITERS: [char; 5] = ['/', '-', ':', ' ', '.'];

/// Converts a textual time such as `09:15:30`, `09-15-30` or `091530` to
/// its `HHMMSS` integer form.
pub fn normalize_time(raw: &str) -> Result<u32, Error> {
    let value = raw.trim();

    let time = if is_bare_digits(value) {
        parse(value, raw)?
    } else {
        let delimiter = DELIMITERS
            .iter()
            .find(|d| value.contains(**d))
            .ok_or_else(|| format_error(raw, "expected HH MM SS separated by / - : space or ."))?;

        let parts: Vec<&str> = value.split(*delimiter).collect();
        if parts.len() != 3 {
            return Err(format_error(
                raw,
                "check that the time has hours, minutes and seconds",
            ));
        }
        if parts.iter().any(|p| p.len() != 2 || !is_bare_digits(p)) {
            return Err(format_error(raw, "each component must be two digits"));
        }

        parse(&parts.concat(), raw)?
    };

    if time > MAX_TIME {
        return Err(format_error(raw, "time is past 23:59:59"));
    }

    Ok(time)
}

fn is_bare_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn parse(digits: &str, raw: &str) -> Result<u32, Error> {
    digits
        .parse()
        .map_err(|_| format_error(raw, "not a valid integer time"))
}

fn format_error(raw: &str, reason: &'static str) -> Error {
    Error::TimeFormat {
        value: raw.to_string(),
        reason,
    }
}

// -- Tests -------------------------------------------------------------------
