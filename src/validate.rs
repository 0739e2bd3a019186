//! Input validation helpers.
//!
//! Dates are validated strictly before anything is written: the stored
//! date strings double as sort keys and prefix-filter targets, so only
//! zero-padded `YYYY-MM-DD` is accepted.

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// Validate an event date as a strict ISO 8601 calendar date.
///
/// Returns the canonical `YYYY-MM-DD` string on success. Rejects
/// non-padded forms ("2023-5-15"), reversed forms ("15-05-2023"),
/// timestamps, and impossible calendar values ("2023-02-30").
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the input is not a valid date.
pub fn parse_event_date(input: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })?;

    // chrono accepts unpadded fields; round-trip to enforce the
    // canonical form the prefix filter relies on.
    let canonical = parsed.format("%Y-%m-%d").to_string();
    if canonical != input {
        return Err(Error::InvalidDate {
            input: input.to_string(),
        });
    }

    Ok(canonical)
}

/// Validate an event name: must be non-empty after trimming.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the name is empty.
pub fn validate_event_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "event name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Classify a search term as a date filter or a keyword.
///
/// A term made solely of ASCII digits and hyphens is a date (or date
/// prefix such as "2023" or "2023-05"); anything else is a keyword.
/// This mirrors the positional CLI contract; the query engine itself
/// takes explicit named parameters.
#[must_use]
pub fn looks_like_date(term: &str) -> bool {
    !term.is_empty() && term.chars().all(|c| c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert_eq!(parse_event_date("2023-05-15").unwrap(), "2023-05-15");
        assert_eq!(parse_event_date("2000-02-29").unwrap(), "2000-02-29");
        assert_eq!(parse_event_date("1999-12-31").unwrap(), "1999-12-31");
    }

    #[test]
    fn test_invalid_calendar_values() {
        assert!(parse_event_date("2023-13-01").is_err());
        assert!(parse_event_date("2023-02-30").is_err());
        assert!(parse_event_date("2023-00-10").is_err());
        assert!(parse_event_date("2023-04-31").is_err());
    }

    #[test]
    fn test_non_canonical_forms_rejected() {
        assert!(parse_event_date("2023-5-15").is_err());
        assert!(parse_event_date("15-05-2023").is_err());
        assert!(parse_event_date("2023/05/15").is_err());
        assert!(parse_event_date("2023-05-15T00:00:00").is_err());
        assert!(parse_event_date("").is_err());
        assert!(parse_event_date("yesterday").is_err());
    }

    #[test]
    fn test_event_name_validation() {
        assert!(validate_event_name("Birthday").is_ok());
        assert!(validate_event_name("").is_err());
        assert!(validate_event_name("   ").is_err());
    }

    #[test]
    fn test_date_classification() {
        assert!(looks_like_date("2023-05-15"));
        assert!(looks_like_date("2023-05"));
        assert!(looks_like_date("2023"));
        assert!(!looks_like_date("Birthday"));
        assert!(!looks_like_date("2023-05-15x"));
        assert!(!looks_like_date(""));
    }
}
