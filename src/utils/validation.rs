//! Input validation utilities
//!
//! Strict parsers for the textual forms kept in the contest directory.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{CATEGORY_SEPARATOR, SEAT_SEPARATOR};

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("valid range pattern"));

/// Parse `"<lo>-<hi>"` into its bounds
///
/// Surrounding whitespace is ignored; signs and inner whitespace are not.
pub fn parse_range(text: &str) -> Result<(u32, u32), &'static str> {
    let caps = RANGE_PATTERN
        .captures(text.trim())
        .ok_or("expected <lo>-<hi> with non-negative integers")?;
    let lo = caps[1].parse().map_err(|_| "lower bound out of range")?;
    let hi = caps[2].parse().map_err(|_| "upper bound out of range")?;
    Ok((lo, hi))
}

/// Check the `room-seatId` textual seat form
pub fn validate_seat_text(text: &str) -> Result<(), &'static str> {
    if text != text.trim() {
        return Err("leading or trailing whitespace");
    }
    if text.matches(SEAT_SEPARATOR).count() != 1 {
        return Err("expected exactly one '-' between room and seat id");
    }
    if text.starts_with(SEAT_SEPARATOR) || text.ends_with(SEAT_SEPARATOR) {
        return Err("room and seat id must not be empty");
    }
    Ok(())
}

/// Check a room or seat id before it is stored
pub fn validate_seat_part(part: &str) -> Result<(), &'static str> {
    if part.is_empty() {
        return Err("must not be empty");
    }
    if part.contains(SEAT_SEPARATOR) {
        return Err("must not contain '-'");
    }
    if part != part.trim() || part.contains('\t') {
        return Err("must not contain surrounding whitespace or tabs");
    }
    Ok(())
}

/// Parse a comma separated list of team category ids
pub fn parse_category_ids(text: &str) -> Result<Vec<u32>, String> {
    let ids = text
        .trim()
        .split(CATEGORY_SEPARATOR)
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| format!("invalid team category id {part:?}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        return Err("at least one team category id is required".to_string());
    }
    Ok(ids)
}

/// Check a value that is written into a TSV cell
pub fn validate_tsv_field(value: &str) -> Result<(), &'static str> {
    if value.contains('\t') || value.contains('\n') || value.contains('\r') {
        return Err("must not contain tabs or line breaks");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1-100"), Ok((1, 100)));
        assert_eq!(parse_range("  0-0 "), Ok((0, 0)));
        assert!(parse_range("1-").is_err());
        assert!(parse_range("-5").is_err());
        assert!(parse_range("1 -5").is_err());
        assert!(parse_range("1-99999999999").is_err());
    }

    #[test]
    fn test_validate_seat_text() {
        assert!(validate_seat_text("R101-12").is_ok());
        assert!(validate_seat_text("R101-12 ").is_err());
        assert!(validate_seat_text("R-1-12").is_err());
        assert!(validate_seat_text("-12").is_err());
        assert!(validate_seat_text("R101").is_err());
    }

    #[test]
    fn test_validate_seat_part() {
        assert!(validate_seat_part("A").is_ok());
        assert!(validate_seat_part("").is_err());
        assert!(validate_seat_part("A-1").is_err());
        assert!(validate_seat_part(" A").is_err());
    }

    #[test]
    fn test_parse_category_ids() {
        assert_eq!(parse_category_ids("3,4"), Ok(vec![3, 4]));
        assert_eq!(parse_category_ids("7"), Ok(vec![7]));
        assert!(parse_category_ids("3, 4").is_err());
        assert!(parse_category_ids("").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Alice\u{7}  "), "Alice");
        assert_eq!(sanitize_string("Bob\tSmith"), "BobSmith");
    }
}
