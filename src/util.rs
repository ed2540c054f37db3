// Parsing and formatting helpers shared across the modules.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `i64` while being forgiving about the
/// formatting quirks of the service's text fields.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_i64_safe(s: Option<&str>) -> Option<i64> {
    // `?` propagates `None` early if the option is missing.
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>().ok()
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values, used for
    // counts in console messages (e.g., `9,855 matching records`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_i64_safe_handles_edges() {
        assert_eq!(parse_i64_safe(Some("123")), Some(123));
        assert_eq!(parse_i64_safe(Some(" -5 ")), Some(-5));
        assert_eq!(parse_i64_safe(Some("")), None);
        assert_eq!(parse_i64_safe(Some("12a")), None);
        assert_eq!(parse_i64_safe(None), None);
    }

    #[test]
    fn format_int_inserts_separators() {
        assert_eq!(format_int(9855i64), "9,855");
        assert_eq!(format_int(12i64), "12");
    }
}
