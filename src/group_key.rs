// Group-key encoding and decoding.
//
// The key formats are part of the report contract: composite keys are
// `-`-separated with zero-padded month/day halves, while the single-field
// `m` and `d` keys are written without padding. Decoding is therefore
// driven by the grouping mode alone and splits on the separator instead of
// relying on character offsets.
use crate::types::Record;

/// Which date components form a bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    Year,
    Month,
    Day,
    YearMonth,
    YearDay,
    MonthDay,
    /// Degenerate single-bucket mode; every record keys to `"all"`.
    All,
}

impl GroupMode {
    /// Parse one of the CLI codes `y, m, d, ym, yd, md`. Anything else,
    /// including an empty string, falls back to the single `all` bucket.
    pub fn parse(code: &str) -> GroupMode {
        match code {
            "y" => GroupMode::Year,
            "m" => GroupMode::Month,
            "d" => GroupMode::Day,
            "ym" => GroupMode::YearMonth,
            "yd" => GroupMode::YearDay,
            "md" => GroupMode::MonthDay,
            _ => GroupMode::All,
        }
    }
}

/// Date components recovered from a group key. A field is `None` whenever
/// the mode's key format does not carry it, or the key half failed to
/// parse; it is never defaulted to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

/// Derive the bucket key for a record under the given mode. Total: every
/// record maps to exactly one key, zero components included.
pub fn encode(record: &Record, mode: GroupMode) -> String {
    match mode {
        GroupMode::Year => format!("{}", record.year),
        GroupMode::Month => format!("{}", record.month),
        GroupMode::Day => format!("{}", record.day),
        GroupMode::YearMonth => format!("{}-{:02}", record.year, record.month),
        GroupMode::YearDay => format!("{}-{:02}", record.year, record.day),
        GroupMode::MonthDay => format!("{:02}-{:02}", record.month, record.day),
        GroupMode::All => "all".to_string(),
    }
}

/// Recover the date components a key carries under the given mode.
///
/// Inverts `encode`: composite keys split once on the first `-`, single
/// component keys parse whole. Malformed halves leave the field unset
/// rather than erroring.
pub fn decode(key: &str, mode: GroupMode) -> DateParts {
    let mut parts = DateParts::default();
    match mode {
        GroupMode::Year => parts.year = key.parse().ok(),
        GroupMode::Month => parts.month = key.parse().ok(),
        GroupMode::Day => parts.day = key.parse().ok(),
        GroupMode::YearMonth => {
            if let Some((y, m)) = key.split_once('-') {
                parts.year = y.parse().ok();
                parts.month = m.parse().ok();
            }
        }
        GroupMode::YearDay => {
            if let Some((y, d)) = key.split_once('-') {
                parts.year = y.parse().ok();
                parts.day = d.parse().ok();
            }
        }
        GroupMode::MonthDay => {
            if let Some((m, d)) = key.split_once('-') {
                parts.month = m.parse().ok();
                parts.day = d.parse().ok();
            }
        }
        GroupMode::All => {}
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, month: i32, day: i32) -> Record {
        Record {
            id: 0,
            year,
            month,
            day,
            value: 0,
            district_id: 516,
            district_name: "Centra rajons".to_string(),
        }
    }

    #[test]
    fn encode_formats_per_mode() {
        let r = rec(2017, 6, 15);
        assert_eq!(encode(&r, GroupMode::Year), "2017");
        assert_eq!(encode(&r, GroupMode::Month), "6");
        assert_eq!(encode(&r, GroupMode::Day), "15");
        assert_eq!(encode(&r, GroupMode::YearMonth), "2017-06");
        assert_eq!(encode(&r, GroupMode::YearDay), "2017-15");
        assert_eq!(encode(&r, GroupMode::MonthDay), "06-15");
        assert_eq!(encode(&r, GroupMode::All), "all");
    }

    #[test]
    fn round_trip_all_modes() {
        let r = rec(2017, 6, 15);
        let cases = [
            (GroupMode::Year, DateParts { year: Some(2017), month: None, day: None }),
            (GroupMode::Month, DateParts { year: None, month: Some(6), day: None }),
            (GroupMode::Day, DateParts { year: None, month: None, day: Some(15) }),
            (GroupMode::YearMonth, DateParts { year: Some(2017), month: Some(6), day: None }),
            (GroupMode::YearDay, DateParts { year: Some(2017), month: None, day: Some(15) }),
            (GroupMode::MonthDay, DateParts { year: None, month: Some(6), day: Some(15) }),
            (GroupMode::All, DateParts::default()),
        ];
        for (mode, expected) in cases {
            assert_eq!(decode(&encode(&r, mode), mode), expected, "{:?}", mode);
        }
    }

    #[test]
    fn round_trip_zero_components() {
        // Records predating day-level reporting carry day 0; the codec
        // must carry it through, not crash or drop it.
        let r = rec(2009, 12, 0);
        assert_eq!(encode(&r, GroupMode::YearDay), "2009-00");
        assert_eq!(
            decode("2009-00", GroupMode::YearDay),
            DateParts { year: Some(2009), month: None, day: Some(0) }
        );
    }

    #[test]
    fn decode_tolerates_both_month_widths() {
        // The single-field `m` key is unpadded, but a consumer may hand
        // back either width.
        assert_eq!(decode("6", GroupMode::Month).month, Some(6));
        assert_eq!(decode("06", GroupMode::Month).month, Some(6));
        assert_eq!(decode("11", GroupMode::Month).month, Some(11));
    }

    #[test]
    fn decode_never_guesses_from_key_shape() {
        // A year-shaped key under Month mode is a month value, nothing more.
        assert_eq!(decode("2017", GroupMode::Month).month, Some(2017));
        assert_eq!(decode("2017", GroupMode::Month).year, None);
    }

    #[test]
    fn decode_leaves_malformed_fields_unset() {
        assert_eq!(decode("junk", GroupMode::Year), DateParts::default());
        assert_eq!(
            decode("2017-xx", GroupMode::YearMonth),
            DateParts { year: Some(2017), month: None, day: None }
        );
        assert_eq!(decode("2017", GroupMode::YearMonth), DateParts::default());
        assert_eq!(decode("all", GroupMode::All), DateParts::default());
    }

    #[test]
    fn unknown_mode_code_falls_back_to_all() {
        assert_eq!(GroupMode::parse(""), GroupMode::All);
        assert_eq!(GroupMode::parse("ymd"), GroupMode::All);
        assert_eq!(GroupMode::parse("y"), GroupMode::Year);
    }
}
