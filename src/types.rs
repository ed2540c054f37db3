use crate::util::parse_i64_safe;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Response wrapper of the OData service: `{ "value": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub value: Vec<RawRecord>,
}

/// One record exactly as the service serializes it. The count lives in
/// `value` as text, and any of year/month/day may be 0 for records that
/// predate finer reporting granularity.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: i32,
    #[serde(default)]
    pub day: i32,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub district_id: i32,
    #[serde(default)]
    pub district_name: String,
}

/// A cleaned observation with the count already parsed to an integer.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: i64,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub value: i64,
    pub district_id: i32,
    pub district_name: String,
}

impl Record {
    /// Convert a raw service record. A missing or non-numeric `value`
    /// becomes 0 rather than an error.
    pub fn from_raw(raw: RawRecord) -> Record {
        Record {
            id: raw.id,
            year: raw.year,
            month: raw.month,
            day: raw.day,
            value: parse_i64_safe(raw.value.as_deref()).unwrap_or(0),
            district_id: raw.district_id,
            district_name: raw.district_name,
        }
    }
}

/// Aggregate over all records sharing one group key.
///
/// `records` is sorted by (year, month, day) once the aggregator is done
/// with the bucket, so `max_increase`/`max_drop` reflect time progression.
#[derive(Debug, Clone)]
pub struct Group {
    pub key: String,
    pub records: Vec<Record>,
    pub value: i64,
    pub change: i64,
    pub max: i64,
    pub min: i64,
    pub average: i64,
    pub max_drop: i64,
    pub max_increase: i64,
}

/// One row of the JSON report. Date fields apply only to some grouping
/// modes; inapplicable ones are omitted from the serialized form entirely
/// so the report never shows a fabricated 0 as calendar data.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct OutputRow {
    #[serde(rename = "district_name")]
    #[tabled(rename = "District")]
    pub district_name: String,
    #[serde(rename = "year", skip_serializing_if = "Option::is_none")]
    #[tabled(rename = "Year", display_with = "display_opt")]
    pub year: Option<i32>,
    #[serde(rename = "month", skip_serializing_if = "Option::is_none")]
    #[tabled(rename = "Month", display_with = "display_opt")]
    pub month: Option<i32>,
    #[serde(rename = "day", skip_serializing_if = "Option::is_none")]
    #[tabled(rename = "Day", display_with = "display_opt")]
    pub day: Option<i32>,
    #[serde(rename = "value")]
    #[tabled(rename = "Value")]
    pub value: i64,
    #[serde(rename = "change")]
    #[tabled(rename = "Change")]
    pub change: i64,
    #[serde(rename = "Max")]
    #[tabled(rename = "Max")]
    pub max: i64,
    #[serde(rename = "Min")]
    #[tabled(rename = "Min")]
    pub min: i64,
    #[serde(rename = "Average")]
    #[tabled(rename = "Average")]
    pub average: i64,
    #[serde(rename = "Max_drop")]
    #[tabled(rename = "MaxDrop")]
    pub max_drop: i64,
    #[serde(rename = "Max_increase")]
    #[tabled(rename = "MaxIncrease")]
    pub max_increase: i64,
}

pub fn display_opt(v: &Option<i32>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => String::new(),
    }
}
