// Aggregation engine and report projection.
//
// `aggregate` partitions the record set into key buckets, computes the
// per-bucket statistics, and orders the result by key. `build_rows` then
// projects the ordered groups into the JSON report shape.
use crate::group_key::{self, GroupMode};
use crate::types::{Group, OutputRow, Record};
use std::collections::BTreeMap;

/// Bucket `records` by their encoded key under `mode` and compute the
/// per-group statistics.
///
/// Groups come back ordered by lexicographic key comparison, the same
/// order the inter-group `change` walks, so the report is reproducible
/// regardless of input order. An empty input yields an empty list.
pub fn aggregate(records: &[Record], mode: GroupMode) -> Vec<Group> {
    // BTreeMap keeps the keys in lexicographic order for free; insertion
    // order within a bucket is preserved until the chronological sort.
    let mut buckets: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for r in records {
        buckets
            .entry(group_key::encode(r, mode))
            .or_default()
            .push(r.clone());
    }

    let mut groups: Vec<Group> = Vec::with_capacity(buckets.len());
    for (key, mut bucket) in buckets {
        // Intra-group deltas must follow time, not input order.
        bucket.sort_by_key(|r| (r.year, r.month, r.day));

        let value: i64 = bucket.iter().map(|r| r.value).sum();
        // A bucket exists only because at least one record mapped to it,
        // so the extrema and the count are always well-defined.
        let min = bucket.iter().map(|r| r.value).min().unwrap_or(0);
        let max = bucket.iter().map(|r| r.value).max().unwrap_or(0);
        let average = value / bucket.len() as i64;

        let mut max_increase = 0i64;
        let mut max_drop = 0i64;
        for pair in bucket.windows(2) {
            let delta = pair[1].value - pair[0].value;
            if delta > max_increase {
                max_increase = delta;
            }
            if delta < max_drop {
                max_drop = delta;
            }
        }

        groups.push(Group {
            key,
            value,
            change: 0,
            max,
            min,
            average,
            max_drop,
            max_increase,
            records: bucket,
        });
    }

    // Inter-group change against the previous group in key order; the
    // first group has no baseline and stays 0.
    for i in 1..groups.len() {
        groups[i].change = groups[i].value - groups[i - 1].value;
    }

    groups
}

/// Project aggregated groups into report rows, decoding each key back
/// into the date components the mode carries.
///
/// Precondition: all records of the aggregation run belong to a single
/// district; `district_name` is attached to every row unchanged.
pub fn build_rows(groups: &[Group], mode: GroupMode, district_name: &str) -> Vec<OutputRow> {
    groups
        .iter()
        .map(|g| {
            let parts = group_key::decode(&g.key, mode);
            OutputRow {
                district_name: district_name.to_string(),
                year: parts.year,
                month: parts.month,
                day: parts.day,
                value: g.value,
                change: g.change,
                max: g.max,
                min: g.min,
                average: g.average,
                max_drop: g.max_drop,
                max_increase: g.max_increase,
            }
        })
        .collect()
}
