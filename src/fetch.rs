// Retrieval of declared-persons records from the OData service.
//
// Filtering happens server-side: the CLI parameters become an OData
// `$filter` clause and a `$top` limit, so the aggregation core only ever
// sees records that already match the requested district and date.
use crate::types::{Envelope, Record};
use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_SOURCE: &str = "https://opendata.riga.lv/odata/service/DeclaredPersons";

const HTTP_TIMEOUT_SECS: u64 = 10;

/// Server-side filter parameters. A value of 0 means "not filtered on".
#[derive(Debug, Clone, Copy, Default)]
pub struct Filter {
    pub district: i32,
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Build the OData `$filter` expression for the given parameters, or
/// `None` when nothing is filtered on.
pub fn build_filter(f: &Filter) -> Option<String> {
    let mut clauses: Vec<String> = Vec::new();
    if f.district > 0 {
        clauses.push(format!("district_id eq {}", f.district));
    }
    if f.year > 0 {
        clauses.push(format!("year eq {}", f.year));
    }
    if f.month > 0 {
        clauses.push(format!("month eq {}", f.month));
    }
    if f.day > 0 {
        clauses.push(format!("day eq {}", f.day));
    }
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}

/// Fetch matching records from the service and convert them to clean
/// `Record`s. This is the one fatal path of the program; network and
/// decode failures surface to the caller.
pub fn fetch_records(source: &str, filter: &Filter, limit: u32) -> Result<Vec<Record>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .context("building http client")?;

    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(clause) = build_filter(filter) {
        query.push(("$filter", clause));
    }
    query.push(("$top", limit.to_string()));

    println!("Requesting data from: {}", source);
    let response = client
        .get(source)
        .query(&query)
        .send()
        .context("requesting records")?;

    if !response.status().is_success() {
        anyhow::bail!("service returned {}", response.status());
    }

    let envelope: Envelope = response.json().context("parsing service response")?;
    Ok(envelope.value.into_iter().map(Record::from_raw).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_with_all_parameters() {
        let f = Filter { district: 516, year: 2017, month: 6, day: 15 };
        assert_eq!(
            build_filter(&f).as_deref(),
            Some("district_id eq 516 and year eq 2017 and month eq 6 and day eq 15")
        );
    }

    #[test]
    fn filter_skips_unset_parameters() {
        let f = Filter { district: 516, year: 0, month: 6, day: 0 };
        assert_eq!(
            build_filter(&f).as_deref(),
            Some("district_id eq 516 and month eq 6")
        );
    }

    #[test]
    fn filter_empty_when_nothing_set() {
        assert_eq!(build_filter(&Filter::default()), None);
    }
}
