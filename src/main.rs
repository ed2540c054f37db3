// Entry point and high-level CLI flow.
//
// The flow mirrors the service's intended use: fetch the records for one
// district (filtered server-side by district/year/month/day), then either
// list the raw records or aggregate them by the requested grouping mode
// and emit the statistics as a console table plus an optional JSON file.
mod fetch;
mod group_key;
mod output;
mod reports;
mod types;
mod util;

use anyhow::Result;
use clap::Parser;
use fetch::Filter;
use group_key::GroupMode;

/// Query the declared-persons registry and report grouped statistics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Service address
    #[arg(long, default_value = fetch::DEFAULT_SOURCE)]
    source: String,
    /// District identifier (required)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    district: i32,
    /// Year to filter data
    #[arg(long, default_value_t = 0)]
    year: i32,
    /// Month to filter data
    #[arg(long, default_value_t = 0)]
    month: i32,
    /// Day to filter data
    #[arg(long, default_value_t = 0)]
    day: i32,
    /// Maximum number of records to retrieve
    #[arg(long, default_value_t = 100)]
    limit: u32,
    /// Grouping option: y, m, d, ym, yd, md
    #[arg(long)]
    group: Option<String>,
    /// Output file name for JSON export
    #[arg(long)]
    out: Option<String>,
}

// Cap for the ungrouped per-record listing.
const DISPLAY_LIMIT: usize = 100;

fn run(args: &Args) -> Result<()> {
    let filter = Filter {
        district: args.district,
        year: args.year,
        month: args.month,
        day: args.day,
    };
    let records = fetch::fetch_records(&args.source, &filter, args.limit)?;
    println!("Found {} matching records", util::format_int(records.len()));

    let Some(code) = &args.group else {
        output::preview_records(&records, DISPLAY_LIMIT);
        return Ok(());
    };

    let mode = GroupMode::parse(code);
    let groups = reports::aggregate(&records, mode);
    println!(
        "Found {} groups based on '{}' grouping\n",
        util::format_int(groups.len()),
        code
    );

    // The fetch always filters on one district id, so the first record's
    // name holds for the whole report.
    let district_name = records
        .first()
        .map(|r| r.district_name.as_str())
        .unwrap_or("");
    let rows = reports::build_rows(&groups, mode, district_name);
    output::preview_rows(&rows, rows.len());

    if let Some(out) = &args.out {
        output::write_json(out, &rows)?;
        println!("Data successfully exported to {}", out);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
