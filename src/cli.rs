//! Command surface: arguments, run, summary
//!
//! Progress goes to stderr through tracing; stdout only carries the
//! compact JSON summary.

use crate::fetch::{FetchConfig, HttpFetcher};
use crate::output::write_csv;
use crate::pipeline::{build_county_seat_table, ScrapeConfig};
use crate::seat::{GeocodeLinkPattern, DEFAULT_GEOCODE_PATTERN};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// URL of the state's "List of counties" Wikipedia page
    #[arg(long, env = "COUNTY_LIST_URL", alias = "county_list_wiki_url")]
    pub county_list_url: String,

    /// Path at which to store the CSV output
    #[arg(long, value_name = "PATH", alias = "output_csv")]
    pub output_csv: PathBuf,

    /// User-Agent header sent with every request
    #[arg(
        long,
        env = "COUNTY_SEATS_USER_AGENT",
        default_value = concat!("county-seats/", env!("CARGO_PKG_VERSION"))
    )]
    pub user_agent: String,

    /// Timeout per request in milliseconds (default: none)
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Regex locating the geocode link in county seat pages
    #[arg(long, default_value = DEFAULT_GEOCODE_PATTERN, value_parser = parse_pattern)]
    pub geocode_pattern: GeocodeLinkPattern,
}

fn parse_pattern(s: &str) -> std::result::Result<GeocodeLinkPattern, regex::Error> {
    GeocodeLinkPattern::new(s)
}

/// Printed to stdout after the CSV is written
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub file: String,
    pub counties: usize,
    pub finished: String,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let fetcher = HttpFetcher::new(&FetchConfig {
        user_agent: args.user_agent,
        timeout_ms: args.timeout,
    })?;
    let config = ScrapeConfig {
        geocode_pattern: args.geocode_pattern,
    };

    info!(url = %args.county_list_url, "fetching county list");
    let records = build_county_seat_table(&fetcher, &args.county_list_url, &config).await?;

    write_csv(&args.output_csv, &records).await?;
    info!(
        file = %args.output_csv.display(),
        counties = records.len(),
        "wrote county seats"
    );

    let summary = RunSummary {
        file: args.output_csv.display().to_string(),
        counties: records.len(),
        finished: Utc::now().to_rfc3339(),
    };
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
