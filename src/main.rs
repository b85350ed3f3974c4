//! county-seats CLI
//!
//! Walks a state's Wikipedia county list, each county seat's article and its
//! GeoHack page, and writes county, seat, latitude and longitude as CSV.

use anyhow::Result;
use clap::Parser;
use county_seats::cli::{run, RunArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "county-seats")]
#[command(author = "RoyalBit Inc.")]
#[command(version)]
#[command(about = "Fetch county seat coordinates from Wikipedia")]
#[command(long_about = "Fetch county seat coordinates from Wikipedia.\n\nReads the county table of a state's \"List of counties\" page, follows each county seat's article to its GeoHack page and writes county, county_seat, lat, lng as CSV.\nAny missing table, link or coordinate aborts the run without writing output.")]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli.args).await
}
