//! county-seats: county seat coordinates from Wikipedia
//!
//! Stages:
//! - county_list: county table -> (county, seat, seat URL)
//! - seat: seat article -> GeoHack link
//! - coords: GeoHack page -> latitude, longitude
//! - pipeline: runs the three in order for every county

pub mod cli;
pub mod coords;
pub mod county_list;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod seat;

pub use coords::{parse_coordinates, Coordinates};
pub use county_list::{list_county_seats, resolve_url, SeatLink};
pub use error::ScrapeError;
pub use extract::{required_text, Page};
pub use fetch::{FetchConfig, Fetcher, HttpFetcher};
pub use output::{render_csv, write_csv};
pub use pipeline::{build_county_seat_table, CountyRecord, ScrapeConfig};
pub use seat::{find_coordinate_link, GeocodeLinkPattern};
