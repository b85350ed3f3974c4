//! County list -> seat page -> geocode page traversal
//!
//! Strictly sequential: one county's three fetches finish before the next
//! county starts, and the first error ends the run with no records.

use crate::coords::{parse_coordinates, Coordinates};
use crate::county_list::{list_county_seats, SeatLink};
use crate::error::Result;
use crate::extract::Page;
use crate::fetch::Fetcher;
use crate::seat::{find_coordinate_link, GeocodeLinkPattern};
use serde::Serialize;
use tracing::info;

/// Pipeline settings
#[derive(Debug, Clone, Default)]
pub struct ScrapeConfig {
    pub geocode_pattern: GeocodeLinkPattern,
}

/// One output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyRecord {
    pub county: String,
    pub county_seat: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl CountyRecord {
    fn new(link: SeatLink, coords: Coordinates) -> Self {
        Self {
            county: link.county,
            county_seat: link.county_seat,
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }
}

/// Build the full county seat table for a state's county list page
pub async fn build_county_seat_table<F: Fetcher>(
    fetcher: &F,
    list_url: &str,
    config: &ScrapeConfig,
) -> Result<Vec<CountyRecord>> {
    let markup = fetcher.fetch(list_url).await?;
    let seats = list_county_seats(&Page::parse(list_url, markup))?;
    info!(url = list_url, counties = seats.len(), "parsed county list");

    let mut records = Vec::with_capacity(seats.len());
    for link in seats {
        let coords = fetch_seat_coordinates(fetcher, &link.seat_url, config).await?;
        info!(
            county = %link.county,
            seat = %link.county_seat,
            lat = coords.latitude,
            lng = coords.longitude,
            "located county seat"
        );
        records.push(CountyRecord::new(link, coords));
    }

    Ok(records)
}

/// Seat page -> geocode link -> geocode page -> coordinates
pub async fn fetch_seat_coordinates<F: Fetcher>(
    fetcher: &F,
    seat_url: &str,
    config: &ScrapeConfig,
) -> Result<Coordinates> {
    let seat_markup = fetcher.fetch(seat_url).await?;
    let geocode_url = find_coordinate_link(
        &Page::parse(seat_url, seat_markup),
        &config.geocode_pattern,
    )?;

    let geocode_markup = fetcher.fetch(&geocode_url).await?;
    parse_coordinates(&Page::parse(geocode_url, geocode_markup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned pages and records the order of requests
    struct MapFetcher {
        pages: HashMap<&'static str, &'static str>,
        log: RefCell<Vec<String>>,
    }

    impl Fetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.log.borrow_mut().push(url.to_string());
            self.pages
                .get(url)
                .map(|s| s.to_string())
                .ok_or_else(|| ScrapeError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn fetcher() -> MapFetcher {
        let pages = HashMap::from([
            (
                "https://example.org/wiki/List",
                r#"<table class="wikitable">
                     <tr><th>County</th><th>FIPS</th><th>Seat</th></tr>
                     <tr><th>Sangamon County</th><td>167</td><td><a href="/wiki/Springfield">Springfield</a></td></tr>
                   </table>"#,
            ),
            (
                "https://example.org/wiki/Springfield",
                r#"<span data-href="https://geohack.example/params?p=spr&amp;l=en">c</span>"#,
            ),
            (
                "https://geohack.example/params?p=spr&l=en",
                r#"<span class="p-latitude">39.7817</span><span class="p-longitude">-89.6501</span>"#,
            ),
        ]);
        MapFetcher {
            pages,
            log: RefCell::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn test_fetch_order() {
        let fetcher = fetcher();
        let records = build_county_seat_table(
            &fetcher,
            "https://example.org/wiki/List",
            &ScrapeConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            records,
            vec![CountyRecord {
                county: "Sangamon County".to_string(),
                county_seat: "Springfield".to_string(),
                latitude: 39.7817,
                longitude: -89.6501,
            }]
        );
        assert_eq!(
            *fetcher.log.borrow(),
            vec![
                "https://example.org/wiki/List",
                "https://example.org/wiki/Springfield",
                "https://geohack.example/params?p=spr&l=en",
            ]
        );
    }

    #[tokio::test]
    async fn test_seat_without_geocode_link() {
        let mut fetcher = fetcher();
        fetcher
            .pages
            .insert("https://example.org/wiki/Springfield", "<p>no coordinates</p>");

        let err = build_county_seat_table(
            &fetcher,
            "https://example.org/wiki/List",
            &ScrapeConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScrapeError::LinkNotFound { ref url } if url == "https://example.org/wiki/Springfield"));
        assert_eq!(fetcher.log.borrow().len(), 2);
    }
}
