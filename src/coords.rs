//! Geocode page parsing
//!
//! GeoHack-style pages expose the decimal coordinates as text of elements
//! classed `p-latitude` and `p-longitude`, already signed.

use crate::error::{Result, ScrapeError};
use crate::extract::{required_text, Page};

pub const LATITUDE_SELECTOR: &str = ".p-latitude";
pub const LONGITUDE_SELECTOR: &str = ".p-longitude";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

pub fn parse_coordinates(page: &Page) -> Result<Coordinates> {
    Ok(Coordinates {
        latitude: decimal_field(page, LATITUDE_SELECTOR)?,
        longitude: decimal_field(page, LONGITUDE_SELECTOR)?,
    })
}

fn decimal_field(page: &Page, selector: &str) -> Result<f64> {
    let text = required_text(page, selector)?;
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScrapeError::NumericParse {
            url: page.url().to_string(),
            selector: selector.to_string(),
            text,
        })
}
