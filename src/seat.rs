//! County seat page parsing
//!
//! The geocode link sits in a data attribute of the coordinates widget, not
//! in a stable anchor, so it is found with a regex over the raw markup and
//! then entity-decoded.

use crate::error::{Result, ScrapeError};
use crate::extract::{parse_selector, Page};
use regex::Regex;
use scraper::Html;

/// Scheme-qualified GeoHack URL, ending before the closing quote
pub const DEFAULT_GEOCODE_PATTERN: &str = r#"https://geohack\.[^"]+"#;

/// Compiled pattern locating the geocode-reference link in seat markup
#[derive(Debug, Clone)]
pub struct GeocodeLinkPattern(Regex);

impl GeocodeLinkPattern {
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for GeocodeLinkPattern {
    fn default() -> Self {
        Self(Regex::new(DEFAULT_GEOCODE_PATTERN).expect("invalid regex: geocode link"))
    }
}

/// First geocode link in the page's raw markup, entity-decoded
pub fn find_coordinate_link(page: &Page, pattern: &GeocodeLinkPattern) -> Result<String> {
    let raw = pattern
        .0
        .find(page.markup())
        .map(|m| m.as_str())
        .ok_or_else(|| ScrapeError::LinkNotFound {
            url: page.url().to_string(),
        })?;
    unescape_attr(raw)
}

/// Decode HTML entities (`&amp;`, `&#38;`, ...) the way an attribute value
/// is decoded by the parser.
fn unescape_attr(raw: &str) -> Result<String> {
    let fragment = Html::parse_fragment(&format!(
        "<a href=\"{}\"></a>",
        raw.replace('"', "&quot;")
    ));
    let anchor = parse_selector("a")?;
    Ok(fragment
        .select(&anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or(raw)
        .to_string())
}
