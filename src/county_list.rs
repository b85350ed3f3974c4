//! County list parsing
//!
//! Reads the state's "List of counties" data table. The first row is the
//! header; every other row has the county name in its `th` and the county
//! seat, linked, in its second `td`.

use crate::error::{Result, ScrapeError};
use crate::extract::{element_text, parse_selector, Page};
use scraper::ElementRef;
use url::Url;

pub const DATA_TABLE_SELECTOR: &str = "table.wikitable";

/// One data row of the county table, with an absolute seat URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLink {
    pub county: String,
    pub county_seat: String,
    pub seat_url: String,
}

pub fn list_county_seats(page: &Page) -> Result<Vec<SeatLink>> {
    let table = page
        .find_first(DATA_TABLE_SELECTOR)?
        .ok_or_else(|| ScrapeError::TableNotFound {
            url: page.url().to_string(),
            selector: DATA_TABLE_SELECTOR.to_string(),
        })?;

    let tr = parse_selector("tr")?;
    table
        .select(&tr)
        .enumerate()
        .skip(1)
        .map(|(row, el)| parse_row(page.url(), row, el))
        .collect()
}

fn parse_row(base_url: &str, row: usize, tr: ElementRef<'_>) -> Result<SeatLink> {
    let malformed = |reason: &str| ScrapeError::MalformedRow {
        url: base_url.to_string(),
        row,
        reason: reason.to_string(),
    };

    let th = parse_selector("th")?;
    let td = parse_selector("td")?;
    let anchor = parse_selector("a[href]")?;

    let county = tr
        .select(&th)
        .next()
        .map(element_text)
        .ok_or_else(|| malformed("no row header cell"))?;

    let seat_cell = tr
        .select(&td)
        .nth(1)
        .ok_or_else(|| malformed("fewer than two data cells"))?;
    let county_seat = element_text(seat_cell);

    let href = seat_cell
        .select(&anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| malformed("county seat cell has no link"))?;

    Ok(SeatLink {
        county,
        county_seat,
        seat_url: resolve_url(base_url, href)?,
    })
}

/// Absolute form of `href`: verbatim when it already starts with `http`,
/// otherwise joined to `base`.
pub fn resolve_url(base: &str, href: &str) -> Result<String> {
    if href.starts_with("http") {
        return Ok(href.to_string());
    }

    let invalid = |url: &str, e: url::ParseError| ScrapeError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    };
    let base_url = Url::parse(base).map_err(|e| invalid(base, e))?;
    let joined = base_url.join(href).map_err(|e| invalid(href, e))?;
    Ok(joined.to_string())
}
