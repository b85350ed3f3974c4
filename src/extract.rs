//! Parsed pages and required-field extraction
//!
//! `Page` is the only parse tree the pipeline stages see. It lives for one
//! stage and is dropped before the next fetch.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// One fetched document: its URL, raw markup and parse tree
pub struct Page {
    url: String,
    markup: String,
    html: Html,
}

impl Page {
    pub fn parse(url: impl Into<String>, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let html = Html::parse_document(&markup);
        Self {
            url: url.into(),
            markup,
            html,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// First element matching `selector`, in document order
    pub fn find_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).next())
    }

    /// Every element matching `selector`, in document order
    pub fn find_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).collect())
    }
}

pub fn parse_selector(sel: &str) -> Result<Selector> {
    Selector::parse(sel).map_err(|e| ScrapeError::InvalidSelector {
        selector: sel.to_string(),
        reason: e.to_string(),
    })
}

/// Trimmed text content of an element and all its descendants
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first element matching `selector`.
///
/// Absence is a structural mismatch with the page, reported as
/// `ScrapeError::FieldNotFound` carrying the page URL.
pub fn required_text(page: &Page, selector: &str) -> Result<String> {
    page.find_first(selector)?
        .map(element_text)
        .ok_or_else(|| ScrapeError::FieldNotFound {
            url: page.url().to_string(),
            selector: selector.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        let page = Page::parse(
            "https://test.com",
            r#"<html><body><span class="p-latitude">
                39.7817 </span></body></html>"#,
        );
        assert_eq!(required_text(&page, ".p-latitude").unwrap(), "39.7817");
    }

    #[test]
    fn test_required_text_first_match_wins() {
        let page = Page::parse(
            "https://test.com",
            "<p class=\"x\">one</p><p class=\"x\">two</p>",
        );
        assert_eq!(required_text(&page, ".x").unwrap(), "one");
    }

    #[test]
    fn test_required_text_missing() {
        let page = Page::parse("https://test.com/page", "<p>nothing</p>");
        let err = required_text(&page, ".p-longitude").unwrap_err();
        match err {
            ScrapeError::FieldNotFound { url, selector } => {
                assert_eq!(url, "https://test.com/page");
                assert_eq!(selector, ".p-longitude");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_selector() {
        let page = Page::parse("https://test.com", "<p>x</p>");
        let err = page.find_first("p[").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSelector { .. }));
    }

    #[test]
    fn test_find_all_document_order() {
        let page = Page::parse(
            "https://test.com",
            "<ul><li>a</li><li>b</li><li>c</li></ul>",
        );
        let items: Vec<String> = page
            .find_all("li")
            .unwrap()
            .into_iter()
            .map(element_text)
            .collect();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_text_is_concatenated() {
        let page = Page::parse(
            "https://test.com",
            "<td> <a href=\"/wiki/Springfield\">Spring<b>field</b></a> </td>",
        );
        let td = page.find_first("a").unwrap().unwrap();
        assert_eq!(element_text(td), "Springfield");
    }
}
