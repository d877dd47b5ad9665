//! HTML parsing and selector lookups.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! a fetched page and locating fragments with CSS selectors. Lookups come in
//! two shapes so each call site states whether a fragment is mandatory:
//! failing lookups ([`Element::find_one`], [`Element::find_all`]) and
//! tolerant ones ([`Element::find_first`], [`Element::find_all_or_empty`]).
//!
//! # Example
//!
//! ```rust
//! use idokep_core::parse::Document;
//!
//! let html = r#"
//!     <div class="card"><span class="temp">5°</span></div>
//!     <div class="card"><span class="temp">7°</span></div>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let cards = doc.find_all(".card").unwrap();
//! assert_eq!(cards.len(), 2);
//! assert_eq!(cards[1].find_one(".temp").unwrap().text(), "7°");
//! assert!(cards[0].find_first(".rain").unwrap().is_none());
//! ```

use scraper::{Html, Selector};

use crate::{Result, WeatherError};

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WeatherError::InvalidSelector(format!("{}: {}", selector, e)))
}

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use idokep_core::parse::Document;
///
/// let html = r#"<div class="current-temperature">14˚C</div>"#;
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.find_one(".current-temperature").unwrap().text(), "14˚C");
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup yields a best-effort tree, never an error.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// The root `<html>` element, the scope for document-wide lookups.
    pub fn root(&self) -> Element<'_> {
        Element { element: self.html.root_element() }
    }

    /// See [`Element::find_one`].
    pub fn find_one(&self, selector: &str) -> Result<Element<'_>> {
        self.root().find_one(selector)
    }

    /// See [`Element::find_first`].
    pub fn find_first(&self, selector: &str) -> Result<Option<Element<'_>>> {
        self.root().find_first(selector)
    }

    /// See [`Element::find_all`].
    pub fn find_all(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        self.root().find_all(selector)
    }

    /// See [`Element::find_all_or_empty`].
    pub fn find_all_or_empty(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        self.root().find_all_or_empty(selector)
    }
}

/// A fragment of a [`Document`]: one element and its subtree.
///
/// Lookups on an element only search its descendants.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// All descendants matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::InvalidSelector`] if the selector is invalid.
    pub fn find_all_or_empty(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(|element| Element { element }).collect())
    }

    /// All descendants matching `selector`, failing when there are none.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::SelectorNotFound`] on zero matches.
    pub fn find_all(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let found = self.find_all_or_empty(selector)?;
        if found.is_empty() {
            return Err(WeatherError::SelectorNotFound { selector: selector.to_string() });
        }
        Ok(found)
    }

    /// The first descendant matching `selector`, if any.
    pub fn find_first(&self, selector: &str) -> Result<Option<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).next().map(|element| Element { element }))
    }

    /// The first descendant matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::SelectorNotFound`] on zero matches.
    pub fn find_one(&self, selector: &str) -> Result<Element<'a>> {
        self.find_first(selector)?
            .ok_or_else(|| WeatherError::SelectorNotFound { selector: selector.to_string() })
    }

    /// Finds exactly `count` matches, as when the layout declares a fixed number of fragments.
    pub fn find_exactly(&self, selector: &str, count: usize) -> Result<Vec<Element<'a>>> {
        let found = self.find_all(selector)?;
        if found.len() != count {
            return Err(WeatherError::UnexpectedMatchCount {
                selector: selector.to_string(),
                expected: count,
                found: found.len(),
            });
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="hu">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <div class="col"><span class="num">14</span><a>3°</a><a>11°</a></div>
            <div class="col"><a>1°</a></div>
            <img class="icon" src="/assets/sun.svg">
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_malformed_document() {
        let doc = Document::parse("<div class=\"col\"><span class=\"num\">14</div>").unwrap();
        assert_eq!(doc.find_one(".col .num").unwrap().text(), "14");
    }

    #[test]
    fn test_find_all_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let links = doc.find_all(".col a").unwrap();

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].text(), "3°");
        assert_eq!(links[2].text(), "1°");
    }

    #[test]
    fn test_find_all_fails_on_zero_matches() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.find_all(".missing");

        assert!(matches!(result, Err(WeatherError::SelectorNotFound { .. })));
    }

    #[test]
    fn test_find_all_or_empty_tolerates_zero_matches() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert!(doc.find_all_or_empty(".missing").unwrap().is_empty());
    }

    #[test]
    fn test_lookups_are_scoped_to_fragment() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let cols = doc.find_all(".col").unwrap();

        assert_eq!(cols[0].find_one(".num").unwrap().text(), "14");
        assert!(cols[1].find_first(".num").unwrap().is_none());
        assert!(matches!(cols[1].find_one(".num"), Err(WeatherError::SelectorNotFound { .. })));
    }

    #[test]
    fn test_find_exactly() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let cols = doc.find_all(".col").unwrap();

        assert_eq!(cols[0].find_exactly("a", 2).unwrap().len(), 2);
        assert!(matches!(
            cols[1].find_exactly("a", 2),
            Err(WeatherError::UnexpectedMatchCount { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let icon = doc.find_one("img.icon").unwrap();

        assert_eq!(icon.attr("src"), Some("/assets/sun.svg"));
        assert_eq!(icon.attr("alt"), None);
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.find_first("[[invalid");

        assert!(matches!(result, Err(WeatherError::InvalidSelector(_))));
    }
}
