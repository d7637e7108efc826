use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Locates the main content fragment within a fetched HTML page.
///
/// The run uses one fixed default ([`ElementLocator::article`]); the trait
/// is the seam for other locator strategies.
pub trait ContentLocator: Send + Sync {
    /// Return the first matching element serialized back to HTML,
    /// including its tag and descendants, or `None` when nothing matches.
    fn locate(&self, html: &str) -> Option<String>;
}

/// Content locator matching the first element of a CSS selector
#[derive(Debug)]
pub struct ElementLocator {
    selector: Selector,
}

impl ElementLocator {
    /// Create a locator for the given CSS selector
    pub fn new(selector: &str) -> Result<Self> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::InvalidInput(format!("invalid selector '{selector}': {e}")))?;
        Ok(Self { selector })
    }

    /// The default locator: first `<article>` element of the page
    pub fn article() -> Result<Self> {
        Self::new("article")
    }
}

impl ContentLocator for ElementLocator {
    fn locate(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let element = document.select(&self.selector).next()?;
        Some(element.html())
    }
}
