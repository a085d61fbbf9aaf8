//! Best-effort HTML extraction for the three travel sites.
//!
//! Selectors are tied to each site's current markup and will silently match nothing
//! when a layout changes. Callers treat an empty result as "no options found".

pub mod attractions;
pub mod hotels;
pub mod transport;

use crate::utils::error::{PlannerError, Result};
use scraper::{ElementRef, Selector};
use url::Url;

pub(crate) fn selector(source_name: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| PlannerError::ScrapeError {
        source_name: source_name.to_string(),
        message: format!("invalid selector '{}': {:?}", css, e),
    })
}

/// Element text with whitespace runs collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Resolves an `href` against the site root. Absolute links pass through unchanged.
pub(crate) fn resolve_link(base: &Url, href: &str) -> String {
    match base.join(href.trim()) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::debug!("Keeping unresolvable link '{}': {}", href, e);
            href.to_string()
        }
    }
}
