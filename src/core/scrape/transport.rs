use super::{first_text, selector};
use crate::core::price::parse_price;
use crate::domain::model::{SourceKind, TransportOption};
use crate::utils::error::Result;
use scraper::Html;
use url::Url;

const SOURCE: &str = "transport";

pub const UNKNOWN_MODE: &str = "Unknown";
pub const NO_PRICE: &str = "N/A";

/// Extracts route summaries from a route-search results page.
pub fn parse_routes(html: &str, base: &Url) -> Result<Vec<TransportOption>> {
    let document = Html::parse_document(html);
    let route_sel = selector(SOURCE, "div.route-summary")?;
    let mode_sel = selector(SOURCE, "span.mode")?;
    let price_sel = selector(SOURCE, "span.price")?;
    let link_sel = selector(SOURCE, "a[href]")?;

    let mut options = Vec::new();
    for route in document.select(&route_sel) {
        let mode = first_text(route, &mode_sel).unwrap_or_else(|| UNKNOWN_MODE.to_string());
        let price = first_text(route, &price_sel).unwrap_or_else(|| NO_PRICE.to_string());
        let link = route
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| super::resolve_link(base, href))
            .unwrap_or_else(|| base.to_string());

        options.push(TransportOption {
            price_value: parse_price(&price),
            mode,
            price,
            link,
        });
    }

    tracing::debug!("Parsed {} {} options", options.len(), SourceKind::Transport);
    Ok(options)
}
