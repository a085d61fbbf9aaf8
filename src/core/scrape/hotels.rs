use super::{first_text, resolve_link, selector};
use crate::core::price::{parse_price, parse_rating};
use crate::core::scrape::transport::NO_PRICE;
use crate::domain::model::HotelOption;
use crate::utils::error::Result;
use scraper::Html;
use url::Url;

const SOURCE: &str = "hotels";

/// Extracts property cards from a hotel search results page.
///
/// Cards without a title or a title link are skipped; missing price or rating become `"N/A"`.
pub fn parse_properties(html: &str, base: &Url) -> Result<Vec<HotelOption>> {
    let document = Html::parse_document(html);
    let card_sel = selector(SOURCE, r#"[data-testid="property-card"]"#)?;
    let name_sel = selector(SOURCE, r#"[data-testid="title"]"#)?;
    let price_sel = selector(SOURCE, r#"[data-testid="price-and-discounted-price"]"#)?;
    let rating_sel = selector(SOURCE, r#"[data-testid="review-score"]"#)?;
    let link_sel = selector(SOURCE, r#"a[data-testid="title-link"]"#)?;

    let mut hotels = Vec::new();
    for card in document.select(&card_sel) {
        let Some(name) = first_text(card, &name_sel) else {
            tracing::debug!("Skipping property card without a title");
            continue;
        };
        let Some(href) = card
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            tracing::debug!("Skipping '{}': no title link", name);
            continue;
        };

        let price = first_text(card, &price_sel).unwrap_or_else(|| NO_PRICE.to_string());
        let rating = first_text(card, &rating_sel).unwrap_or_else(|| NO_PRICE.to_string());

        hotels.push(HotelOption {
            price_value: parse_price(&price),
            rating_value: parse_rating(&rating),
            link: resolve_link(base, href),
            name,
            price,
            rating,
        });
    }

    tracing::debug!("Parsed {} hotel cards", hotels.len());
    Ok(hotels)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = r#"
        <div id="search_results_table">
          <div data-testid="property-card">
            <a data-testid="title-link" href="/hotel/fr/lutece.html?checkin=2025-08-01">
              <div data-testid="title">Hôtel Lutèce</div>
            </a>
            <div data-testid="review-score"><div>Scored 8.7</div><div>Fabulous</div></div>
            <span data-testid="price-and-discounted-price">€ 1,140</span>
          </div>
          <div data-testid="property-card">
            <div data-testid="title">Nameless Link Hotel</div>
            <span data-testid="price-and-discounted-price">€ 300</span>
          </div>
          <div data-testid="property-card">
            <a data-testid="title-link" href="/hotel/fr/untitled.html">
              <div data-testid="title">   </div>
            </a>
            <span data-testid="price-and-discounted-price">€ 90</span>
          </div>
          <div data-testid="property-card">
            <a data-testid="title-link" href="/hotel/fr/no-title-node.html"></a>
          </div>
          <div data-testid="property-card">
            <a data-testid="title-link" href="https://www.booking.com/hotel/fr/marais.html">
              <div data-testid="title">Le Marais Rooms</div>
            </a>
          </div>
        </div>
    "#;

    fn base() -> Url {
        Url::parse("https://www.booking.com").unwrap()
    }

    #[test]
    fn test_parse_properties() {
        let hotels = parse_properties(RESULTS, &base()).unwrap();
        assert_eq!(hotels.len(), 2);

        let lutece = &hotels[0];
        assert_eq!(lutece.name, "Hôtel Lutèce");
        assert_eq!(lutece.price_value, Some(1140.0));
        assert_eq!(lutece.rating_value, Some(8.7));
        assert_eq!(
            lutece.link,
            "https://www.booking.com/hotel/fr/lutece.html?checkin=2025-08-01"
        );
    }

    #[test]
    fn test_cards_without_title_are_skipped() {
        let hotels = parse_properties(RESULTS, &base()).unwrap();
        assert!(hotels.iter().all(|h| !h.name.trim().is_empty()));
        assert!(!hotels
            .iter()
            .any(|h| h.link.contains("untitled") || h.link.contains("no-title-node")));
    }

    #[test]
    fn test_card_without_price_or_rating() {
        let hotels = parse_properties(RESULTS, &base()).unwrap();
        let marais = &hotels[1];
        assert_eq!(marais.name, "Le Marais Rooms");
        assert_eq!(marais.price, "N/A");
        assert_eq!(marais.price_value, None);
        assert_eq!(marais.rating_value, None);
        assert_eq!(marais.link, "https://www.booking.com/hotel/fr/marais.html");
    }
}
