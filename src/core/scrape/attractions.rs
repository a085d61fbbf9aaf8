use super::{element_text, selector};
use crate::utils::error::Result;
use scraper::Html;
use std::collections::{HashMap, HashSet};

const SOURCE: &str = "attractions";
const KEYWORDS: [&str; 2] = ["attraction", "site"];

const BUILTIN_FALLBACK: &[(&str, &[&str])] = &[
    (
        "paris",
        &["Eiffel Tower", "Louvre Museum", "Notre-Dame Cathedral", "Montmartre", "Musée d'Orsay"],
    ),
    (
        "london",
        &["British Museum", "Tower of London", "Buckingham Palace", "Westminster Abbey", "Tate Modern"],
    ),
    (
        "rome",
        &["Colosseum", "Vatican Museums", "Pantheon", "Trevi Fountain", "Roman Forum"],
    ),
    (
        "new york",
        &["Central Park", "Statue of Liberty", "Metropolitan Museum of Art", "Times Square", "Brooklyn Bridge"],
    ),
    (
        "tokyo",
        &["Senso-ji", "Meiji Shrine", "Shibuya Crossing", "Tokyo Skytree", "Tsukiji Outer Market"],
    ),
    (
        "barcelona",
        &["Sagrada Família", "Park Güell", "La Rambla", "Casa Batlló", "Gothic Quarter"],
    ),
    (
        "amsterdam",
        &["Rijksmuseum", "Van Gogh Museum", "Anne Frank House", "Jordaan", "Vondelpark"],
    ),
];

/// Collects list items from an encyclopedia article that mention attractions or sites.
///
/// Order follows the document; repeated entries are dropped.
pub fn parse_article(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let item_sel = selector(SOURCE, ".mw-parser-output li")?;

    let mut seen = HashSet::new();
    let mut attractions = Vec::new();
    for item in document.select(&item_sel) {
        let text = element_text(item);
        let lowered = text.to_lowercase();
        if !KEYWORDS.iter().any(|k| lowered.contains(k)) {
            continue;
        }
        if seen.insert(lowered) {
            attractions.push(text);
        }
    }

    tracing::debug!("Parsed {} attraction candidates", attractions.len());
    Ok(attractions)
}

/// Hardcoded attractions for well-known cities. `extra` wins over the built-in table.
pub fn fallback_for(city: &str, extra: Option<&HashMap<String, Vec<String>>>) -> Vec<String> {
    let key = city.trim().to_lowercase();

    if let Some(table) = extra {
        if let Some((_, list)) = table.iter().find(|(name, _)| name.to_lowercase() == key) {
            return list.clone();
        }
    }

    BUILTIN_FALLBACK
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, list)| list.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_article_filters_by_keyword() {
        let html = r#"
            <div class="mw-parser-output">
              <ul>
                <li>The Louvre is the most visited <b>attraction</b> in the city</li>
                <li>Population: 2.1 million</li>
                <li>Montmartre, a historic SITE of artists</li>
                <li>The Louvre is the most visited attraction in the city</li>
              </ul>
            </div>
            <ul><li>Another site outside the article body</li></ul>
        "#;

        let attractions = parse_article(html).unwrap();
        assert_eq!(
            attractions,
            vec![
                "The Louvre is the most visited attraction in the city".to_string(),
                "Montmartre, a historic SITE of artists".to_string(),
            ]
        );
    }

    #[test]
    fn test_builtin_fallback_is_case_insensitive() {
        let list = fallback_for("  PARIS ", None);
        assert_eq!(list.len(), 5);
        assert_eq!(list[0], "Eiffel Tower");
        assert!(fallback_for("Atlantis", None).is_empty());
    }

    #[test]
    fn test_configured_fallback_takes_precedence() {
        let mut extra = HashMap::new();
        extra.insert("Paris".to_string(), vec!["Canal Saint-Martin".to_string()]);
        extra.insert("Lisbon".to_string(), vec!["Belém Tower".to_string()]);

        assert_eq!(fallback_for("paris", Some(&extra)), vec!["Canal Saint-Martin"]);
        assert_eq!(fallback_for("lisbon", Some(&extra)), vec!["Belém Tower"]);
        assert_eq!(fallback_for("rome", Some(&extra))[0], "Colosseum");
    }
}
