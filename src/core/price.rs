use regex::Regex;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.]").expect("static regex"));
static FIRST_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("static regex"));

/// Coerces scraped price text to a number by dropping everything except digits and dots.
///
/// `"€1,234.50"` becomes `1234.5`. `"N/A"` and text without digits give `None`.
/// Range text is not split: `"$450 - $900"` collapses into `450900`.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = NON_NUMERIC.replace_all(text, "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// First decimal number in a review-score blurb, e.g. `"Scored 8.5 Very good"`.
pub fn parse_rating(text: &str) -> Option<f64> {
    FIRST_DECIMAL
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
