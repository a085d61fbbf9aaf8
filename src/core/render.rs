use crate::core::itinerary::render_line;
use crate::core::price::format_amount;
use crate::domain::model::{HotelOption, TripPlan};
use crate::utils::error::{PlannerError, Result};
use std::fmt::Write as _;
use std::str::FromStr;

const EMPTY_SECTION: &str = "No options found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "trip_plan.md",
            OutputFormat::Json => "trip_plan.json",
            OutputFormat::Csv => "trip_options.csv",
        }
    }

    pub fn render(&self, plan: &TripPlan) -> Result<String> {
        match self {
            OutputFormat::Markdown => Ok(render_markdown(plan)),
            OutputFormat::Json => render_json(plan),
            OutputFormat::Csv => render_csv(plan),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(PlannerError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format".to_string(),
            }),
        }
    }
}

fn rating_label(hotel: &HotelOption) -> String {
    hotel
        .rating_value
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| hotel.rating.clone())
}

pub fn render_markdown(plan: &TripPlan) -> String {
    let request = &plan.request;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Planning trip from {} to {} for {} to {}...",
        request.origin,
        request.destination,
        request.dates.start_str(),
        request.dates.end_str()
    );

    let _ = writeln!(out, "\n## Best Transportation Options (Quality/Price)\n");
    if plan.transports.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_SECTION);
    }
    for t in &plan.transports {
        let _ = writeln!(out, "- {} for {}: [Book here]({})", t.mode, t.price, t.link);
    }

    let _ = writeln!(out, "\n## Best Hotel Options (Quality/Price)\n");
    if plan.hotels.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_SECTION);
    }
    for h in &plan.hotels {
        let _ = writeln!(
            out,
            "- {} ({} rating) for {}: [Book here]({})",
            h.name,
            rating_label(h),
            h.price,
            h.link
        );
    }

    let _ = writeln!(out, "\n## Major Attractions & Itinerary\n");
    let _ = writeln!(out, "Top Attractions: {}", plan.attractions.join(", "));
    let _ = writeln!(out, "\nDetailed Plan:");
    for day in &plan.itinerary {
        let _ = writeln!(out, "{}", render_line(day));
    }

    let _ = writeln!(out, "\n## Estimated Cost\n");
    match &plan.estimate {
        Some(estimate) => {
            if let Some(transport) = estimate.transport {
                let _ = writeln!(out, "- Transport: {}", format_amount(transport));
            }
            if let Some(lodging) = estimate.lodging {
                let _ = writeln!(
                    out,
                    "- Lodging ({} nights): {}",
                    estimate.nights,
                    format_amount(lodging)
                );
            }
            let _ = writeln!(out, "- Total: {}", format_amount(estimate.total));
        }
        None => {
            let _ = writeln!(out, "Not enough price data for an estimate.");
        }
    }

    out
}

pub fn render_json(plan: &TripPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

pub fn render_csv(plan: &TripPlan) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "name", "price", "rating", "link"])?;

    for t in &plan.transports {
        writer.write_record(["transport", t.mode.as_str(), t.price.as_str(), "", t.link.as_str()])?;
    }
    for h in &plan.hotels {
        let rating = rating_label(h);
        writer.write_record([
            "hotel",
            h.name.as_str(),
            h.price.as_str(),
            rating.as_str(),
            h.link.as_str(),
        ])?;
    }
    for a in &plan.attractions {
        writer.write_record(["attraction", a.as_str(), "", "", ""])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::itinerary::build_itinerary;
    use crate::domain::model::{CostEstimate, DateRange, TransportOption, TripRequest};

    fn sample_plan() -> TripPlan {
        let dates = DateRange::parse("2025-08-01 to 2025-08-03").unwrap();
        let attractions = vec!["Louvre Museum".to_string(), "Eiffel Tower".to_string()];
        TripPlan {
            request: TripRequest::new("New York", "Paris", dates).unwrap(),
            transports: vec![TransportOption {
                mode: "Fly".to_string(),
                price: "$450".to_string(),
                price_value: Some(450.0),
                link: "https://www.rome2rio.com/map/New-York/Paris".to_string(),
            }],
            hotels: vec![HotelOption {
                name: "Hôtel Lutèce, Paris".to_string(),
                price: "€ 640".to_string(),
                price_value: Some(640.0),
                rating: "Scored 8.7".to_string(),
                rating_value: Some(8.7),
                link: "https://www.booking.com/hotel/fr/lutece.html".to_string(),
            }],
            itinerary: build_itinerary(&dates, &attractions),
            attractions,
            estimate: Some(CostEstimate {
                transport: Some(450.0),
                lodging: Some(640.0),
                total: 1090.0,
                nights: 2,
            }),
        }
    }

    #[test]
    fn test_render_markdown() {
        let text = render_markdown(&sample_plan());
        assert!(text.starts_with("Planning trip from New York to Paris for 2025-08-01 to 2025-08-03..."));
        assert!(text.contains("- Fly for $450: [Book here](https://www.rome2rio.com/map/New-York/Paris)"));
        assert!(text.contains(
            "- Hôtel Lutèce, Paris (8.7 rating) for € 640: [Book here](https://www.booking.com/hotel/fr/lutece.html)"
        ));
        assert!(text.contains("Top Attractions: Louvre Museum, Eiffel Tower"));
        assert!(text.contains("Detailed Plan:\nDay 1: Visit Louvre Museum\nDay 2: Visit Eiffel Tower\n"));
        assert!(text.contains("- Total: 1090"));
    }

    #[test]
    fn test_render_markdown_empty_sections() {
        let mut plan = sample_plan();
        plan.transports.clear();
        plan.hotels.clear();
        plan.estimate = None;

        let text = render_markdown(&plan);
        assert_eq!(text.matches(EMPTY_SECTION).count(), 2);
        assert!(text.contains("Not enough price data"));
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let csv = render_csv(&sample_plan()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "category,name,price,rating,link");
        assert!(lines[2].starts_with("hotel,\"Hôtel Lutèce, Paris\",€ 640,8.7,"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["request"]["destination"], "Paris");
        assert_eq!(value["itinerary"][1]["day"], 2);
        assert_eq!(value["estimate"]["total"], 1090.0);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("Markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap().file_name(), "trip_options.csv");
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
