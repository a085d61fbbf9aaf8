use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_non_empty_string;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const RANGE_SEPARATOR: &str = " to ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(PlannerError::InvalidDateRange {
                input: format!("{}{}{}", start, RANGE_SEPARATOR, end),
                reason: "end date is before start date".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses `"2025-08-01 to 2025-08-07"`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| PlannerError::InvalidDateRange {
            input: input.to_string(),
            reason,
        };

        let (start, end) = input
            .trim()
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| invalid("expected 'YYYY-MM-DD to YYYY-MM-DD'".to_string()))?;

        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT)
            .map_err(|e| invalid(format!("bad start date: {}", e)))?;
        let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT)
            .map_err(|e| invalid(format!("bad end date: {}", e)))?;

        Self::new(start, end)
    }

    pub fn nights(&self) -> u32 {
        (self.end - self.start).num_days().max(0) as u32
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start_str(), RANGE_SEPARATOR, self.end_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub dates: DateRange,
}

impl TripRequest {
    pub fn new(origin: &str, destination: &str, dates: DateRange) -> Result<Self> {
        validate_non_empty_string("origin", origin)?;
        validate_non_empty_string("destination", destination)?;
        Ok(Self {
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            dates,
        })
    }

    /// Builds a request from the raw text of the three form fields.
    pub fn from_inputs(origin: &str, destination: &str, dates: &str) -> Result<Self> {
        validate_non_empty_string("dates", dates)?;
        Self::new(origin, destination, DateRange::parse(dates)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportOption {
    pub mode: String,
    pub price: String,
    pub price_value: Option<f64>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOption {
    pub name: String,
    pub price: String,
    pub price_value: Option<f64>,
    pub rating: String,
    pub rating_value: Option<f64>,
    pub link: String,
}

impl HotelOption {
    /// Rating per unit of price; `None` when there is no usable price.
    pub fn value_score(&self) -> Option<f64> {
        let price = self.price_value.filter(|p| *p > 0.0)?;
        Some(self.rating_value.unwrap_or(0.0) / price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub date: NaiveDate,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub transport: Option<f64>,
    pub lodging: Option<f64>,
    pub total: f64,
    pub nights: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub request: TripRequest,
    pub transports: Vec<TransportOption>,
    pub hotels: Vec<HotelOption>,
    pub attractions: Vec<String>,
    pub itinerary: Vec<DayPlan>,
    pub estimate: Option<CostEstimate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Transport,
    Hotels,
    Attractions,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Transport => "transport",
            SourceKind::Hotels => "hotels",
            SourceKind::Attractions => "attractions",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fetched page. `body` is `None` when the fetch failed and a warning was logged.
#[derive(Debug, Clone)]
pub struct SourcePage {
    pub kind: SourceKind,
    pub url: String,
    pub body: Option<String>,
}
