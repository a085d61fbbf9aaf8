use crate::core::ConfigProvider;
use crate::domain::model::TripRequest;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_formats, validate_path, validate_positive_number, validate_range, validate_url,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "voyage-planner")]
#[command(about = "Plan a trip: best transport, hotels and a day-by-day itinerary")]
pub struct CliConfig {
    /// Starting location (e.g. "New York")
    #[arg(long)]
    pub from: String,

    /// Destination (e.g. "Paris")
    #[arg(long)]
    pub to: String,

    /// Date range, e.g. "2025-08-01 to 2025-08-07"
    #[arg(long)]
    pub dates: String,

    #[arg(long, default_value = super::DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long = "format", value_delimiter = ',', default_value = "markdown")]
    pub formats: Vec<String>,

    #[arg(long, default_value_t = super::DEFAULT_TOP_N)]
    pub top_n: usize,

    #[arg(long, default_value_t = super::DEFAULT_MAX_ATTRACTIONS)]
    pub max_attractions: usize,

    #[arg(long, default_value = super::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value_t = super::DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value = super::DEFAULT_TRANSPORT_URL)]
    pub transport_url: String,

    #[arg(long, default_value = super::DEFAULT_HOTELS_URL)]
    pub hotels_url: String,

    #[arg(long, default_value = super::DEFAULT_ATTRACTIONS_URL)]
    pub attractions_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process memory and timing per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn trip_request(&self) -> Result<TripRequest> {
        TripRequest::from_inputs(&self.from, &self.to, &self.dates)
    }
}

impl ConfigProvider for CliConfig {
    fn transport_base_url(&self) -> &str {
        &self.transport_url
    }

    fn hotels_base_url(&self) -> &str {
        &self.hotels_url
    }

    fn attractions_base_url(&self) -> &str {
        &self.attractions_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn max_attractions(&self) -> usize {
        self.max_attractions
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.trip_request()?;
        validate_url("transport_url", &self.transport_url)?;
        validate_url("hotels_url", &self.hotels_url)?;
        validate_url("attractions_url", &self.attractions_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_formats("format", &self.formats)?;
        validate_positive_number("top_n", self.top_n, 1)?;
        validate_positive_number("max_attractions", self.max_attractions, 1)?;
        validate_range(
            "timeout_seconds",
            self.timeout_seconds,
            1,
            super::MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}
