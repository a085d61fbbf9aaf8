pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::storage::LocalStorage;
pub use core::{
    etl::{PlanOutcome, PlannerEngine},
    planner::TripPipeline,
};
pub use domain::model::{DateRange, TripPlan, TripRequest};
pub use utils::error::{PlannerError, Result};
