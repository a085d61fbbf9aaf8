pub mod estimate;
pub mod etl;
pub mod itinerary;
pub mod planner;
pub mod price;
pub mod rank;
pub mod render;
pub mod scrape;

pub use crate::domain::model::{SourcePage, TripPlan};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
