pub use crate::app::pipelines::trip_pipeline::TripPipeline;
