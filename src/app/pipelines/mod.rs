pub mod trip_pipeline;
