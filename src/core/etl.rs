use crate::core::Pipeline;
use crate::domain::model::TripPlan;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: TripPlan,
    pub output_path: String,
}

/// Runs a pipeline's fetch, parse and render phases in order.
pub struct PlannerEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PlannerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<PlanOutcome> {
        tracing::info!("🧭 Fetching travel sites...");
        let pages = self.pipeline.extract().await?;
        let fetched = pages.iter().filter(|p| p.body.is_some()).count();
        tracing::info!("Fetched {}/{} pages", fetched, pages.len());
        self.monitor.log_stats("Fetch");

        tracing::info!("🔎 Extracting options...");
        let plan = self.pipeline.transform(pages).await?;
        tracing::info!(
            "Found {} transport options, {} hotels, {} attractions",
            plan.transports.len(),
            plan.hotels.len(),
            plan.attractions.len()
        );
        self.monitor.log_stats("Parse");

        tracing::info!("📝 Writing trip plan...");
        let output_path = self.pipeline.load(&plan).await?;
        self.monitor.log_stats("Render");
        self.monitor.log_final_stats();

        Ok(PlanOutcome { plan, output_path })
    }
}
