use clap::Parser;
use voyage_planner::core::render::render_markdown;
use voyage_planner::utils::error::{ErrorSeverity, PlannerError};
use voyage_planner::utils::{logger, validation::Validate};
use voyage_planner::{CliConfig, LocalStorage, PlannerEngine, TripPipeline};

fn exit_code(e: &PlannerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(e: &PlannerError) {
    tracing::error!(
        "❌ Trip planning failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting voyage-planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        report_failure(&e);
        std::process::exit(exit_code(&e).max(1));
    }

    let request = config.trip_request()?;
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TripPipeline::new(storage, config, request)?;
    let engine = PlannerEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            println!("{}", render_markdown(&outcome.plan));
            tracing::info!("✅ Trip plan ready");
            tracing::info!("📁 Output saved to: {}", outcome.output_path);
        }
        Err(e) => {
            report_failure(&e);
            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
