use clap::Parser;
use voyage_planner::adapters::http::source_url;
use voyage_planner::core::render::render_markdown;
use voyage_planner::core::ConfigProvider;
use voyage_planner::domain::model::{SourceKind, TripRequest};
use voyage_planner::utils::error::ErrorSeverity;
use voyage_planner::utils::{logger, validation::Validate};
use voyage_planner::{LocalStorage, PlannerEngine, TomlConfig, TripPipeline};

#[derive(Parser)]
#[command(name = "toml-plan")]
#[command(about = "Trip planner driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "voyage.toml")]
    config: String,

    /// Starting location
    #[arg(long)]
    from: String,

    /// Destination
    #[arg(long)]
    to: String,

    /// Date range, e.g. "2025-08-01 to 2025-08-07"
    #[arg(long)]
    dates: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show the requests that would be made without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based trip planner");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    let request = match config
        .validate()
        .and_then(|_| TripRequest::from_inputs(&args.from, &args.to, &args.dates))
    {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("❌ Validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    display_config_summary(&config, &request, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No requests will be sent");
        perform_dry_run(&config, &request)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = TripPipeline::new(storage, config, request)?;
    let engine = PlannerEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            println!("{}", render_markdown(&outcome.plan));
            tracing::info!("📁 Output saved to: {}", outcome.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Trip planning failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, request: &TripRequest, args: &Args) {
    eprintln!("📋 Configuration Summary:");
    eprintln!("  Planner: {}", config.planner.name);
    if let Some(description) = &config.planner.description {
        eprintln!("  Description: {}", description);
    }
    eprintln!(
        "  Trip: {} → {} ({})",
        request.origin, request.destination, request.dates
    );
    eprintln!("  Output: {}", config.output_path());
    eprintln!("  Formats: {}", config.output_formats().join(", "));
    eprintln!("  Top N: {}", config.top_n());

    if !config.fallback.is_empty() {
        eprintln!("  Fallback cities: {}", config.fallback.len());
    }

    if args.dry_run {
        eprintln!("  🔍 DRY RUN MODE ENABLED");
    }

    eprintln!();
}

fn perform_dry_run(config: &TomlConfig, request: &TripRequest) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📡 Requests (User-Agent: {}):", config.user_agent());

    for (kind, base) in [
        (SourceKind::Transport, config.transport_base_url()),
        (SourceKind::Hotels, config.hotels_base_url()),
        (SourceKind::Attractions, config.attractions_base_url()),
    ] {
        println!("  {}: {}", kind, source_url(kind, base, request)?);
    }

    println!();
    println!("🗓️ Itinerary length: {} days", request.dates.nights());
    println!("✅ Dry run analysis complete.");
    Ok(())
}
