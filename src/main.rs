use clap::Parser;
use download_tracker::utils::{logger, validation::Validate};
use download_tracker::{CliConfig, DownloadTracker, LocalStorage, TrackOutcome};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting download-tracker CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let app_id = cli.app_id.clone();
    let config = match cli.into_tracker_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.state_path.as_str());
    let tracker = DownloadTracker::new(storage, config);

    match tracker.track(&app_id).await {
        Ok(TrackOutcome::Reported) => {
            tracing::info!("Download reported for app {}", app_id);
            println!("Download reported for app {}", app_id);
        }
        Ok(TrackOutcome::AlreadyReported) => {
            tracing::info!("Download already reported for app {}", app_id);
            println!("Download already reported for app {}; nothing sent", app_id);
        }
        Err(e) => {
            tracing::error!("Download tracking failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
