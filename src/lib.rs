pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::TrackerConfig;
pub use core::tracker::{track_download, track_download_detached, DownloadTracker};
pub use core::TrackOutcome;
pub use utils::error::{Result, TrackerError};
