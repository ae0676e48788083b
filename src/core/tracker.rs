use crate::adapters::LocalStorage;
use crate::core::{fingerprint, request, ConfigProvider, Storage, TrackOutcome, TrackState};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation;
use reqwest::Client;
use std::collections::HashMap;

/// File holding the persisted markers, one entry per app ID.
pub const STATE_FILE: &str = "tracked.json";

pub struct DownloadTracker<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> DownloadTracker<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    /// Reports one download for `app_id`, unless a marker for it already
    /// exists. The marker is written only after the endpoint responds with a
    /// success status, so a failed attempt is retried on the next call.
    pub async fn track(&self, app_id: &str) -> Result<TrackOutcome> {
        validation::validate_non_empty_string("app_id", app_id)?;

        if self.is_tracked(app_id).await {
            tracing::debug!("Download already reported for app {}", app_id);
            return Ok(TrackOutcome::AlreadyReported);
        }

        let hashed_id = fingerprint::hashed_device_id(self.config.device_id());
        let url = request::track_url(
            self.config.endpoint(),
            app_id,
            &hashed_id,
            self.config.advertising_id(),
        )?;

        tracing::debug!("Reporting download to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Tracking response status: {}", response.status());

        if !response.status().is_success() {
            return Err(TrackerError::EndpointRejectedError {
                status: response.status().as_u16(),
            });
        }

        self.mark_tracked(app_id).await?;
        Ok(TrackOutcome::Reported)
    }

    async fn is_tracked(&self, app_id: &str) -> bool {
        let data = match self.storage.read_file(STATE_FILE).await {
            Ok(data) => data,
            // No state yet means nothing has been reported
            Err(_) => return false,
        };

        match serde_json::from_slice::<HashMap<String, TrackState>>(&data) {
            Ok(state) => state.get(app_id).map(|s| s.tracked).unwrap_or(false),
            Err(e) => {
                tracing::warn!("Ignoring unreadable tracking state: {}", e);
                false
            }
        }
    }

    async fn mark_tracked(&self, app_id: &str) -> Result<()> {
        let mut state: HashMap<String, TrackState> = match self.storage.read_file(STATE_FILE).await
        {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };

        state.insert(app_id.to_string(), TrackState::reported_now());
        let data = serde_json::to_vec(&state)?;
        self.storage.write_file(STATE_FILE, &data).await
    }
}

/// Fire-and-forget entry point: reports the download and swallows every
/// failure, logging it instead. Tracking is a best-effort side channel; the
/// host application gets no way to observe a failed report.
pub async fn track_download<C: ConfigProvider>(config: C, app_id: &str) {
    let storage = LocalStorage::new(config.state_path());
    let tracker = DownloadTracker::new(storage, config);

    match tracker.track(app_id).await {
        Ok(TrackOutcome::Reported) => tracing::info!("Download reported for app {}", app_id),
        Ok(TrackOutcome::AlreadyReported) => {
            tracing::debug!("Download already reported for app {}", app_id)
        }
        Err(e) => tracing::warn!("Download tracking failed: {}", e),
    }
}

/// Same as [`track_download`] but runs on a spawned task so the caller's
/// main path never waits on network I/O.
pub fn track_download_detached<C: ConfigProvider + 'static>(
    config: C,
    app_id: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move { track_download(config, &app_id).await })
}
