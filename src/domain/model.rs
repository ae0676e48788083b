use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a tracking attempt, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// The endpoint accepted the report and the marker was persisted.
    Reported,
    /// A marker for this app ID already exists; no request was sent.
    AlreadyReported,
}

/// Persisted per-app marker that suppresses repeat reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackState {
    pub tracked: bool,
    pub tracked_at: Option<DateTime<Utc>>,
}

impl TrackState {
    pub fn reported_now() -> Self {
        Self {
            tracked: true,
            tracked_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_state_roundtrip() {
        let state = TrackState::reported_now();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: TrackState = serde_json::from_str(&json).unwrap();
        assert!(parsed.tracked);
        assert!(parsed.tracked_at.is_some());
    }

    #[test]
    fn test_track_state_tolerates_missing_timestamp() {
        let parsed: TrackState = serde_json::from_str(r#"{"tracked":true,"tracked_at":null}"#).unwrap();
        assert!(parsed.tracked);
        assert!(parsed.tracked_at.is_none());
    }
}
