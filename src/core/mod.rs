pub mod fingerprint;
pub mod request;
pub mod tracker;

pub use crate::domain::model::{TrackOutcome, TrackState};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
