use crate::utils::error::Result;
use url::Url;

/// Query parameter names and values understood by the attribution endpoint.
mod key {
    pub const HASHED_DEVICE_ID: &str = "hid";
    pub const APP_ID: &str = "appid";
    pub const ADVERTISING_ID: &str = "gaid";
    pub const ACTION: &str = "action";
    pub const ACTION_DOWNLOAD: &str = "dl";
}

/// Builds the full tracking URL for one download report.
pub fn track_url(
    endpoint: &str,
    app_id: &str,
    hashed_device_id: &str,
    advertising_id: Option<&str>,
) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(key::HASHED_DEVICE_ID, hashed_device_id);
        pairs.append_pair(key::APP_ID, app_id);
        pairs.append_pair(key::ACTION, key::ACTION_DOWNLOAD);
        if let Some(gaid) = advertising_id {
            pairs.append_pair(key::ADVERTISING_ID, gaid);
        }
    }

    Ok(url)
}
