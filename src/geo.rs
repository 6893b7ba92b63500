use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Region, Result};

const IPINFO_ENDPOINT: &str = "https://ipinfo.io/json";

#[derive(Debug, Deserialize)]
struct IpInfo {
    region: Option<String>,
}

/// Best-effort region lookup from the caller's public IP. Nothing downstream
/// depends on it; any failure just means no pre-selected region.
pub struct IpLocator {
    client: Client,
}

impl IpLocator {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// The detected region, when the lookup succeeds and the answer is one
    /// of the selectable labels.
    pub async fn detect_region(&self) -> Option<Region> {
        let info: IpInfo = self
            .client
            .get(IPINFO_ENDPOINT)
            .send()
            .await
            .ok()?
            .json()
            .await
            .ok()?;

        let label = info.region?;
        let region = Region::parse(&label);
        if region.is_none() {
            debug!("Detected region '{}' is not a selectable label", label);
        }
        region
    }
}
