use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::source::ScheduleSource;

/// Public NBA full-season schedule feed (2023-24 regular season).
pub const DEFAULT_SCHEDULE_URL: &str =
    "https://data.nba.com/data/10s/v2015/json/mobile_teams/nba/2023/league/00_full_schedule_week_tbds.json";

/// Schedule source backed by the data.nba.com mobile feed.
pub struct NbaScheduleClient {
    http: Client,
    url: String,
}

impl NbaScheduleClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(NbaScheduleClient {
            http,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ScheduleSource for NbaScheduleClient {
    fn name(&self) -> &str {
        "data.nba.com"
    }

    async fn fetch_schedule(&self) -> Result<serde_json::Value> {
        debug!("Fetching schedule from {}", self.url);

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .context("Schedule request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Schedule feed error {}: {}", status, body);
        }

        resp.json()
            .await
            .context("Failed to parse schedule response")
    }
}
