use clap::Parser;

use crate::reservation::DEFAULT_GRANT_PROBABILITY;
use crate::schedule::client::DEFAULT_SCHEDULE_URL;

/// NBA schedule lookup and seat reservation service
#[derive(Parser, Debug, Clone)]
#[command(name = "nba-schedule-server", version, about)]
pub struct Config {
    /// HTTP listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: String,

    /// URL of the full-season schedule feed, fetched once at startup
    #[arg(long, env = "SCHEDULE_URL", default_value = DEFAULT_SCHEDULE_URL)]
    pub schedule_url: String,

    /// Timeout for the upstream schedule request in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "10")]
    pub upstream_timeout_secs: u64,

    /// Probability (0.0–1.0) that a seat request is granted
    #[arg(
        long,
        env = "GRANT_PROBABILITY",
        default_value_t = DEFAULT_GRANT_PROBABILITY,
        allow_negative_numbers = true
    )]
    pub grant_probability: f64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.grant_probability) {
            anyhow::bail!("grant_probability must be between 0.0 and 1.0");
        }
        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("upstream_timeout_secs must be positive");
        }
        let url = url::Url::parse(&self.schedule_url)
            .map_err(|e| anyhow::anyhow!("schedule_url is not a valid URL: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("schedule_url must use http or https, got '{}'", url.scheme());
        }
        Ok(())
    }
}
