use anyhow::Result;
use async_trait::async_trait;

/// Trait that every upstream schedule feed must implement.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch the full season schedule as a raw JSON document.
    async fn fetch_schedule(&self) -> Result<serde_json::Value>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
