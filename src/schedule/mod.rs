pub mod client;
pub mod document;
pub mod index;
pub mod source;

pub use client::NbaScheduleClient;
pub use index::ScheduleIndex;
pub use source::ScheduleSource;

use anyhow::{Context, Result};
use tracing::info;

/// Fetch the schedule once from `source` and build the lookup index.
///
/// Any fetch or format failure is returned to the caller; there is no
/// retry and no partially built index.
pub async fn load_index(source: &dyn ScheduleSource) -> Result<ScheduleIndex> {
    let raw = source
        .fetch_schedule()
        .await
        .with_context(|| format!("Failed to fetch schedule from {}", source.name()))?;

    let index = ScheduleIndex::build(&raw)
        .with_context(|| format!("Unusable schedule document from {}", source.name()))?;

    info!(
        "Schedule loaded from {}: {} games across {} dates",
        source.name(),
        index.total_games(),
        index.dates()
    );
    Ok(index)
}
