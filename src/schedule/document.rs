//! Serde model of the upstream league schedule feed.
//!
//! The feed groups games by month:
//! ```text
//!  { "lscd": [ { "mscd": { "mon": "October", "g": [ { "gid", "gdtutc", "h": {..}, "v": {..} } ] } } ] }
//! ```
//! Only the fields the index needs are modelled; everything else in the
//! feed is ignored. A missing required field fails the whole document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// Month groups, in feed order
    pub lscd: Vec<MonthGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGroup {
    pub mscd: MonthSchedule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSchedule {
    /// Month label, e.g. "October"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<String>,
    /// Game records for this month
    pub g: Vec<GameRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game identifier, e.g. "0022300061"
    pub gid: String,
    /// Scheduled UTC date ("2023-10-24") or date-time
    pub gdtutc: String,
    /// Home team
    pub h: TeamRef,
    /// Visiting team
    pub v: TeamRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    /// Team nickname, e.g. "Lakers"
    pub tn: String,
}
