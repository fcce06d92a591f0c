//! Immutable date → games index built once from the upstream feed.
//!
//! The index is constructed at startup and shared read-only between
//! request handlers, so lookups need no locking.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::document::{GameRecord, ScheduleDocument};
use crate::error::ScheduleError;

/// One scheduled game as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    #[serde(rename = "id")]
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
}

impl From<&GameRecord> for GameSummary {
    fn from(record: &GameRecord) -> Self {
        GameSummary {
            game_id: record.gid.clone(),
            home_team: record.h.tn.clone(),
            away_team: record.v.tn.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleIndex {
    /// ISO date key → games in feed order. Every present key is non-empty.
    by_date: HashMap<String, Vec<GameSummary>>,
}

impl ScheduleIndex {
    /// Build the index from the raw upstream JSON document.
    ///
    /// Fails as a whole if any month group or game record is missing a
    /// required field; no partial index is ever returned.
    pub fn build(raw: &serde_json::Value) -> Result<Self, ScheduleError> {
        let document = ScheduleDocument::deserialize(raw)?;
        Ok(Self::from_document(&document))
    }

    pub fn from_document(document: &ScheduleDocument) -> Self {
        let mut by_date: HashMap<String, Vec<GameSummary>> = HashMap::new();

        for month in &document.lscd {
            for record in &month.mscd.g {
                by_date
                    .entry(date_key(&record.gdtutc))
                    .or_default()
                    .push(GameSummary::from(record));
            }
        }

        let index = ScheduleIndex { by_date };
        debug!(
            "ScheduleIndex: {} dates, {} games",
            index.dates(),
            index.total_games()
        );
        index
    }

    /// Games scheduled on `date` (ISO `YYYY-MM-DD`), empty when none.
    pub fn games_on(&self, date: &str) -> &[GameSummary] {
        self.by_date.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Convenience lookup for an already-parsed calendar date.
    pub fn games_on_date(&self, date: NaiveDate) -> &[GameSummary] {
        self.games_on(&date.format("%Y-%m-%d").to_string())
    }

    /// Number of distinct dates with at least one game.
    pub fn dates(&self) -> usize {
        self.by_date.len()
    }

    pub fn total_games(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Derive the lookup key for a game's scheduled UTC date.
///
/// Plain dates are used verbatim; UTC date-times are truncated to their
/// date. Anything unrecognised is kept as an opaque key.
fn date_key(raw: &str) -> String {
    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
