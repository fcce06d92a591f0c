use thiserror::Error;

/// Failures while turning the upstream schedule document into an index.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The document does not have the expected `lscd[].mscd.g[]` shape.
    #[error("malformed schedule document: {0}")]
    DataFormat(#[from] serde_json::Error),
}

/// Outcomes of a reservation attempt that did not produce a seat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("No seats available for the requested game.")]
    SeatUnavailable { game_id: String },
}

impl ReservationError {
    pub fn game_id(&self) -> &str {
        match self {
            ReservationError::SeatUnavailable { game_id } => game_id,
        }
    }
}
