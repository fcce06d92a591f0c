use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::decision::SeatDecider;
use crate::error::ReservationError;

pub const RESERVED_MESSAGE: &str = "Seat reserved successfully.";

const SEAT_ROWS: u32 = 50;
const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Artifact produced for a granted seat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub game_id: String,
    /// e.g. "RES-3FA94C0B12D7"
    pub reservation_id: String,
    /// Row number followed by seat letter, e.g. "42A"
    pub seat_number: String,
}

impl Reservation {
    fn synthesize(game_id: &str) -> Self {
        let mut rng = rand::thread_rng();
        let reservation_id = format!("RES-{:012X}", rng.gen::<u64>() & 0xFFFF_FFFF_FFFF);
        let row = rng.gen_range(1..=SEAT_ROWS);
        let letter = SEAT_LETTERS[rng.gen_range(0..SEAT_LETTERS.len())];
        Reservation {
            game_id: game_id.to_string(),
            reservation_id,
            seat_number: format!("{}{}", row, letter),
        }
    }
}

/// Outcome of a reservation attempt as returned to callers.
///
/// `reservation_id` and `seat_number` are set iff `success` is true; the
/// only constructors are [`ReservationResult::granted`] and
/// [`ReservationResult::denied`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResult {
    pub success: bool,
    pub message: String,
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
}

impl ReservationResult {
    pub fn granted(reservation: Reservation) -> Self {
        ReservationResult {
            success: true,
            message: RESERVED_MESSAGE.to_string(),
            game_id: reservation.game_id,
            reservation_id: Some(reservation.reservation_id),
            seat_number: Some(reservation.seat_number),
        }
    }

    pub fn denied(err: &ReservationError) -> Self {
        ReservationResult {
            success: false,
            message: err.to_string(),
            game_id: err.game_id().to_string(),
            reservation_id: None,
            seat_number: None,
        }
    }
}

impl From<Result<Reservation, ReservationError>> for ReservationResult {
    fn from(outcome: Result<Reservation, ReservationError>) -> Self {
        match outcome {
            Ok(reservation) => ReservationResult::granted(reservation),
            Err(err) => ReservationResult::denied(&err),
        }
    }
}

/// Stateless seat reservation: one decision per call, nothing persisted.
///
/// The requested game is not checked against the schedule.
#[derive(Clone)]
pub struct SeatReservationService {
    decider: Arc<dyn SeatDecider>,
}

impl SeatReservationService {
    pub fn new(decider: Arc<dyn SeatDecider>) -> Self {
        SeatReservationService { decider }
    }

    pub fn reserve(&self, game_id: &str) -> Result<Reservation, ReservationError> {
        if !self.decider.decide(game_id) {
            info!("Seat request denied: game={}", game_id);
            return Err(ReservationError::SeatUnavailable {
                game_id: game_id.to_string(),
            });
        }

        let reservation = Reservation::synthesize(game_id);
        info!(
            "Seat reserved: game={}, reservation={}, seat={}",
            game_id, reservation.reservation_id, reservation.seat_number
        );
        Ok(reservation)
    }
}
