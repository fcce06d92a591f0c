pub mod decision;
pub mod service;

pub use decision::{RandomDecider, DEFAULT_GRANT_PROBABILITY};
pub use service::{ReservationResult, SeatReservationService};
