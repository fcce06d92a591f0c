//! Grant/deny decisions for seat requests.
//!
//! There is no seat inventory behind these decisions: each call is an
//! independent trial with no memory of earlier calls for the same game.

use rand::Rng;

/// Probability that a seat request is granted by the default decider.
pub const DEFAULT_GRANT_PROBABILITY: f64 = 0.5;

/// Decides whether a seat can be granted for a game.
pub trait SeatDecider: Send + Sync {
    fn decide(&self, game_id: &str) -> bool;
}

/// Bernoulli decider: grants with a fixed probability, independently per call.
#[derive(Debug, Clone, Copy)]
pub struct RandomDecider {
    grant_probability: f64,
}

impl RandomDecider {
    /// `grant_probability` is clamped to `[0, 1]`.
    pub fn new(grant_probability: f64) -> Self {
        let grant_probability = if grant_probability.is_nan() {
            0.0
        } else {
            grant_probability.clamp(0.0, 1.0)
        };
        RandomDecider { grant_probability }
    }

    pub fn grant_probability(&self) -> f64 {
        self.grant_probability
    }
}

impl Default for RandomDecider {
    fn default() -> Self {
        RandomDecider::new(DEFAULT_GRANT_PROBABILITY)
    }
}

impl SeatDecider for RandomDecider {
    fn decide(&self, _game_id: &str) -> bool {
        rand::thread_rng().gen_bool(self.grant_probability)
    }
}
