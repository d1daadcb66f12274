//! Choosing which player moves first.
//!
//! This is the only source of randomness in a game. It sits behind a trait so
//! tests can pin the outcome.

use crate::Seat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks the seat that opens a game.
pub trait StarterPicker {
    /// Returns the seat that makes the first move.
    fn pick(&mut self) -> Seat;
}

/// Uniform coin flip between the two seats.
#[derive(Debug, Clone)]
pub struct RandomStarter<R> {
    rng: R,
}

impl<R: Rng> RandomStarter<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStarter<StdRng> {
    /// Coin flip seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible coin flip.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StarterPicker for RandomStarter<R> {
    fn pick(&mut self) -> Seat {
        let seat = if self.rng.gen_bool(0.5) {
            Seat::First
        } else {
            Seat::Second
        };
        debug!(?seat, "Picked starting seat");
        seat
    }
}

/// Always starts from the same seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStarter(pub Seat);

impl StarterPicker for FixedStarter {
    fn pick(&mut self) -> Seat {
        self.0
    }
}

/// Cycles through a fixed sequence of seats, repeating it forever.
#[derive(Debug, Clone)]
pub struct ScriptedStarter {
    seats: Vec<Seat>,
    next: usize,
}

impl ScriptedStarter {
    /// Creates a picker replaying `seats` in order.
    ///
    /// An empty script always picks [`Seat::First`].
    pub fn new(seats: Vec<Seat>) -> Self {
        Self { seats, next: 0 }
    }
}

impl StarterPicker for ScriptedStarter {
    fn pick(&mut self) -> Seat {
        if self.seats.is_empty() {
            return Seat::First;
        }
        let seat = self.seats[self.next % self.seats.len()];
        self.next += 1;
        seat
    }
}
