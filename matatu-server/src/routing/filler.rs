//! Plausible filler data for gaps in provider responses.
//!
//! The provider rarely knows matatu route codes, frequencies or stop
//! counts, so we make them up from small fixed pools. The random source is
//! injectable: production draws from entropy, tests use a seed.

use chrono::{Duration, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::ALTERNATIVE_STAGES;

/// Route codes that look like real Nairobi matatu routes.
pub const ROUTE_CODES: [&str; 10] = [
    "14", "46", "33A", "11C", "23", "58", "105", "125", "111", "102",
];

/// Service frequency labels.
pub const FREQUENCIES: [&str; 4] = ["Every 5 min", "Every 10 min", "Every 15 min", "Every 20 min"];

/// Source of randomized filler values.
pub struct Filler<R> {
    rng: R,
    now: NaiveTime,
}

impl Filler<StdRng> {
    /// Non-reproducible filler, seeded from the thread RNG.
    pub fn from_entropy(now: NaiveTime) -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()), now)
    }

    /// Reproducible filler for tests.
    pub fn seeded(seed: u64, now: NaiveTime) -> Self {
        Self::new(StdRng::seed_from_u64(seed), now)
    }
}

impl<R: Rng> Filler<R> {
    /// `now` is the wall-clock time synthesized departures start from.
    pub fn new(rng: R, now: NaiveTime) -> Self {
        Self { rng, now }
    }

    fn pick<'p>(&mut self, pool: &[&'p str]) -> &'p str {
        pool[self.rng.random_range(0..pool.len())]
    }

    /// A random route code from [`ROUTE_CODES`].
    pub fn route_code(&mut self) -> String {
        self.pick(&ROUTE_CODES).to_string()
    }

    /// A random label from [`FREQUENCIES`].
    pub fn frequency(&mut self) -> String {
        self.pick(&FREQUENCIES).to_string()
    }

    /// A stop count in `[5, 20)`.
    pub fn stop_count(&mut self) -> u32 {
        self.rng.random_range(5..20)
    }

    /// Departure clock: now, as `HH:MM`.
    pub fn departure_time(&self) -> String {
        self.now.format("%H:%M").to_string()
    }

    /// Arrival clock: 15 to 44 minutes from now, as `HH:MM`.
    ///
    /// Wraps past midnight.
    pub fn arrival_time(&mut self) -> String {
        let minutes = self.rng.random_range(15..45);
        (self.now + Duration::minutes(minutes))
            .format("%H:%M")
            .to_string()
    }

    /// Stage label for an alternative itinerary.
    ///
    /// The location is currently ignored; the label is sampled from
    /// [`ALTERNATIVE_STAGES`].
    pub fn alternative_stage(&mut self, _location: &str) -> String {
        self.pick(&ALTERNATIVE_STAGES).to_string()
    }
}
