use rand::{rngs::StdRng, SeedableRng};

use crate::shared::types::Reading;
use crate::telemetry::simulator::next_reading;

/// Live simulator state owned by the dashboard view.
///
/// The feed is only advanced by the ticker; once stopped, every further
/// tick is ignored so a timer that fires late after teardown cannot move
/// the reading.
#[derive(Debug)]
pub struct TelemetryFeed {
    reading: Reading,
    rng: StdRng,
    ticks: u64,
    live: bool,
}

impl TelemetryFeed {
    pub fn new(initial: Reading, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            reading: initial,
            rng,
            ticks: 0,
            live: true,
        }
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Advance one step. Returns the new reading, or `None` once stopped.
    pub fn tick(&mut self) -> Option<Reading> {
        if !self.live {
            return None;
        }
        self.reading = next_reading(&self.reading, &mut self.rng);
        debug_assert!(self.reading.is_in_range());
        self.ticks += 1;
        Some(self.reading)
    }

    pub fn stop(&mut self) {
        self.live = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::seed::{intraday_series, monthly_series, INITIAL_READING};

    #[test]
    fn tick_advances_and_counts() {
        let mut feed = TelemetryFeed::new(INITIAL_READING, Some(3));
        assert_eq!(feed.ticks(), 0);
        assert_eq!(feed.reading(), INITIAL_READING);
        let r = feed.tick();
        assert_eq!(feed.ticks(), 1);
        assert_eq!(r, Some(feed.reading()));
        assert!(feed.reading().is_in_range());
    }

    #[test]
    fn stop_freezes_the_reading() {
        let mut feed = TelemetryFeed::new(INITIAL_READING, Some(9));
        for _ in 0..5 {
            feed.tick();
        }
        feed.stop();
        let frozen = feed.reading();
        for _ in 0..100 {
            assert_eq!(feed.tick(), None);
        }
        assert!(!feed.is_live());
        assert_eq!(feed.reading(), frozen);
        assert_eq!(feed.ticks(), 5);
    }

    #[test]
    fn same_seed_same_walk() {
        let mut a = TelemetryFeed::new(INITIAL_READING, Some(11));
        let mut b = TelemetryFeed::new(INITIAL_READING, Some(11));
        for _ in 0..50 {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn ticks_do_not_touch_seed_series() {
        let before = (intraday_series().to_vec(), monthly_series().to_vec());
        let mut feed = TelemetryFeed::new(INITIAL_READING, Some(5));
        for _ in 0..20 {
            feed.tick();
        }
        assert_eq!(before.0, intraday_series());
        assert_eq!(before.1, monthly_series());
    }
}
