use rand::Rng;

use crate::shared::types::{Reading, Weather};

/// Closed range a metric is clamped to, plus the width of its per-tick jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
    /// Full width of the uniform delta: each tick adds `(u - 0.5) * jitter`.
    pub jitter: f64,
}

impl MetricBounds {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamp into range; anything non-finite collapses to the lower bound.
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_finite() {
            v.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    fn step<R: Rng + ?Sized>(&self, prev: f64, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        self.clamp(prev + (u - 0.5) * self.jitter)
    }
}

pub const POWER: MetricBounds = MetricBounds {
    min: 0.0,
    max: 6.0,
    jitter: 0.3,
};
pub const BATTERY: MetricBounds = MetricBounds {
    min: 20.0,
    max: 100.0,
    jitter: 1.5,
};
pub const PANEL_TEMP: MetricBounds = MetricBounds {
    min: 25.0,
    max: 55.0,
    jitter: 2.0,
};
pub const EFFICIENCY: MetricBounds = MetricBounds {
    min: 85.0,
    max: 98.0,
    jitter: 0.5,
};

/// One random-walk step. Fields are drawn in declaration order so a seeded
/// rng replays the same walk.
pub fn next_reading<R: Rng + ?Sized>(prev: &Reading, rng: &mut R) -> Reading {
    Reading {
        power: POWER.step(prev.power, rng),
        battery_level: BATTERY.step(prev.battery_level, rng),
        panel_temp: PANEL_TEMP.step(prev.panel_temp, rng),
        efficiency: EFFICIENCY.step(prev.efficiency, rng),
    }
}

impl Weather {
    pub fn from_power(power: f64) -> Self {
        if power > 4.5 {
            Weather::Sunny
        } else if power > 2.5 {
            Weather::PartlyCloudy
        } else {
            Weather::Cloudy
        }
    }
}

impl Reading {
    pub fn weather(&self) -> Weather {
        Weather::from_power(self.power)
    }

    /// Temperature bar fill, scaled against the 55 °C ceiling.
    pub fn temp_fill_percent(&self) -> f64 {
        (self.panel_temp / PANEL_TEMP.max * 100.0).clamp(0.0, 100.0)
    }

    pub fn efficiency_fill_percent(&self) -> f64 {
        self.efficiency.clamp(0.0, 100.0)
    }

    pub fn stored_energy_mwh(&self, capacity_mwh: f64) -> f64 {
        capacity_mwh * self.battery_level / 100.0
    }

    pub fn is_in_range(&self) -> bool {
        POWER.contains(self.power)
            && BATTERY.contains(self.battery_level)
            && PANEL_TEMP.contains(self.panel_temp)
            && EFFICIENCY.contains(self.efficiency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::seed::INITIAL_READING;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    /// Returns the same word forever; drives `gen::<f64>()` to either extreme.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }
        fn next_u64(&mut self) -> u64 {
            self.0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for (i, b) in dest.iter_mut().enumerate() {
                *b = self.0.to_le_bytes()[i % 8];
            }
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn weather_thresholds() {
        assert_eq!(Weather::from_power(5.0), Weather::Sunny);
        assert_eq!(Weather::from_power(3.0), Weather::PartlyCloudy);
        assert_eq!(Weather::from_power(1.0), Weather::Cloudy);
        assert_eq!(Weather::from_power(5.0).slug(), "sunny");
        assert_eq!(Weather::from_power(3.0).slug(), "partly-cloudy");
        assert_eq!(Weather::from_power(1.0).slug(), "cloudy");
    }

    #[test]
    fn weather_boundaries_are_exclusive() {
        assert_eq!(Weather::from_power(4.5), Weather::PartlyCloudy);
        assert_eq!(Weather::from_power(2.5), Weather::Cloudy);
        assert_eq!(Weather::from_power(0.0), Weather::Cloudy);
        assert_eq!(Weather::from_power(6.0), Weather::Sunny);
    }

    #[test]
    fn step_moves_by_at_most_half_the_jitter() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut prev = INITIAL_READING;
        for _ in 0..500 {
            let next = next_reading(&prev, &mut rng);
            assert!((next.power - prev.power).abs() <= POWER.jitter / 2.0 + 1e-12);
            assert!((next.battery_level - prev.battery_level).abs() <= BATTERY.jitter / 2.0 + 1e-12);
            assert!((next.panel_temp - prev.panel_temp).abs() <= PANEL_TEMP.jitter / 2.0 + 1e-12);
            assert!((next.efficiency - prev.efficiency).abs() <= EFFICIENCY.jitter / 2.0 + 1e-12);
            prev = next;
        }
    }

    #[test]
    fn long_runs_stay_finite_and_in_range() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut r = INITIAL_READING;
            for _ in 0..2_000 {
                r = next_reading(&r, &mut rng);
                assert!(r.power.is_finite() && r.efficiency.is_finite());
                assert!(r.is_in_range(), "seed {seed} escaped range: {r:?}");
            }
        }
    }

    #[test]
    fn extreme_draws_pin_to_bounds() {
        let mut high = FixedRng(u64::MAX);
        let mut low = FixedRng(0);
        let mut up = INITIAL_READING;
        let mut down = INITIAL_READING;
        for _ in 0..1_000 {
            up = next_reading(&up, &mut high);
            down = next_reading(&down, &mut low);
        }
        assert!(up.is_in_range() && down.is_in_range());
        assert_eq!(up.battery_level, BATTERY.max);
        assert_eq!(up.power, POWER.max);
        assert_eq!(down.panel_temp, PANEL_TEMP.min);
        assert_eq!(down.efficiency, EFFICIENCY.min);
    }

    #[test]
    fn seeded_walk_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let ra = next_reading(&INITIAL_READING, &mut a);
        let rb = next_reading(&INITIAL_READING, &mut b);
        assert_eq!(ra, rb);
    }

    #[test]
    fn out_of_range_input_is_pulled_back() {
        let broken = Reading {
            power: f64::NAN,
            battery_level: 140.0,
            panel_temp: -10.0,
            efficiency: f64::INFINITY,
        };
        let next = next_reading(&broken, &mut StdRng::seed_from_u64(1));
        assert!(next.is_in_range());
        assert_eq!(next.power, POWER.min);
        assert_eq!(next.efficiency, EFFICIENCY.min);
    }

    #[test]
    fn derived_values() {
        let r = Reading {
            power: 3.0,
            battery_level: 80.0,
            panel_temp: 27.5,
            efficiency: 90.0,
        };
        assert!((r.temp_fill_percent() - 50.0).abs() < 1e-9);
        assert!((r.stored_energy_mwh(50.0) - 40.0).abs() < 1e-9);
        assert_eq!(r.weather(), Weather::PartlyCloudy);
    }

    #[test]
    fn efficiency_bar_tracks_the_percentage() {
        let mut r = INITIAL_READING;
        assert!((r.efficiency_fill_percent() - 94.3).abs() < 1e-9);
        r.efficiency = EFFICIENCY.min;
        assert!((r.efficiency_fill_percent() - 85.0).abs() < 1e-9);
        r.efficiency = 130.0;
        assert_eq!(r.efficiency_fill_percent(), 100.0);
    }
}
