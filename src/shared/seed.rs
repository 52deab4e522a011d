//! Fixed session data: the chart series and the plant facts shown on the cards.
//! Nothing here is ever written to; the simulator only owns [`Reading`].

use crate::shared::types::{HistoricalPoint, ImpactSummary, MonthlyPoint, PlantProfile, Reading};

pub const INITIAL_READING: Reading = Reading {
    power: 4.8,
    battery_level: 78.0,
    panel_temp: 42.0,
    efficiency: 94.3,
};

const fn hp(time: &'static str, power: f64, efficiency: f64) -> HistoricalPoint {
    HistoricalPoint {
        time,
        power,
        efficiency,
    }
}

const fn mp(month: &'static str, energy: f64) -> MonthlyPoint {
    MonthlyPoint { month, energy }
}

static INTRADAY: [HistoricalPoint; 8] = [
    hp("06:00", 1.2, 78.0),
    hp("08:00", 2.8, 85.0),
    hp("10:00", 4.2, 92.0),
    hp("12:00", 5.8, 96.0),
    hp("14:00", 5.4, 95.0),
    hp("16:00", 4.1, 91.0),
    hp("18:00", 2.3, 82.0),
    hp("20:00", 0.5, 65.0),
];

static MONTHLY: [MonthlyPoint; 6] = [
    mp("Jan", 320.0),
    mp("Feb", 380.0),
    mp("Mar", 450.0),
    mp("Apr", 520.0),
    mp("May", 580.0),
    mp("Jun", 620.0),
];

/// Today's generation, every two hours from 06:00 to 20:00.
pub fn intraday_series() -> &'static [HistoricalPoint] {
    &INTRADAY
}

pub fn monthly_series() -> &'static [MonthlyPoint] {
    &MONTHLY
}

pub const PLANT: PlantProfile = PlantProfile {
    total_panels: 2_840,
    active_panels: 2_835,
    capacity_mw: 6.0,
    array_hectares: 3.2,
    battery_capacity_mwh: 50.0,
};

pub const TODAYS_IMPACT: ImpactSummary = ImpactSummary {
    energy_generated_mwh: 87.4,
    recs_earned: 34.4,
    co2_avoided_tons: 54.6,
    homes_powered: 14_568,
    cost_savings_usd: 8_740,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::simulator::{BATTERY, EFFICIENCY, PANEL_TEMP, POWER};

    #[test]
    fn series_have_expected_shape() {
        assert_eq!(intraday_series().len(), 8);
        assert_eq!(monthly_series().len(), 6);
        assert_eq!(intraday_series()[0].time, "06:00");
        assert_eq!(intraday_series()[7].time, "20:00");
        assert_eq!(monthly_series()[5], MonthlyPoint { month: "Jun", energy: 620.0 });
    }

    #[test]
    fn series_are_stable_between_reads() {
        let first: Vec<_> = intraday_series().to_vec();
        let second: Vec<_> = intraday_series().to_vec();
        assert_eq!(first, second);
        assert!(std::ptr::eq(monthly_series(), monthly_series()));
    }

    #[test]
    fn initial_reading_is_in_range() {
        assert!(POWER.contains(INITIAL_READING.power));
        assert!(BATTERY.contains(INITIAL_READING.battery_level));
        assert!(PANEL_TEMP.contains(INITIAL_READING.panel_temp));
        assert!(EFFICIENCY.contains(INITIAL_READING.efficiency));
    }

    #[test]
    fn active_panels_never_exceed_total() {
        assert!(PLANT.active_panels <= PLANT.total_panels);
    }
}
