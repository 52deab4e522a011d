/// Snapshot of the simulated plant readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub power: f64, // MW
    pub battery_level: f64, // percent
    pub panel_temp: f64, // °C
    pub efficiency: f64, // percent
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub time: &'static str, // HH:MM
    pub power: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub energy: f64, // MWh
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Sunny,
    PartlyCloudy,
    Cloudy,
}

impl Weather {
    pub fn slug(self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::PartlyCloudy => "partly-cloudy",
            Weather::Cloudy => "cloudy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::PartlyCloudy => "Partly Cloudy",
            Weather::Cloudy => "Cloudy",
        }
    }
}

/// Layout tier derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewportMode {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantProfile {
    pub total_panels: u32,
    pub active_panels: u32,
    pub capacity_mw: f64,
    pub array_hectares: f64,
    pub battery_capacity_mwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSummary {
    pub energy_generated_mwh: f64,
    pub recs_earned: f64,
    pub co2_avoided_tons: f64,
    pub homes_powered: u32,
    pub cost_savings_usd: u32,
}
