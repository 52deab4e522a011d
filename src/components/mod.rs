pub mod battery_card;
pub mod header;
pub mod icons;
pub mod impact_card;
pub mod metric_cards;
pub mod monthly_bar_chart;
pub mod power_area_chart;

pub use battery_card::BatteryCard;
pub use header::DashboardHeader;
pub use impact_card::ImpactCard;
pub use metric_cards::{CurrentOutputCard, EfficiencyCard, PanelArrayCard, PanelTempCard};
pub use monthly_bar_chart::MonthlyBarChart;
pub use power_area_chart::PowerAreaChart;
