use dioxus::prelude::*;

use crate::layout::LayoutParams;
use crate::shared::seed::TODAYS_IMPACT;
use crate::utils::format::{format_fixed, format_thousands, format_usd};

#[allow(non_snake_case)]
#[component]
pub fn ImpactCard(layout: LayoutParams) -> Element {
    let title_px = if layout.is_mobile() { 16 } else { 18 };
    let value_px = if layout.is_mobile() { 18 } else { 24 };
    let grid_style = format!("grid-template-columns:repeat({}, minmax(0, 1fr))", layout.impact_columns);
    let impact = TODAYS_IMPACT;
    let tiles = [
        ("Energy Generated", format!("{} MWh", format_fixed(impact.energy_generated_mwh, 1))),
        ("RECs Earned", format!("{} RECs", format_fixed(impact.recs_earned, 1))),
        ("CO₂ Avoided", format!("{} tons", format_fixed(impact.co2_avoided_tons, 1))),
        ("Homes Powered", format_thousands(impact.homes_powered)),
        ("Cost Savings", format_usd(impact.cost_savings_usd)),
    ];
    let last = tiles.len() - 1;
    // The odd tile out spans the full 2-wide mobile grid
    let wide = layout.impact_columns == 2;

    rsx! {
        div { class: "card card--grow", style: "{layout.card_style()}",
            h3 { class: "card-title", style: "font-size:{title_px}px", "Today's Impact" }
            div { class: "impact-grid", style: "{grid_style}",
                for (i, (label, value)) in tiles.into_iter().enumerate() {
                    div {
                        key: "{label}",
                        class: "impact-tile",
                        style: if wide && i == last { "grid-column:span 2" } else { "" },
                        p { class: "impact-label", "{label}" }
                        p { class: "impact-value", style: "font-size:{value_px}px", "{value}" }
                    }
                }
            }
        }
    }
}
