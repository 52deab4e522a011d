use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::layout::LayoutParams;
use crate::shared::seed::PLANT;
use crate::shared::types::Reading;
use crate::utils::format::format_fixed;

#[allow(non_snake_case)]
#[component]
pub fn BatteryCard(reading: Reading, layout: LayoutParams) -> Element {
    let (label_px, _) = layout.text_px();
    let title_px = if layout.is_mobile() { 16 } else { 18 };
    let level_px = if layout.is_mobile() { 30 } else { 36 };
    let cell_style = format!("height:{}px", layout.battery_height_px);
    let fill_style = format!("height:{}%", format_fixed(reading.battery_level, 2));
    let level = format_fixed(reading.battery_level, 0);
    let capacity = format_fixed(PLANT.battery_capacity_mwh, 0);
    let stored = format_fixed(reading.stored_energy_mwh(PLANT.battery_capacity_mwh), 1);

    rsx! {
        div { class: "card", style: "{layout.card_style()}",
            div { class: "card-row",
                h3 { class: "card-title", style: "font-size:{title_px}px", "Battery Storage" }
                Icon { glyph: Glyph::Battery, size: 24, color: "#8ACE47".to_string() }
            }
            div { class: "battery-cell", style: "{cell_style}",
                div { class: "battery-fill", style: "{fill_style}",
                    div { class: "battery-shimmer" }
                }
                div { class: "battery-level",
                    span { style: "font-size:{level_px}px", "{level}%" }
                }
            }
            div { class: "facts",
                div { class: "fact", style: "font-size:{label_px}px",
                    span { class: "fact-label", "Capacity" }
                    span { class: "fact-value", "{capacity} MWh" }
                }
                div { class: "fact", style: "font-size:{label_px}px",
                    span { class: "fact-label", "Stored" }
                    span { class: "fact-value", "{stored} MWh" }
                }
            }
        }
    }
}
