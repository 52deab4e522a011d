use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::layout::LayoutParams;
use crate::shared::seed::PLANT;
use crate::shared::types::Reading;
use crate::utils::format::{format_fixed, format_thousands};

/// Inline style for a left-column card; on the tablet sub-grid it also sets the span.
fn metric_card_style(layout: &LayoutParams, subgrid_span: u32) -> String {
    if layout.metrics_subgrid {
        format!("{};grid-column:span {subgrid_span}", layout.card_style())
    } else {
        layout.card_style()
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CurrentOutputCard(reading: Reading, layout: LayoutParams) -> Element {
    let style = metric_card_style(&layout, 3);
    let (label_px, _) = layout.text_px();
    let (value_px, unit_px) = if layout.is_mobile() { (36, 18) } else { (48, 24) };
    let power = format_fixed(reading.power, 1);

    rsx! {
        div { class: "card card--output", style: "{style}",
            div { class: "card-heading",
                Icon { glyph: Glyph::Zap, size: 24, color: "#F8D200".to_string() }
                p { class: "label", style: "font-size:{label_px}px", "Current Output" }
            }
            div { class: "reading",
                span { class: "reading-value", style: "font-size:{value_px}px", "{power}" }
                span { class: "reading-unit", style: "font-size:{unit_px}px", "MW" }
            }
            p { class: "note note--good", style: "font-size:{label_px}px", "↑ Peak performance" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PanelTempCard(reading: Reading, layout: LayoutParams) -> Element {
    let style = metric_card_style(&layout, 1);
    let (label_px, value_px) = layout.text_px();
    let badge = if layout.is_mobile() { 48 } else { 64 };
    let temp = format_fixed(reading.panel_temp, 0);
    let fill = format_fixed(reading.temp_fill_percent(), 2);

    rsx! {
        div { class: "card", style: "{style}",
            div { class: "card-row",
                div {
                    p { class: "label", style: "font-size:{label_px}px", "Panel Temp" }
                    p { class: "metric", style: "font-size:{value_px}px", "{temp}°C" }
                }
                div { class: "badge badge--sun", style: "width:{badge}px;height:{badge}px",
                    Icon { glyph: Glyph::Thermometer, size: badge / 2, color: "#ffffff".to_string() }
                }
            }
            div { class: "fill-track",
                div { class: "fill-bar fill-bar--temp", style: "width:{fill}%" }
            }
            p { class: "hint", "Optimal: 25-45°C" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn EfficiencyCard(reading: Reading, layout: LayoutParams) -> Element {
    let style = metric_card_style(&layout, 1);
    let (label_px, value_px) = layout.text_px();
    let badge = if layout.is_mobile() { 48 } else { 64 };
    let efficiency = format_fixed(reading.efficiency, 1);
    let fill = format_fixed(reading.efficiency_fill_percent(), 2);

    rsx! {
        div { class: "card", style: "{style}",
            div { class: "card-row",
                div {
                    p { class: "label", style: "font-size:{label_px}px", "Efficiency" }
                    p { class: "metric", style: "font-size:{value_px}px", "{efficiency}%" }
                }
                div { class: "badge badge--leaf", style: "width:{badge}px;height:{badge}px",
                    Icon { glyph: Glyph::Zap, size: badge / 2, color: "#ffffff".to_string() }
                }
            }
            div { class: "fill-track",
                div { class: "fill-bar fill-bar--eff", style: "width:{fill}%" }
            }
            p { class: "hint", "Industry avg: 85%" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PanelArrayCard(layout: LayoutParams) -> Element {
    let style = metric_card_style(&layout, 1);
    let (label_px, _) = layout.text_px();
    let title_px = if layout.is_mobile() { 16 } else { 18 };
    let facts = [
        ("Total Panels", format_thousands(PLANT.total_panels), "fact-value"),
        ("Active Panels", format_thousands(PLANT.active_panels), "fact-value fact-value--good"),
        ("Capacity", format!("{} MW", format_fixed(PLANT.capacity_mw, 1)), "fact-value"),
        ("Array Size", format!("{} hectares", format_fixed(PLANT.array_hectares, 1)), "fact-value"),
    ];

    rsx! {
        div { class: "card card--grow", style: "{style}",
            h3 { class: "card-title", style: "font-size:{title_px}px", "Panel Array" }
            div { class: "facts",
                for (label, value, cls) in facts {
                    div { key: "{label}", class: "fact", style: "font-size:{label_px}px",
                        span { class: "fact-label", "{label}" }
                        span { class: "{cls}", "{value}" }
                    }
                }
            }
        }
    }
}
