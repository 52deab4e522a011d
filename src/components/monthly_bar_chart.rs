use dioxus::prelude::*;

use crate::layout::LayoutParams;
use crate::shared::types::MonthlyPoint;
use crate::utils::chart::{bar_rects, tick_values, value_y, y_axis, PlotArea};
use crate::utils::format::{format_fixed, format_thousands};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 260.0;

#[allow(non_snake_case)]
#[component]
pub fn MonthlyBarChart(points: &'static [MonthlyPoint], layout: LayoutParams) -> Element {
    // Hovered bar index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let mobile = layout.is_mobile();
    let font = if mobile { 10 } else { 12 };
    let area = PlotArea {
        left: if mobile { 32.0 } else { 48.0 },
        top: 10.0,
        width: WIDTH - if mobile { 37.0 } else { 68.0 },
        height: HEIGHT - 34.0,
    };

    let values: Vec<f64> = points.iter().map(|p| p.energy).collect();
    let max = values.iter().cloned().fold(0.0, f64::max);
    let (step, ceiling) = y_axis(max, 4);
    let ticks: Vec<(f64, String)> = tick_values(step, ceiling)
        .into_iter()
        .map(|t| (value_y(&area, t, ceiling), format_thousands(t.round() as u32)))
        .collect();
    let bars = bar_rects(&area, &values, ceiling, 0.7);
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let title_px = if mobile { 16 } else { 18 };

    rsx! {
        div { class: "card card--chart", style: "{layout.chart_card_style()}",
            h3 { class: "card-title", style: "font-size:{title_px}px", "Monthly Energy Production (MWh)" }
            svg { class: "chart", view_box: "{view_box}", width: "100%",
                for (ty, label) in ticks {
                    g { key: "{label}",
                        line { x1: "{area.left}", y1: "{ty}", x2: "{area.right()}", y2: "{ty}", class: "grid-line" }
                        text { x: "{area.left - 6.0}", y: "{ty + 4.0}", class: "axis-label", text_anchor: "end", font_size: "{font}", "{label}" }
                    }
                }
                {
                    bars.iter().zip(points.iter()).enumerate().map(|(i, (b, p))| {
                        let cls = if *hovered.read() == Some(i) { "bar bar--active" } else { "bar" };
                        // Rounded top only: a rounded rect plus a square patch over the bottom corners
                        let patch_h = b.height.min(4.0);
                        rsx!{ g { key: "{i}",
                            rect {
                                class: "{cls}", x: "{b.x}", y: "{b.y}", width: "{b.width}", height: "{b.height}", rx: "4",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }
                            rect { class: "{cls} bar-base", x: "{b.x}", y: "{b.y + b.height - patch_h}", width: "{b.width}", height: "{patch_h}" }
                            text { x: "{b.center_x()}", y: "{area.bottom() + 18.0}", class: "axis-label", text_anchor: "middle", font_size: "{font}", "{p.month}" }
                        }}
                    })
                }
                {
                    match *hovered.read() {
                        Some(i) if i < bars.len() => {
                            let b = bars[i];
                            let p = &points[i];
                            let x = b.center_x();
                            let value_label = format!("energy: {}", format_fixed(p.energy, 0));
                            let cw = 7.0f64; // approx char width at 11px
                            let content_w = (p.month.len().max(value_label.len()) as f64) * cw + 16.0;
                            let tip_w = content_w.min(area.width);
                            let tip_h = 36.0f64; // two lines
                            let tip_x = (x - tip_w / 2.0).clamp(area.left, area.right() - tip_w);
                            let tip_y = (b.y - 10.0 - tip_h).max(2.0);
                            rsx!{ g { key: "tooltip", class: "tooltip",
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "8", class: "tooltip-box" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "tooltip-title", "{p.month}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "tooltip-text", "{value_label}" }
                            }}
                        }
                        _ => rsx!{ Fragment {} },
                    }
                }
            }
        }
    }
}
