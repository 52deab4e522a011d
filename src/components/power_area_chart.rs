use dioxus::prelude::*;

use crate::layout::LayoutParams;
use crate::shared::types::HistoricalPoint;
use crate::utils::chart::{area_path, line_path, point_x, tick_values, value_y, y_axis, PlotArea};
use crate::utils::format::format_fixed;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 260.0;

#[allow(non_snake_case)]
#[component]
pub fn PowerAreaChart(points: &'static [HistoricalPoint], layout: LayoutParams) -> Element {
    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let mobile = layout.is_mobile();
    let font = if mobile { 10 } else { 12 };
    let stroke = if mobile { 2 } else { 3 };
    let area = PlotArea {
        left: if mobile { 32.0 } else { 48.0 },
        top: 10.0,
        width: WIDTH - if mobile { 37.0 } else { 68.0 },
        height: HEIGHT - 34.0,
    };

    let values: Vec<f64> = points.iter().map(|p| p.power).collect();
    let max = values.iter().cloned().fold(0.0, f64::max);
    let (step, ceiling) = y_axis(max, 4);
    let decimals = if step < 1.0 { 1 } else { 0 };
    let ticks: Vec<(f64, String)> = tick_values(step, ceiling)
        .into_iter()
        .map(|t| (value_y(&area, t, ceiling), format_fixed(t, decimals)))
        .collect();
    let axis_mid = area.top + area.height / 2.0;
    let line_d = line_path(&area, &values, ceiling);
    let area_d = area_path(&area, &values, ceiling);
    let n = points.len();
    let band = if n > 1 { area.width / (n - 1) as f64 } else { area.width };
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let title_px = if mobile { 16 } else { 18 };

    rsx! {
        div { class: "card card--chart", style: "{layout.chart_card_style()}",
            h3 { class: "card-title", style: "font-size:{title_px}px", "Today's Power Generation" }
            svg { class: "chart", view_box: "{view_box}", width: "100%",
                defs {
                    linearGradient { id: "colorPower", x1: "0", y1: "0", x2: "0", y2: "1",
                        stop { offset: "5%", stop_color: "#3C9AE9", stop_opacity: "0.8" }
                        stop { offset: "95%", stop_color: "#1523DB", stop_opacity: "0.1" }
                    }
                }
                // Grid + y axis
                for (ty, label) in ticks {
                    g { key: "{label}",
                        line { x1: "{area.left}", y1: "{ty}", x2: "{area.right()}", y2: "{ty}", class: "grid-line" }
                        text { x: "{area.left - 6.0}", y: "{ty + 4.0}", class: "axis-label", text_anchor: "end", font_size: "{font}", "{label}" }
                    }
                }
                text { x: "10", y: "{axis_mid}", class: "axis-label", font_size: "{font}", transform: "rotate(-90 10 {axis_mid})", text_anchor: "middle", "MW" }
                path { d: "{area_d}", fill: "url(#colorPower)", stroke: "none" }
                path { d: "{line_d}", fill: "none", stroke: "#3C9AE9", stroke_width: "{stroke}", stroke_linejoin: "round" }
                // X labels
                for (i, p) in points.iter().enumerate() {
                    text { key: "x{i}", x: "{point_x(&area, i, n)}", y: "{area.bottom() + 18.0}", class: "axis-label", text_anchor: "middle", font_size: "{font}", "{p.time}" }
                }
                // Hover bands
                for i in 0..n {
                    rect {
                        key: "h{i}",
                        x: "{point_x(&area, i, n) - band / 2.0}",
                        y: "{area.top}",
                        width: "{band}",
                        height: "{area.height}",
                        fill: "transparent",
                        onmouseenter: move |_| *hovered.write() = Some(i),
                        onmouseleave: move |_| *hovered.write() = None,
                        ontouchstart: move |_| *hovered.write() = Some(i),
                        ontouchend: move |_| *hovered.write() = None,
                    }
                }
                {
                    match *hovered.read() {
                        Some(i) if i < n => {
                            let p = &points[i];
                            let x = point_x(&area, i, n);
                            let y = value_y(&area, p.power, ceiling);
                            let lines = [
                                p.time.to_string(),
                                format!("power: {} MW", format_fixed(p.power, 1)),
                                format!("efficiency: {}%", format_fixed(p.efficiency, 0)),
                            ];
                            let cw = 7.0f64; // approx char width at 11px
                            let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                            let tip_w = ((longest as f64) * cw + 16.0).min(area.width);
                            let tip_h = 50.0f64;
                            let tip_x = (x - tip_w / 2.0).clamp(area.left, area.right() - tip_w);
                            let tip_y = (y - 12.0 - tip_h).max(2.0);
                            rsx! { g { key: "tooltip", class: "tooltip",
                                line { x1: "{x}", y1: "{area.top}", x2: "{x}", y2: "{area.bottom()}", class: "cursor-line" }
                                circle { cx: "{x}", cy: "{y}", r: "4", fill: "#3C9AE9" }
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "8", class: "tooltip-box" }
                                for (k, l) in lines.iter().enumerate() {
                                    text {
                                        key: "{k}",
                                        x: "{tip_x + 8.0}",
                                        y: "{tip_y + 16.0 + 14.0 * (k as f64)}",
                                        class: if k == 0 { "tooltip-title" } else { "tooltip-text" },
                                        "{l}"
                                    }
                                }
                            }}
                        }
                        _ => rsx! { Fragment {} },
                    }
                }
            }
        }
    }
}
