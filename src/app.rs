use dioxus::prelude::*;

use crate::components::{
    BatteryCard, CurrentOutputCard, DashboardHeader, EfficiencyCard, ImpactCard, MonthlyBarChart,
    PanelArrayCard, PanelTempCard, PowerAreaChart,
};
use crate::config;
use crate::layout::LayoutParams;
use crate::shared::seed::{intraday_series, monthly_series};
use crate::telemetry::use_telemetry;
use crate::viewport::use_viewport;
use crate::{FAVICON, MAIN_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let cfg = config::current();
    // Owns the simulator; children only ever see copies of the reading
    let telemetry = use_telemetry(cfg.tick_ms, cfg.seed);
    let mut viewport = use_viewport();

    let reading = telemetry.feed.read().reading();
    let updated_at = telemetry.updated_at.read().clone();
    let layout = LayoutParams::for_mode(viewport.mode());
    let side = layout.column_style(layout.side_span);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "UmemeSense Dashboard" }
        document::Meta { name: "theme-color", content: "#000B3C" }
        document::Meta { name: "color-scheme", content: "dark" }
        // Page container; its border box sizes the layout where there is no window
        div {
            class: "page",
            style: "{layout.page_style()}",
            onresize: move |evt: Event<ResizeData>| viewport.observe(evt),
            div { class: "shell",
                DashboardHeader { reading, layout, updated_at }
                div { class: "grid", style: "{layout.grid_style()}",
                    // Key metrics
                    div { class: "column", style: "{layout.metrics_column_style()}",
                        CurrentOutputCard { reading, layout }
                        PanelTempCard { reading, layout }
                        EfficiencyCard { reading, layout }
                        PanelArrayCard { layout }
                    }
                    // Charts
                    div { class: "column", style: "{layout.column_style(layout.chart_span)}",
                        PowerAreaChart { points: intraday_series(), layout }
                        MonthlyBarChart { points: monthly_series(), layout }
                    }
                    // Battery & impact
                    div { class: "column", style: "{side}",
                        BatteryCard { reading, layout }
                        ImpactCard { layout }
                    }
                }
            }
        }
    }
}
