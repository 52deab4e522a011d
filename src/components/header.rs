use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::layout::LayoutParams;
use crate::shared::types::{Reading, Weather};

fn weather_color(weather: Weather) -> &'static str {
    match weather {
        Weather::Sunny => "#F8D200",
        Weather::PartlyCloudy | Weather::Cloudy => "#3C9AE9",
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DashboardHeader(
    reading: Reading,
    layout: LayoutParams,
    #[props(!optional)] updated_at: Option<String>,
) -> Element {
    let weather = reading.weather();
    let slug = weather.slug();
    let label = weather.label();
    let mobile = layout.is_mobile();
    let header_class = if mobile { "header header--stacked" } else { "header" };
    let title_style = format!("font-size:{}px", layout.header_font_px);
    let (label_px, _) = layout.text_px();

    rsx! {
        div { class: "{header_class}",
            div {
                h1 { class: "title", style: "{title_style}", "UmemeSense Dashboard" }
                div { class: "status",
                    div { class: "status-dot" }
                    span { class: "status-text", style: "font-size:{label_px}px", "System Online - Generating Power" }
                }
                if let Some(ts) = &updated_at {
                    time { class: "updated", "Updated {ts}" }
                }
            }
            div { class: "weather-badge", "data-weather": "{slug}",
                Icon { glyph: Glyph::for_weather(weather), size: layout.weather_icon_px, color: weather_color(weather).to_string() }
                div {
                    p { class: "weather-caption", "Weather" }
                    p { class: "weather-label", "{label}" }
                }
            }
        }
    }
}
