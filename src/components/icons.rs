use dioxus::prelude::*;

use crate::shared::types::Weather;

/// Stroke glyphs drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Cloud,
    CloudRain,
    Zap,
    Battery,
    Thermometer,
}

impl Glyph {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Glyph::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            Glyph::CloudRain => &[
                "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242",
                "M16 14v6",
                "M8 14v6",
                "M12 16v6",
            ],
            Glyph::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::Battery => &["M4 7h12a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z", "M22 11v2"],
            Glyph::Thermometer => &["M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z"],
        }
    }

    pub fn for_weather(weather: Weather) -> Self {
        match weather {
            Weather::Sunny => Glyph::Sun,
            Weather::PartlyCloudy => Glyph::Cloud,
            Weather::Cloudy => Glyph::CloudRain,
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Icon(glyph: Glyph, size: i32, color: String) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for (i, d) in glyph.paths().iter().enumerate() {
                path { key: "{i}", d: "{d}" }
            }
        }
    }
}
