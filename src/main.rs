use dioxus::prelude::*;

mod app;
mod components;
mod config;
mod layout;
mod shared;
mod telemetry;
mod utils;
mod viewport;

#[cfg(feature = "native")]
mod native;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/dashboard.css");

fn main() {
    #[cfg(feature = "native")]
    {
        native::init_tracing();
        native::load_config();
    }
    dioxus::launch(app::App);
}
