#![cfg(feature = "native")]

use dioxus::logger::tracing::{info, warn};

use crate::config::{self, DashboardConfig};

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Read `.env` and the environment; a bad value is logged and the defaults kept.
pub fn load_config() {
    let cfg = match DashboardConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("[config] {e:#}; using defaults");
            DashboardConfig::default()
        }
    };
    info!(
        "[config] tick every {} ms, seed {}",
        cfg.tick_ms,
        cfg.seed.map(|s| s.to_string()).unwrap_or_else(|| "from entropy".into())
    );
    config::install(cfg);
}
