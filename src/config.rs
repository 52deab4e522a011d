use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;

pub const DEFAULT_TICK_MS: u32 = 2_000;

pub const TICK_MS_VAR: &str = "UMEMESENSE_TICK_MS";
pub const SEED_VAR: &str = "UMEMESENSE_SEED";

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub tick_ms: u32,
    /// Fixed rng seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Build from a variable lookup; unset or blank variables keep their default.
    #[cfg_attr(not(feature = "native"), allow(dead_code))]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(TICK_MS_VAR).filter(|s| !s.trim().is_empty()) {
            let tick_ms: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TICK_MS_VAR}={raw:?} is not a number of milliseconds"))?;
            if tick_ms == 0 {
                return Err(anyhow!("{TICK_MS_VAR} must be greater than zero"));
            }
            cfg.tick_ms = tick_ms;
        }
        if let Some(raw) = lookup(SEED_VAR).filter(|s| !s.trim().is_empty()) {
            let seed: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{SEED_VAR}={raw:?} is not an unsigned integer"))?;
            cfg.seed = Some(seed);
        }
        Ok(cfg)
    }

    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| std::env::var(k).ok())
    }
}

/// Set the process-wide config once at boot. Later calls are ignored.
#[cfg_attr(not(feature = "native"), allow(dead_code))]
pub fn install(cfg: DashboardConfig) {
    let _ = CONFIG.set(cfg);
}

pub fn current() -> DashboardConfig {
    CONFIG.get().copied().unwrap_or_default()
}
