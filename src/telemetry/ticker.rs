use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::shared::seed::INITIAL_READING;
use crate::telemetry::feed::TelemetryFeed;
use crate::utils::format::clock_now;

/// Signals owned by the dashboard view for the running simulator.
#[derive(Clone, Copy)]
pub struct Telemetry {
    pub feed: Signal<TelemetryFeed>,
    /// Wall-clock time of the last applied tick, already formatted.
    pub updated_at: Signal<Option<String>>,
}

#[cfg_attr(not(any(feature = "web", feature = "native")), allow(dead_code))]
fn advance(telemetry: &mut Telemetry) -> bool {
    let next = telemetry.feed.write().tick();
    match next {
        Some(r) => {
            debug!(
                "[telemetry] tick: {:.2} MW, battery {:.1}%, {:.1}°C, eff {:.1}%",
                r.power, r.battery_level, r.panel_temp, r.efficiency
            );
            telemetry.updated_at.set(Some(clock_now()));
            true
        }
        None => false,
    }
}

/// Stop a live feed, returning how many ticks it ran. `None` when already stopped.
fn shut_down(feed: &mut TelemetryFeed) -> Option<u64> {
    if !feed.is_live() {
        return None;
    }
    feed.stop();
    Some(feed.ticks())
}

/// Start the simulator for the calling component. The timer lives exactly as
/// long as the component: it is cancelled and the feed stopped on unmount.
pub fn use_telemetry(tick_ms: u32, seed: Option<u64>) -> Telemetry {
    let feed = use_signal(|| TelemetryFeed::new(INITIAL_READING, seed));
    let updated_at = use_signal(|| Option::<String>::None);
    let telemetry = Telemetry { feed, updated_at };

    use_hook(move || {
        info!(
            "[telemetry] starting simulator, tick every {} ms{}",
            tick_ms,
            if seed.is_some() { " (seeded)" } else { "" }
        );
    });

    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        // Keep the handle so it can be cancelled on unmount
        let mut timer_handle: Signal<Option<Interval>> = use_signal(move || {
            let mut telemetry = telemetry;
            Some(Interval::new(tick_ms, move || {
                advance(&mut telemetry);
            }))
        });

        use_drop(move || {
            if let Some(h) = timer_handle.write().take() {
                h.cancel();
            }
        });
    }

    #[cfg(feature = "native")]
    {
        use tokio::time::{interval, Duration, MissedTickBehavior};

        // Dropped (and so cancelled) together with the component
        use_future(move || async move {
            let mut telemetry = telemetry;
            let mut iv = interval(Duration::from_millis(u64::from(tick_ms)));
            iv.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // first tick completes immediately; the seed reading covers it
            iv.tick().await;
            loop {
                iv.tick().await;
                if !advance(&mut telemetry) {
                    break;
                }
            }
        });
    }

    use_drop({
        let mut feed = feed;
        move || {
            if let Some(ticks) = shut_down(&mut feed.write()) {
                info!("[telemetry] simulator stopped after {} tick(s)", ticks);
            }
        }
    });

    telemetry
}
