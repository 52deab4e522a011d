use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::shared::types::ViewportMode;

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const TABLET_BREAKPOINT: f64 = 1280.0;

/// True when a width is known and strictly below `threshold`.
/// An unobservable viewport counts as wide.
pub fn is_below(width: Option<f64>, threshold: f64) -> bool {
    matches!(width, Some(w) if w < threshold)
}

pub fn classify(width: Option<f64>) -> ViewportMode {
    let is_mobile = is_below(width, MOBILE_BREAKPOINT);
    let is_tablet = is_below(width, TABLET_BREAKPOINT);
    match (is_mobile, is_tablet) {
        (true, _) => ViewportMode::Mobile,
        (false, true) => ViewportMode::Tablet,
        (false, false) => ViewportMode::Desktop,
    }
}

impl ViewportMode {
    pub fn is_mobile(self) -> bool {
        self == ViewportMode::Mobile
    }

    pub fn is_tablet(self) -> bool {
        self == ViewportMode::Tablet
    }
}

fn finite_width(raw: Option<f64>) -> Option<f64> {
    raw.filter(|w| w.is_finite() && *w >= 0.0)
}

/// Last known width and where it came from. A window-driven tracker only
/// listens to `window.innerWidth`; the container size is a fallback for
/// hosts without a `window`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidthTracker {
    width: Option<f64>,
    window_driven: bool,
}

impl WidthTracker {
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub fn from_window(inner_width: Option<f64>) -> Self {
        Self {
            width: finite_width(inner_width),
            window_driven: true,
        }
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn mode(&self) -> ViewportMode {
        classify(self.width)
    }

    /// Returns true when the width changed.
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub fn on_window_resize(&mut self, inner_width: Option<f64>) -> bool {
        if !self.window_driven {
            return false;
        }
        self.accept(finite_width(inner_width))
    }

    pub fn on_container_resize(&mut self, width: f64) -> bool {
        if self.window_driven {
            return false;
        }
        self.accept(finite_width(Some(width)))
    }

    fn accept(&mut self, width: Option<f64>) -> bool {
        if width.is_none() || width == self.width {
            return false;
        }
        self.width = width;
        true
    }
}

#[cfg(feature = "web")]
fn window_inner_width() -> Option<f64> {
    let window = web_sys::window()?;
    let width: wasm_bindgen::JsValue = window.inner_width().ok()?;
    width.as_f64()
}

#[cfg(feature = "web")]
fn initial_tracker() -> WidthTracker {
    WidthTracker::from_window(window_inner_width())
}

#[cfg(not(feature = "web"))]
fn initial_tracker() -> WidthTracker {
    WidthTracker::default()
}

fn update(tracker: &mut Signal<WidthTracker>, apply: impl FnOnce(&mut WidthTracker) -> bool) {
    let mut next = *tracker.peek();
    let before = next.mode();
    if !apply(&mut next) {
        return;
    }
    let after = next.mode();
    if before != after {
        info!(
            "[viewport] {:?} -> {:?} at {:.0}px",
            before,
            after,
            next.width().unwrap_or_default()
        );
    }
    tracker.set(next);
}

#[derive(Clone, Copy)]
pub struct Viewport {
    tracker: Signal<WidthTracker>,
}

impl Viewport {
    pub fn mode(&self) -> ViewportMode {
        self.tracker.read().mode()
    }

    /// Container resize from the root's `onresize`. Ignored on web, where the
    /// window listener owns the width.
    pub fn observe(&mut self, evt: Event<ResizeData>) {
        let Ok(size) = evt.data().get_border_box_size() else {
            return;
        };
        update(&mut self.tracker, |t| t.on_container_resize(size.width));
    }
}

pub fn use_viewport() -> Viewport {
    let tracker = use_signal(initial_tracker);

    #[cfg(feature = "web")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        // Keep the callback so the same function can be removed on unmount
        let mut resize_cb: Signal<Option<Closure<dyn FnMut()>>> = use_signal(move || {
            let window = web_sys::window()?;
            let mut tracker = tracker;
            let cb = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let inner = window_inner_width();
                update(&mut tracker, |t| t.on_window_resize(inner));
            }));
            window
                .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
                .ok()?;
            Some(cb)
        });

        use_drop(move || {
            if let Some(cb) = resize_cb.write().take() {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    Viewport { tracker }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_check() {
        assert!(is_below(Some(500.0), 768.0));
        assert!(!is_below(Some(900.0), 768.0));
        assert!(!is_below(Some(768.0), 768.0));
    }

    #[test]
    fn no_viewport_is_not_mobile() {
        assert!(!is_below(None, MOBILE_BREAKPOINT));
        assert_eq!(classify(None), ViewportMode::Desktop);
    }

    #[test]
    fn three_tiers() {
        assert_eq!(classify(Some(375.0)), ViewportMode::Mobile);
        assert_eq!(classify(Some(767.9)), ViewportMode::Mobile);
        assert_eq!(classify(Some(768.0)), ViewportMode::Tablet);
        assert_eq!(classify(Some(1279.0)), ViewportMode::Tablet);
        assert_eq!(classify(Some(1280.0)), ViewportMode::Desktop);
        assert_eq!(classify(Some(1920.0)), ViewportMode::Desktop);
    }

    #[test]
    fn mode_flags() {
        assert!(ViewportMode::Mobile.is_mobile());
        assert!(!ViewportMode::Mobile.is_tablet());
        assert!(ViewportMode::Tablet.is_tablet());
        assert!(!ViewportMode::Desktop.is_mobile() && !ViewportMode::Desktop.is_tablet());
    }

    #[test]
    fn window_width_drives_the_mode() {
        let mut t = WidthTracker::from_window(Some(1290.0));
        assert_eq!(t.mode(), ViewportMode::Desktop);
        assert!(t.on_window_resize(Some(780.0)));
        assert_eq!(t.mode(), ViewportMode::Tablet);
        assert!(t.on_window_resize(Some(600.0)));
        assert_eq!(t.mode(), ViewportMode::Mobile);
        assert!(!t.on_window_resize(Some(600.0)));
    }

    #[test]
    fn container_is_ignored_when_the_window_is_known() {
        // a scrollbar makes the container narrower than innerWidth
        let mut t = WidthTracker::from_window(Some(1290.0));
        assert!(!t.on_container_resize(1273.0));
        assert_eq!(t.width(), Some(1290.0));
        assert_eq!(t.mode(), ViewportMode::Desktop);
    }

    #[test]
    fn container_drives_the_mode_without_a_window() {
        let mut t = WidthTracker::default();
        assert_eq!(t.mode(), ViewportMode::Desktop);
        assert!(!t.on_window_resize(Some(500.0)));
        assert!(t.on_container_resize(1000.0));
        assert_eq!(t.mode(), ViewportMode::Tablet);
    }

    #[test]
    fn unusable_widths_are_dropped() {
        let mut t = WidthTracker::from_window(Some(f64::NAN));
        assert_eq!(t.width(), None);
        assert!(!t.on_window_resize(None));
        assert!(!t.on_window_resize(Some(f64::INFINITY)));
        assert_eq!(t.mode(), ViewportMode::Desktop);
    }
}
