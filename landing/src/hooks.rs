//! Browser glue: scroll tracking, reveal observers, navigation.
//!
//! Every listener and observer installed here is released in `on_cleanup`,
//! so remounting a component never stacks duplicate handlers.

use std::time::Duration;

use js_sys::Array;
use leptos::ev;
use leptos::html::Section;
use leptos::prelude::*;
use rosemere::config::SiteConfig;
use rosemere::content::SectionId;
use rosemere::nav::{Navigator, Viewport, scroll_target};
use rosemere::reveal::{
    Entrance, Pose, RevealBoard, observer_thresholds, reveal_style, stagger_delay, visibility,
};
use rosemere::scroll::{ScrollSample, ScrollState, ScrollTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

/// Page-wide state shared through context. All fields are arena handles, so
/// the struct is `Copy` and can be moved into any event handler.
#[derive(Clone, Copy)]
pub struct Site {
    pub config: StoredValue<SiteConfig>,
    pub scroll: ReadSignal<ScrollState>,
    navigator: RwSignal<Navigator>,
    reveals: StoredValue<RevealBoard>,
}

impl Site {
    pub fn new(config: SiteConfig, scroll: ReadSignal<ScrollState>) -> Self {
        let navigator = Navigator::new(config.navigation.anchor_alignment());
        let reveals = RevealBoard::new(&config.reveal);
        Self {
            config: StoredValue::new(config),
            scroll,
            navigator: RwSignal::new(navigator),
            reveals: StoredValue::new(reveals),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.get().is_scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.navigator.with(|nav| nav.menu().is_open())
    }

    pub fn toggle_menu(&self) {
        self.navigator.update(|nav| nav.menu_mut().toggle());
    }

    pub fn close_menu(&self) {
        self.navigator.update(|nav| nav.menu_mut().close());
    }

    /// Smooth-scroll to `section` and close the mobile menu.
    pub fn go_to(&self, section: SectionId) {
        self.navigator.update(|nav| {
            nav.scroll_to_section(&mut BrowserViewport, section);
        });
    }

    pub fn go_to_top(&self) {
        self.navigator.update(|nav| {
            nav.scroll_to_top(&mut BrowserViewport);
        });
    }

    /// Inline style for item `index` of a revealable group.
    pub fn reveal_style(
        self,
        revealed: ReadSignal<bool>,
        entrance: Entrance,
        index: usize,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        let (step, duration) = self
            .config
            .with_value(|c| (c.reveal.stagger_step(), c.reveal.duration()));
        let delay = stagger_delay(index, step);
        move || reveal_style(Pose::from_revealed(revealed.get()), entrance, delay, duration)
    }
}

/// [`Viewport`] backed by `window` and `document`.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn anchor_top(&self, anchor: &str) -> Option<f64> {
        let document = document();
        let element = document.get_element_by_id(anchor)?;
        let body_top = document
            .body()
            .map_or(0.0, |body| body.get_bounding_client_rect().top());
        Some(scroll_target(
            element.get_bounding_client_rect().top(),
            body_top,
            0.0,
        ))
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }

    fn align_anchor(&mut self, anchor: &str) -> bool {
        let Some(element) = document().get_element_by_id(anchor) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

fn read_scroll_sample() -> ScrollSample {
    let root = document().document_element();
    ScrollSample {
        offset: window().scroll_y().unwrap_or_default(),
        scroll_height: root.as_ref().map_or(0.0, |r| f64::from(r.scroll_height())),
        viewport_height: root.as_ref().map_or(0.0, |r| f64::from(r.client_height())),
    }
}

/// Track `window` scroll position. Samples once at mount, then on every
/// `scroll` and `resize` event.
pub fn use_scroll_tracker(threshold: f64) -> ReadSignal<ScrollState> {
    let tracker = StoredValue::new(ScrollTracker::new(threshold));
    let (state, set_state) = signal(ScrollState::default());

    let sample = move || {
        let sample = read_scroll_sample();
        let previous = tracker.with_value(ScrollTracker::state);
        let mut next = previous;
        tracker.update_value(|t| next = t.observe(sample));
        if next != previous {
            set_state.set(next);
        }
    };

    sample();
    let on_scroll = window_event_listener(ev::scroll, move |_| sample());
    let on_resize = window_event_listener(ev::resize, move |_| sample());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    state
}

/// Escape dismisses the mobile overlay.
pub fn use_escape_closes_menu(site: Site) {
    let handle = window_event_listener(ev::keydown, move |event: KeyboardEvent| {
        if event.key() == "Escape" && site.navigator.with_untracked(|nav| nav.menu().is_open()) {
            site.close_menu();
        }
    });
    on_cleanup(move || handle.remove());
}

/// Follow a `#section` fragment in the initial URL once the page is mounted.
pub fn use_fragment_target(site: Site) {
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(section) = SectionId::from_anchor(&hash) {
            site.go_to(section);
        }
    });
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One-shot visibility flag for `section`.
///
/// Observes `target` until its visibility first reaches the configured
/// threshold, then flips the returned signal and disconnects. Visibility is
/// the intersection ratio, or the share of the viewport the section fills if
/// that is larger. The flag never resets.
pub fn use_reveal(section: SectionId, target: NodeRef<Section>) -> ReadSignal<bool> {
    let site = expect_context::<Site>();
    let threshold = site.reveals.with_value(|b| b.threshold(section));
    let (revealed, set_revealed) = signal(site.reveals.with_value(|b| b.is_revealed(section)));
    let observer: StoredValue<Option<(IntersectionObserver, ObserverCallback)>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if revealed.get_untracked() || observer.with_value(Option::is_some) {
            return;
        }

        let reveals = site.reveals;
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, io: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let seen = entry_visibility(&entry);
                    let mut flipped = false;
                    reveals.update_value(|board| {
                        flipped = board.observe(section, seen).is_revealed();
                    });
                    if flipped {
                        set_revealed.set(true);
                        io.disconnect();
                        break;
                    }
                }
            });

        let steps: Array = observer_thresholds(threshold)
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        let options = IntersectionObserverInit::new();
        options.set_threshold(&steps);
        let handler: &js_sys::Function = callback.as_ref().unchecked_ref();
        match IntersectionObserver::new_with_options(handler, &options) {
            Ok(io) => {
                io.observe(&element);
                observer.set_value(Some((io, callback)));
            }
            Err(err) => {
                // Without IntersectionObserver the content must still show.
                log::warn!("[rosemere][reveal] observer unavailable for #{section}: {err:?}");
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some((io, _callback)) = slot.take() {
                io.disconnect();
            }
        });
    });

    revealed
}

fn entry_visibility(entry: &IntersectionObserverEntry) -> f64 {
    let viewport_height = entry
        .root_bounds()
        .map_or_else(window_height, |bounds| bounds.height());
    visibility(
        entry.intersection_ratio(),
        entry.intersection_rect().height(),
        viewport_height,
    )
}

fn window_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

/// Delay before the mobile overlay's item `index` slides in.
pub fn overlay_item_delay(index: usize) -> Duration {
    stagger_delay(index, Duration::from_millis(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_style_outlives_the_site_handle() {
        let (scroll, _) = signal(ScrollState::default());
        let (revealed, set_revealed) = signal(false);
        let style = {
            let site = Site::new(SiteConfig::default(), scroll);
            site.reveal_style(revealed, Entrance::FromBelow, 2)
        };

        assert!(style().starts_with("opacity: 0;"));
        set_revealed.set(true);
        let resting = style();
        assert!(resting.starts_with("opacity: 1;"));
        assert!(resting.contains("ease-out 200ms"));
    }

    #[test]
    fn overlay_items_step_by_a_tenth_of_a_second() {
        assert_eq!(overlay_item_delay(0), Duration::ZERO);
        assert_eq!(overlay_item_delay(3), Duration::from_millis(300));
    }
}
