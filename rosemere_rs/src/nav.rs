//! Anchor navigation and the mobile menu.
//!
//! [`Navigator`] owns the `mobile_menu_open` flag and drives a [`Viewport`].
//! The browser implementation lives in the front-end; tests use an in-memory
//! one.

use tracing::debug;

use crate::content::SectionId;

/// The scrollable window as seen by navigation.
pub trait Viewport {
    /// Top of the anchor's box relative to the top of the document body, or
    /// `None` when the anchor is not in the DOM.
    fn anchor_top(&self, anchor: &str) -> Option<f64>;

    /// Smooth-scroll the window to an absolute offset. Fire-and-forget.
    fn scroll_to(&mut self, top: f64);

    /// Let the browser align the anchor itself. Returns `false` when the
    /// anchor is not in the DOM.
    fn align_anchor(&mut self, anchor: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorAlignment {
    /// Manual arithmetic: land `px` above the anchor so the fixed header does
    /// not cover it.
    HeaderOffset(f64),
    Native,
}

/// What a navigation request did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollOutcome {
    /// Scrolled to this absolute offset.
    Scrolled(f64),
    /// Alignment delegated to the browser.
    Aligned,
    /// The anchor is not mounted. Nothing happened.
    MissingAnchor,
}

/// Absolute scroll offset that puts an element `offset` pixels below the top
/// of the viewport. Both tops are `getBoundingClientRect().top` values.
pub fn scroll_target(element_top: f64, body_top: f64, offset: f64) -> f64 {
    (element_top - body_top) - offset
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Navigator {
    alignment: AnchorAlignment,
    menu: MenuState,
}

impl Navigator {
    pub fn new(alignment: AnchorAlignment) -> Self {
        Self {
            alignment,
            menu: MenuState::default(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    pub fn scroll_to_section(
        &mut self,
        viewport: &mut impl Viewport,
        section: SectionId,
    ) -> ScrollOutcome {
        self.scroll_to_anchor(viewport, section.anchor())
    }

    /// Scroll to an arbitrary anchor id.
    ///
    /// A missing anchor is a silent no-op. The mobile menu is closed either
    /// way, whichever device class issued the request.
    pub fn scroll_to_anchor(
        &mut self,
        viewport: &mut impl Viewport,
        anchor: &str,
    ) -> ScrollOutcome {
        let outcome = match self.alignment {
            AnchorAlignment::HeaderOffset(offset) => match viewport.anchor_top(anchor) {
                Some(top) => {
                    let target = (top - offset).max(0.0);
                    viewport.scroll_to(target);
                    ScrollOutcome::Scrolled(target)
                }
                None => ScrollOutcome::MissingAnchor,
            },
            AnchorAlignment::Native => {
                if viewport.align_anchor(anchor) {
                    ScrollOutcome::Aligned
                } else {
                    ScrollOutcome::MissingAnchor
                }
            }
        };
        if outcome == ScrollOutcome::MissingAnchor {
            debug!("[rosemere][nav] anchor #{anchor} not mounted, ignoring");
        }
        self.menu.close();
        outcome
    }

    pub fn scroll_to_top(&mut self, viewport: &mut impl Viewport) -> ScrollOutcome {
        viewport.scroll_to(0.0);
        self.menu.close();
        ScrollOutcome::Scrolled(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        anchors: HashMap<&'static str, f64>,
        position: f64,
        aligned: Vec<String>,
    }

    impl FakeViewport {
        fn with_anchors(anchors: &[(&'static str, f64)]) -> Self {
            Self {
                anchors: anchors.iter().copied().collect(),
                position: 420.0,
                aligned: Vec::new(),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn anchor_top(&self, anchor: &str) -> Option<f64> {
            self.anchors.get(anchor).copied()
        }

        fn scroll_to(&mut self, top: f64) {
            self.position = top;
        }

        fn align_anchor(&mut self, anchor: &str) -> bool {
            match self.anchors.get(anchor) {
                Some(&top) => {
                    self.position = top;
                    self.aligned.push(anchor.to_string());
                    true
                }
                None => false,
            }
        }
    }

    fn open_navigator(alignment: AnchorAlignment) -> Navigator {
        let mut nav = Navigator::new(alignment);
        nav.menu_mut().toggle();
        assert!(nav.menu().is_open());
        nav
    }

    #[test]
    fn scroll_target_subtracts_header() {
        // Body scrolled 300px up, element 500px below the viewport top.
        assert_eq!(scroll_target(500.0, -300.0, 80.0), 720.0);
        assert_eq!(scroll_target(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn header_offset_lands_above_anchor() {
        let mut viewport = FakeViewport::with_anchors(&[("expertise", 2400.0)]);
        let mut nav = Navigator::new(AnchorAlignment::HeaderOffset(80.0));

        let outcome = nav.scroll_to_section(&mut viewport, SectionId::Expertise);

        assert_eq!(outcome, ScrollOutcome::Scrolled(2320.0));
        assert_eq!(viewport.position, 2320.0);
    }

    #[test]
    fn target_near_top_is_not_negative() {
        let mut viewport = FakeViewport::with_anchors(&[("about", 30.0)]);
        let mut nav = Navigator::new(AnchorAlignment::HeaderOffset(80.0));

        assert_eq!(
            nav.scroll_to_section(&mut viewport, SectionId::About),
            ScrollOutcome::Scrolled(0.0)
        );
    }

    #[test]
    fn missing_anchor_is_silent_noop() {
        let mut viewport = FakeViewport::with_anchors(&[]);
        let mut nav = Navigator::new(AnchorAlignment::HeaderOffset(80.0));

        let outcome = nav.scroll_to_section(&mut viewport, SectionId::Clients);

        assert_eq!(outcome, ScrollOutcome::MissingAnchor);
        assert_eq!(viewport.position, 420.0);
    }

    #[test]
    fn unknown_string_anchor_is_noop_native() {
        let mut viewport = FakeViewport::with_anchors(&[("contact", 5000.0)]);
        let mut nav = Navigator::new(AnchorAlignment::Native);

        assert_eq!(
            nav.scroll_to_anchor(&mut viewport, "careers"),
            ScrollOutcome::MissingAnchor
        );
        assert_eq!(viewport.position, 420.0);
        assert!(viewport.aligned.is_empty());
    }

    #[test]
    fn native_alignment_delegates() {
        let mut viewport = FakeViewport::with_anchors(&[("contact", 5000.0)]);
        let mut nav = Navigator::new(AnchorAlignment::Native);

        assert_eq!(
            nav.scroll_to_section(&mut viewport, SectionId::Contact),
            ScrollOutcome::Aligned
        );
        assert_eq!(viewport.aligned, vec!["contact".to_string()]);
    }

    #[test]
    fn every_navigation_closes_menu() {
        let mut viewport = FakeViewport::with_anchors(&[("vision", 900.0)]);

        let mut nav = open_navigator(AnchorAlignment::HeaderOffset(80.0));
        nav.scroll_to_section(&mut viewport, SectionId::Vision);
        assert!(!nav.menu().is_open());

        let mut nav = open_navigator(AnchorAlignment::HeaderOffset(80.0));
        nav.scroll_to_section(&mut viewport, SectionId::Footprint);
        assert!(!nav.menu().is_open(), "missing anchor still closes the menu");

        let mut nav = open_navigator(AnchorAlignment::Native);
        nav.scroll_to_anchor(&mut viewport, "nowhere");
        assert!(!nav.menu().is_open());

        let mut nav = open_navigator(AnchorAlignment::Native);
        nav.scroll_to_top(&mut viewport);
        assert!(!nav.menu().is_open());
        assert_eq!(viewport.position, 0.0);
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
