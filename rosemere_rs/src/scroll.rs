//! Scroll progress and the "compacted header" flag.
//!
//! The front-end feeds one [`ScrollSample`] per `scroll`/`resize` event. All
//! work per sample is constant time, so no throttling is applied.

/// Raw scroll measurements taken from the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// `window.scrollY`
    pub offset: f64,
    /// Total document height (`documentElement.scrollHeight`)
    pub scroll_height: f64,
    /// Visible height (`documentElement.clientHeight`)
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Maximum reachable offset. Zero when the document fits the viewport.
    pub fn extent(&self) -> f64 {
        let extent = finite_or_zero(self.scroll_height) - finite_or_zero(self.viewport_height);
        extent.max(0.0)
    }
}

/// Derived state consumed by the progress bar, logo and header.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Normalized position in `[0, 1]`.
    pub progress: f64,
    /// `true` while the offset is strictly above the threshold.
    pub is_scrolled: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    threshold: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: finite_or_zero(threshold).max(0.0),
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recompute the state from a fresh sample.
    ///
    /// Unlike section reveal this is not latched: scrolling back above the
    /// threshold clears `is_scrolled` again.
    pub fn observe(&mut self, sample: ScrollSample) -> ScrollState {
        let offset = finite_or_zero(sample.offset);
        self.state = ScrollState {
            progress: scroll_progress(offset, sample.extent()),
            is_scrolled: offset > self.threshold,
        };
        self.state
    }
}

/// `offset / extent` clamped to `[0, 1]`. A non-positive extent yields 0.
pub fn scroll_progress(offset: f64, extent: f64) -> f64 {
    let offset = finite_or_zero(offset);
    let extent = finite_or_zero(extent);
    if extent <= 0.0 {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
