//! One-shot entrance animations.
//!
//! A section starts in its hidden pose and moves to its resting pose the
//! first time enough of it is visible. The latch never resets, so the
//! animation plays at most once per page load.

use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::config::RevealConfig;
use crate::content::SectionId;

/// Result of feeding a visibility ratio to a latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    /// This observation flipped the latch.
    Revealed,
    Unchanged,
}

impl RevealTransition {
    pub fn is_revealed(self) -> bool {
        matches!(self, RevealTransition::Revealed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the current intersection ratio.
    pub fn observe(&mut self, ratio: f64) -> RevealTransition {
        if self.revealed || ratio.is_nan() || ratio < self.threshold {
            return RevealTransition::Unchanged;
        }
        self.revealed = true;
        RevealTransition::Revealed
    }
}

/// Latches for every anchor section.
#[derive(Clone, Debug)]
pub struct RevealBoard {
    latches: BTreeMap<SectionId, RevealLatch>,
}

impl RevealBoard {
    pub fn new(config: &RevealConfig) -> Self {
        let latches = SectionId::ALL
            .into_iter()
            .map(|section| (section, RevealLatch::new(config.threshold(section))))
            .collect();
        Self { latches }
    }

    pub fn observe(&mut self, section: SectionId, ratio: f64) -> RevealTransition {
        let transition = self
            .latches
            .get_mut(&section)
            .map_or(RevealTransition::Unchanged, |latch| latch.observe(ratio));
        if transition.is_revealed() {
            debug!("[rosemere][reveal] {section} revealed at ratio {ratio:.2}");
        }
        transition
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.latches
            .get(&section)
            .is_some_and(RevealLatch::is_revealed)
    }

    /// Ratio at which `section` reveals.
    pub fn threshold(&self, section: SectionId) -> f64 {
        self.latches
            .get(&section)
            .map_or(1.0, RevealLatch::threshold)
    }
}

/// Visibility measure fed to a latch.
///
/// The element's own intersection ratio, or the share of the viewport it
/// covers when that is larger. A section taller than `viewport / threshold`
/// can never reach the threshold by its own ratio, but it fills the viewport.
pub fn visibility(ratio: f64, visible_height: f64, viewport_height: f64) -> f64 {
    if viewport_height.is_nan() || viewport_height <= 0.0 || !visible_height.is_finite() {
        return ratio;
    }
    let coverage = (visible_height / viewport_height).clamp(0.0, 1.0);
    if ratio.is_nan() { coverage } else { ratio.max(coverage) }
}

/// Observer trigger points for a latch at `threshold`: evenly spaced steps
/// from 0 up to the threshold, so a tall section still gets callbacks while
/// it enters.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    const STEPS: u32 = 4;
    let top = threshold.clamp(0.0, 1.0);
    (0..=STEPS)
        .map(|i| top * f64::from(i) / f64::from(STEPS))
        .collect()
}

/// Delay before item `index` of a grid starts its entrance.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Hidden,
    Resting,
}

impl Pose {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed { Pose::Resting } else { Pose::Hidden }
    }
}

/// Direction an element travels from while hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    FromLeft,
    FromBelow,
}

impl Entrance {
    /// CSS transform of the hidden pose.
    fn hidden_transform(self) -> &'static str {
        match self {
            Entrance::FromLeft => "translate3d(-50px, 0, 0)",
            Entrance::FromBelow => "translate3d(0, 20px, 0)",
        }
    }
}

/// Inline style for an element in `pose`.
///
/// The transition is always present so that flipping the pose animates; the
/// delay only matters on the way to the resting pose.
pub fn reveal_style(
    pose: Pose,
    entrance: Entrance,
    delay: Duration,
    duration: Duration,
) -> String {
    let (opacity, transform) = match pose {
        Pose::Hidden => ("0", entrance.hidden_transform()),
        Pose::Resting => ("1", "none"),
    };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
        d = duration.as_millis(),
        delay = delay.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn latch_flips_once_on_first_crossing() {
        let mut latch = RevealLatch::new(0.2);

        assert_eq!(latch.observe(0.0), RevealTransition::Unchanged);
        assert_eq!(latch.observe(0.19), RevealTransition::Unchanged);
        assert!(!latch.is_revealed());

        assert_eq!(latch.observe(0.2), RevealTransition::Revealed);
        assert!(latch.is_revealed());

        // Scrolling away and back never replays.
        assert_eq!(latch.observe(0.0), RevealTransition::Unchanged);
        assert_eq!(latch.observe(1.0), RevealTransition::Unchanged);
        assert!(latch.is_revealed());
    }

    #[test]
    fn latch_ignores_nan() {
        let mut latch = RevealLatch::new(0.3);
        assert_eq!(latch.observe(f64::NAN), RevealTransition::Unchanged);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn board_uses_per_section_thresholds() {
        let mut board = RevealBoard::new(&RevealConfig::default());

        // clients = 0.15, contact = 0.3
        assert!(board.observe(SectionId::Clients, 0.2).is_revealed());
        assert!(!board.observe(SectionId::Contact, 0.2).is_revealed());
        assert!(board.is_revealed(SectionId::Clients));
        assert!(!board.is_revealed(SectionId::Contact));
    }

    #[test]
    fn board_sections_are_independent() {
        let mut board = RevealBoard::new(&RevealConfig::default());
        board.observe(SectionId::About, 1.0);

        for section in SectionId::ALL {
            assert_eq!(board.is_revealed(section), section == SectionId::About);
        }
    }

    #[test]
    fn clients_scenario_reveals_with_stagger_and_no_replay() {
        let config = RevealConfig {
            clients: 0.2,
            ..RevealConfig::default()
        };
        let mut board = RevealBoard::new(&config);

        assert!(board.observe(SectionId::Clients, 0.25).is_revealed());
        let delays: Vec<_> = (0..4)
            .map(|i| stagger_delay(i, config.stagger_step()))
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ]
        );

        assert!(!board.observe(SectionId::Clients, 0.0).is_revealed());
        assert!(!board.observe(SectionId::Clients, 0.9).is_revealed());
        assert!(board.is_revealed(SectionId::Clients));
    }

    #[test]
    fn board_reports_configured_thresholds() {
        let board = RevealBoard::new(&RevealConfig::default());
        assert_eq!(board.threshold(SectionId::Clients), 0.15);
        assert_eq!(board.threshold(SectionId::Vision), 0.3);
    }

    #[test]
    fn tall_section_reveals_by_viewport_coverage() {
        // 2200px section on a 400px landscape viewport: its own ratio tops
        // out at 400 / 2200, below the 0.2 threshold.
        let mut board = RevealBoard::new(&RevealConfig::default());
        let ratio = 400.0 / 2200.0;
        assert!(!board.observe(SectionId::Expertise, ratio).is_revealed());

        let seen = visibility(110.0 / 2200.0, 110.0, 400.0);
        assert!(board.observe(SectionId::Expertise, seen).is_revealed());
    }

    #[test]
    fn visibility_keeps_ratio_for_short_sections() {
        // 300px section, half visible on a 1000px viewport.
        assert_eq!(visibility(0.5, 150.0, 1000.0), 0.5);
        assert_eq!(visibility(0.5, 150.0, 0.0), 0.5);
        assert_eq!(visibility(f64::NAN, 500.0, 1000.0), 0.5);
    }

    #[test]
    fn observer_thresholds_step_up_to_latch() {
        let steps = observer_thresholds(0.2);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps.first(), Some(&0.0));
        assert_eq!(steps.last(), Some(&0.2));
        assert!(steps.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(observer_thresholds(2.0).last(), Some(&1.0));
    }

    #[test]
    fn stagger_saturates_instead_of_overflowing() {
        let delay = stagger_delay(usize::MAX, Duration::from_secs(u64::MAX / 2));
        assert_eq!(delay, Duration::MAX);
    }

    #[test]
    fn hidden_pose_is_transparent_and_offset() {
        let style = reveal_style(
            Pose::Hidden,
            Entrance::FromLeft,
            Duration::ZERO,
            Duration::from_millis(700),
        );
        assert!(style.starts_with("opacity: 0; transform: translate3d(-50px, 0, 0);"));
        assert!(style.contains("opacity 700ms ease-out 0ms"));
    }

    #[test]
    fn resting_pose_carries_delay() {
        let style = reveal_style(
            Pose::from_revealed(true),
            Entrance::FromBelow,
            Duration::from_millis(300),
            Duration::from_millis(500),
        );
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("transform 500ms ease-out 300ms"));
    }
}
