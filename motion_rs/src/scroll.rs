//! Scroll-linked transform mapping.
//!
//! Everything here is recomputed synchronously inside scroll callbacks:
//! header visibility, the hero's spring-smoothed alignment progress, and
//! the reveal direction used to invert stagger order on upward scrolls.

use serde::{Deserialize, Serialize};

use crate::spring::{Spring, SpringConfig};

/// Scroll delta (px) past which a downward scroll hides the header.
pub const HIDE_DELTA: f64 = 6.0;
/// Absolute offset (px) the page must have scrolled before hiding kicks in.
pub const HIDE_OFFSET: f64 = 80.0;
/// Near-top offset (px) below which the header is always shown.
pub const SHOW_NEAR_TOP: f64 = 10.0;
/// Offset (px) past which the header hairline fades in.
pub const HAIRLINE_OFFSET: f64 = 2.0;

/// Scroll deltas smaller than this are treated as noise when tracking
/// reveal direction.
pub const DIRECTION_NOISE_FLOOR: f64 = 1.0;

/// Hero-local scroll progress at which alignment completes.
pub const ALIGN_INPUT_END: f64 = 0.28;

/// Baseline downward offsets (px) for the five hero side images,
/// symmetric about the center image, which never moves.
pub const SIDE_IMAGE_BASE_OFFSETS: [f64; 5] = [100.0, 50.0, 0.0, 50.0, 100.0];

/// The current scroll offset and its delta from the previous sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    pub offset: f64,
    pub delta: f64,
}

/// Turns a stream of raw scroll offsets into [`ScrollSample`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, offset: f64) -> ScrollSample {
        let delta = offset - self.last_offset;
        self.last_offset = offset;
        ScrollSample { offset, delta }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderState {
    Visible,
    Hidden,
}

/// Header visibility state machine.
///
/// Hide on scroll down, show on scroll up. States {Visible, Hidden},
/// initial Visible, no terminal state. With reduced motion the header
/// never hides, though the hairline flag still tracks offset.
#[derive(Clone, Copy, Debug)]
pub struct HeaderVisibility {
    state: HeaderState,
    scrolled: bool,
    reduced_motion: bool,
}

impl HeaderVisibility {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            state: HeaderState::Visible,
            scrolled: false,
            reduced_motion,
        }
    }

    /// Feed one scroll sample; returns the state after the transition.
    pub fn observe(&mut self, sample: ScrollSample) -> HeaderState {
        self.scrolled = sample.offset > HAIRLINE_OFFSET;
        if self.reduced_motion {
            return self.state;
        }

        if sample.offset < SHOW_NEAR_TOP {
            self.state = HeaderState::Visible;
            return self.state;
        }
        if sample.delta > HIDE_DELTA && sample.offset > HIDE_OFFSET {
            self.state = HeaderState::Hidden;
        }
        if sample.delta < -HIDE_DELTA {
            self.state = HeaderState::Visible;
        }
        self.state
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == HeaderState::Hidden
    }

    /// True once the page has scrolled past the hairline threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Spring-smoothed vertical alignment progress for the hero side images.
///
/// Hero-local scroll progress in [0, [`ALIGN_INPUT_END`]] maps to a target
/// in [0, 1]; the published value chases the target through a
/// critically-damped-feeling spring so alignment settles rather than
/// snapping.
#[derive(Clone, Copy, Debug)]
pub struct AlignProgress {
    spring: Spring,
}

impl AlignProgress {
    pub fn new() -> Self {
        Self {
            spring: Spring::new(SpringConfig::hero_align(), 0.0),
        }
    }

    /// Update the target from hero-local scroll progress (0 at the hero's
    /// top edge, 1 when it has scrolled past).
    pub fn set_scroll_progress(&mut self, hero_progress: f64) {
        let target = (hero_progress / ALIGN_INPUT_END).clamp(0.0, 1.0);
        self.spring.set_target(target);
    }

    /// Advance the smoothing by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        self.spring.step(dt);
        self.spring.value()
    }

    pub fn value(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

impl Default for AlignProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Side-image vertical offset at alignment progress `t`.
///
/// `offset(base, 0) == base`, `offset(base, 1) == 0`; the center image
/// (base 0) never moves.
pub fn side_image_offset(base: f64, t: f64) -> f64 {
    base * (1.0 - t)
}

/// Which way the user is scrolling; used to invert reveal stagger order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealDirection {
    Down,
    Up,
}

impl RevealDirection {
    /// +1 for down, -1 for up.
    pub fn sign(self) -> f64 {
        match self {
            RevealDirection::Down => 1.0,
            RevealDirection::Up => -1.0,
        }
    }
}

/// Tracks the sign of the scroll delta, ignoring sub-pixel noise.
#[derive(Clone, Copy, Debug)]
pub struct DirectionTracker {
    current: RevealDirection,
}

impl DirectionTracker {
    pub fn new() -> Self {
        Self {
            current: RevealDirection::Down,
        }
    }

    /// Feed a scroll delta. Returns `Some(new_direction)` only on a
    /// direction change; deltas under the noise floor are ignored.
    pub fn observe(&mut self, delta: f64) -> Option<RevealDirection> {
        if delta.abs() < DIRECTION_NOISE_FLOOR {
            return None;
        }
        let next = if delta > 0.0 {
            RevealDirection::Down
        } else {
            RevealDirection::Up
        };
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    pub fn current(&self) -> RevealDirection {
        self.current
    }
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Viewport amount and stagger delay for one bento card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Fraction of the card that must be visible before it reveals.
    pub viewport_amount: f64,
    /// Seconds of stagger before the reveal starts.
    pub delay: f64,
}

/// Reveal timing for bento card `idx` given the scroll direction.
///
/// Cards 1 and 2 swap thresholds and stagger when the direction flips, so
/// their order of appearance inverts on upward scrolls. The full-width
/// cards keep a fixed timing.
pub fn bento_reveal_timing(idx: usize, direction: RevealDirection) -> RevealTiming {
    let down = direction == RevealDirection::Down;
    match idx {
        1 => RevealTiming {
            viewport_amount: if down { 0.25 } else { 0.52 },
            delay: if down { 0.02 } else { 0.12 },
        },
        2 => RevealTiming {
            viewport_amount: if down { 0.52 } else { 0.25 },
            delay: if down { 0.12 } else { 0.02 },
        },
        _ => RevealTiming {
            viewport_amount: 0.35,
            delay: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_hides_past_threshold_and_returns_on_scroll_up() {
        let mut tracker = ScrollTracker::new();
        let mut header = HeaderVisibility::new(false);

        // Offsets [0, 5, 90, 100]: deltas +0, +5, +85, +10.
        assert_eq!(header.observe(tracker.sample(0.0)), HeaderState::Visible);
        assert_eq!(header.observe(tracker.sample(5.0)), HeaderState::Visible);
        header.observe(tracker.sample(90.0));
        assert_eq!(header.observe(tracker.sample(100.0)), HeaderState::Hidden);

        // A drift under the threshold holds; a real upward scroll shows.
        assert_eq!(header.observe(tracker.sample(95.0)), HeaderState::Hidden);
        assert_eq!(header.observe(tracker.sample(80.0)), HeaderState::Visible);
    }

    #[test]
    fn header_always_visible_near_top() {
        let mut header = HeaderVisibility::new(false);
        header.observe(ScrollSample {
            offset: 100.0,
            delta: 50.0,
        });
        assert!(header.is_hidden());
        header.observe(ScrollSample {
            offset: 5.0,
            delta: 2.0,
        });
        assert_eq!(header.state(), HeaderState::Visible);
    }

    #[test]
    fn header_never_hides_with_reduced_motion() {
        let mut header = HeaderVisibility::new(true);
        header.observe(ScrollSample {
            offset: 300.0,
            delta: 40.0,
        });
        assert_eq!(header.state(), HeaderState::Visible);
        // The hairline flag still tracks the offset.
        assert!(header.is_scrolled());
    }

    #[test]
    fn holds_state_between_thresholds() {
        let mut header = HeaderVisibility::new(false);
        header.observe(ScrollSample {
            offset: 200.0,
            delta: 10.0,
        });
        assert!(header.is_hidden());
        // Small drifting deltas hold the previous state.
        header.observe(ScrollSample {
            offset: 198.0,
            delta: -2.0,
        });
        assert!(header.is_hidden());
        header.observe(ScrollSample {
            offset: 202.0,
            delta: 4.0,
        });
        assert!(header.is_hidden());
    }

    #[test]
    fn side_image_offsets_match_endpoints() {
        for base in SIDE_IMAGE_BASE_OFFSETS {
            assert_eq!(side_image_offset(base, 0.0), base);
            assert_eq!(side_image_offset(base, 1.0), 0.0);
        }
        // Center image has base 0 and never moves.
        assert_eq!(side_image_offset(SIDE_IMAGE_BASE_OFFSETS[2], 0.5), 0.0);
    }

    #[test]
    fn align_progress_maps_and_settles() {
        let mut align = AlignProgress::new();
        align.set_scroll_progress(0.14); // halfway through the input range
        for _ in 0..600 {
            align.step(1.0 / 60.0);
        }
        assert!((align.value() - 0.5).abs() < 1e-2);

        align.set_scroll_progress(1.0); // clamps to 1
        for _ in 0..600 {
            align.step(1.0 / 60.0);
        }
        assert!((align.value() - 1.0).abs() < 1e-2);
        assert!(align.is_settled());
    }

    #[test]
    fn direction_tracker_ignores_noise() {
        let mut tracker = DirectionTracker::new();
        assert_eq!(tracker.observe(0.5), None);
        assert_eq!(tracker.observe(-0.9), None);
        assert_eq!(tracker.current(), RevealDirection::Down);

        assert_eq!(tracker.observe(-3.0), Some(RevealDirection::Up));
        // Same direction again: no change event.
        assert_eq!(tracker.observe(-10.0), None);
        assert_eq!(tracker.observe(2.0), Some(RevealDirection::Down));
    }

    #[test]
    fn bento_timing_swaps_on_direction_change() {
        let down_1 = bento_reveal_timing(1, RevealDirection::Down);
        let down_2 = bento_reveal_timing(2, RevealDirection::Down);
        let up_1 = bento_reveal_timing(1, RevealDirection::Up);
        let up_2 = bento_reveal_timing(2, RevealDirection::Up);

        // Scrolling up inverts the pair's order of appearance.
        assert_eq!(down_1, up_2);
        assert_eq!(down_2, up_1);
        assert!(down_1.delay < down_2.delay);

        // Full-width cards are direction-independent.
        assert_eq!(
            bento_reveal_timing(0, RevealDirection::Down),
            bento_reveal_timing(0, RevealDirection::Up)
        );
    }
}
