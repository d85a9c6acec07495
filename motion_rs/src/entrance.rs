//! The hero entrance timeline.
//!
//! A one-shot, time-ordered schedule that drives the hero's icon, name,
//! headline, subtitle, call-to-action, and five side images from their
//! initial states to rest. The timeline owns every animated value it
//! mutates — there is exactly one writer per value — and is sampled by
//! elapsed time each frame.

use serde::{Deserialize, Serialize};

use crate::tween::{TextFrame, TextReveal, Tween};

/// Number of device images flanking the hero copy.
pub const SIDE_IMAGE_COUNT: usize = 5;

/// Per-image reveal delays in seconds, symmetric around the center image.
pub const SIDE_IMAGE_DELAYS: [f64; SIDE_IMAGE_COUNT] = [0.62, 0.55, 0.48, 0.55, 0.62];

/// Horizontal intro offsets in px: outer images slide in from the sides.
pub const SIDE_IMAGE_INTRO_X: [f64; SIDE_IMAGE_COUNT] = [-90.0, -45.0, 0.0, 45.0, 90.0];

/// Vertical intro offsets in px: the center image fades in "up".
pub const SIDE_IMAGE_INTRO_Y: [f64; SIDE_IMAGE_COUNT] = [0.0, 0.0, 40.0, 0.0, 0.0];

const ICON_INTRO_SCALE: f64 = 4.5;
const ICON_INTRO_Y: f64 = 140.0;
const ICON_DURATION: f64 = 1.6;

const SIDE_IMAGE_FADE_DURATION: f64 = 1.1;
const SIDE_IMAGE_SLIDE_DURATION: f64 = 1.2;

/// Snapshot of one side image's intro state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideImageFrame {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl SideImageFrame {
    pub fn at_rest() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
        }
    }
}

/// Snapshot of every entrance-animated value, read by the view each paint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroFrame {
    pub icon_scale: f64,
    pub icon_y: f64,
    pub name: TextFrame,
    pub headline: TextFrame,
    pub subtitle: TextFrame,
    pub cta: TextFrame,
    pub side_images: [SideImageFrame; SIDE_IMAGE_COUNT],
}

impl HeroFrame {
    /// Every value at its rest state.
    pub fn at_rest() -> Self {
        Self {
            icon_scale: 1.0,
            icon_y: 0.0,
            name: TextFrame::at_rest(),
            headline: TextFrame::at_rest(),
            subtitle: TextFrame::at_rest(),
            cta: TextFrame::at_rest(),
            side_images: [SideImageFrame::at_rest(); SIDE_IMAGE_COUNT],
        }
    }
}

/// The one-shot hero entrance sequence.
///
/// Constructed at mount with the reduced-motion flag. With reduced motion
/// every value resolves to rest immediately — zero duration, no
/// intermediate frames. Otherwise [`EntranceTimeline::start`] arms the
/// fixed schedule; the latch makes re-entry a no-op, so the sequence runs
/// at most once per page load no matter how many times the initiating
/// lifecycle hook fires.
///
/// There is no cancellation surface: dropping the timeline abandons any
/// in-flight animation.
#[derive(Clone, Debug)]
pub struct EntranceTimeline {
    reduced_motion: bool,
    started: bool,
    icon_scale: Tween,
    icon_y: Tween,
    name: TextReveal,
    headline: TextReveal,
    subtitle: TextReveal,
    cta: TextReveal,
    image_opacity: [Tween; SIDE_IMAGE_COUNT],
    image_x: [Tween; SIDE_IMAGE_COUNT],
    image_y: [Tween; SIDE_IMAGE_COUNT],
}

impl EntranceTimeline {
    pub fn new(reduced_motion: bool) -> Self {
        let mut image_opacity = [Tween::at_rest(1.0); SIDE_IMAGE_COUNT];
        let mut image_x = [Tween::at_rest(0.0); SIDE_IMAGE_COUNT];
        let mut image_y = [Tween::at_rest(0.0); SIDE_IMAGE_COUNT];
        for i in 0..SIDE_IMAGE_COUNT {
            let delay = SIDE_IMAGE_DELAYS[i];
            image_opacity[i] = Tween::new(0.0, 1.0, SIDE_IMAGE_FADE_DURATION, delay);
            image_x[i] = Tween::new(SIDE_IMAGE_INTRO_X[i], 0.0, SIDE_IMAGE_SLIDE_DURATION, delay);
            image_y[i] = Tween::new(SIDE_IMAGE_INTRO_Y[i], 0.0, SIDE_IMAGE_SLIDE_DURATION, delay);
        }

        Self {
            reduced_motion,
            started: false,
            icon_scale: Tween::new(ICON_INTRO_SCALE, 1.0, ICON_DURATION, 0.0),
            icon_y: Tween::new(ICON_INTRO_Y, 0.0, ICON_DURATION, 0.0),
            name: TextReveal::new(0.25, 0.7, 10.0, 10.0),
            headline: TextReveal::new(0.3, 0.9, 24.0, 16.0),
            subtitle: TextReveal::new(0.42, 0.9, 24.0, 16.0),
            cta: TextReveal::new(0.58, 0.8, 24.0, 16.0),
            image_opacity,
            image_x,
            image_y,
        }
    }

    /// Arm the schedule. Returns `true` the first time only; later calls
    /// leave the running sequence untouched.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Sample every animated value at `elapsed` seconds since start.
    ///
    /// Reduced motion always yields the rest frame. Before [`start`] the
    /// initial frame is returned regardless of `elapsed`.
    ///
    /// [`start`]: EntranceTimeline::start
    pub fn sample(&self, elapsed: f64) -> HeroFrame {
        if self.reduced_motion {
            return HeroFrame::at_rest();
        }
        let elapsed = if self.started { elapsed } else { 0.0 };

        let mut side_images = [SideImageFrame::at_rest(); SIDE_IMAGE_COUNT];
        for i in 0..SIDE_IMAGE_COUNT {
            side_images[i] = SideImageFrame {
                x: self.image_x[i].sample(elapsed),
                y: self.image_y[i].sample(elapsed),
                opacity: self.image_opacity[i].sample(elapsed),
            };
        }

        HeroFrame {
            icon_scale: self.icon_scale.sample(elapsed),
            icon_y: self.icon_y.sample(elapsed),
            name: self.name.sample(elapsed),
            headline: self.headline.sample(elapsed),
            subtitle: self.subtitle.sample(elapsed),
            cta: self.cta.sample(elapsed),
            side_images,
        }
    }

    /// True once every tween has reached its target.
    pub fn is_complete(&self, elapsed: f64) -> bool {
        if self.reduced_motion {
            return true;
        }
        if !self.started {
            return false;
        }
        self.icon_scale.is_complete(elapsed)
            && self.icon_y.is_complete(elapsed)
            && self.name.is_complete(elapsed)
            && self.headline.is_complete(elapsed)
            && self.subtitle.is_complete(elapsed)
            && self.cta.is_complete(elapsed)
            && self
                .image_opacity
                .iter()
                .chain(self.image_x.iter())
                .chain(self.image_y.iter())
                .all(|t| t.is_complete(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reduced_motion_is_at_rest_immediately() {
        let mut timeline = EntranceTimeline::new(true);
        timeline.start();

        // No intermediate frames at any sampling time.
        for elapsed in [0.0, 0.01, 0.5, 2.0] {
            assert_eq!(timeline.sample(elapsed), HeroFrame::at_rest());
        }
        assert!(timeline.is_complete(0.0));
    }

    #[test]
    fn starts_exactly_once() {
        let mut timeline = EntranceTimeline::new(false);
        assert!(timeline.start());
        // Duplicate lifecycle invocation: the second call must not re-arm.
        assert!(!timeline.start());
        assert!(timeline.has_started());
    }

    #[test]
    fn holds_initial_frame_before_start() {
        let timeline = EntranceTimeline::new(false);
        let frame = timeline.sample(5.0);
        assert_eq!(frame.icon_scale, 4.5);
        assert_eq!(frame.icon_y, 140.0);
        assert_eq!(frame.headline.opacity, 0.0);
        assert_eq!(frame.side_images[0].x, -90.0);
        assert_eq!(frame.side_images[2].y, 40.0);
    }

    #[test]
    fn schedule_is_ordered_and_settles() {
        let mut timeline = EntranceTimeline::new(false);
        timeline.start();

        // At 0.28s the name reveal is underway but the headline still waits.
        let early = timeline.sample(0.28);
        assert!(early.name.opacity > 0.0);
        assert_eq!(early.headline.opacity, 0.0);

        // Longest chain: outer images, 0.62 delay + 1.2 slide.
        assert!(!timeline.is_complete(1.81));
        assert!(timeline.is_complete(1.82));
        assert_eq!(timeline.sample(2.0), HeroFrame::at_rest());
    }

    #[test]
    fn image_delays_are_symmetric_about_center() {
        for i in 0..SIDE_IMAGE_COUNT {
            let mirror = SIDE_IMAGE_COUNT - 1 - i;
            assert_eq!(SIDE_IMAGE_DELAYS[i], SIDE_IMAGE_DELAYS[mirror]);
            assert_eq!(SIDE_IMAGE_INTRO_X[i], -SIDE_IMAGE_INTRO_X[mirror]);
        }
        // Center image leads the stagger.
        assert!(SIDE_IMAGE_DELAYS[2] < SIDE_IMAGE_DELAYS[1]);
        assert!(SIDE_IMAGE_DELAYS[1] < SIDE_IMAGE_DELAYS[0]);
    }
}
