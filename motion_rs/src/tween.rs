//! Time-sampled value transitions.
//!
//! A [`Tween`] is one Timeline Step: a (target, duration, delay, easing)
//! record applied to a single animated value. Tweens are stateless — they
//! are sampled by elapsed time rather than integrated, so a dropped frame
//! never desynchronizes related values.

use serde::{Deserialize, Serialize};

use crate::easing::{Easing, EASE_OUT};

/// One scheduled transition of a single animated value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Seconds after timeline start before the transition begins.
    pub delay: f64,
    /// Transition length in seconds. Zero means the value snaps to `to`
    /// as soon as the delay expires.
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, delay: f64) -> Self {
        Self {
            from,
            to,
            delay,
            duration,
            easing: EASE_OUT,
        }
    }

    /// A tween that is already at its target: zero duration, no delay.
    pub fn at_rest(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            delay: 0.0,
            duration: 0.0,
            easing: EASE_OUT,
        }
    }

    /// Value at `elapsed` seconds since timeline start.
    ///
    /// Holds `from` through the delay, `to` after completion.
    pub fn sample(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return self.to;
        }
        let progress = self.easing.apply(local / self.duration);
        self.from + (self.to - self.from) * progress
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// A text block's opacity / vertical offset / blur reveal.
///
/// The three tweens share one delay and duration so the block resolves in
/// visual sync — opacity never finishes while the blur is still clearing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextReveal {
    pub opacity: Tween,
    pub y: Tween,
    pub blur: Tween,
}

/// Snapshot of a [`TextReveal`] at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub opacity: f64,
    /// Vertical offset in px, positive is down.
    pub y: f64,
    /// Blur radius in px.
    pub blur: f64,
}

impl TextFrame {
    pub fn at_rest() -> Self {
        Self {
            opacity: 1.0,
            y: 0.0,
            blur: 0.0,
        }
    }
}

impl TextReveal {
    /// Reveal from (opacity 0, `y_from` px down, `blur_from` px blur) to
    /// rest, with one shared delay and duration.
    pub fn new(delay: f64, duration: f64, y_from: f64, blur_from: f64) -> Self {
        Self {
            opacity: Tween::new(0.0, 1.0, duration, delay),
            y: Tween::new(y_from, 0.0, duration, delay),
            blur: Tween::new(blur_from, 0.0, duration, delay),
        }
    }

    pub fn at_rest() -> Self {
        Self {
            opacity: Tween::at_rest(1.0),
            y: Tween::at_rest(0.0),
            blur: Tween::at_rest(0.0),
        }
    }

    pub fn sample(&self, elapsed: f64) -> TextFrame {
        TextFrame {
            opacity: self.opacity.sample(elapsed),
            y: self.y.sample(elapsed),
            blur: self.blur.sample(elapsed),
        }
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        self.opacity.is_complete(elapsed)
            && self.y.is_complete(elapsed)
            && self.blur.is_complete(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn holds_start_value_through_delay() {
        let tween = Tween::new(24.0, 0.0, 0.9, 0.3);
        assert_eq!(tween.sample(0.0), 24.0);
        assert_eq!(tween.sample(0.29), 24.0);
    }

    #[test]
    fn reaches_target_after_duration() {
        let tween = Tween::new(24.0, 0.0, 0.9, 0.3);
        assert_eq!(tween.sample(1.2), 0.0);
        assert_eq!(tween.sample(10.0), 0.0);
        assert!(tween.is_complete(1.2));
        assert!(!tween.is_complete(1.19));
    }

    #[test]
    fn zero_duration_snaps_after_delay() {
        let tween = Tween {
            duration: 0.0,
            ..Tween::new(1.0, 0.0, 0.0, 0.5)
        };
        assert_eq!(tween.sample(0.4), 1.0);
        assert_eq!(tween.sample(0.6), 0.0);
    }

    #[test]
    fn rest_tween_never_moves() {
        let tween = Tween::at_rest(1.0);
        for elapsed in [0.0, 0.1, 3.0] {
            assert_eq!(tween.sample(elapsed), 1.0);
        }
        assert!(tween.is_complete(0.0));
    }

    #[test]
    fn text_reveal_shares_delay() {
        let reveal = TextReveal::new(0.42, 0.9, 24.0, 16.0);
        assert_eq!(reveal.opacity.delay, reveal.y.delay);
        assert_eq!(reveal.opacity.delay, reveal.blur.delay);

        // Mid-flight, all three values are strictly between endpoints.
        let mid = reveal.sample(0.42 + 0.45);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 24.0);
        assert!(mid.blur > 0.0 && mid.blur < 16.0);

        // And they complete together.
        let done = reveal.sample(0.42 + 0.9);
        assert_eq!(done, TextFrame::at_rest());
    }
}
