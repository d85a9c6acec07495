//! Horizontal carousel geometry and wheel-intent classification.
//!
//! The carousel is a native overflow-x scroller; this module only does the
//! math: which slide is centered, where the next navigation lands, and
//! whether a wheel gesture means horizontal or vertical intent. DOM reads
//! and writes stay in the view layer.

use serde::{Deserialize, Serialize};

/// One slide's horizontal extent inside the scroller's content box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideSpan {
    /// Offset of the slide's left edge from the content origin, px.
    pub left: f64,
    pub width: f64,
}

impl SlideSpan {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Index of the slide whose center is closest to the viewport center.
///
/// `None` for an empty slide collection — navigation short-circuits.
pub fn centered_index(slides: &[SlideSpan], scroll_left: f64, viewport_width: f64) -> Option<usize> {
    let viewport_center = scroll_left + viewport_width / 2.0;
    let mut best: Option<(usize, f64)> = None;
    for (i, slide) in slides.iter().enumerate() {
        let distance = (slide.center() - viewport_center).abs();
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Move one slide in `direction`, clamped to the collection bounds.
pub fn step_index(len: usize, current: usize, direction: NavDirection) -> usize {
    match direction {
        NavDirection::Next => (current + 1).min(len.saturating_sub(1)),
        NavDirection::Prev => current.saturating_sub(1),
    }
}

/// Scroll-left that centers `slide` in the viewport, clamped at 0 and
/// rounded to a whole pixel.
pub fn target_scroll_left(slide: SlideSpan, viewport_width: f64) -> f64 {
    (slide.center() - viewport_width / 2.0).round().max(0.0)
}

/// Resolved navigation: the slide index to center and the scroll-left to
/// reach it. `None` when there is nothing to do.
pub fn navigate(
    slides: &[SlideSpan],
    scroll_left: f64,
    viewport_width: f64,
    direction: NavDirection,
) -> Option<(usize, f64)> {
    let current = centered_index(slides, scroll_left, viewport_width)?;
    let next = step_index(slides.len(), current, direction);
    Some((next, target_scroll_left(slides[next], viewport_width)))
}

/// Classified intent of a wheel gesture over the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelIntent {
    Horizontal,
    Vertical,
}

/// Horizontal iff the gesture's horizontal magnitude dominates or the
/// horizontal-scroll modifier is held.
pub fn classify_wheel(delta_x: f64, delta_y: f64, shift_held: bool) -> WheelIntent {
    if shift_held || delta_x.abs() > delta_y.abs() {
        WheelIntent::Horizontal
    } else {
        WheelIntent::Vertical
    }
}

/// What the wheel handler should do with a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum WheelAction {
    /// Consume the event and move the carousel by this many px.
    /// Mouse shift+wheel reports horizontal intent through `delta_y`.
    CarouselBy(f64),
    /// Consume the event and scroll the page by this many px, so the
    /// carousel never traps vertical scrolling.
    PageBy(f64),
    /// Leave the event to the browser's native handling.
    Native,
}

pub fn wheel_action(delta_x: f64, delta_y: f64, shift_held: bool) -> WheelAction {
    match classify_wheel(delta_x, delta_y, shift_held) {
        WheelIntent::Horizontal => {
            if shift_held && delta_x.abs() < 1.0 && delta_y.abs() > 0.0 {
                WheelAction::CarouselBy(delta_y)
            } else {
                WheelAction::Native
            }
        }
        WheelIntent::Vertical => {
            if delta_y.abs() > 0.0 {
                WheelAction::PageBy(delta_y)
            } else {
                WheelAction::Native
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Four equal-width slides laid out flush from the origin.
    fn four_slides(width: f64) -> Vec<SlideSpan> {
        (0..4)
            .map(|i| SlideSpan::new(i as f64 * width, width))
            .collect()
    }

    #[test]
    fn centered_index_finds_nearest_slide() {
        let slides = four_slides(300.0);
        // Viewport 600 centered on slide 1 (center 450).
        assert_eq!(centered_index(&slides, 150.0, 600.0), Some(1));
        // Equidistant slides resolve to the earlier index.
        assert_eq!(centered_index(&slides, 0.0, 600.0), Some(0));
        assert_eq!(centered_index(&[], 0.0, 600.0), None);
    }

    #[test]
    fn next_advances_and_clamps_at_last_slide() {
        let slides = four_slides(300.0);
        let viewport = 600.0;

        // Centered on slide 1; next lands on 2.
        let (idx, left) = navigate(&slides, 150.0, viewport, NavDirection::Next).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(left, 450.0); // center 750 - 300

        // Centered on the last slide: next is a no-op position-wise.
        let at_last = target_scroll_left(slides[3], viewport);
        let (idx, left) = navigate(&slides, at_last, viewport, NavDirection::Next).unwrap();
        assert_eq!(idx, 3);
        assert_eq!(left, at_last);
    }

    #[test]
    fn prev_clamps_at_first_slide() {
        let slides = four_slides(300.0);
        let (idx, left) = navigate(&slides, 0.0, 600.0, NavDirection::Prev).unwrap();
        assert_eq!(idx, 0);
        // Slide 0 center is 150; centering it would need negative
        // scroll-left, clamped to 0.
        assert_eq!(left, 0.0);
    }

    #[test]
    fn empty_collection_is_a_noop() {
        assert_eq!(navigate(&[], 0.0, 600.0, NavDirection::Next), None);
    }

    #[test]
    fn wheel_intent_classification() {
        assert_eq!(classify_wheel(10.0, 2.0, false), WheelIntent::Horizontal);
        assert_eq!(classify_wheel(2.0, 10.0, false), WheelIntent::Vertical);
        // Modifier forces horizontal regardless of magnitudes.
        assert_eq!(classify_wheel(0.0, 10.0, true), WheelIntent::Horizontal);
    }

    #[test]
    fn vertical_intent_forwards_to_page() {
        assert_eq!(wheel_action(2.0, 10.0, false), WheelAction::PageBy(10.0));
        assert_eq!(wheel_action(0.0, 0.0, false), WheelAction::Native);
    }

    #[test]
    fn trackpad_horizontal_uses_native_scrolling() {
        assert_eq!(wheel_action(10.0, 2.0, false), WheelAction::Native);
    }

    #[test]
    fn shift_wheel_maps_vertical_delta_onto_carousel() {
        assert_eq!(wheel_action(0.0, 24.0, true), WheelAction::CarouselBy(24.0));
        // Trackpads report real deltaX under shift; native handles it.
        assert_eq!(wheel_action(8.0, 24.0, true), WheelAction::Native);
    }
}
