//! # tempo-motion
//!
//! Animation timing core for the Tempo AI landing page.
//!
//! The page has exactly two pieces of non-static logic, and both live
//! here, free of any DOM or framework dependency so they can be tested
//! natively:
//!
//! - **Entrance timeline** — the one-shot choreography played when the
//!   hero first renders: icon shrink+lift, staggered text blur-up reveals,
//!   and five side images sliding in symmetrically.
//! - **Scroll-linked transforms** — values recomputed from the live scroll
//!   position: header visibility, spring-smoothed hero alignment, reveal
//!   direction for stagger inversion, and carousel navigation/wheel
//!   intent.
//!
//! Every animated value has exactly one writer (either the entrance
//! timeline or a scroll mapper, never both) and is owned by the component
//! that constructed it. The view layer samples snapshots each frame and
//! writes them to element styles.
//!
//! ## Quick start
//!
//! ```rust
//! use tempo_motion::{EntranceTimeline, HeroFrame};
//!
//! let mut intro = EntranceTimeline::new(false);
//! intro.start();
//! let frame: HeroFrame = intro.sample(0.5);
//! assert!(frame.name.opacity > 0.0);
//! ```

pub mod carousel;
pub mod easing;
pub mod entrance;
pub mod scroll;
pub mod spring;
pub mod tween;

pub use carousel::{
    centered_index, classify_wheel, navigate, step_index, target_scroll_left, wheel_action,
    NavDirection, SlideSpan, WheelAction, WheelIntent,
};
pub use easing::{Easing, EASE_OUT};
pub use entrance::{
    EntranceTimeline, HeroFrame, SideImageFrame, SIDE_IMAGE_COUNT, SIDE_IMAGE_DELAYS,
};
pub use scroll::{
    bento_reveal_timing, side_image_offset, AlignProgress, DirectionTracker, HeaderState,
    HeaderVisibility, RevealDirection, RevealTiming, ScrollSample, ScrollTracker,
    SIDE_IMAGE_BASE_OFFSETS,
};
pub use spring::{Spring, SpringConfig};
pub use tween::{TextFrame, TextReveal, Tween};
