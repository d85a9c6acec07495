//! Hero section: one-shot entrance choreography plus scroll-linked
//! device alignment.
//!
//! The entrance timeline and the alignment spring are owned here and
//! driven by a restartable animation-frame loop. The loop parks itself
//! once the entrance has finished and the spring has settled; scroll
//! events wake it up again when they retarget the spring.

use leptos::html::Section;
use leptos::prelude::*;
use tempo_motion::{
    side_image_offset, AlignProgress, EntranceTimeline, SideImageFrame,
    SIDE_IMAGE_BASE_OFFSETS,
};

use crate::motion::{now_seconds, on_window_scroll, raf_loop, use_reduced_motion};
use crate::types::Content;

/// Every hero animated value, single writer.
struct HeroMotion {
    intro: EntranceTimeline,
    intro_started_at: Option<f64>,
    align: AlignProgress,
    last_tick: Option<f64>,
}

impl HeroMotion {
    fn new(reduce: bool) -> Self {
        Self {
            intro: EntranceTimeline::new(reduce),
            intro_started_at: None,
            align: AlignProgress::new(),
            last_tick: None,
        }
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let section_ref = NodeRef::<Section>::new();
    let motion = StoredValue::new(HeroMotion::new(reduce));
    let frame = RwSignal::new(motion.with_value(|m| m.intro.sample(0.0)));
    let align_t = RwSignal::new(0.0);
    let loop_running = StoredValue::new(false);

    let ensure_loop = move || {
        if loop_running.get_value() {
            return;
        }
        loop_running.set_value(true);
        raf_loop(move |now| {
            let mut active = true;
            motion.update_value(|m| {
                let dt = m
                    .last_tick
                    .map(|t| (now - t).clamp(0.0, 0.1))
                    .unwrap_or(1.0 / 60.0);
                m.last_tick = Some(now);

                let elapsed = now - m.intro_started_at.unwrap_or(now);
                frame.set(m.intro.sample(elapsed));
                align_t.set(m.align.step(dt));

                active = !(m.intro.is_complete(elapsed) && m.align.is_settled());
            });
            if !active {
                loop_running.set_value(false);
                motion.update_value(|m| m.last_tick = None);
            }
            active
        });
    };

    // Play the entrance. The timeline's latch makes this idempotent, so a
    // replayed effect cannot restart the sequence mid-flight.
    Effect::new(move || {
        let mut armed = false;
        motion.update_value(|m| armed = m.intro.start());
        if !armed {
            return;
        }
        motion.update_value(|m| m.intro_started_at = Some(now_seconds()));
        ensure_loop();
    });

    // Scroll retargets the alignment spring. Hero-local progress is the
    // fraction of the section scrolled past its own top edge.
    Effect::new(move || {
        on_window_scroll(move |_sample| {
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let rect = section.get_bounding_client_rect();
            let progress = (-rect.top() / rect.height().max(1.0)).clamp(0.0, 1.0);
            motion.update_value(|m| m.align.set_scroll_progress(progress));
            ensure_loop();
        });
    });

    let icon_style = move || {
        let f = frame.get();
        if reduce {
            return String::from("transform: none");
        }
        format!(
            "transform: translateY({:.2}px) scale({:.3})",
            f.icon_y, f.icon_scale
        )
    };
    let name_style = text_style(move || frame.get().name, reduce);
    let headline_style = text_style(move || frame.get().headline, reduce);
    let subtitle_style = text_style(move || frame.get().subtitle, reduce);
    let cta_style = text_style(move || frame.get().cta, reduce);

    let devices: Vec<_> = content
        .hero
        .device_images
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, src)| {
            let base = SIDE_IMAGE_BASE_OFFSETS.get(idx).copied().unwrap_or(0.0);
            view! {
                <HeroDevice src=src idx=idx base_offset=base frame=frame align_t=align_t reduce=reduce />
            }
        })
        .collect();

    let name = content.name.clone();
    let headline = content.hero.headline.clone();
    let subtitle = content.hero.subtitle.clone();
    let icon = content.hero.icon.clone();
    let cta_label = content.cta_label.clone();

    view! {
        <section id="hero" node_ref=section_ref>
            <div class="hero-viewport">
                <div class="hero-main">
                    <div class="hero-icon-badge" style=icon_style>
                        <img src=icon alt="" draggable="false" />
                    </div>

                    <div class="hero-name" style=name_style>{name}</div>

                    <div class="hero-copy">
                        <h1 class="hero-headline" style=headline_style>{headline}</h1>
                        <p class="hero-subtitle" style=subtitle_style>{subtitle}</p>
                        <div class="hero-cta-row" style=cta_style>
                            <a class="btn btn-primary" href="#pricing">{cta_label}</a>
                        </div>
                    </div>

                    <div class="hero-devices">
                        <div class="hero-device-row">{devices}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Inline style closure for one text block's reveal values.
fn text_style(
    frame: impl Fn() -> tempo_motion::TextFrame + Send + Sync + 'static,
    reduce: bool,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if reduce {
            return String::from("opacity: 1");
        }
        let t = frame();
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px); filter: blur({:.2}px)",
            t.opacity, t.y, t.blur
        )
    }
}

/// One flanking device shot.
///
/// The wrapper carries the scroll-linked alignment offset; the image
/// carries the one-shot intro translation and fade. Different writers,
/// different elements.
#[component]
fn HeroDevice(
    src: String,
    idx: usize,
    base_offset: f64,
    frame: RwSignal<tempo_motion::HeroFrame>,
    align_t: RwSignal<f64>,
    reduce: bool,
) -> impl IntoView {
    let wrapper_style = move || {
        if reduce {
            return String::from("transform: none");
        }
        format!(
            "transform: translateY({:.2}px)",
            side_image_offset(base_offset, align_t.get())
        )
    };

    let image_style = move || {
        let f = frame
            .get()
            .side_images
            .get(idx)
            .copied()
            .unwrap_or_else(SideImageFrame::at_rest);
        if reduce {
            return String::from("opacity: 1");
        }
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px)",
            f.opacity, f.x, f.y
        )
    };

    view! {
        <div class="hero-device" style=wrapper_style>
            <img src=src alt="App screenshot" style=image_style draggable="false" />
        </div>
    }
}
