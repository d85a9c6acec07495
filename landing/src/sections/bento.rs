//! Bento grid with scroll-direction-aware reveals.
//!
//! Cards replay their reveal on every viewport entry, sliding up when the
//! user scrolls down and down when the user scrolls up. The two
//! half-width cards swap viewport thresholds and stagger delays on a
//! direction flip so their order of appearance inverts.

use leptos::prelude::*;
use tempo_motion::{bento_reveal_timing, DirectionTracker, RevealDirection};

use crate::motion::{on_window_scroll, use_in_view_with, use_reduced_motion};
use crate::sections::SectionHeading;
use crate::types::{BentoItem, Content};

#[component]
pub fn Bento() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let direction = RwSignal::new(RevealDirection::Down);
    let tracker = StoredValue::new(DirectionTracker::new());

    Effect::new(move || {
        on_window_scroll(move |sample| {
            tracker.update_value(|t| {
                if let Some(changed) = t.observe(sample.delta) {
                    direction.set(changed);
                }
            });
        });
    });

    let cards: Vec<_> = content
        .bento
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, item)| {
            view! { <BentoCard idx=idx item=item direction=direction reduce=reduce /> }
        })
        .collect();

    view! {
        <section id="bento">
            <div class="bento">
                <SectionHeading eyebrow="Benefits" title="It does a lot of things" />
                <div class="bento-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn BentoCard(
    idx: usize,
    item: BentoItem,
    direction: RwSignal<RevealDirection>,
    reduce: bool,
) -> impl IntoView {
    // The observer reports on every amount the card can need; which one is
    // required follows the live scroll direction.
    let (card_ref, in_view) = use_in_view_with(
        vec![0.25, 0.35, 0.52],
        move || bento_reveal_timing(idx, direction.get_untracked()).viewport_amount,
        false,
    );

    let full = item.full_width;
    let card_class = move || {
        let mut class = String::from("bento-card reveal-dir");
        if full {
            class.push_str(" full");
        }
        if reduce || in_view.get() {
            class.push_str(" is-visible");
        }
        class
    };

    let card_style = move || {
        let dir = direction.get();
        let timing = bento_reveal_timing(idx, dir);
        let shift = match dir {
            RevealDirection::Down => "28px",
            RevealDirection::Up => "-28px",
        };
        format!(
            "--reveal-shift: {shift}; transition-delay: {}s",
            timing.delay
        )
    };

    view! {
        <div node_ref=card_ref class=card_class style=card_style>
            <h2>{item.title.clone()}</h2>
            <p>{item.content.clone()}</p>
            <img src=item.image.clone() alt=item.image_alt.clone() draggable="false" />
        </div>
    }
}
