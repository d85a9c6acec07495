//! Shared eyebrow + title heading with a once-per-viewport blur-up reveal.

use leptos::prelude::*;

use crate::motion::{reveal_class, use_in_view, use_reduced_motion};

#[component]
pub fn SectionHeading(eyebrow: &'static str, title: &'static str) -> impl IntoView {
    let reduce = use_reduced_motion();
    let (wrapper, in_view) = use_in_view(0.5, true);

    view! {
        <div class="section-heading" node_ref=wrapper>
            <p
                class=reveal_class("section-eyebrow reveal", in_view, reduce)
                style="--reveal-duration: 0.6s"
            >
                {eyebrow}
            </p>
            <h3
                class=reveal_class("section-title reveal", in_view, reduce)
                // The title lags the eyebrow slightly so the pair reads
                // top-down.
                style="--reveal-duration: 0.6s; transition-delay: 0.05s"
            >
                {title}
            </h3>
        </div>
    }
}
