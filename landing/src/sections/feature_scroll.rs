//! Three-column device showcase below the hero.
//!
//! The second and third columns start with extra top padding and settle
//! level when they enter the viewport, giving a staggered rise on the way
//! down the page. The padding tween runs in CSS; visibility state runs
//! through an IntersectionObserver.

use leptos::prelude::*;

use crate::motion::{use_in_view, use_reduced_motion};
use crate::sections::SectionHeading;
use crate::types::Content;

#[component]
pub fn FeatureScroll() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let (col_raised, raised_in) = use_in_view(0.35, false);
    let (col_deep, deep_in) = use_in_view(0.62, false);

    let images = content.showcase_images.clone();
    let image = |i: usize| images.get(i).cloned().unwrap_or_default();

    let raised_class = move || {
        if reduce || raised_in.get() {
            "feature-scroll-col col-raised is-settled"
        } else {
            "feature-scroll-col col-raised"
        }
    };
    let deep_class = move || {
        if reduce || deep_in.get() {
            "feature-scroll-col col-deep is-settled"
        } else {
            "feature-scroll-col col-deep"
        }
    };

    view! {
        <section id="feature-scroll">
            <div class="feature-scroll">
                <SectionHeading eyebrow="Experience" title="An app unlike any other" />
                <div class="feature-scroll-grid">
                    <div class="feature-scroll-col">
                        <img src=image(0) alt="App screen 1" draggable="false" />
                    </div>
                    <div class=raised_class node_ref=col_raised>
                        <img src=image(1) alt="App screen 2" draggable="false" />
                    </div>
                    <div class=deep_class node_ref=col_deep>
                        <img src=image(2) alt="App screen 3" draggable="false" />
                    </div>
                </div>
            </div>
        </section>
    }
}
