//! Masonry testimonial wall with staggered once reveals.

use leptos::prelude::*;

use crate::motion::{use_in_view, use_reduced_motion};
use crate::sections::SectionHeading;
use crate::types::{Content, Testimonial};

#[component]
pub fn Testimonials() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let cards: Vec<_> = content
        .testimonials
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, quote)| view! { <TestimonialCard idx=idx quote=quote reduce=reduce /> })
        .collect();

    view! {
        <section id="testimonials">
            <div class="testimonials">
                <SectionHeading eyebrow="Testimonials" title="What our users say" />
                <div class="testimonial-columns">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(idx: usize, quote: Testimonial, reduce: bool) -> impl IntoView {
    let (card_ref, in_view) = use_in_view(0.4, true);

    let class = move || {
        if reduce || in_view.get() {
            "testimonial-card reveal is-visible"
        } else {
            "testimonial-card reveal"
        }
    };
    let stagger = format!("transition-delay: {}s", idx as f64 * 0.04);

    view! {
        <div node_ref=card_ref class=class style=stagger>
            <div class="testimonial-person">
                <img src=quote.image.clone() alt=quote.name.clone() draggable="false" />
                <div>
                    <h3>{quote.name.clone()}</h3>
                    <p>{quote.role.clone()}</p>
                </div>
            </div>
            <p>{quote.text.clone()}</p>
        </div>
    }
}
