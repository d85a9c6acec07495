//! Alternating image/copy highlight rows.
//!
//! Copy slides in from the reading side; the inner heading, paragraph,
//! and button trail the block by small delays. Rows replay their reveal
//! on every viewport entry.

use leptos::prelude::*;

use crate::motion::{use_in_view, use_reduced_motion};
use crate::sections::SectionHeading;
use crate::types::{Content, RowDirection};

#[component]
pub fn FeatureHighlight() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();
    let cta_label = content.cta_label.clone();

    let rows: Vec<_> = content
        .feature_highlights
        .iter()
        .cloned()
        .map(|row| {
            let cta = cta_label.clone();
            view! { <HighlightRow row=row cta_label=cta reduce=reduce /> }
        })
        .collect();

    view! {
        <section id="feature-highlight">
            <div class="feature-highlight">
                <SectionHeading eyebrow="Features" title="Powerful features" />
                {rows}
            </div>
        </section>
    }
}

#[component]
fn HighlightRow(
    row: crate::types::FeatureHighlight,
    cta_label: String,
    reduce: bool,
) -> impl IntoView {
    let (copy_ref, copy_in) = use_in_view(0.35, false);

    let rtl = row.direction == RowDirection::Rtl;
    let row_class = if rtl { "highlight-row rtl" } else { "highlight-row" };
    // Copy enters from the side it reads toward.
    let block_shift = if rtl { "20px" } else { "-20px" };
    let inner_shift = if rtl { "10px" } else { "-10px" };

    let part_class = move |extra: &'static str| {
        let base = format!("reveal-x {extra}");
        move || {
            if reduce || copy_in.get() {
                format!("{base} is-visible")
            } else {
                base.clone()
            }
        }
    };

    view! {
        <div class=row_class>
            <div
                node_ref=copy_ref
                class=part_class("highlight-copy")
                style=format!("--reveal-shift-x: {block_shift}")
            >
                <h2
                    class=part_class("")
                    style=format!("--reveal-shift-x: {inner_shift}; transition-delay: 0.05s")
                >
                    {row.title.clone()}
                </h2>
                <p
                    class=part_class("")
                    style=format!("--reveal-shift-x: {inner_shift}; transition-delay: 0.1s")
                >
                    {row.description.clone()}
                </p>
                <div
                    class=part_class("")
                    style=format!("--reveal-shift-x: {inner_shift}; transition-delay: 0.15s")
                >
                    <a class="btn btn-primary" href="#pricing">{cta_label}</a>
                </div>
            </div>
            <div class="highlight-image">
                <img src=row.image.clone() alt=row.title.clone() draggable="false" />
            </div>
        </div>
    }
}
