//! Single-open FAQ accordion.
//!
//! Plain signal state; the expand/collapse itself is a max-height
//! transition in CSS.

use leptos::prelude::*;

use crate::sections::SectionHeading;
use crate::types::Content;

#[component]
pub fn Faq() -> impl IntoView {
    let content = expect_context::<Content>();
    let open = RwSignal::new(None::<usize>);

    let items: Vec<_> = content
        .faqs
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, item)| {
            let class = move || {
                if open.get() == Some(idx) {
                    "faq-item is-open"
                } else {
                    "faq-item"
                }
            };
            let toggle = move |_| {
                open.update(|current| {
                    *current = if *current == Some(idx) { None } else { Some(idx) };
                });
            };
            view! {
                <div class=class>
                    <button type="button" class="faq-question" on:click=toggle>
                        {item.question.clone()}
                        <span class="faq-chevron">"\u{2304}"</span>
                    </button>
                    <div class="faq-answer">
                        <div>{item.answer.clone()}</div>
                    </div>
                </div>
            }
        })
        .collect();

    view! {
        <section id="faq">
            <div class="faq">
                <SectionHeading eyebrow="FAQ" title="Frequently asked questions" />
                <div class="faq-list">{items}</div>
            </div>
        </section>
    }
}
