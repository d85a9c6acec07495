//! Sticky site header.
//!
//! Hides on scroll down, returns on scroll up. The state machine lives in
//! `tempo_motion::HeaderVisibility`; the slide itself is a CSS transform
//! transition toggled by class, so there is exactly one writer for the
//! header's position.

use leptos::prelude::*;
use tempo_motion::HeaderVisibility;

use crate::motion::{on_window_scroll, use_reduced_motion};
use crate::types::Content;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let hidden = RwSignal::new(false);
    let scrolled = RwSignal::new(false);
    let drawer_open = RwSignal::new(false);
    let visibility = StoredValue::new(HeaderVisibility::new(reduce));

    Effect::new(move || {
        on_window_scroll(move |sample| {
            visibility.update_value(|v| {
                v.observe(sample);
                hidden.set(v.is_hidden());
                scrolled.set(v.is_scrolled());
            });
        });
    });

    let header_class = move || {
        let mut class = String::from("site-header");
        if hidden.get() {
            class.push_str(" is-hidden");
        }
        if scrolled.get() {
            class.push_str(" is-scrolled");
        }
        class
    };

    let brand_name = content.name.clone();
    let drawer_name = content.name.clone();
    let cta_label = content.cta_label.clone();
    let drawer_cta = content.cta_label.clone();
    let icon = content.hero.icon.clone();
    let drawer_icon = content.hero.icon.clone();

    view! {
        <header class=header_class>
            <div class="header-inner">
                <a class="brand" href="/" title="brand-logo">
                    <img class="brand-mark" src=icon alt="" width="24" height="24" draggable="false" />
                    <span>{brand_name}</span>
                </a>
                <a class="btn btn-primary header-cta" href="#pricing">
                    {cta_label}
                </a>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Open menu"
                    on:click=move |_| drawer_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
            </div>

            <nav class=move || {
                if drawer_open.get() { "mobile-menu is-open" } else { "mobile-menu" }
            }>
                <div class="brand">
                    <img class="brand-mark" src=drawer_icon alt="" width="24" height="24" draggable="false" />
                    <span>{drawer_name}</span>
                </div>
                <a href="#features" on:click=move |_| drawer_open.set(false)>"Features"</a>
                <a href="#pricing" on:click=move |_| drawer_open.set(false)>"Pricing"</a>
                <a href="#faq" on:click=move |_| drawer_open.set(false)>"FAQ"</a>
                <a class="btn btn-primary" href="#pricing" on:click=move |_| drawer_open.set(false)>
                    {drawer_cta}
                </a>
            </nav>
        </header>
    }
}
