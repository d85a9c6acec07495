//! Horizontally scrollable benefits carousel.
//!
//! A native overflow-x scroller with snap points. The wheel handler
//! classifies gesture intent so vertical scrolling is forwarded to the
//! page instead of being trapped by the scroller; prev/next buttons step
//! the centered slide with a programmatic smooth scroll. Geometry lives
//! in `tempo_motion::carousel`; this module only reads and writes the
//! DOM.

use leptos::html::Div;
use leptos::prelude::*;
use tempo_motion::{navigate, wheel_action, NavDirection, SlideSpan, WheelAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::motion::{scroll_page_by, use_in_view, use_reduced_motion};
use crate::sections::SectionHeading;
use crate::types::{BenefitItem, Content};

#[component]
pub fn Benefits() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let scroller_ref = NodeRef::<Div>::new();
    let wheel_attached = StoredValue::new(false);

    // Intercept wheel input on the scroller. Attached manually so the
    // listener is non-passive and may preventDefault.
    Effect::new(move || {
        let Some(scroller) = scroller_ref.get() else {
            return;
        };
        if wheel_attached.get_value() {
            return;
        }
        wheel_attached.set_value(true);

        let target = scroller.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::WheelEvent| {
            match wheel_action(event.delta_x(), event.delta_y(), event.shift_key()) {
                WheelAction::CarouselBy(delta) => {
                    event.prevent_default();
                    target.set_scroll_left(target.scroll_left() + delta as i32);
                }
                WheelAction::PageBy(delta) => {
                    event.prevent_default();
                    scroll_page_by(delta);
                }
                WheelAction::Native => {}
            }
        }) as Box<dyn FnMut(_)>);

        let _ = scroller
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget(); // Keep the closure alive
    });

    // Step the centered slide. Missing container or an empty slide
    // collection short-circuits to a no-op.
    let step = move |direction: NavDirection| {
        let Some(scroller) = scroller_ref.get_untracked() else {
            return;
        };
        let slides = slide_spans(&scroller);
        let Some((_, left)) = navigate(
            &slides,
            scroller.scroll_left() as f64,
            scroller.client_width() as f64,
            direction,
        ) else {
            return;
        };

        let options = web_sys::ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        scroller.scroll_to_with_scroll_to_options(&options);
    };

    let slides: Vec<_> = content
        .benefits
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, item)| view! { <BenefitSlide idx=idx item=item reduce=reduce /> })
        .collect();

    let heading_title = "What you can do with Tempo AI";

    view! {
        <section id="benefits">
            <div class="benefits-band">
                <SectionHeading eyebrow="Benefits" title=heading_title />

                <div class="benefits-scroller" node_ref=scroller_ref>
                    <div class="benefit-spacer" aria-hidden="true"></div>
                    {slides}
                    <div class="benefit-spacer" aria-hidden="true"></div>
                </div>

                <div class="carousel-controls">
                    <button
                        type="button"
                        class="carousel-btn"
                        on:click=move |_| step(NavDirection::Prev)
                    >
                        "\u{2190}"
                        <span class="sr-only">"Previous slide"</span>
                    </button>
                    <button
                        type="button"
                        class="carousel-btn"
                        on:click=move |_| step(NavDirection::Next)
                    >
                        "\u{2192}"
                        <span class="sr-only">"Next slide"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Read the slide extents out of the scroller's content box.
fn slide_spans(scroller: &web_sys::HtmlDivElement) -> Vec<SlideSpan> {
    let mut spans = Vec::new();
    let Ok(nodes) = scroller.query_selector_all("[data-benefit-slide]") else {
        return spans;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        spans.push(SlideSpan::new(
            el.offset_left() as f64,
            el.offset_width() as f64,
        ));
    }
    spans
}

#[component]
fn BenefitSlide(idx: usize, item: BenefitItem, reduce: bool) -> impl IntoView {
    let (reveal_ref, in_view) = use_in_view(0.6, true);

    let reveal = move || {
        if reduce || in_view.get() {
            "reveal is-visible"
        } else {
            "reveal"
        }
    };
    let stagger = format!("transition-delay: {}s", idx as f64 * 0.06);

    view! {
        <div class="benefit-slide" data-benefit-slide="true">
            <div node_ref=reveal_ref class=reveal style=stagger>
                <div class="benefit-card-image">
                    <img src=item.image.clone() alt=item.text.clone() draggable="false" />
                    <div class="benefit-card-fade"></div>
                </div>
                <h2 class="benefit-text">{item.text.clone()}</h2>
            </div>
        </div>
    }
}
