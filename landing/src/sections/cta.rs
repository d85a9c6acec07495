//! Call-to-action panel over a rotated marquee wall.
//!
//! Six rows of testimonial mini-cards drift horizontally in alternating
//! directions behind the panel. The drift is a pure CSS keyframe
//! animation; each row holds three clones of its card set so the loop is
//! seamless.

use leptos::prelude::*;

use crate::sections::icons::{Icon, ICON_HEART_HANDS};
use crate::types::{Content, MarqueeCard};

#[component]
pub fn Cta() -> impl IntoView {
    let content = expect_context::<Content>();
    let cta_label = content.cta_label.clone();

    let rows: Vec<_> = (0..6)
        .map(|row| {
            let reverse = row % 2 == 1;
            let cards = if reverse {
                content.cta_marquee_b.clone()
            } else {
                content.cta_marquee_a.clone()
            };
            view! { <MarqueeRow cards=cards reverse=reverse /> }
        })
        .collect();

    view! {
        <section id="cta">
            <div class="cta">
                <div class="cta-panel">
                    <div class="marquee-wall" aria-hidden="true">{rows}</div>

                    <div class="cta-badge">
                        <Icon path=ICON_HEART_HANDS size=64 />
                    </div>
                    <div class="cta-copy">
                        <h1>"Stop fighting your calendar."</h1>
                        <p>"Start your 7-day free trial. No credit card required."</p>
                        <a class="btn btn-ghost" href="#pricing">{cta_label}</a>
                    </div>

                    <div class="cta-fade"></div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MarqueeRow(cards: Vec<MarqueeCard>, reverse: bool) -> impl IntoView {
    let track_class = if reverse {
        "marquee-track reverse"
    } else {
        "marquee-track"
    };

    // Three identical tracks make the translate loop seamless.
    let tracks: Vec<_> = (0..3)
        .map(|_| {
            let clones: Vec<_> = cards
                .iter()
                .cloned()
                .map(|card| {
                    view! {
                        <figure class="marquee-card">
                            <div class="marquee-card-person">
                                <img src=card.avatar.clone() alt="" draggable="false" />
                                <div>
                                    <figcaption>{card.name.clone()}</figcaption>
                                    <p>{card.handle.clone()}</p>
                                </div>
                            </div>
                            <blockquote>{card.quote.clone()}</blockquote>
                        </figure>
                    }
                })
                .collect();
            view! { <div class=track_class>{clones}</div> }
        })
        .collect();

    view! { <div class="marquee-row">{tracks}</div> }
}
