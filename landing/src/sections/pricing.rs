//! Pricing plans.

use leptos::prelude::*;

use crate::motion::{use_in_view, use_reduced_motion};
use crate::sections::icons::{Icon, ICON_CHECK};
use crate::sections::SectionHeading;
use crate::types::{Content, PricingPlan};

#[component]
pub fn Pricing() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let plans: Vec<_> = content
        .pricing
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, plan)| view! { <PlanCard idx=idx plan=plan reduce=reduce /> })
        .collect();

    view! {
        <section id="pricing">
            <div class="pricing">
                <SectionHeading eyebrow="Pricing" title="Simple pricing" />
                <div class="pricing-grid">{plans}</div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(idx: usize, plan: PricingPlan, reduce: bool) -> impl IntoView {
    let (card_ref, in_view) = use_in_view(0.3, true);

    let class = move || {
        if reduce || in_view.get() {
            "pricing-card reveal is-visible"
        } else {
            "pricing-card reveal"
        }
    };
    let stagger = format!("transition-delay: {}s", idx as f64 * 0.04);

    let features: Vec<_> = plan
        .features
        .iter()
        .cloned()
        .map(|feature| {
            view! {
                <div class="plan-feature">
                    <span class="check"><Icon path=ICON_CHECK size=18 /></span>
                    <span>{feature}</span>
                </div>
            }
        })
        .collect();

    view! {
        <div node_ref=card_ref class=class style=stagger>
            <h2>{plan.name.clone()}</h2>
            <div class="price">
                {plan.price.clone()}
                <span>" / " {plan.period.clone()}</span>
            </div>
            <div>
                <p class="plan-description">{plan.description.clone()}</p>
                <div>{features}</div>
            </div>
            <div>
                <button type="button" class="btn btn-primary">
                    {plan.button_text.clone()}
                </button>
            </div>
        </div>
    }
}
