//! Six-card features grid with staggered once reveals.

use leptos::prelude::*;

use crate::motion::{use_in_view, use_reduced_motion};
use crate::sections::icons::{icon_path, Icon};
use crate::sections::SectionHeading;
use crate::types::{Content, Feature};

#[component]
pub fn FeaturesGrid() -> impl IntoView {
    let content = expect_context::<Content>();
    let reduce = use_reduced_motion();

    let cards: Vec<_> = content
        .features
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, feature)| view! { <FeatureCard idx=idx feature=feature reduce=reduce /> })
        .collect();

    view! {
        <section id="features">
            <div class="features-grid-section">
                <SectionHeading eyebrow="Features" title="Everything in one place" />
                <div class="features-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(idx: usize, feature: Feature, reduce: bool) -> impl IntoView {
    let (card_ref, in_view) = use_in_view(0.35, true);

    let class = move || {
        if reduce || in_view.get() {
            "feature-card reveal is-visible"
        } else {
            "feature-card reveal"
        }
    };
    let stagger = format!("transition-delay: {}s", idx as f64 * 0.04);

    view! {
        <div node_ref=card_ref class=class style=stagger>
            <div class="feature-icon">
                {icon_path(&feature.icon).map(|path| view! { <Icon path=path /> })}
            </div>
            <h2>{feature.name.clone()}</h2>
            <p>{feature.description.clone()}</p>
            <a href="#pricing">"Learn more >"</a>
        </div>
    }
}
