// Tempo AI Landing Page — Leptos 0.8 Edition

pub mod content;
pub mod motion;
pub mod sections;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use sections::*;

use crate::styles::LANDING_CSS;

/// One-time boot work before mounting: console banner.
pub fn boot() {
    sections::console_banner::print_banner();
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(content::default_content());

    view! {
        <style>{LANDING_CSS}</style>
        <SiteHeader />
        <main class="page">
            <Hero />
            <FeatureScroll />
            <FeatureHighlight />
            <Bento />
            <Benefits />
            <FeaturesGrid />
            <Testimonials />
            <Pricing />
            <Faq />
            <Cta />
        </main>
        <Footer />
    }
}
