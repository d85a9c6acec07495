//! Browser smoke test: the full page mounts and renders every section.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_every_section_in_order() {
    tempo_landing::boot();
    let _handle = leptos::mount::mount_to_body(tempo_landing::App);

    let document = web_sys::window().unwrap().document().unwrap();
    for id in [
        "hero",
        "feature-scroll",
        "feature-highlight",
        "bento",
        "benefits",
        "features",
        "testimonials",
        "pricing",
        "faq",
        "cta",
    ] {
        assert!(
            document.get_element_by_id(id).is_some(),
            "missing section #{id}"
        );
    }
}

#[wasm_bindgen_test]
fn carousel_slides_are_discoverable() {
    let _handle = leptos::mount::mount_to_body(tempo_landing::App);

    let document = web_sys::window().unwrap().document().unwrap();
    let slides = document
        .query_selector_all("[data-benefit-slide]")
        .unwrap();
    assert!(slides.length() > 0);
}
