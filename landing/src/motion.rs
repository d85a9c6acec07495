//! View-side motion glue.
//!
//! Thin adapters between browser events and the `tempo_motion` core:
//! reduced-motion detection, an animation-frame loop, a window scroll
//! feed, and IntersectionObserver-backed reveal signals. All listeners
//! live for the page's lifetime and are leaked deliberately (`forget`),
//! matching the single-page nature of the app.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use tempo_motion::{ScrollSample, ScrollTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Does the host environment ask for reduced motion?
pub fn use_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Monotonic time in seconds from `performance.now()`.
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Drive `frame` once per animation frame with the timestamp in seconds.
///
/// The loop continues while `frame` returns `true`. The closure keeps
/// itself alive through an Rc cycle; when the loop ends the allocation
/// stays behind, which is acceptable for page-lifetime animation drivers.
pub fn raf_loop(mut frame: impl FnMut(f64) -> bool + 'static) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduler = handle.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if frame(timestamp_ms / 1000.0) {
            if let Some(cb) = scheduler.borrow().as_ref() {
                schedule_frame(cb);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = handle.borrow().as_ref() {
        schedule_frame(cb);
    }
}

fn schedule_frame(cb: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Deliver a [`ScrollSample`] to `handler` on every window scroll event.
pub fn on_window_scroll(mut handler: impl FnMut(ScrollSample) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut tracker = ScrollTracker::new();
    let reader = window.clone();

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let offset = reader.scroll_y().unwrap_or(0.0);
        handler(tracker.sample(offset));
    }) as Box<dyn FnMut(_)>);

    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget(); // Keep the closure alive
}

/// Scroll the page vertically by `delta` px (used when the carousel
/// forwards vertical wheel intent back to the document).
pub fn scroll_page_by(delta: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_by_with_x_and_y(0.0, delta);
    }
}

/// Viewport-triggered reveal signal.
///
/// Returns a node ref to place on the reveal wrapper and a signal that
/// turns `true` when at least `amount` of the element is visible. With
/// `once` the observer disconnects after the first reveal; otherwise the
/// signal tracks visibility both ways so the reveal can replay.
pub fn use_in_view(amount: f64, once: bool) -> (NodeRef<Div>, RwSignal<bool>) {
    use_in_view_with(vec![amount], move || amount, once)
}

/// [`use_in_view`] with a dynamic required amount.
///
/// `thresholds` lists every ratio the observer should report on;
/// `required` is read at event time, so the needed amount can follow a
/// signal (the bento grid swaps amounts when the scroll direction flips).
pub fn use_in_view_with(
    thresholds: Vec<f64>,
    required: impl Fn() -> f64 + 'static,
    once: bool,
) -> (NodeRef<Div>, RwSignal<bool>) {
    let node_ref = NodeRef::<Div>::new();
    let in_view = RwSignal::new(false);
    let attached = StoredValue::new(false);
    let required = Rc::new(required);

    Effect::new(move |_: Option<()>| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if attached.get_value() {
            return;
        }
        attached.set_value(true);

        let required = required.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let visible = entry.is_intersecting()
                        && entry.intersection_ratio() + 1e-4 >= required();
                    if visible {
                        in_view.set(true);
                        if once {
                            observer.disconnect();
                        }
                    } else if !once {
                        in_view.set(false);
                    }
                }
            },
        )
            as Box<dyn FnMut(_, _)>);

        let threshold_list = js_sys::Array::new();
        for t in &thresholds {
            threshold_list.push(&JsValue::from_f64(*t));
        }
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&threshold_list);

        if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            observer.observe(&el);
        }
        callback.forget(); // Keep the closure alive
    });

    (node_ref, in_view)
}

/// Class string for a reveal wrapper: `base` plus `is-visible` once
/// revealed. Reduced motion renders everything visible from the start.
pub fn reveal_class(
    base: &'static str,
    in_view: RwSignal<bool>,
    reduce: bool,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if reduce || in_view.get() {
            format!("{base} is-visible")
        } else {
            base.to_string()
        }
    }
}
