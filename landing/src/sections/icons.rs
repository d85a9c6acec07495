//! Inline SVG icon set.
//!
//! Filled 24x24 glyphs keyed by the names the content table uses, so the
//! table stays a plain data file with no component references.

use leptos::prelude::*;

pub const ICON_SPARKLE: &str =
    "M12 2.5l2.1 5.6 5.6 2.1-5.6 2.1L12 17.9l-2.1-5.6-5.6-2.1 5.6-2.1L12 2.5zM19 15l1 2.6 2.6 1-2.6 1L19 22.2l-1-2.6-2.6-1 2.6-1L19 15z";
pub const ICON_CLOCK: &str =
    "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 2a8 8 0 1 1 0 16 8 8 0 0 1 0-16zm1 3h-2v6.2l4.6 2.7 1-1.7-3.6-2.1V7z";
pub const ICON_CALENDAR: &str =
    "M7 2h2v2h6V2h2v2h3a1 1 0 0 1 1 1v16a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1h3V2zm13 8H4v10h16V10zM4 8h16V6H4v2z";
pub const ICON_CLOUD: &str =
    "M7 19a5 5 0 0 1-.9-9.9A6 6 0 0 1 17.8 9 4.5 4.5 0 0 1 17 19H7zm0-2h10a2.5 2.5 0 0 0 .3-5l-1.4-.2-.4-1.3A4 4 0 0 0 7.8 10l-.3 1.1-1.1.1A3 3 0 0 0 7 17z";
pub const ICON_USERS: &str =
    "M9 11a4 4 0 1 1 0-8 4 4 0 0 1 0 8zm0-2a2 2 0 1 0 0-4 2 2 0 0 0 0 4zm-7 12a7 7 0 0 1 14 0h-2a5 5 0 0 0-10 0H2zm14.5-9.5a3.5 3.5 0 1 1 0-7 3.5 3.5 0 0 1 0 7zM22 21h-2a5 5 0 0 0-3-4.6l.8-1.8A7 7 0 0 1 22 21z";
pub const ICON_BELL: &str =
    "M12 2a6 6 0 0 1 6 6v3.6l1.7 3.4a1 1 0 0 1-.9 1.4H5.2a1 1 0 0 1-.9-1.4L6 11.6V8a6 6 0 0 1 6-6zm0 2a4 4 0 0 0-4 4v4.1l-1.2 2.3h10.4L16 12.1V8a4 4 0 0 0-4-4zm-2 16h4a2 2 0 1 1-4 0z";
pub const ICON_HEART_HANDS: &str =
    "M12 21l-1.5-1.4C5.4 15.1 2 12 2 8.3 2 5.4 4.4 3 7.3 3c1.8 0 3.5.9 4.7 2.2A6.4 6.4 0 0 1 16.7 3C19.6 3 22 5.4 22 8.3c0 3.7-3.4 6.8-8.5 11.3L12 21z";
pub const ICON_CHECK: &str = "M9.5 16.2l-4-4L4 13.7l5.5 5.5 11-11-1.5-1.5-9.5 9.5z";

/// Resolve a content-table icon key to its path data.
pub fn icon_path(key: &str) -> Option<&'static str> {
    match key {
        "sparkle" => Some(ICON_SPARKLE),
        "clock" => Some(ICON_CLOCK),
        "calendar" => Some(ICON_CALENDAR),
        "cloud" => Some(ICON_CLOUD),
        "users" => Some(ICON_USERS),
        "bell" => Some(ICON_BELL),
        _ => None,
    }
}

/// A filled 24x24 icon.
#[component]
pub fn Icon(path: &'static str, #[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}
