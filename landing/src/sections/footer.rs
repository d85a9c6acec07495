//! Site footer.

use leptos::prelude::*;

use crate::types::Content;

const SOCIAL_LINKEDIN: &str =
    "M2 1a1 1 0 0 0-1 1v11a1 1 0 0 0 1 1h11a1 1 0 0 0 1-1V2a1 1 0 0 0-1-1H2zm1 5h2v6H3V6zm1-3.1a1.1 1.1 0 1 1 0 2.2 1.1 1.1 0 0 1 0-2.2zM7 6h1.8v1h.1c.3-.5.9-1.1 2-1.1 2 0 2.6 1.2 2.6 3v3.1h-2V9.2c0-1-.4-1.5-1.1-1.5-.9 0-1.4.6-1.4 1.6v2.7H7V6z";
const SOCIAL_INSTAGRAM: &str =
    "M7.5 1C5.7 1 5.5 1 4.8 1.1 4.1 1.1 3.6 1.2 3.2 1.4c-.4.2-.8.4-1.2.7-.3.4-.5.8-.7 1.2-.2.4-.3.9-.3 1.6C1 5.5 1 5.7 1 7.5s0 2 .1 2.7c0 .7.1 1.2.3 1.6.2.4.4.8.7 1.2.4.3.8.5 1.2.7.4.2.9.3 1.6.3.6.1.9.1 2.7.1s2 0 2.7-.1c.7 0 1.2-.1 1.6-.3.4-.2.8-.4 1.2-.7.3-.4.5-.8.7-1.2.2-.4.3-.9.3-1.6.1-.6.1-.9.1-2.7s0-2-.1-2.7c0-.7-.1-1.2-.3-1.6a3.3 3.3 0 0 0-1.9-1.9c-.4-.2-.9-.3-1.6-.3C9.5 1 9.3 1 7.5 1zm0 3.3a3.2 3.2 0 1 1 0 6.4 3.2 3.2 0 0 1 0-6.4zm0 1.2a2 2 0 1 0 0 4 2 2 0 0 0 0-4zm3.4-2a.8.8 0 1 1 0 1.5.8.8 0 0 1 0-1.5z";
const SOCIAL_TWITTER: &str =
    "M13.5 3.8c-.4.2-.9.3-1.4.4.5-.3.9-.8 1.1-1.4-.5.3-1 .5-1.6.6a2.5 2.5 0 0 0-4.3 2.3A7.1 7.1 0 0 1 2.2 3a2.5 2.5 0 0 0 .8 3.4c-.4 0-.8-.1-1.1-.3 0 1.2.8 2.2 2 2.4a2.5 2.5 0 0 1-1.1 0 2.5 2.5 0 0 0 2.3 1.8A5 5 0 0 1 1.4 11.4a7.1 7.1 0 0 0 10.9-6v-.3c.5-.4.9-.8 1.2-1.3z";

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<Content>();
    let name = content.name.clone();
    let icon = content.hero.icon.clone();

    view! {
        <footer class="site-footer">
            <div class="footer-top">
                <div class="footer-brand">
                    <img src=icon alt="" draggable="false" />
                    <h2>{name}</h2>
                </div>
                <div class="social-row">
                    <a href="#" aria-label="LinkedIn">
                        <svg width="15" height="15" viewBox="0 0 15 15" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d=SOCIAL_LINKEDIN fill="currentColor" fill-rule="evenodd" clip-rule="evenodd"></path>
                        </svg>
                    </a>
                    <a href="#" aria-label="Instagram">
                        <svg width="15" height="15" viewBox="0 0 15 15" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d=SOCIAL_INSTAGRAM fill="currentColor" fill-rule="evenodd" clip-rule="evenodd"></path>
                        </svg>
                    </a>
                    <a href="#" aria-label="Twitter">
                        <svg width="15" height="15" viewBox="0 0 15 15" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d=SOCIAL_TWITTER fill="currentColor" fill-rule="evenodd" clip-rule="evenodd"></path>
                        </svg>
                    </a>
                </div>
            </div>

            <div class="footer-bottom">
                <ul class="footer-links">
                    <li><a href="#pricing">"Pricing"</a></li>
                    <li><a href="#faq">"FAQ"</a></li>
                    <li><a href="#">"Contact"</a></li>
                </ul>
                <p>"All rights reserved."</p>
            </div>
        </footer>
    }
}
