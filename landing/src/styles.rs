//! CSS for the landing page, injected as a single `<style>` element.
//!
//! Fixed-curve tweens (header slide, viewport reveals, the feature-scroll
//! padding settle) interpolate here in CSS with the shared deceleration
//! curve; Rust owns the state machines that toggle the classes.
//! Continuously re-targeted values (hero entrance, spring alignment) are
//! written per frame as inline styles and have no transitions.

/// Complete stylesheet for the page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --fg: #101014;
    --muted: #f4f4f6;
    --muted-fg: #6b6b76;
    --border: #e5e5ea;
    --primary: #4f46e5;
    --primary-fg: #ffffff;
    --radius: 24px;
    --max-width: 1200px;
    --ease-out: cubic-bezier(0.22, 1, 0.36, 1);
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #0b0b0f;
        --fg: #f2f2f5;
        --muted: #17171d;
        --muted-fg: #9a9aa6;
        --border: #26262e;
    }
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--fg);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

img { max-width: 100%; display: block; }

.container {
    max-width: var(--max-width);
    margin: 0 auto;
    padding: 0 24px;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

/* ---- Buttons ---- */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 4px;
    border: none;
    border-radius: 999px;
    padding: 10px 24px;
    font-size: 15px;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    transition: background 0.2s var(--ease-out), transform 0.2s var(--ease-out);
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-fg);
}

.btn-primary:hover { filter: brightness(1.08); }

.btn-ghost {
    background: var(--bg);
    color: var(--fg);
    border: 1px solid var(--border);
}

.carousel-btn {
    width: 36px;
    height: 36px;
    padding: 0;
    border-radius: 50%;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--fg);
    cursor: pointer;
    font-size: 16px;
    line-height: 1;
}

.carousel-btn:hover { background: var(--muted); }

/* ---- Section heading ---- */

.section-heading {
    text-align: center;
    padding-bottom: 40px;
    margin: 0 auto;
}

.section-eyebrow {
    font-family: "JetBrains Mono", monospace;
    font-size: 13px;
    font-weight: 600;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: var(--primary);
    margin: 0;
}

.section-title {
    font-size: clamp(32px, 5vw, 56px);
    font-weight: 700;
    letter-spacing: -0.03em;
    line-height: 1.2;
    text-transform: lowercase;
    margin: 16px 0 0;
}

/* ---- Reveal primitives ----
   Hidden state -> .is-visible transitions with the shared curve.
   Delay and duration are set inline per element. */

.reveal {
    opacity: 0;
    transform: translateY(28px);
    filter: blur(12px);
    transition:
        opacity var(--reveal-duration, 0.7s) var(--ease-out),
        transform var(--reveal-duration, 0.7s) var(--ease-out),
        filter var(--reveal-duration, 0.7s) var(--ease-out);
    will-change: opacity, transform, filter;
}

/* Direction-aware variant: shift sign follows scroll direction. */
.reveal-dir {
    opacity: 0;
    transform: translateY(var(--reveal-shift, 28px));
    filter: blur(12px);
    transition:
        opacity var(--reveal-duration, 0.9s) var(--ease-out),
        transform var(--reveal-duration, 0.9s) var(--ease-out),
        filter var(--reveal-duration, 0.9s) var(--ease-out);
    will-change: opacity, transform, filter;
}

/* Horizontal variant for the highlight rows. */
.reveal-x {
    opacity: 0;
    transform: translateX(var(--reveal-shift-x, -20px));
    transition:
        opacity var(--reveal-duration, 0.6s) var(--ease-out),
        transform var(--reveal-duration, 0.6s) var(--ease-out);
    will-change: opacity, transform;
}

.reveal.is-visible,
.reveal-dir.is-visible,
.reveal-x.is-visible {
    opacity: 1;
    transform: none;
    filter: none;
}

/* ---- Header ---- */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: color-mix(in srgb, var(--bg) 60%, transparent);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid transparent;
    transform: translateY(0);
    transition: transform 0.35s var(--ease-out);
}

.site-header.is-hidden { transform: translateY(-110%); }

.site-header.is-scrolled { border-bottom-color: var(--border); }

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 24px;
    max-width: var(--max-width);
    margin: 0 auto;
}

.brand {
    display: flex;
    align-items: center;
    gap: 8px;
    text-decoration: none;
    color: var(--fg);
    font-weight: 700;
    font-size: 20px;
}

.brand-mark { width: 24px; height: 24px; }

.header-cta { display: none; }

.menu-toggle {
    background: none;
    border: none;
    color: var(--fg);
    font-size: 22px;
    cursor: pointer;
}

.mobile-menu {
    display: none;
    flex-direction: column;
    gap: 12px;
    padding: 16px 24px 24px;
    border-top: 1px solid var(--border);
}

.mobile-menu.is-open { display: flex; }

.mobile-menu a {
    color: var(--fg);
    text-decoration: none;
    font-weight: 500;
}

@media (min-width: 1024px) {
    .header-cta { display: inline-flex; }
    .menu-toggle { display: none; }
    .mobile-menu, .mobile-menu.is-open { display: none; }
}

/* ---- Hero ----
   Entrance values (opacity/transform/filter) are written per frame as
   inline styles; no transitions here. */

.hero-viewport {
    height: 100svh;
    width: 100%;
    overflow: visible;
}

.hero-main {
    position: relative;
    margin: 0 auto;
    height: 100%;
    padding: 96px 16px 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.hero-icon-badge {
    background: var(--primary);
    color: var(--primary-fg);
    width: 80px;
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 24px;
    margin: 0 auto;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
    transform-origin: center;
    will-change: transform;
}

.hero-icon-badge img { height: 40px; }

.hero-name {
    margin-top: 12px;
    font-size: 14px;
    font-weight: 500;
    color: color-mix(in srgb, var(--fg) 80%, transparent);
    will-change: transform, opacity, filter;
}

.hero-copy { max-width: 960px; margin: 40px auto 0; }

.hero-headline {
    font-size: clamp(36px, 6vw, 56px);
    font-weight: 700;
    letter-spacing: -0.03em;
    margin: 0 0 16px;
    will-change: opacity, transform, filter;
}

.hero-subtitle {
    max-width: 640px;
    margin: 0 auto 32px;
    font-size: 20px;
    font-weight: 500;
    will-change: opacity, transform, filter;
}

.hero-cta-row {
    display: flex;
    justify-content: center;
    margin-bottom: 40px;
    will-change: opacity, transform, filter;
}

.hero-devices {
    position: absolute;
    inset-inline: 0;
    bottom: -280px;
    pointer-events: none;
    user-select: none;
}

.hero-device-row {
    display: flex;
    flex-wrap: nowrap;
    align-items: flex-end;
    justify-content: center;
    gap: 32px;
}

.hero-device { flex-shrink: 0; will-change: transform; }

.hero-device img {
    width: 256px;
    height: 500px;
    object-fit: cover;
    border-radius: 24px;
    will-change: opacity, transform;
}

@media (max-width: 640px) {
    .hero-devices { bottom: -160px; }
    .hero-device img { width: 160px; height: 333px; }
}

/* ---- Feature scroll ---- */

.feature-scroll {
    padding: 320px 24px 96px;
    max-width: var(--max-width);
    margin: 0 auto;
}

.feature-scroll-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    user-select: none;
}

@media (min-width: 640px) {
    .feature-scroll-grid { grid-template-columns: repeat(3, 1fr); }
}

.feature-scroll-col {
    display: flex;
    justify-content: center;
    padding-top: 90px;
}

.feature-scroll-col img { max-width: 300px; width: 100%; height: auto; }

.feature-scroll-col.col-raised {
    padding-top: 130px;
    transition: padding-top 1.05s var(--ease-out);
    will-change: padding-top;
}

.feature-scroll-col.col-deep {
    padding-top: 170px;
    transition: padding-top 1.05s var(--ease-out);
    will-change: padding-top;
}

.feature-scroll-col.is-settled { padding-top: 90px; }

/* ---- Feature highlight ---- */

.feature-highlight { padding: 48px 40px 80px; max-width: var(--max-width); margin: 0 auto; }

.highlight-row {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    padding-bottom: 40px;
}

@media (min-width: 1024px) {
    .highlight-row { flex-direction: row; }
    .highlight-row.rtl { flex-direction: row-reverse; }
}

.highlight-copy {
    width: 100%;
    max-width: 420px;
    display: flex;
    flex-direction: column;
    gap: 16px;
    text-align: center;
}

@media (min-width: 1024px) {
    .highlight-copy { text-align: left; }
}

.highlight-copy h2 {
    font-size: clamp(32px, 4.5vw, 56px);
    font-weight: 700;
    margin: 0;
}

.highlight-copy p { font-size: 20px; margin: 0; }

.highlight-image { width: 100%; }

.highlight-image img { max-width: 300px; margin: 0 auto; }

/* ---- Bento ---- */

.bento { padding: 48px 40px 80px; max-width: 880px; margin: 0 auto; }

.bento-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 16px;
}

@media (min-width: 768px) {
    .bento-grid { grid-template-columns: repeat(2, 1fr); }
    .bento-card.full { grid-column: span 2; }
}

.bento-card {
    background: var(--muted);
    border-radius: var(--radius);
    padding: 24px 24px 0;
}

.bento-card h2 { font-size: 22px; margin: 0 0 8px; }

.bento-card p { font-size: 15px; margin: 0 0 16px; }

.bento-card img {
    width: 100%;
    height: 280px;
    object-fit: cover;
    object-position: top;
    border-radius: 12px;
}

/* ---- Benefits carousel ---- */

.benefits-band {
    background: var(--muted);
    padding: 48px 0 80px;
    position: relative;
}

.benefits-scroller {
    display: flex;
    overflow-x: auto;
    overflow-y: hidden;
    overscroll-behavior-y: none;
    scroll-snap-type: x mandatory;
    scrollbar-width: none;
}

.benefits-scroller::-webkit-scrollbar { display: none; }

.benefit-spacer {
    display: none;
    flex-shrink: 0;
    width: 25%;
    scroll-snap-align: start;
}

@media (min-width: 768px) { .benefit-spacer { display: block; } }

.benefit-slide {
    flex-shrink: 0;
    width: calc(90% - 16px);
    padding: 0 16px;
    scroll-snap-align: center;
    user-select: none;
}

@media (min-width: 768px) {
    .benefit-slide { width: 33.333%; scroll-snap-align: start; }
}

@media (min-width: 1280px) { .benefit-slide { width: 25%; } }

.benefit-card-image {
    height: 500px;
    position: relative;
    border-radius: 12px;
    overflow: hidden;
}

.benefit-card-image img {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.benefit-card-fade {
    position: absolute;
    inset-inline: 0;
    bottom: 0;
    height: 33%;
    background: linear-gradient(to top, var(--muted), transparent);
    pointer-events: none;
}

.benefit-text {
    margin-top: 16px;
    font-size: 20px;
    font-weight: 600;
    letter-spacing: -0.01em;
    text-align: left;
}

.carousel-controls {
    display: flex;
    justify-content: center;
    gap: 16px;
    margin-top: 24px;
}

@media (min-width: 768px) {
    .carousel-controls { justify-content: flex-end; padding-right: 128px; }
}

/* ---- Features grid ---- */

.features-grid-section { padding: 48px 40px 80px; max-width: 1024px; margin: 0 auto; }

.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

@media (min-width: 768px) { .features-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .features-grid { grid-template-columns: repeat(3, 1fr); } }

.feature-card {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 24px;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.feature-icon {
    background: linear-gradient(to bottom, var(--primary), color-mix(in srgb, var(--primary) 80%, transparent));
    color: var(--primary-fg);
    padding: 8px;
    border-radius: 10px;
    margin-bottom: 16px;
}

.feature-card h2 { font-size: 20px; margin: 0 0 8px; }

.feature-card p { font-size: 14px; color: var(--muted-fg); margin: 0 0 16px; }

.feature-card a { font-size: 14px; color: var(--primary); text-decoration: none; }

.feature-card a:hover { text-decoration: underline; }

/* ---- Testimonials ---- */

.testimonials { padding: 48px 40px 80px; max-width: var(--max-width); margin: 0 auto; }

.testimonial-columns {
    columns: 1;
    column-gap: 16px;
    padding: 40px 0;
}

@media (min-width: 640px) { .testimonial-columns { columns: 2; } }
@media (min-width: 1024px) { .testimonial-columns { columns: 3; } }
@media (min-width: 1280px) { .testimonial-columns { columns: 4; } }

.testimonial-card {
    break-inside: avoid;
    background: color-mix(in srgb, var(--muted) 60%, transparent);
    border-radius: var(--radius);
    padding: 20px 24px;
    margin-bottom: 16px;
}

.testimonial-person { display: flex; align-items: center; margin-bottom: 16px; }

.testimonial-person img {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    object-fit: cover;
}

.testimonial-person h3 { font-size: 17px; margin: 0; }

.testimonial-person p { font-size: 13px; color: var(--muted-fg); margin: 0; }

.testimonial-person > div { margin-left: 12px; }

/* ---- Pricing ---- */

.pricing { padding: 48px 40px 80px; max-width: var(--max-width); margin: 0 auto; }

.pricing-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    max-width: 768px;
    margin: 0 auto;
    padding: 40px 0;
}

@media (min-width: 768px) { .pricing-grid { grid-template-columns: repeat(2, 1fr); } }

.pricing-card {
    background: color-mix(in srgb, var(--muted) 60%, transparent);
    border-radius: var(--radius);
    padding: 24px;
    display: grid;
    grid-template-rows: auto auto 1fr auto;
}

.pricing-card h2 { font-size: 24px; margin: 0 0 16px; }

.price { font-size: 36px; font-weight: 700; color: var(--primary); margin-bottom: 8px; }

.price span { font-size: 14px; font-weight: 400; color: var(--muted-fg); }

.plan-description { font-size: 14px; color: var(--muted-fg); margin: 0 0 16px; }

.plan-feature { display: flex; align-items: center; gap: 8px; margin-bottom: 12px; }

.plan-feature .check { color: var(--primary); font-weight: 700; }

/* ---- FAQ ---- */

.faq { padding: 48px 40px 80px; max-width: var(--max-width); margin: 0 auto; }

.faq-list { max-width: 640px; margin: 0 auto; padding: 40px 0; }

.faq-item { border-bottom: 1px solid var(--border); }

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    background: none;
    border: none;
    color: var(--fg);
    padding: 16px 0;
    font-size: 16px;
    font-weight: 500;
    text-align: left;
    cursor: pointer;
}

.faq-chevron { transition: transform 0.2s var(--ease-out); }

.faq-item.is-open .faq-chevron { transform: rotate(180deg); }

.faq-answer {
    overflow: hidden;
    max-height: 0;
    transition: max-height 0.3s var(--ease-out);
    font-size: 14px;
    color: var(--muted-fg);
}

.faq-item.is-open .faq-answer { max-height: 300px; padding-bottom: 16px; }

/* ---- CTA marquee ---- */

.cta { padding: 56px 16px; }

.cta-panel {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    max-width: 1000px;
    margin: 0 auto;
    border: 1px solid var(--border);
    border-radius: 32px;
    padding: 56px 40px;
}

.marquee-wall { position: absolute; transform: rotate(35deg); }

.marquee-row {
    display: flex;
    overflow: hidden;
    padding: 8px;
    gap: 16px;
}

.marquee-track {
    display: flex;
    flex-shrink: 0;
    justify-content: space-around;
    gap: 16px;
    animation: marquee 20s linear infinite;
}

.marquee-track.reverse { animation-direction: reverse; }

.marquee-row:hover .marquee-track { animation-play-state: paused; }

@keyframes marquee {
    from { transform: translateX(0); }
    to { transform: translateX(calc(-100% - 16px)); }
}

.marquee-card {
    position: relative;
    width: 256px;
    overflow: hidden;
    border-radius: 32px;
    border: 1px solid color-mix(in srgb, var(--fg) 10%, transparent);
    background: color-mix(in srgb, var(--fg) 2%, transparent);
    padding: 16px;
}

.marquee-card-person { display: flex; align-items: center; gap: 8px; }

.marquee-card-person img { width: 32px; height: 32px; border-radius: 50%; }

.marquee-card-person figcaption { font-size: 14px; font-weight: 500; }

.marquee-card-person p { font-size: 12px; color: var(--muted-fg); margin: 0; }

.marquee-card blockquote { margin: 8px 0 0; font-size: 14px; }

.cta-badge {
    z-index: 10;
    width: 128px;
    height: 128px;
    border-radius: 32px;
    border: 1px solid var(--border);
    background: color-mix(in srgb, var(--bg) 10%, transparent);
    backdrop-filter: blur(12px);
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.18);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 12px;
}

.cta-copy {
    z-index: 10;
    margin-top: 16px;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.cta-copy h1 { font-size: clamp(28px, 4vw, 36px); margin: 0; }

.cta-copy p { margin: 8px 0 0; }

.cta-copy .btn { margin-top: 16px; }

.cta-fade {
    position: absolute;
    inset-inline: 0;
    bottom: 0;
    height: 100%;
    background: linear-gradient(to bottom, transparent, var(--bg) 70%);
    pointer-events: none;
}

/* ---- Footer ---- */

.site-footer {
    display: flex;
    flex-direction: column;
    gap: 20px;
    max-width: var(--max-width);
    margin: 0 auto;
    padding: 20px 40px 28px;
}

.footer-top { display: flex; align-items: center; justify-content: space-between; }

.footer-brand { display: flex; align-items: center; gap: 8px; font-weight: 700; font-size: 18px; }

.footer-brand img { width: 20px; height: 20px; }

.social-row { display: flex; gap: 8px; }

.social-row a { color: var(--muted-fg); display: flex; width: 20px; height: 20px; }

.social-row a:hover { color: var(--fg); }

.footer-bottom {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    gap: 20px;
    font-size: 15px;
    color: var(--muted-fg);
}

@media (min-width: 768px) { .footer-bottom { flex-direction: row; align-items: center; } }

.footer-links { display: flex; gap: 20px; list-style: none; margin: 0; padding: 0; }

.footer-links a { color: var(--muted-fg); text-decoration: none; font-weight: 500; }

.footer-links a:hover { color: var(--fg); text-decoration: underline; }
"#;
