// Tempo AI Landing Page — Leptos 0.8 Edition

fn main() {
    console_error_panic_hook::set_once();
    tempo_landing::boot();
    leptos::mount::mount_to_body(tempo_landing::App);
}
