// Rosemere Limited landing page, Leptos 0.8 CSR
// (c)2007–2025 Rosemere Limited

mod hooks;
mod sections;
mod styles;

use hooks::{Site, use_escape_closes_menu, use_fragment_target, use_scroll_tracker};
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use rosemere::SiteConfig;
use sections::*;

/// Compiled-in site configuration; see `site.toml`.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load_or_default(SITE_TOML);
    let scroll = use_scroll_tracker(config.scroll.threshold_px);
    let site = Site::new(config, scroll);
    provide_context(site);
    use_escape_closes_menu(site);
    use_fragment_target(site);

    view! {
        <PageHead />
        <div class="page">
            <ProgressBar />
            <Logo />
            <Nav />
            <MobileMenuButton />
            <MobileMenu />
            <main>
                <Hero />
                <About />
                <Vision />
                <Footprint />
                <Expertise />
                <Clients />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
