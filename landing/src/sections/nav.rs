use leptos::prelude::*;
use rosemere::content::{COMPANY, NAV_ITEMS};
use std::time::Duration;

use super::icons::{ICON_CLOSE, ICON_MENU, Icon};
use crate::hooks::{Site, overlay_item_delay};

/// Desktop header: a floating pill with one button per anchor section.
#[component]
pub fn Nav() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <nav class=move || if site.is_scrolled() { "nav scrolled" } else { "nav" }>
            <div class="nav-pill">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let target = item.target;
                        view! {
                            <button class="nav-link" on:click=move |_| site.go_to(target)>
                                {item.label}
                                <span class="nav-underline"></span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}

/// Round header button below the desktop breakpoint; the glyph follows the
/// overlay state.
#[component]
pub fn MobileMenuButton() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <button
            class="menu-button"
            aria-label=move || if site.menu_open() { "Close menu" } else { "Open menu" }
            aria-expanded=move || site.menu_open().to_string()
            on:click=move |_| site.toggle_menu()
        >
            {move || {
                if site.menu_open() {
                    view! { <Icon path=ICON_CLOSE size=28 /> }.into_any()
                } else {
                    view! { <Icon path=ICON_MENU size=28 /> }.into_any()
                }
            }}
        </button>
    }
}

/// Full-screen overlay with staggered links. Slides out on close before it is
/// unmounted.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let site = expect_context::<Site>();
    let open = Signal::derive(move || site.menu_open());

    view! {
        <AnimatedShow
            when=open
            show_class="menu-overlay-enter"
            hide_class="menu-overlay-exit"
            hide_delay=Duration::from_millis(500)
        >
            <div class="menu-overlay" role="dialog" aria-modal="true">
                <button class="menu-close" aria-label="Close menu" on:click=move |_| site.close_menu()>
                    <Icon path=ICON_CLOSE size=28 />
                </button>

                <div class="menu-links">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let target = item.target;
                            let delay = overlay_item_delay(i).as_millis();
                            view! {
                                <button
                                    class="menu-link"
                                    style=format!("animation-delay: {delay}ms;")
                                    on:click=move |_| site.go_to(target)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="menu-footer">{COMPANY.legal_name}</div>
            </div>
        </AnimatedShow>
    }
}
