use leptos::prelude::*;
use rosemere::links::{BRAND_LOGO, BRAND_MARK, LogoFallback, LogoState};

use crate::hooks::Site;

/// Thin bar along the top edge scaled by scroll progress.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let site = expect_context::<Site>();
    let scale = move || format!("transform: scaleX({:.4});", site.scroll.get().progress);

    view! { <div class="progress-bar" style=scale></div> }
}

/// Fixed logo in the top-left corner; compacts once the page is scrolled and
/// scrolls back to the top on click. Shows the legal name if the image fails.
#[component]
pub fn Logo() -> impl IntoView {
    let site = expect_context::<Site>();
    let compact = move || if site.is_scrolled() { " compact" } else { "" };
    let logo = RwSignal::new(LogoState::brand());

    let on_error = move |_| {
        logo.update(|state| *state = state.on_error(&BRAND_MARK, &LogoFallback::TextLabel));
    };

    view! {
        <div class=move || format!("logo{}", compact()) on:click=move |_| site.go_to_top()>
            <div class=move || format!("logo-frame{}", compact())>
                <Show
                    when=move || logo.with(|state| !state.shows_label())
                    fallback=move || {
                        view! {
                            <span class=move || format!("logo-wordmark{}", compact())>
                                {BRAND_MARK.name}
                            </span>
                        }
                    }
                >
                    <img
                        src=BRAND_LOGO
                        alt="Rosemere Limited Logo"
                        class=move || format!("logo-img{}", compact())
                        on:error=on_error
                    />
                </Show>
            </div>
        </div>
    }
}
