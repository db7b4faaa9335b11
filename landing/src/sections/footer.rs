use leptos::prelude::*;
use rosemere::content::COMPANY;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    let copyright = format!(
        "© {}–{} {}. All rights reserved.",
        COMPANY.founded, year, COMPANY.legal_name
    );

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <span class="footer-brand">{COMPANY.legal_name.to_uppercase()}</span>
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Privacy"</a>
                    <a href="#" class="footer-link">"Terms"</a>
                </div>
            </div>
        </footer>
    }
}
