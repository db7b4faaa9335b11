use leptos::prelude::*;
use rosemere::content::{COMPANY, SectionId};

use super::icons::{ICON_ARROW_DOWN, ICON_CHEVRON_RIGHT, Icon};
use crate::hooks::Site;

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<Site>();
    let lead = format!(
        "Transforming global finance landscapes with SAP OpenText VIM excellence since {}. \
         Trusted by the world's most complex enterprises.",
        COMPANY.founded
    );

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-glow"></div>
                <div class="hero-texture"></div>
            </div>

            <div class="container hero-content">
                <span class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "United Kingdom • Global Logistics Specialists"
                </span>
                <h1 class="hero-title">
                    {COMPANY.legal_name}
                    <br />
                    <span class="hero-title-accent">"Intelligent Automation"</span>
                </h1>
                <p class="hero-description">{lead}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| site.go_to(SectionId::Expertise)>
                        "Our Solutions"
                        <Icon path=ICON_CHEVRON_RIGHT size=18 class="btn-chevron" />
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| site.go_to(SectionId::Contact)>
                        "Get in Touch"
                    </button>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <Icon path=ICON_ARROW_DOWN size=30 stroke_width="1" />
            </div>
        </section>
    }
}
