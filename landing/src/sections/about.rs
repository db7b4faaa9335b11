use leptos::html::Section;
use leptos::prelude::*;
use rosemere::content::{COMPANY, IconKind, STATS, SectionId};
use rosemere::reveal::Entrance;

use super::icons::CardIcon;
use crate::hooks::{Site, use_reveal};

const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=2426&auto=format&fit=crop";

#[component]
pub fn About() -> impl IntoView {
    let site = expect_context::<Site>();
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(SectionId::About, section_ref);

    let copy = format!(
        "At {}, we bridge the gap between complex SAP ecosystems and seamless business \
         operations. With over a decade of specialized focus, we deliver world-class expertise \
         in Vendor Invoice Management (VIM).",
        COMPANY.legal_name
    );

    view! {
        <section id=SectionId::About.anchor() class="section about" node_ref=section_ref>
            <div class="container about-grid">
                <div class="about-copy" style=site.reveal_style(revealed, Entrance::FromLeft, 0)>
                    <h2 class="section-title">
                        "Driving Excellence in"
                        <br />
                        <span class="about-title-accent">"Financial Digitalization."</span>
                    </h2>
                    <p class="section-description">{copy}</p>
                    <div class="stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="about-visual">
                    <div class="about-image">
                        <img src=ABOUT_IMAGE alt="Data Analytics" loading="lazy" />
                        <div class="about-image-tint"></div>
                    </div>
                    <div class="about-badge">
                        <CardIcon kind=IconKind::ShieldCheck size=32 />
                        <p class="about-badge-title">"Certified SAP Partners"</p>
                        <p class="about-badge-sub">"Industry Standard Security"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
