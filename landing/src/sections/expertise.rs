use leptos::html::Section;
use leptos::prelude::*;
use rosemere::content::{SERVICES, SectionId, ServiceCard};
use rosemere::reveal::Entrance;

use super::icons::CardIcon;
use crate::hooks::{Site, use_reveal};

#[component]
pub fn Expertise() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(SectionId::Expertise, section_ref);

    view! {
        <section id=SectionId::Expertise.anchor() class="section expertise" node_ref=section_ref>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Expertise & Solutions"</h2>
                    <p class="section-description section-description-italic">
                        "End-to-end SAP OpenText VIM services tailored for complex global environments."
                    </p>
                </div>
                <div class="service-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ServiceTile card=card index=index revealed=revealed /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceTile(
    card: &'static ServiceCard,
    index: usize,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <div class="card service-card" style=site.reveal_style(revealed, Entrance::FromBelow, index)>
            <div class="card-icon">
                <CardIcon kind=card.icon />
            </div>
            <h3 class="card-title">{card.title}</h3>
            <p class="card-description">{card.description}</p>
        </div>
    }
}
