use leptos::html::Section;
use leptos::prelude::*;
use rosemere::content::{SectionId, VISION_PILLARS, VISION_STATEMENT};
use rosemere::reveal::Entrance;

use super::icons::CardIcon;
use crate::hooks::{Site, use_reveal};

#[component]
pub fn Vision() -> impl IntoView {
    let site = expect_context::<Site>();
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(SectionId::Vision, section_ref);

    view! {
        <section id=SectionId::Vision.anchor() class="section vision" node_ref=section_ref>
            <div class="container">
                <div class="section-header" style=site.reveal_style(revealed, Entrance::FromBelow, 0)>
                    <p class="section-eyebrow">"Our Vision"</p>
                    <h2 class="section-title">"Finance without friction."</h2>
                    <p class="section-description">{VISION_STATEMENT}</p>
                </div>
                <div class="vision-grid">
                    {VISION_PILLARS
                        .iter()
                        .enumerate()
                        .map(|(i, pillar)| {
                            view! {
                                <div
                                    class="card vision-card"
                                    style=site.reveal_style(revealed, Entrance::FromBelow, i + 1)
                                >
                                    <div class="card-icon">
                                        <CardIcon kind=pillar.icon />
                                    </div>
                                    <h3 class="card-title">{pillar.title}</h3>
                                    <p class="card-description">{pillar.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
