use leptos::html::Section;
use leptos::prelude::*;
use rosemere::content::{IconKind, REGIONS, SectionId};
use rosemere::reveal::Entrance;

use super::icons::CardIcon;
use crate::hooks::{Site, use_reveal};

#[component]
pub fn Footprint() -> impl IntoView {
    let site = expect_context::<Site>();
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(SectionId::Footprint, section_ref);

    view! {
        <section id=SectionId::Footprint.anchor() class="section footprint" node_ref=section_ref>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Global Reach"</h2>
                    <p class="section-eyebrow">"Our implementation footprint across the continents"</p>
                </div>
                <div class="region-grid">
                    {REGIONS
                        .iter()
                        .enumerate()
                        .map(|(i, region)| {
                            view! {
                                <div
                                    class="card region-card"
                                    style=site.reveal_style(revealed, Entrance::FromBelow, i)
                                >
                                    <div class="region-pin">
                                        <CardIcon kind=IconKind::MapPinned />
                                    </div>
                                    <p class="region-name">{*region}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
