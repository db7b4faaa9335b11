use leptos::html::Section;
use leptos::prelude::*;
use rosemere::content::{CLIENTS, COMPANY, ClientRecord, SectionId};
use rosemere::links::LogoState;
use rosemere::reveal::Entrance;

use crate::hooks::{Site, use_reveal};

#[component]
pub fn Clients() -> impl IntoView {
    let site = expect_context::<Site>();
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(SectionId::Clients, section_ref);
    let established = format!("ESTABLISHED {}", COMPANY.founded);

    view! {
        <section id=SectionId::Clients.anchor() class="section clients" node_ref=section_ref>
            <div class="container">
                <div class="clients-header">
                    <div style=site.reveal_style(revealed, Entrance::FromLeft, 0)>
                        <h2 class="section-title">"Trusted by Leaders"</h2>
                        <p class="section-eyebrow">"Strategic partnerships with Fortune 500 companies"</p>
                    </div>
                    <div class="clients-established">{established}</div>
                </div>
                <div class="client-grid">
                    {CLIENTS
                        .iter()
                        .enumerate()
                        .map(|(index, client)| view! { <ClientCard client=client index=index revealed=revealed /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Logo tile. A failed image is replaced according to the configured
/// fallback: the client name as text, or a generated placeholder image.
#[component]
fn ClientCard(
    client: &'static ClientRecord,
    index: usize,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let site = expect_context::<Site>();
    let logo = RwSignal::new(site.config.with_value(|c| LogoState::for_client(client, &c.logos)));

    let on_error = move |_| {
        let fallback = site.config.with_value(|c| c.logos.fallback());
        logo.update(|state| *state = state.on_error(client, &fallback));
    };

    view! {
        <div class="client-card" style=site.reveal_style(revealed, Entrance::FromBelow, index)>
            <Show when=move || logo.with(|state| !state.shows_label())>
                <img
                    class="client-logo"
                    src=move || logo.with(|state| state.src().unwrap_or_default().to_string())
                    alt=format!("{} logo", client.name)
                    loading="lazy"
                    on:error=on_error
                />
            </Show>
            <span class="client-name" class:visible=move || logo.with(LogoState::shows_label)>
                {client.name}
            </span>
        </div>
    }
}
