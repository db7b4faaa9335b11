use leptos::html::Section;
use leptos::prelude::*;
use rosemere::content::{COMPANY, SectionId};
use rosemere::links::{mailto_url, webmail_compose_url};
use rosemere::reveal::Entrance;

use super::icons::{ICON_EXTERNAL, ICON_MAIL, ICON_MAP_PIN, Icon};
use crate::hooks::{Site, use_reveal};

#[component]
pub fn Contact() -> impl IntoView {
    let site = expect_context::<Site>();
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(SectionId::Contact, section_ref);

    let (mailto, webmail, email) = site.config.with_value(|c| {
        (
            mailto_url(&c.contact),
            webmail_compose_url(&c.contact),
            c.contact.email.clone(),
        )
    });
    let pitch = format!(
        "Let's discuss how {} can optimize your global financial workflows.",
        COMPANY.name
    );

    view! {
        <section id=SectionId::Contact.anchor() class="section contact" node_ref=section_ref>
            <div class="container container-narrow">
                <div class="contact-panel" style=site.reveal_style(revealed, Entrance::FromBelow, 0)>
                    <div class="contact-texture"></div>
                    <h2 class="contact-title">"Ready to automate?"</h2>
                    <p class="contact-description">{pitch}</p>
                    <div class="contact-actions">
                        <a href=mailto class="contact-pill contact-pill-dark">
                            <Icon path=ICON_MAIL size=18 class="accent-cyan" />
                            {email}
                        </a>
                        <a href=webmail target="_blank" rel="noopener noreferrer" class="contact-pill">
                            <Icon path=ICON_EXTERNAL size=18 />
                            "Compose in Gmail"
                        </a>
                        <div class="contact-pill">
                            <Icon path=ICON_MAP_PIN size=18 />
                            {COMPANY.location}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
