use leptos::prelude::*;
use leptos_meta::{Html, Link, Meta, Script, Style, Stylesheet, Title};
use rosemere::metadata::{SITE_METADATA, site_json_ld};

use crate::styles::SITE_CSS;

/// Document head: language, title, description, icons, Open Graph, fonts,
/// styles.
#[component]
pub fn PageHead() -> impl IntoView {
    let meta = SITE_METADATA;
    let og = meta.open_graph;

    view! {
        <Html attr:lang=meta.lang />
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta name="keywords" content=meta.keywords_content() />
        <Meta name="theme-color" content="#020617" />

        {meta
            .icons
            .iter()
            .map(|icon| match (icon.mime, icon.sizes) {
                (Some(mime), Some(sizes)) => view! {
                    <Link rel=icon.rel href=icon.href type_=mime sizes=sizes />
                }
                .into_any(),
                _ => view! { <Link rel=icon.rel href=icon.href /> }.into_any(),
            })
            .collect::<Vec<_>>()}

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=og.title />
        <Meta property="og:description" content=og.description />
        <Meta property="og:url" content=og.url />
        <Meta property="og:image" content=og.image />

        {meta
            .fonts
            .iter()
            .map(|font| view! { <Stylesheet href=font.stylesheet /> })
            .collect::<Vec<_>>()}
        <Style>{meta.font_variables_css()}</Style>
        <Style>{SITE_CSS}</Style>
        <Script type_="application/ld+json">{site_json_ld()}</Script>
    }
}
