//! Page head metadata.
//!
//! Static configuration consumed by the document head: title, description,
//! keywords, icon set, Open Graph preview and web fonts. The front-end renders
//! it with `leptos_meta`.

use serde::Serialize;
use serde_json::json;

use crate::content::{COMPANY, CompanyInfo};
use crate::links::BRAND_LOGO;

/// `<link rel=...>` icon entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IconLink {
    pub rel: &'static str,
    pub href: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub image: &'static str,
}

/// Web font exposed to CSS through a custom property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontFace {
    pub family: &'static str,
    pub css_variable: &'static str,
    pub stylesheet: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub icons: &'static [IconLink],
    pub open_graph: OpenGraph,
    pub fonts: &'static [FontFace],
}

pub const SITE_METADATA: PageMetadata = PageMetadata {
    lang: "en",
    title: "Rosemere Ltd. UK",
    description: "Rosemere Limited is a specialised SAP consulting firm focused on OpenText \
Vendor Invoice Management (VIM) and SAP Document & Reporting Compliance (DRC).",
    keywords: &[
        "SAP OpenText VIM",
        "invoice automation",
        "VIM rollout",
        "SAP consulting",
        "UK",
    ],
    icons: &[
        IconLink {
            rel: "icon",
            href: "/favicon.ico",
            mime: None,
            sizes: None,
        },
        IconLink {
            rel: "shortcut icon",
            href: "/favicon.ico",
            mime: None,
            sizes: None,
        },
        IconLink {
            rel: "apple-touch-icon",
            href: "/apple-touch-icon.png",
            mime: None,
            sizes: None,
        },
        IconLink {
            rel: "icon",
            href: "/icon.png",
            mime: Some("image/png"),
            sizes: Some("192x192"),
        },
        IconLink {
            rel: "icon",
            href: "/icon.png",
            mime: Some("image/png"),
            sizes: Some("512x512"),
        },
    ],
    open_graph: OpenGraph {
        title: "Rosemere Limited",
        description: "SAP OpenText VIM Global Rollout Specialists",
        url: "https://rosemere-ltd.co.uk",
        image: BRAND_LOGO,
    },
    fonts: &[
        FontFace {
            family: "Geist",
            css_variable: "--font-geist-sans",
            stylesheet: "https://fonts.googleapis.com/css2?family=Geist:wght@100..900&display=swap",
        },
        FontFace {
            family: "Geist Mono",
            css_variable: "--font-geist-mono",
            stylesheet: "https://fonts.googleapis.com/css2?family=Geist+Mono:wght@100..900&display=swap",
        },
    ],
};

impl PageMetadata {
    /// Comma-separated `<meta name="keywords">` content.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// `:root` declarations binding each font to its CSS variable.
    pub fn font_variables_css(&self) -> String {
        let decls: String = self
            .fonts
            .iter()
            .map(|f| {
                format!(
                    "{}: '{}', ui-sans-serif, system-ui, sans-serif;",
                    f.css_variable, f.family
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!(":root {{ {decls} }}")
    }
}

/// schema.org `Organization` block for the document head.
pub fn organization_json_ld(company: &CompanyInfo, meta: &PageMetadata) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": company.legal_name,
        "url": company.url,
        "logo": format!("{}{}", company.url, meta.open_graph.image),
        "email": company.email,
        "foundingDate": company.founded.to_string(),
        "address": { "@type": "PostalAddress", "addressCountry": "GB" },
        "description": meta.description,
    })
    .to_string()
}

/// JSON-LD for the shipped site.
pub fn site_json_ld() -> String {
    organization_json_ld(&COMPANY, &SITE_METADATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_join_with_commas() {
        assert_eq!(
            SITE_METADATA.keywords_content(),
            "SAP OpenText VIM, invoice automation, VIM rollout, SAP consulting, UK"
        );
    }

    #[test]
    fn icon_set_has_both_png_sizes() {
        let sizes: Vec<_> = SITE_METADATA
            .icons
            .iter()
            .filter(|i| i.mime == Some("image/png"))
            .filter_map(|i| i.sizes)
            .collect();
        assert_eq!(sizes, vec!["192x192", "512x512"]);
        assert!(SITE_METADATA.icons.iter().any(|i| i.rel == "apple-touch-icon"));
    }

    #[test]
    fn document_language_is_english() {
        assert_eq!(SITE_METADATA.lang, "en");
    }

    #[test]
    fn font_variables_are_declared() {
        let css = SITE_METADATA.font_variables_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--font-geist-sans: 'Geist'"));
        assert!(css.contains("--font-geist-mono: 'Geist Mono'"));
    }

    #[test]
    fn json_ld_describes_organization() {
        let value: serde_json::Value = serde_json::from_str(&site_json_ld()).unwrap();
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], "Rosemere Limited");
        assert_eq!(value["logo"], "https://rosemere-ltd.co.uk/logo.png");
        assert_eq!(value["foundingDate"], "2007");
    }
}
