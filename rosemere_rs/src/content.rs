//! Static display records rendered by the page sections.
//!
//! Nothing here is mutated at runtime. Sections iterate these slices and
//! derive per-item stagger delays from the index.

use serde::Serialize;
use std::fmt;

/// Anchor sections that navigation can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Vision,
    Footprint,
    Expertise,
    Clients,
    Contact,
}

impl SectionId {
    /// All anchor sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Vision,
        SectionId::Footprint,
        SectionId::Expertise,
        SectionId::Clients,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Vision => "vision",
            SectionId::Footprint => "footprint",
            SectionId::Expertise => "expertise",
            SectionId::Clients => "clients",
            SectionId::Contact => "contact",
        }
    }

    /// Section named by a DOM id or a URL fragment (`#clients`).
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Entry of the desktop header and the mobile overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        target: SectionId::About,
    },
    NavItem {
        label: "Vision",
        target: SectionId::Vision,
    },
    NavItem {
        label: "Footprint",
        target: SectionId::Footprint,
    },
    NavItem {
        label: "Services",
        target: SectionId::Expertise,
    },
    NavItem {
        label: "Clients",
        target: SectionId::Clients,
    },
    NavItem {
        label: "Contact",
        target: SectionId::Contact,
    },
];

/// Client shown in the logo grid. `domain` is the logo service lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub name: &'static str,
    pub domain: &'static str,
}

pub const CLIENTS: &[ClientRecord] = &[
    ClientRecord {
        name: "GlaxoSmithKline",
        domain: "gsk.com",
    },
    ClientRecord {
        name: "Roche",
        domain: "roche.com",
    },
    ClientRecord {
        name: "Twinings",
        domain: "twinings.co.uk",
    },
    ClientRecord {
        name: "Unilever",
        domain: "unilever.com",
    },
    ClientRecord {
        name: "TNT / FedEx",
        domain: "tnt.com",
    },
    ClientRecord {
        name: "Maersk",
        domain: "maersk.com",
    },
    ClientRecord {
        name: "BOC Linde",
        domain: "boc.com",
    },
];

/// Glyphs used by cards. The front-end maps each to an inline SVG and an
/// accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Settings,
    FileCheck,
    Zap,
    Brain,
    Users,
    Globe,
    ShieldCheck,
    MapPinned,
    Target,
    Compass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: IconKind::Settings,
        title: "Solution Architecture",
        description: "Enterprise-grade VIM configuration and design.",
    },
    ServiceCard {
        icon: IconKind::FileCheck,
        title: "Quality Assurance",
        description: "Rigorous FUT, SIT, and UAT with automated tracking.",
    },
    ServiceCard {
        icon: IconKind::Zap,
        title: "OCR / AI Automation",
        description: "Intelligent data extraction with OpenText IES.",
    },
    ServiceCard {
        icon: IconKind::Brain,
        title: "Optimisation",
        description: "Performance tuning and process re-engineering.",
    },
    ServiceCard {
        icon: IconKind::Users,
        title: "Training Programs",
        description: "Expert-led knowledge transfer for global teams.",
    },
    ServiceCard {
        icon: IconKind::Globe,
        title: "Global Rollouts",
        description: "Multi-country, multi-language deployment strategies.",
    },
];

/// Geographic region named in the footprint grid.
pub type RegionLabel = &'static str;

pub const REGIONS: &[RegionLabel] = &[
    "North America",
    "South America",
    "Europe",
    "United Kingdom",
    "Asia",
];

/// Headline figure in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "25+",
        label: "Years Experience",
    },
    Stat {
        value: "15",
        label: "Global Rollouts",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VisionPillar {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VISION_STATEMENT: &str = "A finance function where every invoice flows from receipt to \
payment without friction, in every country, on one compliant SAP platform.";

pub const VISION_PILLARS: &[VisionPillar] = &[
    VisionPillar {
        icon: IconKind::Target,
        title: "Touchless Processing",
        description: "Raise straight-through rates until manual keying is the exception, not the rule.",
    },
    VisionPillar {
        icon: IconKind::ShieldCheck,
        title: "Compliance by Design",
        description: "Build e-invoicing and SAP DRC reporting into the process, not bolted on after go-live.",
    },
    VisionPillar {
        icon: IconKind::Compass,
        title: "One Global Template",
        description: "Roll out a single VIM design that adapts to local rules without forking the core.",
    },
];

/// Facts about the firm reused across hero, contact, footer and metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub legal_name: &'static str,
    pub founded: u16,
    pub email: &'static str,
    pub location: &'static str,
    pub url: &'static str,
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Rosemere",
    legal_name: "Rosemere Limited",
    founded: 2007,
    email: "pras@rosemere-ltd.co.uk",
    location: "United Kingdom",
    url: "https://rosemere-ltd.co.uk",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_are_unique() {
        let anchors: HashSet<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Clients.to_string(), "clients");
    }

    #[test]
    fn url_fragments_resolve_to_sections() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#expertise"), Some(SectionId::Expertise));
        assert_eq!(SectionId::from_anchor("#pricing"), None);
        assert_eq!(SectionId::from_anchor(""), None);
        assert_eq!(SectionId::from_anchor("#"), None);
    }

    #[test]
    fn nav_covers_every_anchor_once() {
        let targets: HashSet<_> = NAV_ITEMS.iter().map(|item| item.target).collect();
        assert_eq!(targets.len(), NAV_ITEMS.len());
        assert_eq!(targets.len(), SectionId::ALL.len());
    }

    #[test]
    fn services_label_points_at_expertise() {
        let services = NAV_ITEMS
            .iter()
            .find(|item| item.label == "Services")
            .map(|item| item.target);
        assert_eq!(services, Some(SectionId::Expertise));
    }

    #[test]
    fn client_domains_are_unique_and_bare() {
        let domains: HashSet<_> = CLIENTS.iter().map(|c| c.domain).collect();
        assert_eq!(domains.len(), CLIENTS.len());
        for client in CLIENTS {
            assert!(!client.domain.contains("://"), "{}", client.domain);
            assert!(client.domain.contains('.'), "{}", client.domain);
        }
    }

    #[test]
    fn section_id_serializes_as_anchor() {
        let json = serde_json::to_string(&SectionId::Expertise).unwrap();
        assert_eq!(json, "\"expertise\"");
    }
}
