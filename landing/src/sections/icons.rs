//! Inline SVG icons.
//!
//! Outline glyphs on a 24x24 grid, drawn with `currentColor` strokes so the
//! surrounding text colour applies.

use leptos::prelude::*;
use rosemere::content::IconKind;

/// Renders an inline stroke icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAIL size=18 class="text-cyan" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = 24)]
    size: u32,
    /// Stroke width
    #[prop(default = "2")]
    stroke_width: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Glyph for a content card.
#[component]
pub fn CardIcon(kind: IconKind, #[prop(default = 24)] size: u32) -> impl IntoView {
    view! { <Icon path=icon_path(kind) size=size class=icon_accent(kind) /> }
}

pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Settings => ICON_SETTINGS,
        IconKind::FileCheck => ICON_FILE_CHECK,
        IconKind::Zap => ICON_ZAP,
        IconKind::Brain => ICON_BRAIN,
        IconKind::Users => ICON_USERS,
        IconKind::Globe => ICON_GLOBE,
        IconKind::ShieldCheck => ICON_SHIELD_CHECK,
        IconKind::MapPinned => ICON_MAP_PINNED,
        IconKind::Target => ICON_TARGET,
        IconKind::Compass => ICON_COMPASS,
    }
}

/// Accent colour class per glyph.
pub fn icon_accent(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Settings | IconKind::MapPinned | IconKind::ShieldCheck => "accent-cyan",
        IconKind::FileCheck | IconKind::Target => "accent-blue",
        IconKind::Zap => "accent-yellow",
        IconKind::Brain | IconKind::Compass => "accent-purple",
        IconKind::Users => "accent-emerald",
        IconKind::Globe => "accent-orange",
    }
}

// =============================================================================
// Chrome
// =============================================================================

pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

pub const ICON_CLOSE: &str = "M18 6 6 18M6 6l12 12";

pub const ICON_ARROW_DOWN: &str = "M12 5v14M19 12l-7 7-7-7";

pub const ICON_CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";

pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm18 2-10 7L2 6";

pub const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zm-8 3a3 3 0 1 0 0-6 3 3 0 0 0 0 6z";

pub const ICON_EXTERNAL: &str = "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6";

// =============================================================================
// Cards
// =============================================================================

const ICON_SETTINGS: &str = "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6zm7.4-3a7.4 7.4 0 0 0-.1-1.2l2-1.6-2-3.4-2.4 1a7.5 7.5 0 0 0-2-1.2L14.5 3h-5l-.4 2.6a7.5 7.5 0 0 0-2 1.2l-2.4-1-2 3.4 2 1.6a7.4 7.4 0 0 0 0 2.4l-2 1.6 2 3.4 2.4-1a7.5 7.5 0 0 0 2 1.2l.4 2.6h5l.4-2.6a7.5 7.5 0 0 0 2-1.2l2.4 1 2-3.4-2-1.6c.1-.4.1-.8.1-1.2z";

const ICON_FILE_CHECK: &str = "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zm0 0v6h6M9 15l2 2 4-4";

const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

const ICON_BRAIN: &str = "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18zm0 0a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18zm3 8a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4";

const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zm13 10v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

const ICON_GLOBE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

const ICON_SHIELD_CHECK: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zm-3-10 2 2 4-4";

const ICON_MAP_PINNED: &str = "M18 8c0 4.5-6 9-6 9s-6-4.5-6-9a6 6 0 0 1 12 0zm-6 2a2 2 0 1 0 0-4 2 2 0 0 0 0 4zM8.7 15H4l-2 7h20l-2-7h-4.7";

const ICON_TARGET: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zm0-4a6 6 0 1 0 0-12 6 6 0 0 0 0 12zm0-4a2 2 0 1 0 0-4 2 2 0 0 0 0 4z";

const ICON_COMPASS: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zm4.2-14.2-2.1 6.3-6.3 2.1 2.1-6.3z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_icon_has_path_and_accent() {
        let kinds = [
            IconKind::Settings,
            IconKind::FileCheck,
            IconKind::Zap,
            IconKind::Brain,
            IconKind::Users,
            IconKind::Globe,
            IconKind::ShieldCheck,
            IconKind::MapPinned,
            IconKind::Target,
            IconKind::Compass,
        ];
        for kind in kinds {
            assert!(icon_path(kind).starts_with('M'), "{kind:?}");
            assert!(icon_accent(kind).starts_with("accent-"), "{kind:?}");
        }
    }
}
