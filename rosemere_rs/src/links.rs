//! Outbound URLs: remote client logos and contact links.
//!
//! Logos come from a third-party lookup service we do not control. When an
//! image fails, [`LogoState::on_error`] decides what the card shows instead.

use tracing::debug;
use urlencoding::encode;

use crate::config::{ContactConfig, LogoConfig};
use crate::content::{COMPANY, ClientRecord};

pub const LOGO_SERVICE: &str = "https://img.logo.dev";
pub const WEBMAIL_COMPOSE: &str = "https://mail.google.com/mail/";

/// The firm's own logo, served from the bundle root.
pub const BRAND_LOGO: &str = "/logo.png";

/// The firm's own mark. Falls back to the legal name like a client card.
pub const BRAND_MARK: ClientRecord = ClientRecord {
    name: COMPANY.legal_name,
    domain: "rosemere-ltd.co.uk",
};

/// `https://img.logo.dev/{domain}?token={token}&size={size}`
pub fn logo_url(domain: &str, token: &str, size: u32) -> String {
    format!("{LOGO_SERVICE}/{domain}?token={}&size={size}", encode(token))
}

/// Expand `{name}` in a placeholder template with the URL-encoded name.
pub fn placeholder_url(template: &str, name: &str) -> String {
    template.replace("{name}", &encode(name))
}

/// What replaces a logo that failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoFallback {
    /// Hide the image and show the client name as text.
    TextLabel,
    /// Swap the image source for a generated placeholder.
    Placeholder { template: String },
}

/// Display state of one client card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoState {
    Remote(String),
    Placeholder(String),
    Label,
}

impl LogoState {
    /// Header logo. Bundled, so a failure goes straight to the wordmark.
    pub fn brand() -> Self {
        LogoState::Remote(BRAND_LOGO.into())
    }

    pub fn for_client(client: &ClientRecord, config: &LogoConfig) -> Self {
        LogoState::Remote(logo_url(client.domain, &config.token, config.size))
    }

    /// Image source to render, if any.
    pub fn src(&self) -> Option<&str> {
        match self {
            LogoState::Remote(url) | LogoState::Placeholder(url) => Some(url.as_str()),
            LogoState::Label => None,
        }
    }

    pub fn shows_label(&self) -> bool {
        matches!(self, LogoState::Label)
    }

    /// Transition after the current image fired `error`.
    ///
    /// A failing placeholder degrades to the label, so the card never loops
    /// between sources. No retries.
    pub fn on_error(&self, client: &ClientRecord, fallback: &LogoFallback) -> Self {
        let next = match (self, fallback) {
            (LogoState::Remote(_), LogoFallback::Placeholder { template }) => {
                LogoState::Placeholder(placeholder_url(template, client.name))
            }
            _ => LogoState::Label,
        };
        debug!("[rosemere][logos] {} logo failed, falling back to {next:?}", client.name);
        next
    }
}

/// `mailto:` link with pre-filled subject and body.
pub fn mailto_url(contact: &ContactConfig) -> String {
    let mut url = format!("mailto:{}", contact.email);
    let mut sep = '?';
    for (key, value) in [("subject", &contact.subject), ("body", &contact.body)] {
        if value.is_empty() {
            continue;
        }
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(value));
        sep = '&';
    }
    url
}

/// Web-mail compose window with recipient, subject and body filled in.
pub fn webmail_compose_url(contact: &ContactConfig) -> String {
    format!(
        "{WEBMAIL_COMPOSE}?view=cm&fs=1&to={}&su={}&body={}",
        encode(&contact.email),
        encode(&contact.subject),
        encode(&contact.body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CLIENTS;
    use pretty_assertions::assert_eq;

    const ROCHE: ClientRecord = ClientRecord {
        name: "Roche",
        domain: "roche.com",
    };

    fn contact() -> ContactConfig {
        ContactConfig {
            email: "pras@rosemere-ltd.co.uk".into(),
            subject: "VIM rollout".into(),
            body: "Hi team,\nLet's talk & plan.".into(),
        }
    }

    #[test]
    fn logo_url_has_token_and_size() {
        assert_eq!(
            logo_url("gsk.com", "pk_abc", 256),
            "https://img.logo.dev/gsk.com?token=pk_abc&size=256"
        );
    }

    #[test]
    fn every_client_gets_a_remote_logo() {
        let config = LogoConfig::default();
        for client in CLIENTS {
            let state = LogoState::for_client(client, &config);
            let src = state.src().expect("remote src");
            assert!(src.starts_with(LOGO_SERVICE));
            assert!(src.contains(client.domain));
            assert!(!state.shows_label());
        }
    }

    #[test]
    fn text_label_fallback_hides_image() {
        let state = LogoState::Remote(logo_url("roche.com", "t", 64));
        let next = state.on_error(&ROCHE, &LogoFallback::TextLabel);

        assert_eq!(next, LogoState::Label);
        assert!(next.shows_label());
        assert_eq!(next.src(), None);
    }

    #[test]
    fn placeholder_fallback_encodes_name() {
        let tnt = ClientRecord {
            name: "TNT / FedEx",
            domain: "tnt.com",
        };
        let fallback = LogoFallback::Placeholder {
            template: "https://placehold.co/256x96?text={name}".into(),
        };
        let next = LogoState::Remote(String::new()).on_error(&tnt, &fallback);

        assert_eq!(
            next,
            LogoState::Placeholder("https://placehold.co/256x96?text=TNT%20%2F%20FedEx".into())
        );
    }

    #[test]
    fn brand_logo_degrades_to_wordmark() {
        let state = LogoState::brand();
        assert_eq!(state.src(), Some(BRAND_LOGO));

        let next = state.on_error(&BRAND_MARK, &LogoFallback::TextLabel);
        assert!(next.shows_label());
        assert_eq!(BRAND_MARK.name, "Rosemere Limited");
    }

    #[test]
    fn failing_placeholder_degrades_to_label() {
        let fallback = LogoFallback::Placeholder {
            template: "https://placehold.co/?text={name}".into(),
        };
        let state = LogoState::Remote(String::new())
            .on_error(&ROCHE, &fallback)
            .on_error(&ROCHE, &fallback);
        assert_eq!(state, LogoState::Label);
        assert_eq!(state.on_error(&ROCHE, &fallback), LogoState::Label);
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        assert_eq!(
            mailto_url(&contact()),
            "mailto:pras@rosemere-ltd.co.uk?subject=VIM%20rollout&body=Hi%20team%2C%0ALet%27s%20talk%20%26%20plan."
        );
    }

    #[test]
    fn mailto_skips_empty_fields() {
        let bare = ContactConfig {
            subject: String::new(),
            body: String::new(),
            ..contact()
        };
        assert_eq!(mailto_url(&bare), "mailto:pras@rosemere-ltd.co.uk");

        let body_only = ContactConfig {
            subject: String::new(),
            body: "Hello".into(),
            ..contact()
        };
        assert_eq!(mailto_url(&body_only), "mailto:pras@rosemere-ltd.co.uk?body=Hello");
    }

    #[test]
    fn webmail_compose_is_fully_encoded() {
        let url = webmail_compose_url(&contact());
        assert!(url.starts_with(
            "https://mail.google.com/mail/?view=cm&fs=1&to=pras%40rosemere-ltd.co.uk"
        ));
        assert!(url.contains("&su=VIM%20rollout"));
        assert!(url.ends_with("&body=Hi%20team%2C%0ALet%27s%20talk%20%26%20plan."));
    }
}
