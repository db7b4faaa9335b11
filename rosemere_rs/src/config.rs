//! Site configuration.
//!
//! The front-end embeds `site.toml` at compile time and hands its contents to
//! [`SiteConfig::load_or_default`]. Every table and key is optional; missing
//! values fall back to the canonical page revision.

use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::content::{COMPANY, SectionId};
use crate::error::{Error, Result};
use crate::links::LogoFallback;
use crate::nav::AnchorAlignment;

/// Longest accepted per-item stagger step.
pub const MAX_STAGGER_STEP_MS: u64 = 1000;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub logos: LogoConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset in pixels past which the logo and header compact.
    pub threshold_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { threshold_px: 50.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentMode {
    /// Subtract a fixed header height from the anchor position.
    HeaderOffset,
    /// Let the browser align the anchor (`scrollIntoView`).
    Native,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub alignment: AlignmentMode,
    pub header_offset_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            alignment: AlignmentMode::HeaderOffset,
            header_offset_px: 80.0,
        }
    }
}

impl NavigationConfig {
    pub fn anchor_alignment(&self) -> AnchorAlignment {
        match self.alignment {
            AlignmentMode::HeaderOffset => AnchorAlignment::HeaderOffset(self.header_offset_px),
            AlignmentMode::Native => AnchorAlignment::Native,
        }
    }
}

/// Visibility ratios that trigger each section's entrance, plus timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub stagger_step_ms: u64,
    pub duration_ms: u64,
    pub about: f64,
    pub vision: f64,
    pub footprint: f64,
    pub expertise: f64,
    pub clients: f64,
    pub contact: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_step_ms: 100,
            duration_ms: 700,
            about: 0.2,
            vision: 0.3,
            footprint: 0.2,
            expertise: 0.2,
            clients: 0.15,
            contact: 0.3,
        }
    }
}

impl RevealConfig {
    pub fn threshold(&self, section: SectionId) -> f64 {
        match section {
            SectionId::About => self.about,
            SectionId::Vision => self.vision,
            SectionId::Footprint => self.footprint,
            SectionId::Expertise => self.expertise,
            SectionId::Clients => self.clients,
            SectionId::Contact => self.contact,
        }
    }

    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackMode {
    TextLabel,
    Placeholder,
}

/// Remote logo lookup and what to show when it fails.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Publishable token for the logo service.
    pub token: String,
    /// Requested logo edge in pixels.
    pub size: u32,
    pub fallback: FallbackMode,
    /// Used when `fallback = "placeholder"`; `{name}` is replaced by the
    /// URL-encoded client name.
    pub placeholder_template: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            token: "pk_WcY2mQn5SXKX1lcnvkY-mA".into(),
            size: 256,
            fallback: FallbackMode::TextLabel,
            placeholder_template: "https://placehold.co/256x96/0f172a/94a3b8?text={name}".into(),
        }
    }
}

impl LogoConfig {
    pub fn fallback(&self) -> LogoFallback {
        match self.fallback {
            FallbackMode::TextLabel => LogoFallback::TextLabel,
            FallbackMode::Placeholder => LogoFallback::Placeholder {
                template: self.placeholder_template.clone(),
            },
        }
    }
}

/// Pre-filled outbound e-mail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: COMPANY.email.into(),
            subject: "SAP OpenText VIM enquiry".into(),
            body: "Hello Rosemere team,\n\nI would like to discuss ".into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `content`, falling back to defaults (with a warning) when it is
    /// malformed or fails validation. The page must always render.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                warn!("[rosemere][config] {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.scroll.threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::InvalidThreshold(threshold));
        }

        let offset = self.navigation.header_offset_px;
        if !offset.is_finite() || offset < 0.0 {
            return Err(Error::InvalidHeaderOffset(offset));
        }

        for section in SectionId::ALL {
            let ratio = self.reveal.threshold(section);
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(Error::InvalidRevealRatio { section, ratio });
            }
        }

        if self.reveal.stagger_step_ms > MAX_STAGGER_STEP_MS {
            return Err(Error::InvalidStaggerStep {
                got_ms: self.reveal.stagger_step_ms,
                max_ms: MAX_STAGGER_STEP_MS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll.threshold_px, 50.0);
        assert_eq!(
            config.navigation.anchor_alignment(),
            AnchorAlignment::HeaderOffset(80.0)
        );
        assert_eq!(config.reveal.threshold(SectionId::Footprint), 0.2);
        assert_eq!(config.reveal.threshold(SectionId::Clients), 0.15);
        assert_eq!(config.reveal.stagger_step(), Duration::from_millis(100));
        assert_eq!(config.logos.fallback(), LogoFallback::TextLabel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
[scroll]
threshold_px = 100

[navigation]
alignment = "native"

[reveal]
clients = 0.4
"#,
        )
        .expect("valid config");

        assert_eq!(config.scroll.threshold_px, 100.0);
        assert_eq!(config.navigation.anchor_alignment(), AnchorAlignment::Native);
        assert_eq!(config.reveal.clients, 0.4);
        // Untouched keys keep their defaults.
        assert_eq!(config.reveal.about, 0.2);
        assert_eq!(config.logos.size, 256);
    }

    #[test]
    fn test_placeholder_fallback() {
        let config = SiteConfig::from_toml_str(
            r#"
[logos]
fallback = "placeholder"
placeholder_template = "https://example.test/logo?text={name}"
"#,
        )
        .expect("valid config");

        assert_eq!(
            config.logos.fallback(),
            LogoFallback::Placeholder {
                template: "https://example.test/logo?text={name}".into()
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_ratio() {
        let err = SiteConfig::from_toml_str("[reveal]\nvision = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRevealRatio {
                section: SectionId::Vision,
                ..
            }
        ));

        let err = SiteConfig::from_toml_str("[reveal]\nabout = 0.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRevealRatio { .. }));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let err = SiteConfig::from_toml_str("[scroll]\nthreshold_px = -5\n").unwrap_err();
        assert!(matches!(err, Error::InvalidThreshold(_)));
    }

    #[test]
    fn test_rejects_negative_header_offset() {
        let err = SiteConfig::from_toml_str("[navigation]\nheader_offset_px = -10\n").unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderOffset(offset) if offset == -10.0));
        assert!(err.to_string().starts_with("header offset"));
    }

    #[test]
    fn test_rejects_slow_stagger() {
        let err = SiteConfig::from_toml_str("[reveal]\nstagger_step_ms = 5000\n").unwrap_err();
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn test_load_or_default_recovers() {
        assert_eq!(
            SiteConfig::load_or_default("[scroll\nthreshold_px = "),
            SiteConfig::default()
        );
        assert_eq!(
            SiteConfig::load_or_default("[reveal]\ncontact = 7.0\n"),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_shipped_site_toml_matches_defaults() {
        let shipped = include_str!("../../landing/site.toml");
        let config = SiteConfig::from_toml_str(shipped).expect("shipped config");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_error_is_config_variant() {
        let err = SiteConfig::from_toml_str("[scroll]\nthreshold_px = \"fifty\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
