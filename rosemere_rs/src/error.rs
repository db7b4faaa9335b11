//! Error type shared by the core crate.

use crate::content::SectionId;

/// Errors raised while loading or validating site configuration.
///
/// Runtime operations (scrolling, toggling, reveal) are total and never
/// produce these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse site configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("scroll threshold must be a finite, non-negative pixel value (got {0})")]
    InvalidThreshold(f64),

    #[error("header offset must be a finite, non-negative pixel value (got {0})")]
    InvalidHeaderOffset(f64),

    #[error("reveal ratio for `{section}` must be in (0, 1] (got {ratio})")]
    InvalidRevealRatio { section: SectionId, ratio: f64 },

    #[error("stagger step must be at most {max_ms} ms (got {got_ms} ms)")]
    InvalidStaggerStep { got_ms: u64, max_ms: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
