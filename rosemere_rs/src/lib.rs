//! # rosemere
//!
//! Target-independent core of the Rosemere Limited single-page site.
//!
//! Everything the page needs that is not a DOM call lives here, so it can be
//! unit tested on the host and reused by the Leptos front-end in `landing/`.
//!
//! ## Modules
//!
//! - [`content`] - Static display records (navigation, clients, services, regions)
//! - [`metadata`] - Page head metadata (title, icons, Open Graph, JSON-LD)
//! - [`config`] - `site.toml` configuration with validation
//! - [`scroll`] - Scroll progress and the "scrolled past the threshold" flag
//! - [`reveal`] - One-shot reveal latches and stagger timing
//! - [`nav`] - Anchor navigation and mobile menu state
//! - [`links`] - Logo service URLs, logo fallback, outbound contact links
//!
//! ## Quick Start
//!
//! ```rust
//! use rosemere::scroll::{ScrollSample, ScrollTracker};
//!
//! let mut tracker = ScrollTracker::new(50.0);
//! let state = tracker.observe(ScrollSample {
//!     offset: 600.0,
//!     scroll_height: 2200.0,
//!     viewport_height: 1000.0,
//! });
//!
//! assert!(state.is_scrolled);
//! assert_eq!(state.progress, 0.5);
//! ```
//!
//! ```rust
//! use rosemere::content::SectionId;
//! use rosemere::reveal::RevealBoard;
//! use rosemere::config::SiteConfig;
//!
//! let config = SiteConfig::default();
//! let mut board = RevealBoard::new(&config.reveal);
//!
//! assert!(board.observe(SectionId::Clients, 0.5).is_revealed());
//! // One-shot: scrolling away and back does nothing.
//! assert!(!board.observe(SectionId::Clients, 0.0).is_revealed());
//! assert!(board.is_revealed(SectionId::Clients));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod links;
pub mod metadata;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use config::SiteConfig;
pub use content::SectionId;
pub use error::{Error, Result};
