//! # wa-link
//!
//! Turns a phone number typed in any local format into a `https://wa.me/` chat
//! link for a selected country, and keeps a persisted log of generated links.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Country dataset types, the pure validator, storage traits
//! - **Application Layer** ([`application`]) - Link generation, history log, interactive session
//! - **Infrastructure Layer** ([`infrastructure`]) - File/memory storage and dataset loading
//! - **Messages** ([`messages`]) - English and Arabic wording for validation failures
//!
//! ## Validation
//!
//! Input is stripped to digits, a pasted country code and one trunk `0` are
//! dropped, then the per-country length and prefix rules apply (generic 7 to 15
//! digits for countries without a rule). See [`domain::validator`].
//!
//! ## Quick Start
//!
//! ```bash
//! wa-link generate "010 1234 5678" --country EG
//! # https://wa.me/201012345678
//!
//! wa-link history list
//! wa-link interactive
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod messages;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        GeneratedLink, HISTORY_KEY, HistoryStore, LinkService, Session,
    };
    pub use crate::domain::entities::{Country, CountryCatalog, CountryRule, HistoryEntry};
    pub use crate::domain::repositories::KeyValueStore;
    pub use crate::domain::validator::{InvalidReason, ValidationResult, validate};
    pub use crate::error::AppError;
    pub use crate::messages::Locale;
}
