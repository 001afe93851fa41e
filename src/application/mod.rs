//! Application layer services.
//!
//! Services combine the pure validator with the catalog and storage
//! collaborators and expose the operations the CLI drives.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Validation and `wa.me` link generation
//! - [`services::history_store::HistoryStore`] - Persisted newest-first history log
//! - [`services::session::Session`] - Interactive generator state (current link, country, locale)

pub mod services;
