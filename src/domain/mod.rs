//! Domain layer: entities, the validator, and storage traits.
//!
//! Nothing here touches the filesystem or the terminal.
//!
//! # Architecture
//!
//! - [`entities`] - Country dataset types and history entries
//! - [`validator`] - Pure phone number normalization and validation
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! # Generation Flow
//!
//! 1. The caller passes raw text and the selected country to [`validator::validate`]
//! 2. On success [`crate::application::services::LinkService`] builds the `wa.me` link
//!    and a [`entities::HistoryEntry`]
//! 3. [`crate::application::services::HistoryStore`] prepends the entry and persists
//!    the whole log through [`repositories::KeyValueStore`]

pub mod entities;
pub mod repositories;
pub mod validator;
