//! Utility functions used across the application:
//!
//! - [`id_generator`] - History entry id generation
//! - [`wa_link`] - Building and parsing `wa.me` links

pub mod id_generator;
pub mod wa_link;
