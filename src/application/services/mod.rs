//! Business logic services for the application layer.

pub mod history_store;
pub mod link_service;
pub mod session;

pub use history_store::{HISTORY_KEY, HistoryStore};
pub use link_service::{GeneratedLink, LinkService};
pub use session::Session;
