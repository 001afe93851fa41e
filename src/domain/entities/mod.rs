//! Core domain entities.
//!
//! - [`Country`] / [`CountryRule`] / [`CountryCatalog`] - The read-only country dataset
//! - [`HistoryEntry`] - A generated link recorded in the history log

pub mod country;
pub mod history_entry;

pub use country::{Country, CountryCatalog, CountryRule};
pub use history_entry::HistoryEntry;
