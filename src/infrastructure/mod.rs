//! Infrastructure layer: storage backends and the country dataset loader.
//!
//! - [`persistence`] - [`KeyValueStore`](crate::domain::repositories::KeyValueStore) backends
//! - [`catalog`] - JSON dataset loading into a [`CountryCatalog`](crate::domain::entities::CountryCatalog)

pub mod catalog;
pub mod persistence;
