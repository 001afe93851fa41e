//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See integration tests in `tests/history_persistence.rs` for usage examples.

pub mod key_value_store;

pub use key_value_store::KeyValueStore;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
