//! Error types shared across the crate.
//!
//! Validation failures are not errors in the exceptional sense: they are typed
//! reasons returned to the caller, which picks the user-facing wording (see
//! [`crate::messages`]). Storage and catalog errors cover the two external
//! collaborators: the persisted history slot and the country dataset.

use std::path::PathBuf;

use crate::domain::validator::InvalidReason;

/// Top-level error returned by the application services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The entered number failed validation.
    #[error(transparent)]
    Validation(#[from] InvalidReason),

    /// Copy or open was requested before any successful generation.
    #[error("no link has been generated yet")]
    NoLinkYet,

    #[error("unknown country code: {0}")]
    UnknownCountry(String),
}

impl AppError {
    pub fn unknown_country(code: impl Into<String>) -> Self {
        Self::UnknownCountry(code.into())
    }

    /// Returns the validation reason if this is a validation failure.
    pub fn invalid_reason(&self) -> Option<&InvalidReason> {
        match self {
            Self::Validation(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Errors raised by a [`crate::domain::repositories::KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while loading or checking a country dataset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read country dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed country dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("country dataset is empty")]
    Empty,

    #[error("duplicate country code: {0}")]
    DuplicateCountry(String),

    #[error("country {code} has an invalid dial code '{dial_code}'")]
    InvalidDialCode { code: String, dial_code: String },

    #[error("rule for {code} has min {min} greater than max {max}")]
    InvalidBounds { code: String, min: usize, max: usize },

    #[error("rule for {code} has prefix '{prefix}' not shorter than min length {min}")]
    PrefixTooLong {
        code: String,
        prefix: String,
        min: usize,
    },

    #[error("rule for {code} references a country missing from the dataset")]
    UnknownRuleCountry { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err = AppError::from(InvalidReason::NoDigits);
        assert_eq!(err.to_string(), InvalidReason::NoDigits.to_string());
        assert_eq!(err.invalid_reason(), Some(&InvalidReason::NoDigits));
    }

    #[test]
    fn test_non_validation_error_has_no_reason() {
        assert!(AppError::NoLinkYet.invalid_reason().is_none());
        assert!(AppError::unknown_country("ZZ").invalid_reason().is_none());
    }

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::InvalidBounds {
            code: "EG".to_string(),
            min: 11,
            max: 10,
        };
        assert!(err.to_string().contains("EG"));
        assert!(err.to_string().contains("11"));
    }
}
