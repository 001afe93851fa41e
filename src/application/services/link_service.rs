//! Link validation and generation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Country, CountryCatalog, HistoryEntry};
use crate::domain::validator::{ValidationResult, validate};
use crate::error::AppError;
use crate::utils::id_generator::generate_entry_id;
use crate::utils::wa_link::build_link;

/// A successfully generated link plus the history entry describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    pub link: String,
    pub entry: HistoryEntry,
}

/// Service for validating numbers and turning them into `wa.me` links.
///
/// Looks up the country rule in the injected catalog; the catalog itself is
/// never modified.
pub struct LinkService {
    catalog: Arc<CountryCatalog>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    /// Resolves a country by code (`EG`) or, failing that, by dial code (`+20`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCountry`] if neither matches the dataset.
    pub fn country(&self, code: &str) -> Result<&Country, AppError> {
        self.catalog
            .find(code)
            .or_else(|| self.catalog.find_by_dial_code(code))
            .ok_or_else(|| AppError::unknown_country(code))
    }

    /// Validates `raw_input` for `country` using the catalog rule, if any.
    pub fn validate(&self, raw_input: &str, country: &Country) -> ValidationResult {
        validate(raw_input, country, self.catalog.rule_for(&country.code))
    }

    /// Validates and builds a link stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the failing reason. No link is
    /// produced for invalid input.
    pub fn generate(&self, raw_input: &str, country: &Country) -> Result<GeneratedLink, AppError> {
        self.generate_at(raw_input, country, Utc::now())
    }

    /// Same as [`Self::generate`] with an explicit creation time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub fn generate_at(
        &self,
        raw_input: &str,
        country: &Country,
        now: DateTime<Utc>,
    ) -> Result<GeneratedLink, AppError> {
        let normalized = self.validate(raw_input, country).into_result()?;

        let link = build_link(&country.dial_code, &normalized);
        let created_at = now.timestamp_millis();
        let entry = HistoryEntry::new(
            generate_entry_id(created_at),
            format!("{} {}", country.dial_code, normalized),
            link.clone(),
            created_at,
            country.code.clone(),
        );

        tracing::info!(country = %country.code, %link, "link generated");
        Ok(GeneratedLink { link, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validator::InvalidReason;
    use crate::infrastructure::catalog;
    use crate::utils::wa_link::parse_link;

    fn service() -> LinkService {
        LinkService::new(Arc::new(catalog::builtin().unwrap()))
    }

    #[test]
    fn test_generate_egypt_link() {
        let service = service();
        let egypt = service.country("EG").unwrap().clone();

        let generated = service.generate("01012345678", &egypt).unwrap();

        assert_eq!(generated.link, "https://wa.me/201012345678");
        assert_eq!(generated.entry.link, generated.link);
        assert_eq!(generated.entry.display_number, "+20 1012345678");
        assert_eq!(generated.entry.country_code, "EG");
        assert!(!generated.entry.id.is_empty());
    }

    #[test]
    fn test_generate_with_pasted_dial_code() {
        let service = service();
        let egypt = service.country("EG").unwrap().clone();

        let generated = service.generate("20 1012345678", &egypt).unwrap();
        assert_eq!(generated.link, "https://wa.me/201012345678");
    }

    #[test]
    fn test_generate_failure_propagates_reason() {
        let service = service();
        let egypt = service.country("EG").unwrap().clone();

        let err = service.generate("99012345678", &egypt).unwrap_err();
        assert_eq!(
            err.invalid_reason(),
            Some(&InvalidReason::LengthOutOfRange { min: 10, max: 10 })
        );

        let err = service.generate("", &egypt).unwrap_err();
        assert_eq!(err.invalid_reason(), Some(&InvalidReason::EmptyInput));
    }

    #[test]
    fn test_generate_at_uses_given_time() {
        let service = service();
        let egypt = service.country("EG").unwrap().clone();
        let now = DateTime::from_timestamp_millis(1_718_000_000_000).unwrap();

        let generated = service.generate_at("01112345678", &egypt, now).unwrap();
        assert_eq!(generated.entry.created_at, 1_718_000_000_000);
        assert!(generated.entry.id.starts_with("1718000000000"));
    }

    #[test]
    fn test_country_without_rule_uses_generic_bounds() {
        let service = service();
        let italy = service.country("it").unwrap().clone();

        assert!(service.generate("3123456789", &italy).is_ok());
        let err = service.generate("12345", &italy).unwrap_err();
        assert_eq!(err.invalid_reason(), Some(&InvalidReason::TooShort));
    }

    #[test]
    fn test_country_by_dial_code() {
        let service = service();
        assert_eq!(service.country("+20").unwrap().code, "EG");
        assert_eq!(service.country("966").unwrap().code, "SA");
        assert!(service.country("+999").is_err());
    }

    #[test]
    fn test_unknown_country() {
        assert!(matches!(
            service().country("ZZ"),
            Err(AppError::UnknownCountry(_))
        ));
    }

    #[test]
    fn test_link_round_trip() {
        let service = service();
        let saudi = service.country("SA").unwrap().clone();

        let generated = service.generate("0501234567", &saudi).unwrap();
        let digits = parse_link(&generated.link).unwrap();

        assert_eq!(digits, "966501234567");
        assert_eq!(
            service.validate(&format!("+{digits}"), &saudi).normalized_number,
            "501234567"
        );
    }
}
