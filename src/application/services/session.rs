//! Interactive generator session: selected country, locale, and last link.

use tracing::debug;

use crate::application::services::{HistoryStore, LinkService};
use crate::domain::entities::{Country, HistoryEntry};
use crate::domain::validator::ValidationResult;
use crate::error::AppError;
use crate::messages::Locale;

/// State behind one interactive generator screen.
///
/// Failed generations leave the previous link and the history untouched.
pub struct Session {
    links: LinkService,
    history: HistoryStore,
    country: Country,
    locale: Locale,
    last_link: Option<String>,
}

impl Session {
    pub fn new(links: LinkService, history: HistoryStore, country: Country, locale: Locale) -> Self {
        Self {
            links,
            history,
            country,
            locale,
            last_link: None,
        }
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn links(&self) -> &LinkService {
        &self.links
    }

    /// Switches the selected country. The last link and history are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCountry`] if `code` is not in the catalog.
    pub fn select_country(&mut self, code: &str) -> Result<&Country, AppError> {
        self.country = self.links.country(code)?.clone();
        debug!(country = %self.country.code, "country selected");
        Ok(&self.country)
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggle();
        self.locale
    }

    /// Live validity of `raw_input` for the selected country.
    pub fn check(&self, raw_input: &str) -> ValidationResult {
        self.links.validate(raw_input, &self.country)
    }

    /// Generates a link, records it in history and makes it the current link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid input.
    pub fn generate(&mut self, raw_input: &str) -> Result<&str, AppError> {
        let generated = self.links.generate(raw_input, &self.country)?;
        self.history.append(generated.entry);
        Ok(self.last_link.insert(generated.link).as_str())
    }

    /// Current link, if one was generated since the last reset.
    pub fn last_link(&self) -> Option<&str> {
        self.last_link.as_deref()
    }

    /// Link to copy to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoLinkYet`] before any successful generation.
    pub fn copy_target(&self) -> Result<&str, AppError> {
        self.last_link().ok_or(AppError::NoLinkYet)
    }

    /// Link to open in the messaging client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoLinkYet`] before any successful generation.
    pub fn open_target(&self) -> Result<&str, AppError> {
        self.last_link().ok_or(AppError::NoLinkYet)
    }

    /// Forgets the current link. History is not affected.
    pub fn reset(&mut self) {
        self.last_link = None;
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) -> &[HistoryEntry] {
        self.history.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validator::InvalidReason;
    use crate::infrastructure::catalog;
    use crate::infrastructure::persistence::MemoryStore;
    use std::sync::Arc;

    fn session() -> Session {
        let catalog = Arc::new(catalog::builtin().unwrap());
        let country = catalog.default_country().clone();
        Session::new(
            LinkService::new(catalog),
            HistoryStore::open(Arc::new(MemoryStore::new())),
            country,
            Locale::En,
        )
    }

    #[test]
    fn test_copy_and_open_require_a_link() {
        let session = session();
        assert!(matches!(session.copy_target(), Err(AppError::NoLinkYet)));
        assert!(matches!(session.open_target(), Err(AppError::NoLinkYet)));
    }

    #[test]
    fn test_generate_sets_link_and_history() {
        let mut session = session();

        let link = session.generate("01012345678").unwrap().to_string();

        assert_eq!(link, "https://wa.me/201012345678");
        assert_eq!(session.copy_target().unwrap(), link);
        assert_eq!(session.open_target().unwrap(), link);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].link, link);
    }

    #[test]
    fn test_failed_generate_keeps_previous_state() {
        let mut session = session();
        session.generate("01012345678").unwrap();

        let err = session.generate("123").unwrap_err();

        assert!(err.invalid_reason().is_some());
        assert_eq!(session.last_link(), Some("https://wa.me/201012345678"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reset_clears_link_only() {
        let mut session = session();
        session.generate("01012345678").unwrap();

        session.reset();

        assert!(matches!(session.copy_target(), Err(AppError::NoLinkYet)));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_select_country_changes_validation() {
        let mut session = session();
        assert!(!session.check("0501234567").valid);

        session.select_country("sa").unwrap();
        assert_eq!(session.country().code, "SA");
        assert!(session.check("0501234567").valid);

        assert!(session.select_country("ZZ").is_err());
        assert_eq!(session.country().code, "SA");
    }

    #[test]
    fn test_select_country_by_dial_code() {
        let mut session = session();
        session.select_country("+966").unwrap();
        assert_eq!(session.country().code, "SA");
    }

    #[test]
    fn test_check_reports_reason() {
        let session = session();
        assert_eq!(session.check("").reason, Some(InvalidReason::EmptyInput));
    }

    #[test]
    fn test_history_order_and_clear() {
        let mut session = session();
        session.generate("01012345678").unwrap();
        session.generate("01112345678").unwrap();

        assert_eq!(session.history()[0].link, "https://wa.me/201112345678");
        assert_eq!(session.history()[1].link, "https://wa.me/201012345678");

        assert!(session.clear_history().is_empty());
        assert_eq!(session.last_link(), Some("https://wa.me/201112345678"));
    }

    #[test]
    fn test_toggle_locale() {
        let mut session = session();
        assert_eq!(session.toggle_locale(), Locale::Ar);
        assert_eq!(session.locale(), Locale::Ar);
    }
}
