//! Country, per-country validation rule, and the read-only catalog holding both.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

static DIAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{1,4}$").expect("dial code pattern is valid"));

/// A selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Unique identifier, ISO 3166 alpha-2 (e.g. `EG`).
    pub code: String,
    /// International calling code with a leading `+` (e.g. `+20`).
    pub dial_code: String,
    pub name: String,
    pub name_ar: String,
    #[serde(default)]
    pub flag: String,
}

impl Country {
    /// Dial code without the leading `+`.
    pub fn dial_digits(&self) -> &str {
        self.dial_code.trim_start_matches('+')
    }
}

/// Digit-count bounds and accepted leading prefixes for one country.
///
/// Bounds and prefixes apply to the national number after trunk-zero and
/// pasted-dial-code stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRule {
    pub code: String,
    pub min: usize,
    pub max: usize,
    pub starts_with: Option<Vec<String>>,
}

impl CountryRule {
    /// Accepted prefixes, empty when the rule does not constrain them.
    pub fn prefixes(&self) -> &[String] {
        self.starts_with.as_deref().unwrap_or_default()
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.min > self.max {
            return Err(CatalogError::InvalidBounds {
                code: self.code.clone(),
                min: self.min,
                max: self.max,
            });
        }

        if let Some(prefix) = self.prefixes().iter().find(|p| p.len() >= self.min) {
            return Err(CatalogError::PrefixTooLong {
                code: self.code.clone(),
                prefix: prefix.clone(),
                min: self.min,
            });
        }

        Ok(())
    }
}

/// Ordered country list plus the rule table keyed by country code.
///
/// Built once at startup and only read afterwards. Invariants of both
/// [`Country`] and [`CountryRule`] are checked on construction.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    rules: HashMap<String, CountryRule>,
}

impl CountryCatalog {
    /// Builds a catalog, rejecting datasets that break the model invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the list is empty, a code repeats, a dial
    /// code does not match `^\+\d{1,4}$`, a rule has `min > max` or a prefix
    /// not shorter than `min`, or a rule names a country missing from the list.
    pub fn new(countries: Vec<Country>, rules: Vec<CountryRule>) -> Result<Self, CatalogError> {
        if countries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(countries.len());
        for country in &countries {
            if !DIAL_CODE_RE.is_match(&country.dial_code) {
                return Err(CatalogError::InvalidDialCode {
                    code: country.code.clone(),
                    dial_code: country.dial_code.clone(),
                });
            }
            if !seen.insert(country.code.to_ascii_uppercase()) {
                return Err(CatalogError::DuplicateCountry(country.code.clone()));
            }
        }

        let mut table = HashMap::with_capacity(rules.len());
        for rule in rules {
            rule.check()?;
            let key = rule.code.to_ascii_uppercase();
            if !seen.contains(&key) {
                return Err(CatalogError::UnknownRuleCountry { code: rule.code });
            }
            table.insert(key, rule);
        }

        Ok(Self {
            countries,
            rules: table,
        })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// The first country in dataset order.
    pub fn default_country(&self) -> &Country {
        &self.countries[0]
    }

    /// Looks up a country by code, case-insensitively.
    pub fn find(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Looks up the first country using the given dial code (`+20` or `20`).
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&Country> {
        let wanted = dial_code.trim_start_matches('+');
        self.countries.iter().find(|c| c.dial_digits() == wanted)
    }

    /// Returns the validation rule for a country, if the dataset defines one.
    pub fn rule_for(&self, code: &str) -> Option<&CountryRule> {
        self.rules.get(&code.to_ascii_uppercase())
    }
}
