//! Loading the country dataset from JSON.
//!
//! The dataset format is:
//!
//! ```json
//! {
//!   "countries": [{ "code": "EG", "dialCode": "+20", "name": "Egypt", "nameAr": "مصر", "flag": "🇪🇬" }],
//!   "rules": { "EG": { "min": 10, "max": 10, "startsWith": ["10", "11", "12", "15"] } }
//! }
//! ```
//!
//! Countries keep their file order; the first one is the default selection.
//! Countries without an entry in `rules` use generic validation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{Country, CountryCatalog, CountryRule};
use crate::error::CatalogError;

const BUILTIN_DATASET: &str = include_str!("../../data/countries.json");

#[derive(Debug, Deserialize)]
struct Dataset {
    countries: Vec<Country>,
    #[serde(default)]
    rules: BTreeMap<String, RuleRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleRecord {
    min: usize,
    max: usize,
    #[serde(default)]
    starts_with: Option<Vec<String>>,
}

/// Loads the dataset bundled with the binary.
///
/// # Errors
///
/// Returns [`CatalogError`] only if the bundled file is broken.
pub fn builtin() -> Result<CountryCatalog, CatalogError> {
    from_json(BUILTIN_DATASET)
}

/// Loads a dataset from a JSON file on disk.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the file cannot be read, otherwise see [`from_json`].
pub fn from_path(path: &Path) -> Result<CountryCatalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&raw)
}

/// Parses and checks a dataset.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed JSON and the invariant errors
/// of [`CountryCatalog::new`] for well-formed but inconsistent data.
pub fn from_json(raw: &str) -> Result<CountryCatalog, CatalogError> {
    let dataset: Dataset = serde_json::from_str(raw)?;

    let rules = dataset
        .rules
        .into_iter()
        .map(|(code, r)| CountryRule {
            code,
            min: r.min,
            max: r.max,
            starts_with: r.starts_with,
        })
        .collect();

    let catalog = CountryCatalog::new(dataset.countries, rules)?;
    tracing::debug!(countries = catalog.countries().len(), "country dataset loaded");
    Ok(catalog)
}
