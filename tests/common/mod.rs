#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use wa_link::application::services::{HistoryStore, LinkService, Session};
use wa_link::domain::entities::{Country, CountryCatalog, HistoryEntry};
use wa_link::infrastructure::catalog;
use wa_link::infrastructure::persistence::FileStore;
use wa_link::messages::Locale;

pub fn builtin_catalog() -> Arc<CountryCatalog> {
    Arc::new(catalog::builtin().unwrap())
}

pub fn country(catalog: &CountryCatalog, code: &str) -> Country {
    catalog.find(code).unwrap().clone()
}

pub fn file_history(dir: &Path) -> HistoryStore {
    HistoryStore::open(Arc::new(FileStore::new(dir)))
}

pub fn create_test_session(dir: &Path) -> Session {
    let catalog = builtin_catalog();
    let egypt = country(&catalog, "EG");
    Session::new(LinkService::new(catalog), file_history(dir), egypt, Locale::En)
}

pub fn create_test_entry(id: &str, created_at: i64) -> HistoryEntry {
    HistoryEntry::new(
        id.to_string(),
        "+20 1012345678".to_string(),
        "https://wa.me/201012345678".to_string(),
        created_at,
        "EG".to_string(),
    )
}
