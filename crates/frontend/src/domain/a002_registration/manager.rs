//! Registration list management for the admin page.
//!
//! The manager owns the in-memory list for one activation of the page and
//! writes the whole list through to the store after every mutation, so the
//! rendered list and local storage never diverge. Stored elements that are
//! not valid registrations are hidden from the table but written back
//! untouched.

use super::store::{RegistrationStore, StoredRegistration};
use crate::shared::config::config;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::dialogs::Confirmation;
use crate::shared::export::{encode_csv, export_filename, CsvFile};
use crate::shared::storage::StorageError;
use chrono::{DateTime, Utc};
use contracts::domain::a001_event::EventCatalog;
use contracts::domain::a002_registration::{Registration, RegistrationExportRow};

/// Registration joined with its event, formatted for the table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationRow {
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// List changed and was written to storage
    Applied,
    /// Operator declined the confirmation prompt
    Declined,
    /// Nothing matched; storage untouched
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No registrations; no file is produced
    Nothing,
    Ready(CsvFile),
}

pub struct RegistrationManager {
    store: RegistrationStore,
    catalog: EventCatalog,
    entries: Vec<StoredRegistration>,
}

impl RegistrationManager {
    pub const CLEAR_PROMPT: &'static str = "Clear all registrations?";

    /// Loads the current list from `store`.
    pub fn activate(store: RegistrationStore, catalog: EventCatalog) -> Self {
        let entries = store.load_entries();
        log::info!("Loaded {} registrations", entries.len());
        Self {
            store,
            catalog,
            entries,
        }
    }

    /// Re-reads the list from storage, dropping unsaved in-memory changes.
    pub fn reload(&mut self) {
        self.entries = self.store.load_entries();
    }

    fn valid(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter().filter_map(StoredRegistration::registration)
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.valid().cloned().collect()
    }

    pub fn delete_prompt(id: &str) -> String {
        format!("Delete registration {}?", id)
    }

    pub fn rows(&self) -> Vec<RegistrationRow> {
        self.valid()
            .map(|r| RegistrationRow {
                id: r.id.clone(),
                event_id: r.event_id.clone(),
                event_title: self.catalog.title_or_id(&r.event_id),
                name: r.name.clone(),
                email: r.email.clone(),
                phone: r.phone.clone(),
                created_at: format_optional_datetime(r.created_at),
            })
            .collect()
    }

    /// Removes the registration with `id`.
    ///
    /// The list is changed in memory before the write, so a failed write
    /// leaves the page showing the operator's intent and returns the error.
    pub fn delete_one(
        &mut self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<MutationOutcome, StorageError> {
        if confirmation == Confirmation::Declined {
            return Ok(MutationOutcome::Declined);
        }
        let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.registration().is_some_and(|r| r.id == id))
        else {
            return Ok(MutationOutcome::Unchanged);
        };

        self.entries.remove(pos);
        self.store.save_entries(&self.entries)?;
        log::info!("Deleted registration {}", id);
        Ok(MutationOutcome::Applied)
    }

    pub fn clear_all(&mut self, confirmation: Confirmation) -> Result<MutationOutcome, StorageError> {
        if confirmation == Confirmation::Declined {
            return Ok(MutationOutcome::Declined);
        }
        let count = self.entries.len();
        self.entries.clear();
        self.store.save_entries(&self.entries)?;
        log::info!("Cleared {} registrations", count);
        Ok(MutationOutcome::Applied)
    }

    pub fn export_rows(&self) -> Vec<RegistrationExportRow> {
        self.valid()
            .map(|r| RegistrationExportRow::from_registration(r, &self.catalog))
            .collect()
    }

    /// Builds the CSV export. Read-only: the list is not touched.
    pub fn export(&self, now: DateTime<Utc>) -> ExportOutcome {
        let content = encode_csv(&self.export_rows());
        if content.is_empty() {
            return ExportOutcome::Nothing;
        }
        ExportOutcome::Ready(CsvFile {
            filename: export_filename(&config().export.filename_prefix, now),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{KeyValueStorage, MemoryStorage};
    use chrono::TimeZone;
    use serde_json::{json, Value};

    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".into(),
            })
        }
    }

    fn registration(id: &str, event_id: &str) -> Registration {
        Registration {
            id: id.into(),
            event_id: event_id.into(),
            name: format!("Name {id}"),
            email: format!("{id}@example.com"),
            phone: String::new(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 10, 2, 9, 0, 0).unwrap()),
        }
    }

    fn store(storage: &MemoryStorage) -> RegistrationStore {
        RegistrationStore::new(Box::new(storage.clone()), "registrations")
    }

    fn seeded(ids: &[(&str, &str)]) -> (MemoryStorage, RegistrationManager) {
        let storage = MemoryStorage::default();
        let regs: Vec<Registration> = ids.iter().map(|(id, ev)| registration(id, ev)).collect();
        store(&storage).save(&regs).unwrap();
        let manager = RegistrationManager::activate(store(&storage), EventCatalog::builtin().clone());
        (storage, manager)
    }

    fn ids(regs: &[Registration]) -> Vec<&str> {
        regs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn activate_loads_from_store() {
        let (_, manager) = seeded(&[("a", "e1"), ("b", "e2")]);
        assert_eq!(ids(&manager.registrations()), vec!["a", "b"]);
    }

    #[test]
    fn activate_on_corrupt_storage_starts_empty() {
        let storage = MemoryStorage::default();
        storage.set_item("registrations", "][").unwrap();
        let manager = RegistrationManager::activate(store(&storage), EventCatalog::builtin().clone());
        assert!(manager.registrations().is_empty());
        assert_eq!(manager.export(Utc::now()), ExportOutcome::Nothing);
    }

    #[test]
    fn delete_one_removes_exactly_one_and_persists() {
        let (storage, mut manager) = seeded(&[("a", "e1"), ("b", "e2"), ("c", "e3")]);

        let outcome = manager.delete_one("b", Confirmation::Confirmed).unwrap();
        assert_eq!(outcome, MutationOutcome::Applied);
        assert_eq!(ids(&manager.registrations()), vec!["a", "c"]);
        assert_eq!(store(&storage).load(), manager.registrations());

        let again = manager.delete_one("b", Confirmation::Confirmed).unwrap();
        assert_eq!(again, MutationOutcome::Unchanged);
        assert_eq!(ids(&store(&storage).load()), vec!["a", "c"]);
    }

    #[test]
    fn delete_one_leaves_other_stored_elements_untouched() {
        let storage = MemoryStorage::default();
        let blob = json!([
            {"id": "a", "eventId": "e1", "name": "Ann"},
            {"id": "x", "name": "legacy, no eventId"},
            {"id": "b", "eventId": "e1", "createdAt": "not a date"},
            {"id": "c", "eventId": "e2"}
        ]);
        storage.set_item("registrations", &blob.to_string()).unwrap();
        let mut manager = RegistrationManager::activate(store(&storage), EventCatalog::builtin().clone());
        assert_eq!(ids(&manager.registrations()), vec!["a", "b", "c"]);

        let outcome = manager.delete_one("c", Confirmation::Confirmed).unwrap();
        assert_eq!(outcome, MutationOutcome::Applied);

        let saved: Value =
            serde_json::from_str(&storage.get_item("registrations").unwrap().unwrap()).unwrap();
        let mut expected = blob.as_array().unwrap().clone();
        expected.pop();
        assert_eq!(saved, Value::Array(expected));
    }

    #[test]
    fn reload_restores_storage_after_failed_write() {
        let memory = MemoryStorage::default();
        store(&memory).save(&[registration("a", "e1")]).unwrap();
        let read_only = RegistrationStore::new(Box::new(ReadOnlyStorage(memory.clone())), "registrations");
        let mut manager = RegistrationManager::activate(read_only, EventCatalog::builtin().clone());

        assert!(manager.clear_all(Confirmation::Confirmed).is_err());
        assert!(manager.registrations().is_empty());

        manager.reload();
        assert_eq!(ids(&manager.registrations()), vec!["a"]);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let (storage, mut manager) = seeded(&[("a", "e1"), ("b", "e2")]);
        let outcome = manager.delete_one("a", Confirmation::Declined).unwrap();
        assert_eq!(outcome, MutationOutcome::Declined);
        assert_eq!(ids(&manager.registrations()), vec!["a", "b"]);
        assert_eq!(ids(&store(&storage).load()), vec!["a", "b"]);
    }

    #[test]
    fn clear_all_empties_memory_and_storage() {
        let (storage, mut manager) = seeded(&[("a", "e1"), ("b", "e2")]);

        assert_eq!(
            manager.clear_all(Confirmation::Declined).unwrap(),
            MutationOutcome::Declined
        );
        assert_eq!(manager.registrations().len(), 2);

        assert_eq!(
            manager.clear_all(Confirmation::Confirmed).unwrap(),
            MutationOutcome::Applied
        );
        assert!(manager.registrations().is_empty());
        assert!(store(&storage).load().is_empty());
        assert_eq!(storage.get_item("registrations").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn failed_write_is_reported() {
        let memory = MemoryStorage::default();
        store(&memory).save(&[registration("a", "e1")]).unwrap();
        let read_only = RegistrationStore::new(Box::new(ReadOnlyStorage(memory.clone())), "registrations");
        let mut manager = RegistrationManager::activate(read_only, EventCatalog::builtin().clone());

        let result = manager.delete_one("a", Confirmation::Confirmed);
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert!(manager.registrations().is_empty());
        assert_eq!(ids(&store(&memory).load()), vec!["a"]);
    }

    #[test]
    fn rows_resolve_titles_with_raw_id_fallback() {
        let (_, manager) = seeded(&[("a", "e1"), ("b", "deleted-event")]);
        let rows = manager.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event_title, "Rust Meetup: Ownership in Practice");
        assert_eq!(rows[1].event_title, "deleted-event");
        assert_eq!(rows[0].created_at, "2026-10-02 09:00:00");
    }

    #[test]
    fn export_builds_csv_with_titles() {
        let (_, manager) = seeded(&[("a", "e2"), ("b", "deleted-event")]);
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 7, 0, 0).unwrap();

        let ExportOutcome::Ready(file) = manager.export(now) else {
            panic!("expected a file");
        };
        assert_eq!(file.filename, "registrations-2026-10-19T07:00:00.000Z.csv");

        let lines: Vec<&str> = file.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"id\",\"eventId\",\"eventTitle\",\"name\",\"email\",\"phone\",\"createdAt\""
        );
        assert!(lines[1].starts_with("\"a\",\"e2\",\"WebAssembly Workshop\","));
        assert!(lines[2].starts_with("\"b\",\"deleted-event\",\"deleted-event\","));
    }

    #[test]
    fn export_of_empty_list_is_nothing_and_read_only() {
        let (storage, manager) = seeded(&[]);
        assert_eq!(manager.export(Utc::now()), ExportOutcome::Nothing);
        assert_eq!(storage.get_item("registrations").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn prompts() {
        assert_eq!(RegistrationManager::delete_prompt("r7"), "Delete registration r7?");
        assert_eq!(RegistrationManager::CLEAR_PROMPT, "Clear all registrations?");
    }
}
