use crate::shared::config::config;
use crate::shared::storage::{open_local_storage, KeyValueStorage, StorageError};
use contracts::domain::a002_registration::Registration;
use serde_json::Value;

/// One element of the stored array.
///
/// The raw JSON is what gets written back, so an element that does not
/// parse, or a field that parses lossily (e.g. a malformed `createdAt`),
/// survives unrelated edits unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRegistration {
    raw: Value,
    parsed: Option<Registration>,
}

impl StoredRegistration {
    pub fn from_raw(raw: Value) -> Self {
        let parsed = serde_json::from_value(raw.clone()).ok();
        Self { raw, parsed }
    }

    pub fn new(registration: Registration) -> Result<Self, StorageError> {
        let raw = serde_json::to_value(&registration)?;
        Ok(Self {
            raw,
            parsed: Some(registration),
        })
    }

    /// `None` for elements that are not valid registrations
    pub fn registration(&self) -> Option<&Registration> {
        self.parsed.as_ref()
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Persistence of the registration list as one JSON array under one key.
pub struct RegistrationStore {
    storage: Box<dyn KeyValueStorage>,
    key: String,
}

impl RegistrationStore {
    pub fn new(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Store backed by browser local storage under the configured key
    pub fn local() -> Self {
        Self::new(open_local_storage(), config().storage.registrations_key.clone())
    }

    /// Reads every element of the stored array, valid or not.
    ///
    /// Never fails: an unreadable blob or one that is not a JSON array yields
    /// an empty list and an error in the console.
    pub fn load_entries(&self) -> Vec<StoredRegistration> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("Failed to read registrations: {}", e);
                return Vec::new();
            }
        };

        let items = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to parse registrations from storage: {}", e);
                return Vec::new();
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let entry = StoredRegistration::from_raw(item);
                if entry.parsed.is_none() {
                    log::warn!("Registration #{} is not valid and will be kept as is", index);
                }
                entry
            })
            .collect()
    }

    /// Writes `entries` back as they were read, one element each.
    pub fn save_entries(&self, entries: &[StoredRegistration]) -> Result<(), StorageError> {
        let raw: Vec<&Value> = entries.iter().map(StoredRegistration::raw).collect();
        let json = serde_json::to_string(&raw)?;
        self.storage.set_item(&self.key, &json)
    }

    /// Reads the valid registrations; invalid elements are left out.
    pub fn load(&self) -> Vec<Registration> {
        self.load_entries()
            .into_iter()
            .filter_map(|e| e.parsed)
            .collect()
    }

    /// Overwrites the stored list with `registrations`.
    pub fn save(&self, registrations: &[Registration]) -> Result<(), StorageError> {
        let json = serde_json::to_string(registrations)?;
        self.storage.set_item(&self.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn registration(id: &str, event_id: &str) -> Registration {
        Registration {
            id: id.into(),
            event_id: event_id.into(),
            name: format!("Name {id}"),
            email: format!("{id}@example.com"),
            phone: "+1 555 0100".into(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()),
        }
    }

    fn store_with(storage: &MemoryStorage) -> RegistrationStore {
        RegistrationStore::new(Box::new(storage.clone()), "registrations")
    }

    #[test]
    fn missing_key_loads_empty() {
        let storage = MemoryStorage::default();
        assert!(store_with(&storage).load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = MemoryStorage::default();
        let store = store_with(&storage);
        let mut odd = registration("b", "nope");
        odd.name = "Quote \"and\", comma".into();
        odd.created_at = None;
        let regs = vec![registration("a", "e1"), odd, registration("c", "e2")];

        store.save(&regs).unwrap();
        assert_eq!(store.load(), regs);
    }

    #[test]
    fn saved_blob_keeps_persisted_key_names() {
        let storage = MemoryStorage::default();
        store_with(&storage).save(&[registration("a", "e1")]).unwrap();

        let raw = storage.get_item("registrations").unwrap().unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        let obj = value[0].as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["createdAt", "email", "eventId", "id", "name", "phone"]
        );
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let storage = MemoryStorage::default();
        storage.set_item("registrations", "{not json").unwrap();
        assert!(store_with(&storage).load().is_empty());

        storage.set_item("registrations", r#"{"id":"a"}"#).unwrap();
        assert!(store_with(&storage).load().is_empty());
    }

    #[test]
    fn invalid_elements_are_skipped() {
        let storage = MemoryStorage::default();
        storage
            .set_item(
                "registrations",
                r#"[{"id":"a","eventId":"e1"},{"name":"no ids"},42,{"id":"c","eventId":"e2","name":null}]"#,
            )
            .unwrap();

        let ids: Vec<String> = store_with(&storage).load().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn entries_keep_invalid_elements_verbatim() {
        let storage = MemoryStorage::default();
        let blob = r#"[{"id":"a","eventId":"e1"},{"name":"no ids"},{"id":"b","eventId":"e1","createdAt":"not a date"}]"#;
        storage.set_item("registrations", blob).unwrap();
        let store = store_with(&storage);

        let entries = store.load_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[1].registration().is_none());
        assert_eq!(entries[2].registration().map(|r| r.created_at), Some(None));

        store.save_entries(&entries).unwrap();
        let saved: Value = serde_json::from_str(&storage.get_item("registrations").unwrap().unwrap()).unwrap();
        let original: Value = serde_json::from_str(blob).unwrap();
        assert_eq!(saved, original);
    }

    #[test]
    fn stores_under_separate_keys_do_not_mix() {
        let storage = MemoryStorage::default();
        let a = RegistrationStore::new(Box::new(storage.clone()), "a");
        let b = RegistrationStore::new(Box::new(storage.clone()), "b");
        a.save(&[registration("x", "e1")]).unwrap();
        assert!(b.load().is_empty());
        assert_eq!(a.load().len(), 1);
    }
}
