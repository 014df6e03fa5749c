use super::store::{RegistrationStore, StoredRegistration};
use crate::shared::storage::StorageError;
use chrono::{DateTime, Utc};
use contracts::domain::a001_event::EventCatalog;
use contracts::domain::a002_registration::{Registration, RegistrationForm};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Event '{0}' does not exist")]
    UnknownEvent(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Validates `form` and appends a new registration for `event_id`.
///
/// Nothing is written when the event is unknown or the form is invalid.
pub fn submit_registration(
    store: &RegistrationStore,
    catalog: &EventCatalog,
    event_id: &str,
    form: &RegistrationForm,
    now: DateTime<Utc>,
) -> Result<Registration, RegistrationError> {
    if catalog.find_by_id(event_id).is_none() {
        return Err(RegistrationError::UnknownEvent(event_id.to_string()));
    }
    form.validate().map_err(RegistrationError::Validation)?;

    let registration = Registration::new_for_insert(event_id, form, now);
    let mut entries = store.load_entries();
    entries.push(StoredRegistration::new(registration.clone())?);
    store.save_entries(&entries)?;

    log::info!(
        "Registered {} for event {}",
        registration.id,
        registration.event_id
    );
    Ok(registration)
}
