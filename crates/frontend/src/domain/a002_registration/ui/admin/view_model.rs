use crate::domain::a002_registration::manager::{
    ExportOutcome, MutationOutcome, RegistrationManager, RegistrationRow,
};
use crate::domain::a002_registration::store::RegistrationStore;
use crate::shared::config::config;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::export::download_csv;
use crate::shared::storage::StorageError;
use chrono::Utc;
use contracts::domain::a001_event::EventCatalog;
use leptos::prelude::*;

/// ViewModel for the admin registrations page.
///
/// The manager lives in a local stored value for as long as the page is
/// mounted; `rows` is re-derived from it after every command.
#[derive(Clone, Copy)]
pub struct AdminRegistrationsViewModel {
    manager: StoredValue<RegistrationManager, LocalStorage>,
    pub rows: RwSignal<Vec<RegistrationRow>>,
    pub error: RwSignal<Option<String>>,
}

impl AdminRegistrationsViewModel {
    pub fn new() -> Self {
        let manager =
            RegistrationManager::activate(RegistrationStore::local(), EventCatalog::builtin().clone());
        let rows = RwSignal::new(manager.rows());
        Self {
            manager: StoredValue::new_local(manager),
            rows,
            error: RwSignal::new(None),
        }
    }

    fn refresh(&self) {
        self.rows.set(self.manager.with_value(|m| m.rows()));
    }

    fn apply(&self, result: Result<MutationOutcome, StorageError>) {
        match result {
            Ok(MutationOutcome::Applied) => {
                self.error.set(None);
                self.refresh();
            }
            Ok(MutationOutcome::Declined) | Ok(MutationOutcome::Unchanged) => {}
            Err(e) => {
                log::error!("Failed to save registrations: {}", e);
                self.error.set(Some(format!("Could not save changes: {}", e)));
                self.refresh();
            }
        }
    }

    pub fn delete_command(&self, id: String) {
        let confirmation = confirm(&RegistrationManager::delete_prompt(&id));
        let mut result = Ok(MutationOutcome::Unchanged);
        self.manager
            .update_value(|m| result = m.delete_one(&id, confirmation));
        self.apply(result);
    }

    pub fn clear_command(&self) {
        let confirmation = confirm(RegistrationManager::CLEAR_PROMPT);
        let mut result = Ok(MutationOutcome::Unchanged);
        self.manager
            .update_value(|m| result = m.clear_all(confirmation));
        self.apply(result);
    }

    /// Discards in-memory changes that failed to save and shows what storage
    /// actually holds.
    pub fn reload_command(&self) {
        self.manager.update_value(|m| m.reload());
        self.error.set(None);
        self.refresh();
    }

    pub fn export_command(&self) {
        match self.manager.with_value(|m| m.export(Utc::now())) {
            ExportOutcome::Nothing => alert(&config().export.empty_message),
            ExportOutcome::Ready(file) => {
                if let Err(e) = download_csv(&file) {
                    log::error!("CSV download failed: {}", e);
                    self.error.set(Some(format!("Export failed: {}", e)));
                }
            }
        }
    }
}
