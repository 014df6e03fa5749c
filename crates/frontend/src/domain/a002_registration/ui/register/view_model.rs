use crate::domain::a002_registration::store::RegistrationStore;
use crate::domain::a002_registration::submission::submit_registration;
use chrono::Utc;
use contracts::domain::a001_event::EventCatalog;
use contracts::domain::a002_registration::{Registration, RegistrationForm};
use leptos::prelude::*;

/// ViewModel for the registration form
#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegistrationForm>,
    pub error: RwSignal<Option<String>>,
    /// Last successful registration, shown as a confirmation
    pub submitted: RwSignal<Option<Registration>>,
}

impl RegisterViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::default()),
            error: RwSignal::new(None),
            submitted: RwSignal::new(None),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    pub fn submit_command(&self, event_id: &str) {
        let form = self.form.get_untracked();
        let store = RegistrationStore::local();
        match submit_registration(&store, EventCatalog::builtin(), event_id, &form, Utc::now()) {
            Ok(registration) => {
                self.error.set(None);
                self.form.set(RegistrationForm::default());
                self.submitted.set(Some(registration));
            }
            Err(e) => {
                log::warn!("Registration rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }
}
