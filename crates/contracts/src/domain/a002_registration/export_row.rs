use super::aggregate::Registration;
use crate::domain::a001_event::EventCatalog;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Flat, text-only view of a registration joined with its event title.
///
/// Field order is the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationExportRow {
    pub id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "eventTitle")]
    pub event_title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl RegistrationExportRow {
    pub const HEADERS: [&'static str; 7] = [
        "id",
        "eventId",
        "eventTitle",
        "name",
        "email",
        "phone",
        "createdAt",
    ];

    pub fn from_registration(reg: &Registration, catalog: &EventCatalog) -> Self {
        Self {
            id: reg.id.clone(),
            event_id: reg.event_id.clone(),
            event_title: catalog.title_or_id(&reg.event_id),
            name: reg.name.clone(),
            email: reg.email.clone(),
            phone: reg.phone.clone(),
            created_at: reg
                .created_at
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
        }
    }

    /// Values in `HEADERS` order
    pub fn values(&self) -> [&str; 7] {
        [
            self.id.as_str(),
            self.event_id.as_str(),
            self.event_title.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.created_at.as_str(),
        ]
    }
}
