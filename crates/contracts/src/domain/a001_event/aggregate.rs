use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Мероприятие, на которое можно зарегистрироваться.
///
/// Events are defined at build time and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

impl Event {
    /// Route of the registration page for this event
    pub fn register_path(&self) -> String {
        format!("/register/{}", self.id)
    }
}
