use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// Aggregate
// ============================================================================

/// Регистрация одного участника на одно мероприятие.
///
/// Key names are part of the persisted format and of the CSV header, so the
/// serde renames below must stay in sync with data already in local storage.
/// Registrations are created once and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(deserialize_with = "required_text")]
    pub id: String,

    #[serde(rename = "eventId", deserialize_with = "required_text")]
    pub event_id: String,

    #[serde(default, deserialize_with = "optional_text")]
    pub name: String,

    #[serde(default, deserialize_with = "optional_text")]
    pub email: String,

    #[serde(default, deserialize_with = "optional_text")]
    pub phone: String,

    #[serde(rename = "createdAt", default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Registration {
    /// Создать новую регистрацию для сохранения
    pub fn new_for_insert(event_id: &str, form: &RegistrationForm, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: event_id.to_string(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            created_at: Some(now),
        }
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Data entered on the registration page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationForm {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        if !email.contains('@') {
            return Err("Email must contain '@'".into());
        }
        Ok(())
    }
}

// ============================================================================
// Lenient field readers
// ============================================================================

// Older entries may carry numeric ids or null contact fields.

fn required_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!("expected text, got {}", other))),
    }
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}
