use super::aggregate::Event;
use once_cell::sync::Lazy;

/// Встроенный каталог мероприятий (данные вшиты в бинарник)
const BUILTIN_EVENTS_JSON: &str = include_str!("events.json");

static BUILTIN: Lazy<EventCatalog> =
    Lazy::new(|| EventCatalog::from_json(BUILTIN_EVENTS_JSON).unwrap_or_default());

/// Ordered, read-only list of events available for registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parse a catalog from a JSON array of events, keeping the source order.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<Event>>(json).map(Self::new)
    }

    /// Catalog shipped with the application
    pub fn builtin() -> &'static EventCatalog {
        &BUILTIN
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Human readable title for an event reference.
    ///
    /// A reference that matches nothing resolves to the raw id, so a dangling
    /// registration stays traceable in the table and in exports.
    pub fn title_or_id(&self, event_id: &str) -> String {
        self.find_by_id(event_id)
            .map(|e| e.title.clone())
            .unwrap_or_else(|| event_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_events_json_is_valid() {
        let catalog = EventCatalog::from_json(BUILTIN_EVENTS_JSON).unwrap();
        assert_eq!(catalog.all().len(), 3);
    }

    #[test]
    fn builtin_catalog_parses_in_order() {
        let catalog = EventCatalog::builtin();
        let ids: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = EventCatalog::builtin();
        let mut ids: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn find_by_id_and_fallback() {
        let catalog = EventCatalog::builtin();
        assert_eq!(
            catalog.find_by_id("e2").map(|e| e.title.as_str()),
            Some("WebAssembly Workshop")
        );
        assert!(catalog.find_by_id("missing").is_none());
        assert_eq!(catalog.title_or_id("e2"), "WebAssembly Workshop");
        assert_eq!(catalog.title_or_id("missing"), "missing");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(EventCatalog::from_json("{not json").is_err());
        assert_eq!(EventCatalog::from_json("[]").unwrap(), EventCatalog::default());
    }
}
