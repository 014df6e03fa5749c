pub mod aggregate;
pub mod catalog;

pub use aggregate::Event;
pub use catalog::EventCatalog;
