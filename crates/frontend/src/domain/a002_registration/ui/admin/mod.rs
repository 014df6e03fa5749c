//! Admin registrations page
//!
//! - view_model.rs: wraps `RegistrationManager`, exposes signals and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AdminRegistrationsPage;
