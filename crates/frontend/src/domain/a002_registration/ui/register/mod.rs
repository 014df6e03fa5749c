//! Registration form for a single event
//!
//! - view_model.rs: form state and submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::RegisterPage;
