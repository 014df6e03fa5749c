pub mod manager;
pub mod store;
pub mod submission;
pub mod ui;
