pub mod aggregate;
pub mod export_row;

pub use aggregate::{Registration, RegistrationForm};
pub use export_row::RegistrationExportRow;
