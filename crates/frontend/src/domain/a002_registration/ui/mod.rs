pub mod admin;
pub mod register;
