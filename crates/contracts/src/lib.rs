//! Shared data types for the event registration application.
//!
//! Nothing here touches the browser: the frontend crate owns storage,
//! download and rendering, this crate owns the shapes they exchange.

pub mod domain;
