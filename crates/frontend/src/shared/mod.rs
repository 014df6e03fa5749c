pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod export;
pub mod icons;
pub mod storage;
