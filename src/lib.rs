pub mod bank;
pub mod clipboard;
pub mod config;
pub mod criterion;
pub mod error;
pub mod export;
pub mod generator;
pub mod i18n;
pub mod tui;
pub mod validator;
pub mod variations;
pub mod wizard;
