//! Core domain + application logic for the group translation bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the translation
//! engine live behind ports (traits) implemented in adapter crates.

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod languages;
pub mod logging;
pub mod messaging;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use errors::{Error, Result};
