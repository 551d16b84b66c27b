//! # klok-core
//!
//! Core types, configuration, and error handling shared by the Klok crates.

pub mod config;
pub mod error;
pub mod language;

pub use error::KlokError;
pub use language::Language;
