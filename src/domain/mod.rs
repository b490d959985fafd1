//! Core domain types and interpretation logic.

pub mod error;
pub mod policy;
pub mod schedule;
pub mod settings;
pub mod settings_parser;
pub mod time_of_day;
