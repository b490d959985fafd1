//! twsconf — settings interpreter for an unattended trading-terminal launcher.
//!
//! Hexagonal architecture: interpretation logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
