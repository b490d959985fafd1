//! Concrete adapter implementations for ports.

pub mod property_file_adapter;
pub mod tracing_log_adapter;
