//! Port traits for the collaborators the interpreter talks to.

pub mod log_port;
pub mod property_port;
