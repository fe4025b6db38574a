//! Unit tests for the kernel and the bus agents.

/// Channel bundle construction and optional-field presence.
pub mod channel;
/// Configuration defaults, JSON parsing, and validation.
pub mod config;
