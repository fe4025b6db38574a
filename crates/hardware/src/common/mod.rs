//! Common types shared across the simulator.

/// Error types for simulation construction and kernel faults.
pub mod error;

pub use error::SimError;
