//! Simulation error definitions.
//!
//! Errors exist only at the construction and kernel surfaces (net creation,
//! configuration validation, settle convergence). The handshake sequence
//! itself never fails: absent optional fields are skipped, unexpected queue
//! items are discarded, and termination mid-handshake is a normal shutdown
//! path, not an error.

use thiserror::Error;

/// Errors raised while building or advancing a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A net or configuration field was given a width outside `1..=64`.
    #[error("invalid width {width} for `{field}`; widths must be between 1 and 64 bits")]
    InvalidWidth {
        /// Name of the offending net or config field.
        field: &'static str,
        /// The rejected width.
        width: u32,
    },

    /// Two nets were registered under the same name.
    #[error("duplicate net name `{0}`")]
    DuplicateNet(String),

    /// Scheduled writes kept producing new edges without converging.
    ///
    /// Indicates a zero-delay feedback loop between processes; the kernel
    /// refuses to spin forever inside one timestep.
    #[error("signal settle did not converge after {limit} delta steps")]
    SettleDivergence {
        /// The delta-step limit that was exhausted.
        limit: u32,
    },
}
