//! Discrete-event simulation kernel.
//!
//! This module provides the substrate the bus agents run on:
//! 1. **Nets:** two-phase wires with atomic settle and prev-value sampling.
//! 2. **Processes:** explicit state machines resumed one edge at a time.
//! 3. **Kernel:** clock generation, delta convergence, and the run loop.
//! 4. **Reset:** a reusable active-low reset stimulus.

/// The simulation kernel: net/process tables and the run loop.
pub mod kernel;
/// Net storage, edges, and the settle step.
pub mod net;
/// The cooperative process trait and suspension points.
pub mod process;
/// Active-low reset stimulus process.
pub mod reset;

pub use kernel::{Sim, SimHandle};
pub use net::{Edge, NetId};
pub use process::{Process, Wait};
pub use reset::ResetGen;
