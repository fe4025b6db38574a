//! Cycle-accurate read-address channel handshake simulator.
//!
//! This crate models the requester side of an AXI4-style read-address
//! channel VALID/READY handshake inside a small discrete-event simulation:
//! 1. **Kernel:** nets with two-phase atomic settle, cooperative processes
//!    resumed one edge at a time, clock generation, and termination.
//! 2. **Bus:** the signal bundle (with statically optional attribute
//!    fields), request packets with one-shot completions, the pending-queue
//!    seam, the handshake driver, and a receiver-side ready stimulus.
//! 3. **Configuration:** channel geometry and driver policy, JSON-loadable.
//! 4. **Statistics:** per-driver counters for completions, idle, and stall.

/// Common types and errors.
pub mod common;
/// Simulation configuration (channel geometry, driver policy, run setup).
pub mod config;
/// Bus-protocol agents (channel, packets, queue, driver, responder).
pub mod bus;
/// Discrete-event kernel (nets, processes, clock, run loop).
pub mod sim;
/// Driver statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The simulation kernel; owns all nets and processes.
pub use crate::sim::Sim;
/// The read-address channel signal bundle.
pub use crate::bus::ArChannel;
/// The requester-side handshake driver (the core of this crate).
pub use crate::bus::ReadAddressDriver;
