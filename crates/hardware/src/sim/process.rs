//! The cooperative process trait and its suspension points.
//!
//! The source protocol is written as coroutines that suspend on signal
//! edges. Here each participant is an explicit state machine instead: the
//! kernel delivers one edge per `resume` call, the process runs to
//! completion without preemption, and its next suspension point is the
//! returned [`Wait`].

use super::kernel::SimHandle;
use super::net::{Edge, NetId};

/// What a process is suspended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Resume at the next 0→1 transition of the net.
    Posedge(NetId),
    /// Resume at the next 1→0 transition of the net.
    Negedge(NetId),
    /// The process is done; it is never resumed again.
    Finished,
}

/// A cooperative simulation participant.
///
/// Processes interact with the world only through the [`SimHandle`]: writes
/// are scheduled, not applied, so everything a process does between two
/// suspension points lands atomically at the next settle.
pub trait Process {
    /// Short name used in log output (e.g. `"ar-driver"`).
    fn name(&self) -> &str;

    /// Runs once at registration, before any clock activity.
    ///
    /// Writes scheduled here are committed by the elaboration settle, so
    /// idle values are in place before the first clock edge.
    fn init(&mut self, sim: &mut SimHandle<'_>) -> Wait;

    /// Delivers the edge the process was waiting on. Exactly one edge per
    /// call; the edge that satisfied the wait is passed for reference.
    fn resume(&mut self, sim: &mut SimHandle<'_>, edge: Edge) -> Wait;
}
