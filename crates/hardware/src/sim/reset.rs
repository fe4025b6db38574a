//! Active-low reset stimulus.

use tracing::debug;

use super::kernel::SimHandle;
use super::net::{Edge, NetId};
use super::process::{Process, Wait};

/// Drives an active-low reset net: low for a configured number of clock
/// cycles, then high, then retires.
///
/// The 0→1 transition it produces is the one-time synchronization point
/// drivers wait on before touching the bus.
#[derive(Debug)]
pub struct ResetGen {
    clk: NetId,
    reset_n: NetId,
    remaining: u64,
}

impl ResetGen {
    /// Holds `reset_n` low for `cycles` clock edges before releasing it.
    pub fn new(clk: NetId, reset_n: NetId, cycles: u64) -> Self {
        Self {
            clk,
            reset_n,
            remaining: cycles,
        }
    }
}

impl Process for ResetGen {
    fn name(&self) -> &str {
        "reset-gen"
    }

    fn init(&mut self, sim: &mut SimHandle<'_>) -> Wait {
        if self.remaining == 0 {
            sim.put(self.reset_n, 1);
            return Wait::Finished;
        }
        sim.put(self.reset_n, 0);
        Wait::Posedge(self.clk)
    }

    fn resume(&mut self, sim: &mut SimHandle<'_>, _edge: Edge) -> Wait {
        self.remaining -= 1;
        if self.remaining == 0 {
            sim.put(self.reset_n, 1);
            debug!(cycle = sim.cycle(), "reset released");
            return Wait::Finished;
        }
        Wait::Posedge(self.clk)
    }
}
