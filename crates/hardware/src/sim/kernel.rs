//! The discrete-event kernel.
//!
//! Single-threaded and cooperative: the kernel owns every net and every
//! process, advances a free-running clock by half-periods, and after each
//! commit delivers the resulting edges to whichever processes were
//! suspended on them. It provides:
//! 1. **Atomic steps:** process writes are pending until the next settle,
//!    so no participant observes a half-written update.
//! 2. **Delta convergence:** writes made while handling an edge commit in a
//!    follow-up settle inside the same timestep, and may wake further
//!    processes (non-blocking-assignment semantics).
//! 3. **Termination:** a finish flag checked at cycle boundaries; suspended
//!    processes are abandoned in place when the simulation ends.

use tracing::{debug, trace};

use crate::common::SimError;

use super::net::{Edge, NetId, NetTable};
use super::process::{Process, Wait};

/// Upper bound on delta settles within one timestep before the kernel
/// declares a zero-delay feedback loop.
const MAX_DELTA_STEPS: u32 = 64;

/// Mutable view of the simulation handed to a process while it runs.
pub struct SimHandle<'a> {
    nets: &'a mut NetTable,
    cycle: u64,
    finish: &'a mut bool,
}

impl SimHandle<'_> {
    /// Schedules a value change; visible to everyone after the next settle.
    pub fn put(&mut self, net: NetId, value: u64) {
        self.nets.put(net, value);
    }

    /// Current committed value of a net.
    pub fn value(&self, net: NetId) -> u64 {
        self.nets.value(net)
    }

    /// Value a net held going into the most recent settle.
    ///
    /// This is the sampling primitive for ready/valid handshakes: at a
    /// clock edge it yields the pre-edge value, untouched by writes that
    /// same settle committed.
    pub fn prev(&self, net: NetId) -> u64 {
        self.nets.prev(net)
    }

    /// Completed clock cycles since the start of the run.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Whether simulation termination has been signaled.
    pub fn finished(&self) -> bool {
        *self.finish
    }

    /// Signals simulation termination; the run loop exits at the next
    /// iteration boundary.
    pub fn request_finish(&mut self) {
        *self.finish = true;
    }
}

struct Slot {
    process: Box<dyn Process>,
    wait: Wait,
}

/// The simulation: net table, process table, clock, and run loop.
pub struct Sim {
    nets: NetTable,
    slots: Vec<Slot>,
    clk: NetId,
    cycle: u64,
    finish: bool,
    elaborated: bool,
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("cycle", &self.cycle)
            .field("processes", &self.slots.len())
            .field("finish", &self.finish)
            .finish_non_exhaustive()
    }
}

impl Default for Sim {
    fn default() -> Self {
        Self::new()
    }
}

impl Sim {
    /// Creates an empty simulation with a free-running clock net `clk`.
    pub fn new() -> Self {
        let mut nets = NetTable::new();
        // Width validation cannot fail for a literal 1.
        let clk = match nets.add("clk", 1) {
            Ok(id) => id,
            Err(_) => unreachable!(),
        };
        Self {
            nets,
            slots: Vec::new(),
            clk,
            cycle: 0,
            finish: false,
            elaborated: false,
        }
    }

    /// The clock net toggled by the run loop.
    pub fn clk(&self) -> NetId {
        self.clk
    }

    /// Registers a net with the given bit width.
    pub fn add_net(&mut self, name: &str, width: u32) -> Result<NetId, SimError> {
        self.nets.add(name, width)
    }

    /// Registers a process and runs its `init` step immediately.
    ///
    /// Init writes stay pending until the elaboration settle at the start
    /// of the first run, so every process sees the same time-zero picture.
    pub fn add_process(&mut self, mut process: Box<dyn Process>) {
        let mut handle = SimHandle {
            nets: &mut self.nets,
            cycle: self.cycle,
            finish: &mut self.finish,
        };
        let wait = process.init(&mut handle);
        debug!(process = process.name(), "registered");
        self.slots.push(Slot { process, wait });
    }

    /// Current committed value of a net.
    pub fn value(&self, net: NetId) -> u64 {
        self.nets.value(net)
    }

    /// Value a net held going into the most recent settle.
    pub fn prev(&self, net: NetId) -> u64 {
        self.nets.prev(net)
    }

    /// Completed clock cycles.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Signals termination; `run_cycles` returns at the next cycle boundary.
    pub fn finish(&mut self) {
        self.finish = true;
    }

    /// Whether termination has been signaled.
    pub fn finished(&self) -> bool {
        self.finish
    }

    /// Advances the simulation by up to `n` clock cycles.
    ///
    /// Each cycle is a rising half-step followed by a falling half-step.
    /// Returns early if [`Sim::finish`] is signaled; processes still
    /// suspended at that point are simply never resumed again.
    pub fn run_cycles(&mut self, n: u64) -> Result<(), SimError> {
        if !self.elaborated {
            // Commit init writes before any clock activity.
            self.settle_and_deliver()?;
            self.elaborated = true;
        }
        for _ in 0..n {
            if self.finish {
                break;
            }
            self.half_step(1)?;
            self.half_step(0)?;
            self.cycle += 1;
        }
        Ok(())
    }

    /// Advances the simulation until termination is signaled.
    ///
    /// `limit` bounds the run in cycles; a stalled handshake never
    /// finishes on its own.
    pub fn run_until_finish(&mut self, limit: u64) -> Result<(), SimError> {
        for _ in 0..limit {
            if self.finish {
                break;
            }
            self.run_cycles(1)?;
        }
        Ok(())
    }

    fn half_step(&mut self, level: u64) -> Result<(), SimError> {
        self.nets.put(self.clk, level);
        self.settle_and_deliver()
    }

    /// Settles pending writes and delivers edges until the timestep is
    /// quiescent.
    fn settle_and_deliver(&mut self) -> Result<(), SimError> {
        let mut edges = self.nets.settle();
        let mut deltas = 0u32;
        while !edges.is_empty() {
            deltas += 1;
            if deltas > MAX_DELTA_STEPS {
                return Err(SimError::SettleDivergence {
                    limit: MAX_DELTA_STEPS,
                });
            }
            self.deliver(&edges);
            edges = self.nets.settle();
        }
        Ok(())
    }

    fn deliver(&mut self, edges: &[Edge]) {
        let nets = &mut self.nets;
        let finish = &mut self.finish;
        let cycle = self.cycle;
        for edge in edges {
            trace!(
                net = nets.name(edge.net),
                rising = edge.rising,
                cycle,
                "edge"
            );
            for slot in &mut self.slots {
                let hit = match slot.wait {
                    Wait::Posedge(n) => edge.rising && n == edge.net,
                    Wait::Negedge(n) => !edge.rising && n == edge.net,
                    Wait::Finished => false,
                };
                if hit {
                    let mut handle = SimHandle {
                        nets: &mut *nets,
                        cycle,
                        finish: &mut *finish,
                    };
                    slot.wait = slot.process.resume(&mut handle, *edge);
                }
            }
        }
    }
}
