//! Receiver-side ready stimulus.
//!
//! A minimal stand-in for the bus receiver: it owns `arready` and drives it
//! according to a pattern. Used by the CLI demo and the test suite to
//! exercise the driver's hold-until-ready behavior.

use crate::sim::{Edge, NetId, Process, SimHandle, Wait};

use super::channel::ArChannel;

/// How `arready` behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyMode {
    /// Ready held high permanently; every request accepted at first sample.
    Always,
    /// Ready held low permanently; requests stall forever.
    Never,
    /// After valid is observed, ready stays low for this many further
    /// cycles, pulses high for one cycle, then drops again.
    Delay(u64),
}

/// Drives `arready` per a [`ReadyMode`].
#[derive(Debug)]
pub struct ReadyResponder {
    clk: NetId,
    ar_valid: NetId,
    ar_ready: NetId,
    mode: ReadyMode,
    countdown: Option<u64>,
}

impl ReadyResponder {
    /// Creates a responder for the receiver side of `chan`.
    pub fn new(chan: &ArChannel, mode: ReadyMode) -> Self {
        Self {
            clk: chan.clk,
            ar_valid: chan.ar_valid,
            ar_ready: chan.ar_ready,
            mode,
            countdown: None,
        }
    }
}

impl Process for ReadyResponder {
    fn name(&self) -> &str {
        "ar-responder"
    }

    fn init(&mut self, sim: &mut SimHandle<'_>) -> Wait {
        match self.mode {
            ReadyMode::Always => {
                sim.put(self.ar_ready, 1);
                Wait::Finished
            }
            ReadyMode::Never => {
                sim.put(self.ar_ready, 0);
                Wait::Finished
            }
            ReadyMode::Delay(_) => {
                sim.put(self.ar_ready, 0);
                Wait::Posedge(self.clk)
            }
        }
    }

    fn resume(&mut self, sim: &mut SimHandle<'_>, _edge: Edge) -> Wait {
        let ReadyMode::Delay(cycles) = self.mode else {
            return Wait::Finished;
        };
        if sim.value(self.ar_ready) != 0 {
            // One-cycle pulse is over; accept the next request afresh.
            sim.put(self.ar_ready, 0);
            self.countdown = None;
        } else if let Some(remaining) = self.countdown {
            if remaining > 1 {
                self.countdown = Some(remaining - 1);
            } else {
                sim.put(self.ar_ready, 1);
                self.countdown = None;
            }
        } else if sim.value(self.ar_valid) != 0 {
            if cycles == 0 {
                sim.put(self.ar_ready, 1);
            } else {
                self.countdown = Some(cycles);
            }
        }
        Wait::Posedge(self.clk)
    }
}
