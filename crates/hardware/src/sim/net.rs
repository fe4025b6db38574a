//! Net storage and the two-phase settle step.
//!
//! A net is a single simulated wire. Writes are two-phase: `put` records a
//! pending value, and nothing is visible to readers until the next settle,
//! which commits every pending write simultaneously. This is what makes a
//! multi-signal update (valid plus address plus attributes) atomic from the
//! point of view of every other process.

use crate::common::SimError;

/// Handle to a net registered with the kernel.
///
/// Only the kernel creates these, so an id always indexes a live net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetId(pub(crate) usize);

/// A value change committed by a settle step.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// The net that changed.
    pub net: NetId,
    /// `true` for a 0→1 transition, `false` for 1→0.
    pub rising: bool,
}

struct Net {
    name: String,
    width: u32,
    value: u64,
    /// Snapshot of `value` taken going into the most recent settle.
    prev: u64,
    pending: Option<u64>,
}

fn width_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Table of all nets in a simulation.
pub(crate) struct NetTable {
    nets: Vec<Net>,
}

impl NetTable {
    pub(crate) fn new() -> Self {
        Self { nets: Vec::new() }
    }

    /// Registers a net. Values start at zero; the X state is not modeled.
    pub(crate) fn add(&mut self, name: &str, width: u32) -> Result<NetId, SimError> {
        if width == 0 || width > 64 {
            return Err(SimError::InvalidWidth {
                field: "net",
                width,
            });
        }
        if self.nets.iter().any(|n| n.name == name) {
            return Err(SimError::DuplicateNet(name.to_string()));
        }
        self.nets.push(Net {
            name: name.to_string(),
            width,
            value: 0,
            prev: 0,
            pending: None,
        });
        Ok(NetId(self.nets.len() - 1))
    }

    /// Schedules a value change, masked to the net's width.
    ///
    /// The change becomes visible at the next settle. A second `put` to the
    /// same net within one step overwrites the first; each net is expected
    /// to have a single writer process.
    pub(crate) fn put(&mut self, id: NetId, value: u64) {
        let net = &mut self.nets[id.0];
        net.pending = Some(value & width_mask(net.width));
    }

    /// Current committed value.
    pub(crate) fn value(&self, id: NetId) -> u64 {
        self.nets[id.0].value
    }

    /// Value the net held going into the most recent settle.
    ///
    /// Sampling this at an edge avoids racing writes committed by the same
    /// settle that produced the edge.
    pub(crate) fn prev(&self, id: NetId) -> u64 {
        self.nets[id.0].prev
    }

    pub(crate) fn name(&self, id: NetId) -> &str {
        &self.nets[id.0].name
    }

    /// Commits all pending writes at once and reports the edges produced.
    ///
    /// `prev` is snapshotted for every net, changed or not, so "the value
    /// held going into this settle" is well defined across the board.
    pub(crate) fn settle(&mut self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (idx, net) in self.nets.iter_mut().enumerate() {
            net.prev = net.value;
            if let Some(next) = net.pending.take() {
                if next != net.value {
                    let was = net.value;
                    net.value = next;
                    // Edge direction only matters for 1-bit nets, but a
                    // multi-bit change still reports one event.
                    edges.push(Edge {
                        net: NetId(idx),
                        rising: was == 0 && next != 0,
                    });
                }
            }
        }
        edges
    }
}
