//! The read-address channel handshake driver.
//!
//! This is the requester-side protocol timing engine: it translates one
//! abstract [`ReadRequest`](super::packet::ReadRequest) at a time into
//! cycle-by-cycle signal transitions. It provides:
//! 1. **Init:** every owned signal driven to its idle value in one atomic
//!    update, before any clock activity.
//! 2. **Reset sync:** nothing is driven onto the bus before the reset
//!    wire's first rising edge; that edge is observed exactly once.
//! 3. **Dispatch:** assert valid plus all present attribute fields in one
//!    step, hold until the receiver's ready is observed, then release and
//!    fire the packet's completion exactly once.
//! 4. **Fallbacks:** empty queue idles one clock cycle; non-read items are
//!    consumed one edge and silently discarded; termination abandons any
//!    in-flight packet without error.
//!
//! The driver never bounds how long it holds valid — an unlimited stall is
//! legal handshake behavior, and timeout/drop policy belongs to the queue's
//! supplier.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::RReadyPolicy;
use crate::sim::{Edge, Process, SimHandle, Wait};
use crate::stats::DriverStats;

use super::channel::ArChannel;
use super::packet::{BusRequest, ReadRequest};
use super::queue::RequestQueue;

/// Phase of the one-packet-in-flight state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    /// Waiting for the reset wire's rising edge. Entered once.
    AwaitReset,
    /// Queue was empty; advancing one clock edge before re-checking.
    Idle,
    /// A non-read item was dequeued; dropping it after one clock edge.
    DiscardCycle,
    /// Packet dequeued; waiting for the next clock edge to assert.
    AlignAssert,
    /// Asserted last edge; sampling the receiver's ready this edge.
    SampleReady,
    /// Receiver was not ready; holding valid until its rising edge.
    HoldUntilReady,
    /// Simulation terminated; never resumed.
    Done,
}

/// Requester-side driver for one read-address channel.
pub struct ReadAddressDriver {
    chan: ArChannel,
    queue: Rc<RefCell<dyn RequestQueue>>,
    policy: RReadyPolicy,
    stats: Rc<RefCell<DriverStats>>,
    state: DriverState,
    in_flight: Option<ReadRequest>,
    /// Cycle at which the in-flight packet was asserted, for stall stats.
    asserted_at: u64,
}

impl std::fmt::Debug for ReadAddressDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadAddressDriver")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl ReadAddressDriver {
    /// Creates a driver over `chan`, pulling from `queue`.
    pub fn new(
        chan: ArChannel,
        queue: Rc<RefCell<dyn RequestQueue>>,
        policy: RReadyPolicy,
    ) -> Self {
        Self {
            chan,
            queue,
            policy,
            stats: Rc::new(RefCell::new(DriverStats::default())),
            state: DriverState::AwaitReset,
            in_flight: None,
            asserted_at: 0,
        }
    }

    /// Shared handle to the driver's statistics, for observation after the
    /// driver has been moved into the kernel.
    pub fn stats(&self) -> Rc<RefCell<DriverStats>> {
        Rc::clone(&self.stats)
    }

    /// Picks the next activity: next packet, discard cycle, or idle cycle.
    ///
    /// Runs inside a resume, so it never suspends itself; it only chooses
    /// the next suspension point.
    fn dispatch(&mut self, sim: &SimHandle<'_>) -> Wait {
        if sim.finished() {
            self.state = DriverState::Done;
            return Wait::Finished;
        }
        let item = self.queue.borrow_mut().pop();
        match item {
            None => {
                self.state = DriverState::Idle;
                Wait::Posedge(self.chan.clk)
            }
            Some(BusRequest::Read(request)) => {
                self.in_flight = Some(request);
                self.state = DriverState::AlignAssert;
                Wait::Posedge(self.chan.clk)
            }
            Some(other) => {
                // Heterogeneous queues can carry other channel types; they
                // cost one cycle and are dropped, not errored.
                debug!(item = ?other, "discarding non-read request");
                self.state = DriverState::DiscardCycle;
                Wait::Posedge(self.chan.clk)
            }
        }
    }

    /// Asserts valid, every present attribute field, and (per policy) the
    /// read-data-ready signal — all in one atomic step.
    fn assert_request(&mut self, sim: &mut SimHandle<'_>) {
        let Some(request) = self.in_flight.as_ref() else {
            return;
        };
        sim.put(self.chan.ar_valid, 1);
        sim.put(self.chan.ar_addr, request.addr);
        sim.put(self.chan.ar_prot, request.prot);
        if let Some(net) = self.chan.ar_id {
            sim.put(net, request.id);
        }
        if let Some(net) = self.chan.ar_len {
            sim.put(net, request.len);
        }
        if let Some(net) = self.chan.ar_size {
            sim.put(net, request.size);
        }
        if let Some(net) = self.chan.ar_burst {
            sim.put(net, request.burst);
        }
        if let Some(net) = self.chan.ar_lock {
            sim.put(net, request.lock);
        }
        if let Some(net) = self.chan.ar_cache {
            sim.put(net, request.cache);
        }
        if let Some(net) = self.chan.ar_qos {
            sim.put(net, request.qos);
        }
        if let Some(net) = self.chan.ar_region {
            sim.put(net, request.region);
        }
        if let Some(net) = self.chan.ar_user {
            sim.put(net, request.user);
        }
        if self.policy == RReadyPolicy::AssertWithRequest {
            sim.put(self.chan.r_ready, 1);
        }
        self.asserted_at = sim.cycle();
        info!(
            id = request.id,
            addr = request.addr,
            cycle = sim.cycle(),
            "driving read request"
        );
    }

    /// De-asserts valid and fires the packet's completion.
    fn release(&mut self, sim: &mut SimHandle<'_>) {
        sim.put(self.chan.ar_valid, 0);
        if let Some(request) = self.in_flight.take() {
            request.complete();
            let mut stats = self.stats.borrow_mut();
            stats.requests_completed += 1;
            stats.stall_cycles += sim.cycle().saturating_sub(self.asserted_at + 1);
            debug!(
                addr = request.addr,
                cycle = sim.cycle(),
                "read request accepted"
            );
        }
    }
}

impl Process for ReadAddressDriver {
    fn name(&self) -> &str {
        "ar-driver"
    }

    fn init(&mut self, sim: &mut SimHandle<'_>) -> Wait {
        sim.put(self.chan.ar_valid, 0);
        sim.put(self.chan.ar_addr, 0);
        sim.put(self.chan.ar_prot, 0);
        sim.put(self.chan.r_ready, 0);
        for net in [
            self.chan.ar_id,
            self.chan.ar_len,
            self.chan.ar_size,
            self.chan.ar_burst,
            self.chan.ar_lock,
            self.chan.ar_cache,
            self.chan.ar_qos,
            self.chan.ar_region,
            self.chan.ar_user,
        ]
        .into_iter()
        .flatten()
        {
            sim.put(net, 0);
        }
        self.state = DriverState::AwaitReset;
        Wait::Posedge(self.chan.reset_n)
    }

    fn resume(&mut self, sim: &mut SimHandle<'_>, _edge: Edge) -> Wait {
        match self.state {
            DriverState::AwaitReset => {
                debug!(cycle = sim.cycle(), "reset observed, entering main loop");
                self.dispatch(sim)
            }
            DriverState::Idle => {
                self.stats.borrow_mut().idle_cycles += 1;
                self.dispatch(sim)
            }
            DriverState::DiscardCycle => {
                self.stats.borrow_mut().requests_discarded += 1;
                self.dispatch(sim)
            }
            DriverState::AlignAssert => {
                self.assert_request(sim);
                self.state = DriverState::SampleReady;
                Wait::Posedge(self.chan.clk)
            }
            DriverState::SampleReady => {
                // Sample the value ready held going into this edge; the
                // receiver may be changing it at this very edge.
                if sim.prev(self.chan.ar_ready) != 0 {
                    self.release(sim);
                    self.dispatch(sim)
                } else {
                    self.state = DriverState::HoldUntilReady;
                    Wait::Posedge(self.chan.ar_ready)
                }
            }
            DriverState::HoldUntilReady => {
                self.release(sim);
                self.dispatch(sim)
            }
            DriverState::Done => Wait::Finished,
        }
    }
}
