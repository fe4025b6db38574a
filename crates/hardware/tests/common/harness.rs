//! Test harness wiring a complete simulation together.

use std::cell::RefCell;
use std::rc::Rc;

use axsim_core::bus::{BusRequest, FifoQueue, ReadyMode, ReadyResponder, RequestQueue};
use axsim_core::config::Config;
use axsim_core::sim::ResetGen;
use axsim_core::stats::DriverStats;
use axsim_core::{ArChannel, ReadAddressDriver, Sim};

use crate::common::mocks::probe::{BusProbe, Trace};

/// A ready-to-run simulation: kernel, channel, driver, stimulus, probe.
pub struct TestContext {
    pub sim: Sim,
    pub chan: ArChannel,
    pub queue: Rc<RefCell<FifoQueue>>,
    pub stats: Rc<RefCell<DriverStats>>,
    pub trace: Trace,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Default config, always-ready receiver.
    pub fn new() -> Self {
        Self::with(Config::default(), ReadyMode::Always)
    }

    /// Explicit config and receiver behavior.
    pub fn with(config: Config, ready: ReadyMode) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut sim = Sim::new();
        let chan = ArChannel::new(&mut sim, &config.channel).unwrap();
        let queue = FifoQueue::shared();

        let shared: Rc<RefCell<dyn RequestQueue>> = queue.clone();
        let driver = ReadAddressDriver::new(chan.clone(), shared, config.driver.rready_policy);
        let stats = driver.stats();

        sim.add_process(Box::new(ResetGen::new(
            chan.clk,
            chan.reset_n,
            config.sim.reset_cycles,
        )));
        sim.add_process(Box::new(ReadyResponder::new(&chan, ready)));
        sim.add_process(Box::new(driver));

        let (probe, trace) = BusProbe::new(chan.clone());
        sim.add_process(Box::new(probe));

        Self {
            sim,
            chan,
            queue,
            stats,
            trace,
        }
    }

    /// Enqueues a request before (or during) the run.
    pub fn enqueue(&self, request: BusRequest) {
        self.queue.borrow_mut().push(request);
    }

    /// Advances the simulation by `cycles` clock cycles.
    pub fn run(&mut self, cycles: u64) {
        self.sim.run_cycles(cycles).unwrap();
    }

    /// The sample recorded for `cycle`, panicking if the run was too short.
    pub fn sample_at(&self, cycle: u64) -> crate::common::mocks::probe::TraceSample {
        self.trace
            .borrow()
            .iter()
            .find(|s| s.cycle == cycle)
            .cloned()
            .unwrap()
    }
}
