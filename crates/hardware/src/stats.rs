//! Driver statistics collection and reporting.
//!
//! Tracks what the read-address driver did over a run: completions,
//! discards, idle cycles, and stall cycles spent waiting on the receiver.

use std::time::Instant;

/// Counters accumulated by a read-address driver.
#[derive(Clone, Debug)]
pub struct DriverStats {
    start_time: Instant,
    /// Read requests whose handshake completed.
    pub requests_completed: u64,
    /// Non-read queue items discarded by the dispatch fallback.
    pub requests_discarded: u64,
    /// Clock cycles spent with an empty queue.
    pub idle_cycles: u64,
    /// Clock cycles spent holding valid while the receiver was not ready.
    pub stall_cycles: u64,
}

impl Default for DriverStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            requests_completed: 0,
            requests_discarded: 0,
            idle_cycles: 0,
            stall_cycles: 0,
        }
    }
}

impl DriverStats {
    /// Prints a summary to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        println!("==================== Driver Statistics ====================");
        println!("Requests completed : {}", self.requests_completed);
        println!("Requests discarded : {}", self.requests_discarded);
        println!("Idle cycles        : {}", self.idle_cycles);
        println!("Stall cycles       : {}", self.stall_cycles);
        println!("Wall-clock elapsed : {:.3?}", elapsed);
        println!("===========================================================");
    }
}
