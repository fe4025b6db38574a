//! Request packets and the one-shot completion signal.
//!
//! A packet is created by a sequencer, enqueued, and owned exclusively by
//! the driver from dequeue until its completion fires. The driver never
//! mutates packet fields; it only reads them onto the wires and signals
//! completion exactly once at the end of a successful handshake.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot completion signal owned by a request packet.
///
/// Settled exactly once by the driver; signalling twice is a logic error
/// caught in debug builds.
#[derive(Debug)]
pub struct Completion {
    fired: Arc<AtomicBool>,
}

impl Completion {
    fn new() -> (Self, CompletionHandle) {
        let fired = Arc::new(AtomicBool::new(false));
        (
            Self {
                fired: Arc::clone(&fired),
            },
            CompletionHandle { fired },
        )
    }

    /// Fires the completion.
    pub fn signal(&self) {
        let already = self.fired.swap(true, Ordering::Release);
        debug_assert!(!already, "completion signalled twice");
    }
}

/// Observer side of a [`Completion`], held by whoever waits on the
/// transaction (sequencer, scoreboard, tests).
#[derive(Debug, Clone)]
pub struct CompletionHandle {
    fired: Arc<AtomicBool>,
}

impl CompletionHandle {
    /// Whether the associated packet's handshake has finished.
    pub fn is_complete(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

/// One read-address-channel transaction.
///
/// All attributes are plain unsigned integers; the driver masks them to the
/// configured field widths when driving, and fields absent from the bundle
/// are simply not driven.
#[derive(Debug)]
pub struct ReadRequest {
    /// Transaction identifier tag.
    pub id: u64,
    /// Target address.
    pub addr: u64,
    /// Burst length minus one.
    pub len: u64,
    /// Beat size encoding.
    pub size: u64,
    /// Burst type encoding.
    pub burst: u64,
    /// Exclusive access flag.
    pub lock: u64,
    /// Cache attribute encoding.
    pub cache: u64,
    /// Protection encoding.
    pub prot: u64,
    /// Quality-of-service value.
    pub qos: u64,
    /// Region identifier.
    pub region: u64,
    /// User-defined sideband value.
    pub user: u64,
    completion: Completion,
    handle: CompletionHandle,
}

impl ReadRequest {
    /// Creates a request for `addr` with all other attributes zeroed.
    pub fn new(addr: u64) -> Self {
        let (completion, handle) = Completion::new();
        Self {
            id: 0,
            addr,
            len: 0,
            size: 0,
            burst: 0,
            lock: 0,
            cache: 0,
            prot: 0,
            qos: 0,
            region: 0,
            user: 0,
            completion,
            handle,
        }
    }

    /// Observer handle for this request's completion.
    pub fn completion_handle(&self) -> CompletionHandle {
        self.handle.clone()
    }

    /// Fires the completion signal. Called by the driver, once.
    pub(crate) fn complete(&self) {
        self.completion.signal();
    }
}

/// A write-channel transaction.
///
/// Write-channel driving is out of scope here; the variant exists so a
/// heterogeneous queue shared across channel drivers is representable, and
/// so the read driver's discard fallback has something to discard.
#[derive(Debug)]
pub struct WriteRequest {
    /// Target address.
    pub addr: u64,
}

/// An item in the pending-request queue.
#[derive(Debug)]
pub enum BusRequest {
    /// A read-address-channel request, driven by the read driver.
    Read(ReadRequest),
    /// A write-channel request; the read driver discards these.
    Write(WriteRequest),
}
