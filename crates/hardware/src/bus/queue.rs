//! The pending-request queue seam.
//!
//! The driver only pulls already-admitted items; per-item timeout and
//! drop-delay enforcement belong to whatever supplies the queue (a
//! timeout-aware driver base in the source). The trait keeps that boundary:
//! a different supplier can substitute its own implementation without
//! touching the driver.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::packet::BusRequest;

/// FIFO of pending bus requests consumed by a channel driver.
pub trait RequestQueue {
    /// Whether at least one item is pending.
    fn has_pending(&self) -> bool;

    /// Removes and returns the first pending item.
    fn pop(&mut self) -> Option<BusRequest>;
}

/// Plain FIFO queue, shared single-producer/single-consumer between a
/// sequencer and a driver.
#[derive(Debug, Default)]
pub struct FifoQueue {
    items: VecDeque<BusRequest>,
}

impl FifoQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue already wrapped for sharing.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Appends a request (producer side).
    pub fn push(&mut self, request: BusRequest) {
        self.items.push_back(request);
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RequestQueue for FifoQueue {
    fn has_pending(&self) -> bool {
        !self.items.is_empty()
    }

    fn pop(&mut self) -> Option<BusRequest> {
        self.items.pop_front()
    }
}
