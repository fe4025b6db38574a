//! Bus-protocol agents for the read-address channel.
//!
//! This module holds everything that speaks the VALID/READY protocol:
//! 1. **Channel:** the signal bundle with optional attribute fields.
//! 2. **Packets:** request objects and their one-shot completion signals.
//! 3. **Queue:** the pending-request seam between sequencer and driver.
//! 4. **Driver:** the requester-side handshake state machine (the core).
//! 5. **Responder:** a receiver-side ready stimulus for demos and tests.

/// The read-address channel signal bundle.
pub mod channel;
/// The requester-side handshake driver.
pub mod driver;
/// Request packets and completion signals.
pub mod packet;
/// The pending-request queue seam.
pub mod queue;
/// Receiver-side ready stimulus.
pub mod responder;

pub use channel::ArChannel;
pub use driver::ReadAddressDriver;
pub use packet::{BusRequest, CompletionHandle, ReadRequest, WriteRequest};
pub use queue::{FifoQueue, RequestQueue};
pub use responder::{ReadyMode, ReadyResponder};
