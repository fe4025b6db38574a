//! The read-address channel signal bundle.
//!
//! One bundle instance owns the net ids for the system interface (clock,
//! active-low reset) and the read-address channel (valid/ready, address,
//! attributes, and the read-data-ready signal). Optional fields are
//! `Option<NetId>` slots resolved once at construction; an absent field has
//! no net and is never driven.

use crate::common::SimError;
use crate::config::ChannelConfig;
use crate::sim::{NetId, Sim};

/// Width of `arlen` (burst length minus one), fixed by the protocol.
pub const LEN_WIDTH: u32 = 8;
/// Width of `arsize` (beat size encoding).
pub const SIZE_WIDTH: u32 = 3;
/// Width of `arburst` (burst type encoding).
pub const BURST_WIDTH: u32 = 2;
/// Width of `arlock` (exclusive access).
pub const LOCK_WIDTH: u32 = 1;
/// Width of `arcache` (memory attribute encoding).
pub const CACHE_WIDTH: u32 = 4;
/// Width of `arprot` (protection encoding).
pub const PROT_WIDTH: u32 = 3;
/// Width of `arqos` (quality of service).
pub const QOS_WIDTH: u32 = 4;
/// Width of `arregion` (region identifier).
pub const REGION_WIDTH: u32 = 4;

/// Net ids for one read-address channel instance.
///
/// The driver owns write access to `ar_valid`, the attribute fields, and
/// `r_ready`; it only ever reads `ar_ready` and `reset_n`.
#[derive(Debug, Clone)]
pub struct ArChannel {
    /// System clock.
    pub clk: NetId,
    /// Active-low reset.
    pub reset_n: NetId,
    /// Request valid (requester → receiver).
    pub ar_valid: NetId,
    /// Request ready (receiver → requester).
    pub ar_ready: NetId,
    /// Target address.
    pub ar_addr: NetId,
    /// Protection attributes (always present).
    pub ar_prot: NetId,
    /// Read-data-channel ready (requester → receiver).
    pub r_ready: NetId,
    /// Transaction id, if configured.
    pub ar_id: Option<NetId>,
    /// Burst length minus one, if configured.
    pub ar_len: Option<NetId>,
    /// Beat size encoding, if configured.
    pub ar_size: Option<NetId>,
    /// Burst type encoding, if configured.
    pub ar_burst: Option<NetId>,
    /// Exclusive access flag, if configured.
    pub ar_lock: Option<NetId>,
    /// Cache attribute encoding, if configured.
    pub ar_cache: Option<NetId>,
    /// Quality-of-service value, if configured.
    pub ar_qos: Option<NetId>,
    /// Region identifier, if configured.
    pub ar_region: Option<NetId>,
    /// User-defined sideband, if configured.
    pub ar_user: Option<NetId>,
}

fn optional(
    sim: &mut Sim,
    present: bool,
    name: &str,
    width: u32,
) -> Result<Option<NetId>, SimError> {
    if present {
        Ok(Some(sim.add_net(name, width)?))
    } else {
        Ok(None)
    }
}

impl ArChannel {
    /// Registers the bundle's nets on `sim` according to `config`.
    ///
    /// Field presence is fixed here for the lifetime of the bundle.
    pub fn new(sim: &mut Sim, config: &ChannelConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            clk: sim.clk(),
            reset_n: sim.add_net("resetn", 1)?,
            ar_valid: sim.add_net("arvalid", 1)?,
            ar_ready: sim.add_net("arready", 1)?,
            ar_addr: sim.add_net("araddr", config.addr_width)?,
            ar_prot: sim.add_net("arprot", PROT_WIDTH)?,
            r_ready: sim.add_net("rready", 1)?,
            ar_id: optional(sim, config.id_width > 0, "arid", config.id_width.max(1))?,
            ar_len: optional(sim, config.has_len, "arlen", LEN_WIDTH)?,
            ar_size: optional(sim, config.has_size, "arsize", SIZE_WIDTH)?,
            ar_burst: optional(sim, config.has_burst, "arburst", BURST_WIDTH)?,
            ar_lock: optional(sim, config.has_lock, "arlock", LOCK_WIDTH)?,
            ar_cache: optional(sim, config.has_cache, "arcache", CACHE_WIDTH)?,
            ar_qos: optional(sim, config.has_qos, "arqos", QOS_WIDTH)?,
            ar_region: optional(sim, config.has_region, "arregion", REGION_WIDTH)?,
            ar_user: optional(
                sim,
                config.user_width > 0,
                "aruser",
                config.user_width.max(1),
            )?,
        })
    }
}
