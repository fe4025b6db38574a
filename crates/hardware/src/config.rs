//! Configuration for the channel bundle, the driver, and the run.
//!
//! This module defines all configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** baseline channel geometry and reset timing.
//! 2. **Structures:** hierarchical config for channel, driver, and sim.
//! 3. **Enums:** the response-ready back-pressure policy.
//!
//! Configuration is supplied as JSON (the CLI accepts a config file) or via
//! `Config::default()`.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants.
mod defaults {
    /// Address bus width in bits.
    pub const ADDR_WIDTH: u32 = 32;

    /// Transaction id width in bits. Zero means the `arid` field is absent
    /// from the bundle entirely.
    pub const ID_WIDTH: u32 = 4;

    /// User-defined sideband width in bits. Zero means absent; absent is
    /// the common case, so it is the default.
    pub const USER_WIDTH: u32 = 0;

    /// Clock cycles reset is held low by the standard stimulus.
    pub const RESET_CYCLES: u64 = 2;
}

/// Back-pressure policy for the read-data-ready signal.
///
/// The source drives `rready` high unconditionally at request dispatch and
/// flags that as unresolved, so the choice is kept configurable rather than
/// baked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RReadyPolicy {
    /// Assert `rready` together with each request and leave it high.
    ///
    /// Reproduces the source behavior: the requester advertises it can
    /// always accept read data.
    #[default]
    AssertWithRequest,
    /// Never drive `rready` high; back-pressure is owned by an external
    /// response-side agent.
    HoldLow,
}

/// Geometry of the read-address channel bundle.
///
/// Optional fields are a static property of the bundle: a width of zero or
/// a `false` presence flag means the wire does not exist at all and is
/// never driven. Presence is resolved once at bundle construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Width of `araddr` in bits (always present).
    pub addr_width: u32,
    /// Width of `arid` in bits; zero removes the field.
    pub id_width: u32,
    /// Width of `aruser` in bits; zero removes the field.
    pub user_width: u32,
    /// Whether the burst length field `arlen` exists.
    pub has_len: bool,
    /// Whether the beat size field `arsize` exists.
    pub has_size: bool,
    /// Whether the burst type field `arburst` exists.
    pub has_burst: bool,
    /// Whether the exclusive-access field `arlock` exists.
    pub has_lock: bool,
    /// Whether the cache attribute field `arcache` exists.
    pub has_cache: bool,
    /// Whether the quality-of-service field `arqos` exists.
    pub has_qos: bool,
    /// Whether the region identifier field `arregion` exists.
    pub has_region: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            addr_width: defaults::ADDR_WIDTH,
            id_width: defaults::ID_WIDTH,
            user_width: defaults::USER_WIDTH,
            has_len: true,
            has_size: true,
            has_burst: true,
            has_lock: true,
            has_cache: true,
            has_qos: true,
            has_region: true,
        }
    }
}

impl ChannelConfig {
    /// Checks widths before any nets are created.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.addr_width == 0 || self.addr_width > 64 {
            return Err(SimError::InvalidWidth {
                field: "addr_width",
                width: self.addr_width,
            });
        }
        if self.id_width > 64 {
            return Err(SimError::InvalidWidth {
                field: "id_width",
                width: self.id_width,
            });
        }
        if self.user_width > 64 {
            return Err(SimError::InvalidWidth {
                field: "user_width",
                width: self.user_width,
            });
        }
        Ok(())
    }
}

/// Driver behavior knobs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// How the read-data-ready signal is driven at dispatch time.
    pub rready_policy: RReadyPolicy,
}

/// Run-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Clock cycles the reset stimulus holds `resetn` low.
    pub reset_cycles: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use axsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.channel.addr_width, 32);
///
/// let json = r#"{
///     "channel": { "addr_width": 40, "id_width": 0 },
///     "driver": { "rready_policy": "HoldLow" }
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.channel.addr_width, 40);
/// assert_eq!(config.channel.id_width, 0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Channel bundle geometry.
    pub channel: ChannelConfig,
    /// Driver behavior.
    pub driver: DriverConfig,
    /// Run-level settings.
    pub sim: SimConfig,
}
