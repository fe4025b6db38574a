//! Channel bundle construction tests.

use axsim_core::bus::ArChannel;
use axsim_core::common::SimError;
use axsim_core::config::ChannelConfig;
use axsim_core::sim::Sim;

#[test]
fn default_bundle_has_every_optional_field() {
    let mut sim = Sim::new();
    let chan = ArChannel::new(&mut sim, &ChannelConfig::default()).unwrap();
    assert!(chan.ar_id.is_some());
    assert!(chan.ar_len.is_some());
    assert!(chan.ar_size.is_some());
    assert!(chan.ar_burst.is_some());
    assert!(chan.ar_lock.is_some());
    assert!(chan.ar_cache.is_some());
    assert!(chan.ar_qos.is_some());
    assert!(chan.ar_region.is_some());
    // user_width defaults to zero: absent.
    assert!(chan.ar_user.is_none());
}

#[test]
fn zero_widths_and_flags_remove_fields() {
    let mut sim = Sim::new();
    let config = ChannelConfig {
        id_width: 0,
        user_width: 0,
        has_len: false,
        has_size: false,
        has_burst: false,
        has_lock: false,
        has_cache: false,
        has_qos: false,
        has_region: false,
        ..ChannelConfig::default()
    };
    let chan = ArChannel::new(&mut sim, &config).unwrap();
    assert!(chan.ar_id.is_none());
    assert!(chan.ar_len.is_none());
    assert!(chan.ar_size.is_none());
    assert!(chan.ar_burst.is_none());
    assert!(chan.ar_lock.is_none());
    assert!(chan.ar_cache.is_none());
    assert!(chan.ar_qos.is_none());
    assert!(chan.ar_region.is_none());
    assert!(chan.ar_user.is_none());
}

#[test]
fn mandatory_nets_always_exist() {
    let mut sim = Sim::new();
    let chan = ArChannel::new(&mut sim, &ChannelConfig::default()).unwrap();
    // All mandatory nets are live and idle-low.
    for net in [chan.reset_n, chan.ar_valid, chan.ar_ready, chan.ar_addr] {
        assert_eq!(sim.value(net), 0);
    }
}

#[test]
fn invalid_addr_width_is_rejected() {
    let mut sim = Sim::new();
    let config = ChannelConfig {
        addr_width: 0,
        ..ChannelConfig::default()
    };
    assert!(matches!(
        ArChannel::new(&mut sim, &config),
        Err(SimError::InvalidWidth { .. })
    ));
}

#[test]
fn second_bundle_on_one_sim_collides() {
    let mut sim = Sim::new();
    let _ = ArChannel::new(&mut sim, &ChannelConfig::default()).unwrap();
    // Net names are global to a sim; a second identical bundle collides.
    assert!(matches!(
        ArChannel::new(&mut sim, &ChannelConfig::default()),
        Err(SimError::DuplicateNet(_))
    ));
}
