//! Configuration tests: defaults, JSON parsing, validation.

use axsim_core::common::SimError;
use axsim_core::config::{Config, RReadyPolicy};

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert_eq!(config.channel.addr_width, 32);
    assert_eq!(config.channel.id_width, 4);
    assert_eq!(config.channel.user_width, 0);
    assert_eq!(config.driver.rready_policy, RReadyPolicy::AssertWithRequest);
    assert_eq!(config.sim.reset_cycles, 2);
    config.channel.validate().unwrap();
}

#[test]
fn partial_json_overrides_defaults() {
    let json = r#"{ "channel": { "addr_width": 48 } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.channel.addr_width, 48);
    // Untouched fields keep their defaults.
    assert_eq!(config.channel.id_width, 4);
    assert!(config.channel.has_len);
}

#[test]
fn rready_policy_parses_by_name() {
    let json = r#"{ "driver": { "rready_policy": "HoldLow" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.driver.rready_policy, RReadyPolicy::HoldLow);
}

#[test]
fn oversized_widths_fail_validation() {
    let mut config = Config::default();
    config.channel.addr_width = 65;
    assert!(matches!(
        config.channel.validate(),
        Err(SimError::InvalidWidth {
            field: "addr_width",
            ..
        })
    ));

    let mut config = Config::default();
    config.channel.id_width = 65;
    assert!(matches!(
        config.channel.validate(),
        Err(SimError::InvalidWidth {
            field: "id_width",
            ..
        })
    ));
}

#[test]
fn zero_addr_width_fails_validation() {
    let mut config = Config::default();
    config.channel.addr_width = 0;
    assert!(config.channel.validate().is_err());
}
