// tests/config_tests.rs
mod common;

use common::*;
use order_flow::config::{DEFAULT_NOTIFICATION_THRESHOLD, NOTIFICATION_THRESHOLD_VAR};
use order_flow::{FlowError, ProcessorConfig};
use serial_test::serial;
use std::env;

#[test]
fn test_default_threshold_is_one_hundred() {
  assert_eq!(ProcessorConfig::default().notification_threshold, 100);
  assert_eq!(DEFAULT_NOTIFICATION_THRESHOLD, 100);
}

#[test]
#[serial]
fn test_from_env_uses_default_when_unset() {
  setup_tracing();
  env::remove_var(NOTIFICATION_THRESHOLD_VAR);
  assert_eq!(ProcessorConfig::from_env().unwrap(), ProcessorConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_threshold() {
  setup_tracing();
  env::set_var(NOTIFICATION_THRESHOLD_VAR, " 250 ");
  let config = ProcessorConfig::from_env();
  env::remove_var(NOTIFICATION_THRESHOLD_VAR);

  assert_eq!(config.unwrap().notification_threshold, 250);
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_threshold() {
  setup_tracing();
  env::set_var(NOTIFICATION_THRESHOLD_VAR, "lots");
  let config = ProcessorConfig::from_env();
  env::remove_var(NOTIFICATION_THRESHOLD_VAR);

  match config {
    Err(FlowError::Configuration { key, message }) => {
      assert_eq!(key, NOTIFICATION_THRESHOLD_VAR);
      assert!(message.contains("lots"));
    }
    other => panic!("Expected FlowError::Configuration, got {:?}", other),
  }
}
