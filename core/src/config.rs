// order_flow/src/config.rs

use crate::error::{FlowError, FlowResult};
use dotenvy::dotenv;
use std::env;

pub const NOTIFICATION_THRESHOLD_VAR: &str = "ORDER_NOTIFICATION_THRESHOLD";
pub const DEFAULT_NOTIFICATION_THRESHOLD: i64 = 100;

/// Tunables for `OrderProcessor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
  /// A confirmation is sent only when the order total is strictly greater than this.
  pub notification_threshold: i64,
}

impl Default for ProcessorConfig {
  fn default() -> Self {
    Self {
      notification_threshold: DEFAULT_NOTIFICATION_THRESHOLD,
    }
  }
}

impl ProcessorConfig {
  /// Reads the configuration from the environment, loading `.env` if present.
  /// Unset variables keep their defaults.
  pub fn from_env() -> FlowResult<Self> {
    dotenv().ok();

    let notification_threshold = match env::var(NOTIFICATION_THRESHOLD_VAR) {
      Ok(raw) => raw.trim().parse::<i64>().map_err(|e| FlowError::Configuration {
        key: NOTIFICATION_THRESHOLD_VAR.to_string(),
        message: format!("invalid value '{}': {}", raw, e),
      })?,
      Err(env::VarError::NotPresent) => DEFAULT_NOTIFICATION_THRESHOLD,
      Err(e) => {
        return Err(FlowError::Configuration {
          key: NOTIFICATION_THRESHOLD_VAR.to_string(),
          message: e.to_string(),
        })
      }
    };

    tracing::debug!(notification_threshold, "Processor configuration loaded.");
    Ok(Self { notification_threshold })
  }
}
