// order_flow/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors raised by the step engine and by collaborators during a run.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Error in step handler or collaborator. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration error for '{key}': {message}")]
  Configuration { key: String, message: String },

  #[error("Internal flow error: {0}")]
  Internal(String),
}

// Collaborator faults arrive as anyhow::Error and are absorbed here.
impl From<AnyhowError> for FlowError {
  fn from(err: AnyhowError) -> Self {
    FlowError::HandlerError { source: err }
  }
}

pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;

/// Misuse of the processor API. These are never reported as a `false`
/// processing result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
  #[error("Order processor built without a {collaborator}")]
  MissingCollaborator { collaborator: &'static str },

  #[error("No order was supplied for processing")]
  MissingOrder,
}
