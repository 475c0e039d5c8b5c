// order_flow/src/pipeline/hooks.rs

//! Methods for registering `before`, `on`, and `after` handlers for pipeline steps.

use crate::core::control::PipelineControl;
use crate::core::handler::Handler;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use std::collections::HashMap;
use tracing::{event, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Registers a `before` hook for a given step.
  ///
  /// The handler may return any error type convertible into the pipeline's `Err`.
  pub fn before_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name);
    Self::push_handler(&mut self.before, step_name, handler_fn);
  }

  /// Registers an `on` hook for a given step.
  pub fn on_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name);
    Self::push_handler(&mut self.on, step_name, handler_fn);
  }

  /// Registers an `after` hook for a given step.
  pub fn after_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.ensure_step_exists(step_name);
    Self::push_handler(&mut self.after, step_name, handler_fn);
  }

  fn push_handler<UserProvidedErr>(
    phase: &mut HashMap<String, Vec<Handler<TData, Err>>>,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    let final_handler: Handler<TData, Err> = Box::new(move |data: &mut TData| handler_fn(data).map_err(Into::into));
    let handlers = phase.entry(step_name.to_string()).or_default();
    handlers.push(final_handler);
    event!(Level::TRACE, %step_name, handler_count = handlers.len(), "Handler registered.");
  }
}
