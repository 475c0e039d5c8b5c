// order_flow/src/core/handler.rs

//! Defines the `Handler<TData, Err>` type for pipeline step handlers.

use crate::core::control::PipelineControl;

/// Type alias for a pipeline step handler.
///
/// A handler borrows the run's data mutably for the duration of the call and
/// returns either a control signal or an error of the pipeline's `Err` type.
///
/// Handlers run synchronously and to completion. Anything a handler needs
/// beyond the run's data (collaborators, configuration) is captured by the
/// closure when it is registered.
pub type Handler<TData, Err> = Box<dyn Fn(&mut TData) -> Result<PipelineControl, Err> + Send + Sync>;
