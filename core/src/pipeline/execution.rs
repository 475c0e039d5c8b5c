// order_flow/src/pipeline/execution.rs

//! Contains the `Pipeline::run()` method, responsible for executing the pipeline's steps and handlers.

use crate::core::control::{PipelineControl, PipelineResult};
use crate::core::handler::Handler;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Executes the pipeline against `data`.
  ///
  /// Steps run in order. A step is skipped when its skip condition holds, or
  /// when it is optional and has no handlers. A non-optional step without
  /// handlers fails the run with `FlowError::HandlerMissing` converted into `Err`.
  ///
  /// Returns `PipelineResult::Stopped` as soon as a handler returns
  /// `PipelineControl::Stop`, and the handler's error as soon as one fails.
  /// Later handlers and steps do not run in either case.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            pipeline_data_type = %std::any::type_name::<TData>(),
            pipeline_error_type = %std::any::type_name::<Err>(),
            num_steps = self.steps.len(),
        ),
        err(Display)
    )]
  pub fn run(&self, data: &mut TData) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name_str = step_def.name.as_str();

      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step_name_str,
        step_index = step_idx,
        optional = step_def.optional
      );
      let _step_span_guard = step_span.enter();
      event!(Level::DEBUG, "Processing step.");

      if let Some(skip_cond_fn) = &step_def.skip_if {
        if skip_cond_fn(&*data) {
          event!(Level::INFO, "Step skipped due to 'skip_if' condition.");
          continue;
        }
      }

      let has_handlers = [&self.before, &self.on, &self.after]
        .iter()
        .any(|phase| phase.get(step_name_str).is_some_and(|v| !v.is_empty()));

      if !has_handlers {
        if step_def.optional {
          event!(Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(Level::ERROR, "Non-optional step has no handlers.");
        return Err(Err::from(FlowError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase_name, phase) in [("before", &self.before), ("on", &self.on), ("after", &self.after)] {
        if let Some(handlers) = phase.get(step_name_str) {
          if run_phase(phase_name, handlers, &mut *data)? == PipelineControl::Stop {
            return Ok(PipelineResult::Stopped);
          }
        }
      }
      event!(Level::DEBUG, "Step processing finished successfully.");
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineResult::Completed)
  }
}

fn run_phase<TData, Err>(
  phase_name: &'static str,
  handlers: &[Handler<TData, Err>],
  data: &mut TData,
) -> Result<PipelineControl, Err>
where
  Err: std::error::Error,
{
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    let handler_span = span!(Level::DEBUG, "step_handler", phase = phase_name, handler_index = handler_idx);
    let _handler_span_guard = handler_span.enter();
    match handler_fn(&mut *data) {
      Ok(PipelineControl::Continue) => {}
      Ok(PipelineControl::Stop) => {
        event!(Level::INFO, phase = phase_name, "Pipeline stopped by a handler.");
        return Ok(PipelineControl::Stop);
      }
      Err(e) => {
        event!(Level::ERROR, error = %e, phase = phase_name, "Handler failed.");
        return Err(e);
      }
    }
  }
  Ok(PipelineControl::Continue)
}
