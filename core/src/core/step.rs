// order_flow/src/core/step.rs

//! Defines the structure for a single step within a pipeline.

use std::sync::Arc;

/// Predicate evaluated against the run's data before a step executes.
/// When it returns `true` the step is skipped.
pub type SkipCondition<TData> = Arc<dyn Fn(&TData) -> bool + Send + Sync + 'static>;

/// Definition of a pipeline step: its name, optionality, and skip condition.
#[derive(Clone)]
pub struct StepDef<TData: 'static> {
  pub name: String,
  pub optional: bool,
  pub skip_if: Option<SkipCondition<TData>>,
}

// SkipCondition has no Debug, so report only whether one is set.
impl<TData: 'static> std::fmt::Debug for StepDef<TData> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
