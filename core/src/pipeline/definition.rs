// order_flow/src/pipeline/definition.rs

//! Contains the `Pipeline<TData, Err>` struct definition and methods for its
//! construction and structural modification.

use crate::core::handler::Handler;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::FlowError;
use std::collections::HashMap;

/// An ordered list of named steps, each with `before`, `on` and `after`
/// handler phases, run synchronously against a `&mut TData`.
///
/// `Err` is the error type handlers return. It must be `From<FlowError>` so
/// the engine can report its own failures (e.g. a missing handler) through it.
pub struct Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Ordered list of step definitions for this pipeline.
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a new `Pipeline` from `(name, optional, skip_if)` step definitions.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_cond_opt)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: skip_cond_opt.clone(),
      })
      .collect();

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  /// Step names in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Returns the position of `step_name`. Panics if the step is not defined.
  ///
  /// Referring to an undefined step is a setup mistake (usually a typo in a
  /// step name), so it is not reported as a `FlowError`.
  pub(crate) fn step_index(&self, step_name: &str) -> usize {
    match self.steps.iter().position(|s| s.name == step_name) {
      Some(idx) => idx,
      None => panic!("Pipeline setup error: Step '{}' not found in pipeline definition.", step_name),
    }
  }

  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    self.step_index(step_name);
  }

  fn ensure_step_not_exists(&self, step_name: &str) {
    if self.steps.iter().any(|s| s.name == step_name) {
      panic!(
        "Pipeline setup error: Step '{}' already exists in pipeline definition.",
        step_name
      );
    }
  }

  // --- Basic Step Manipulation Methods ---

  pub fn insert_before_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<TData>>,
  ) {
    let idx = self.step_index(existing_step_name);
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name);
    self.steps.insert(idx, StepDef { name, optional, skip_if });
  }

  pub fn insert_after_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
    skip_if: Option<SkipCondition<TData>>,
  ) {
    let idx = self.step_index(existing_step_name);
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name);
    self.steps.insert(idx + 1, StepDef { name, optional, skip_if });
  }

  /// Removes a step and every handler registered for it. Unknown names are a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Some(idx) = self.steps.iter().position(|s| s.name == step_name) {
      self.steps.remove(idx);
      self.before.remove(step_name);
      self.on.remove(step_name);
      self.after.remove(step_name);
    }
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) {
    let idx = self.step_index(step_name);
    self.steps[idx].optional = optional;
  }

  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<SkipCondition<TData>>) {
    let idx = self.step_index(step_name);
    self.steps[idx].skip_if = skip_if;
  }
}
