// order_flow/src/processor.rs

//! The order workflow: validate, ensure the store is connected, save, send a
//! confirmation for large orders, and mark the order processed.
//!
//! The workflow is a fixed five-step `Pipeline<Order, FlowError>` assembled
//! once per processor. Every failure after validation is absorbed into a
//! `false` result; the error itself is only logged.

use crate::collaborators::{Notifier, Store};
use crate::config::ProcessorConfig;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::core::step::SkipCondition;
use crate::error::{ContractViolation, FlowError, FlowResult};
use crate::order::Order;
use crate::pipeline::Pipeline;
use anyhow::Context;
use std::sync::Arc;
use tracing::{event, instrument, Level};

pub const STEP_VALIDATE_AMOUNT: &str = "validate_amount";
pub const STEP_ENSURE_CONNECTED: &str = "ensure_connected";
pub const STEP_SAVE_ORDER: &str = "save_order";
pub const STEP_SEND_CONFIRMATION: &str = "send_confirmation";
pub const STEP_MARK_PROCESSED: &str = "mark_processed";

pub struct OrderProcessor {
  pipeline: Pipeline<Order, FlowError>,
  config: ProcessorConfig,
}

impl OrderProcessor {
  /// Creates a processor with the default configuration.
  pub fn new(store: Arc<dyn Store>, notifier: Arc<dyn Notifier>) -> Self {
    Self::with_config(store, notifier, ProcessorConfig::default())
  }

  pub fn with_config(store: Arc<dyn Store>, notifier: Arc<dyn Notifier>, config: ProcessorConfig) -> Self {
    Self {
      pipeline: order_pipeline(store, notifier, config),
      config,
    }
  }

  /// Starts a builder. `build()` reports a missing collaborator as a
  /// `ContractViolation`.
  pub fn builder() -> OrderProcessorBuilder {
    OrderProcessorBuilder::default()
  }

  pub fn config(&self) -> ProcessorConfig {
    self.config
  }

  /// Workflow step names in execution order.
  pub fn steps(&self) -> Vec<&str> {
    self.pipeline.step_names()
  }

  /// Runs the workflow for `order`.
  ///
  /// A missing order is a contract violation and is returned as `Err`.
  /// Otherwise the result is `Ok(true)` when the order was processed and
  /// `Ok(false)` when it was rejected or any collaborator failed.
  pub fn process_order(&self, order: Option<&mut Order>) -> Result<bool, ContractViolation> {
    let order = order.ok_or(ContractViolation::MissingOrder)?;
    Ok(self.process(order))
  }

  /// Runs the workflow for `order` and reports whether it was processed.
  ///
  /// `order.is_processed` is set to `true` only when every step succeeded.
  /// On rejection or failure the order is left exactly as it was.
  #[instrument(
        name = "OrderProcessor::process",
        skip_all,
        fields(order_id = order.id, total_amount = order.total_amount)
    )]
  pub fn process(&self, order: &mut Order) -> bool {
    match self.pipeline.run(order) {
      Ok(PipelineResult::Completed) => {
        event!(Level::INFO, "Order processed.");
        true
      }
      Ok(PipelineResult::Stopped) => {
        event!(Level::INFO, "Order rejected.");
        false
      }
      Err(error) => {
        event!(Level::WARN, %error, "Order processing failed, order left unprocessed.");
        false
      }
    }
  }
}

impl std::fmt::Debug for OrderProcessor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OrderProcessor")
      .field("steps", &self.pipeline.step_names())
      .field("config", &self.config)
      .finish()
  }
}

fn order_pipeline(
  store: Arc<dyn Store>,
  notifier: Arc<dyn Notifier>,
  config: ProcessorConfig,
) -> Pipeline<Order, FlowError> {
  let threshold = config.notification_threshold;
  let at_or_below_threshold: SkipCondition<Order> = Arc::new(move |order: &Order| order.total_amount <= threshold);

  let mut pipeline = Pipeline::new(&[
    (STEP_VALIDATE_AMOUNT, false, None),
    (STEP_ENSURE_CONNECTED, false, None),
    (STEP_SAVE_ORDER, false, None),
    (STEP_SEND_CONFIRMATION, false, Some(at_or_below_threshold)),
    (STEP_MARK_PROCESSED, false, None),
  ]);

  pipeline.on_root(STEP_VALIDATE_AMOUNT, |order: &mut Order| -> FlowResult<PipelineControl> {
    if order.total_amount > 0 {
      return Ok(PipelineControl::Continue);
    }
    event!(Level::DEBUG, total_amount = order.total_amount, "Total amount is not positive.");
    Ok(PipelineControl::Stop)
  });

  let connect_store = Arc::clone(&store);
  pipeline.on_root(STEP_ENSURE_CONNECTED, move |_order: &mut Order| -> FlowResult<PipelineControl> {
    if !connect_store.is_connected() {
      event!(Level::DEBUG, "Store not connected, connecting.");
      connect_store.connect().context("connecting to order store")?;
    }
    Ok(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_SAVE_ORDER, move |order: &mut Order| -> FlowResult<PipelineControl> {
    store.save(order).with_context(|| format!("saving order {}", order.id))?;
    Ok(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_SEND_CONFIRMATION, move |order: &mut Order| -> FlowResult<PipelineControl> {
    notifier
      .send_order_confirmation(&order.customer_email, order.id)
      .with_context(|| format!("sending confirmation for order {}", order.id))?;
    Ok(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_MARK_PROCESSED, |order: &mut Order| -> FlowResult<PipelineControl> {
    order.is_processed = true;
    Ok(PipelineControl::Continue)
  });

  pipeline
}

/// Assembles an `OrderProcessor`, checking that both collaborators were supplied.
#[derive(Default)]
pub struct OrderProcessorBuilder {
  store: Option<Arc<dyn Store>>,
  notifier: Option<Arc<dyn Notifier>>,
  config: ProcessorConfig,
}

impl OrderProcessorBuilder {
  pub fn store(mut self, store: Arc<dyn Store>) -> Self {
    self.store = Some(store);
    self
  }

  pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
    self.notifier = Some(notifier);
    self
  }

  pub fn config(mut self, config: ProcessorConfig) -> Self {
    self.config = config;
    self
  }

  pub fn build(self) -> Result<OrderProcessor, ContractViolation> {
    let store = self
      .store
      .ok_or(ContractViolation::MissingCollaborator { collaborator: "store" })?;
    let notifier = self
      .notifier
      .ok_or(ContractViolation::MissingCollaborator { collaborator: "notifier" })?;
    Ok(OrderProcessor::with_config(store, notifier, self.config))
  }
}
