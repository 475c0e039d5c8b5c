// src/lib.rs

//! order-flow: a synchronous, step-based order processing workflow.
//!
//! An `OrderProcessor` runs each order through five named steps:
//!  - `validate_amount`: the total must be strictly positive, otherwise the order is rejected.
//!  - `ensure_connected`: connects the `Store` if it reports being disconnected.
//!  - `save_order`: persists the order through the `Store`.
//!  - `send_confirmation`: notifies the customer through the `Notifier`, only for
//!    totals above the configured threshold (100 by default).
//!  - `mark_processed`: sets `Order::is_processed`.
//!
//! Rejections and collaborator failures both yield `false`. Misuse of the API
//! (a missing order or collaborator) is reported separately as a `ContractViolation`.
//!
//! The steps run on a small synchronous `Pipeline` engine with named steps,
//! skip conditions and `before`/`on`/`after` handler phases.

pub mod collaborators;
pub mod config;
pub mod core;
pub mod error;
pub mod memory;
pub mod order;
pub mod pipeline;
pub mod processor;

// --- Re-exports for the Public API ---

pub use crate::collaborators::{Notifier, Store};
pub use crate::config::ProcessorConfig;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::handler::Handler;
pub use crate::core::step::{SkipCondition, StepDef};
pub use crate::error::{ContractViolation, FlowError, FlowResult};
pub use crate::memory::{MemoryNotifier, MemoryStore, SentConfirmation};
pub use crate::order::{Order, OrderId};
pub use crate::pipeline::Pipeline;
pub use crate::processor::{OrderProcessor, OrderProcessorBuilder};

/*
    Typical use:
    1. Implement `Store` and `Notifier` for your persistence and mail layers
       (or use `MemoryStore` / `MemoryNotifier`).
    2. Build a processor: `OrderProcessor::new(store, notifier)`, or
       `OrderProcessor::builder().store(..).notifier(..).config(..).build()?`.
    3. Call `processor.process(&mut order)`; check the returned bool and
       `order.is_processed`.
*/
