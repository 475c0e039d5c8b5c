// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use anyhow::bail;
use order_flow::{FlowError, Notifier, Order, OrderId, OrderProcessor, PipelineControl, Store};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;

// --- Recording collaborators ---

/// One observed collaborator call, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
  IsConnected,
  Connect,
  Save { order_id: OrderId, address: usize },
  SendConfirmation { email: String, order_id: OrderId },
}

pub type Journal = Arc<Mutex<Vec<Call>>>;

pub fn address_of(order: &Order) -> usize {
  order as *const Order as usize
}

#[derive(Debug)]
pub struct MockStore {
  journal: Journal,
  pub connected: Mutex<bool>,
  pub fail_connect: bool,
  pub fail_save: bool,
  pub saved: Mutex<Vec<Order>>,
}

impl MockStore {
  pub fn new(journal: Journal, connected: bool) -> Self {
    Self {
      journal,
      connected: Mutex::new(connected),
      fail_connect: false,
      fail_save: false,
      saved: Mutex::new(Vec::new()),
    }
  }

  pub fn failing_save(mut self) -> Self {
    self.fail_save = true;
    self
  }

  pub fn failing_connect(mut self) -> Self {
    self.fail_connect = true;
    self
  }

  pub fn connect_calls(&self) -> usize {
    self.journal.lock().iter().filter(|c| **c == Call::Connect).count()
  }

  pub fn save_calls(&self) -> usize {
    self
      .journal
      .lock()
      .iter()
      .filter(|c| matches!(c, Call::Save { .. }))
      .count()
  }
}

impl Store for MockStore {
  fn is_connected(&self) -> bool {
    self.journal.lock().push(Call::IsConnected);
    *self.connected.lock()
  }

  fn connect(&self) -> anyhow::Result<()> {
    self.journal.lock().push(Call::Connect);
    if self.fail_connect {
      bail!("connection refused");
    }
    *self.connected.lock() = true;
    Ok(())
  }

  fn save(&self, order: &Order) -> anyhow::Result<()> {
    self.journal.lock().push(Call::Save {
      order_id: order.id,
      address: address_of(order),
    });
    if self.fail_save {
      bail!("database unavailable");
    }
    self.saved.lock().push(order.clone());
    Ok(())
  }
}

#[derive(Debug)]
pub struct MockNotifier {
  journal: Journal,
  pub fail_send: bool,
}

impl MockNotifier {
  pub fn new(journal: Journal) -> Self {
    Self {
      journal,
      fail_send: false,
    }
  }

  pub fn failing(mut self) -> Self {
    self.fail_send = true;
    self
  }

  pub fn confirmations(&self) -> Vec<(String, OrderId)> {
    self
      .journal
      .lock()
      .iter()
      .filter_map(|c| match c {
        Call::SendConfirmation { email, order_id } => Some((email.clone(), *order_id)),
        _ => None,
      })
      .collect()
  }
}

impl Notifier for MockNotifier {
  fn send_order_confirmation(&self, email: &str, order_id: OrderId) -> anyhow::Result<()> {
    self.journal.lock().push(Call::SendConfirmation {
      email: email.to_string(),
      order_id,
    });
    if self.fail_send {
      bail!("smtp relay rejected message");
    }
    Ok(())
  }
}

/// Mocks sharing one journal, plus a processor wired to them.
pub struct Harness {
  pub journal: Journal,
  pub store: Arc<MockStore>,
  pub notifier: Arc<MockNotifier>,
  pub processor: OrderProcessor,
}

impl Harness {
  pub fn connected() -> Self {
    Self::with(|journal| MockStore::new(journal, true), MockNotifier::new)
  }

  pub fn disconnected() -> Self {
    Self::with(|journal| MockStore::new(journal, false), MockNotifier::new)
  }

  pub fn with(store: impl FnOnce(Journal) -> MockStore, notifier: impl FnOnce(Journal) -> MockNotifier) -> Self {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::new(store(journal.clone()));
    let notifier = Arc::new(notifier(journal.clone()));
    let processor = OrderProcessor::new(store.clone(), notifier.clone());
    Self {
      journal,
      store,
      notifier,
      processor,
    }
  }

  pub fn calls(&self) -> Vec<Call> {
    self.journal.lock().clone()
  }
}

// --- Pipeline engine fixtures ---

#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Flow framework error: {0}")]
  Flow(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    // Debug form keeps the variant name for assertions.
    TestError::Flow(format!("{:?}", fe))
  }
}

pub fn create_simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> impl Fn(&mut TestContext) -> Result<PipelineControl, TestError> + Send + Sync + 'static {
  move |ctx: &mut TestContext| {
    ctx.counter += 1;
    ctx.message.push_str(message_to_append);
    ctx.steps_executed.push(step_name.to_string());
    tracing::debug!(target: "test_handlers", step = %step_name, "executed, counter: {}, message: '{}'", ctx.counter, ctx.message);
    if ctx.should_stop_at.as_deref() == Some(step_name) {
      return Ok(PipelineControl::Stop);
    }
    Ok(PipelineControl::Continue)
  }
}

pub fn create_failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(&mut TestContext) -> Result<PipelineControl, TestError> + Send + Sync + 'static {
  move |ctx: &mut TestContext| {
    ctx.steps_executed.push(step_name.to_string());
    tracing::warn!(target: "test_handlers", step = %step_name, "failing with: '{}'", error_message);
    Err(TestError::Handler(error_message.to_string()))
  }
}

// --- Helper for Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
