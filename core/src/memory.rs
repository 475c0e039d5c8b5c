// order_flow/src/memory.rs

//! In-memory `Store` and `Notifier` implementations, used by the demo and
//! benchmarks and handy when embedding the processor in tests.

use crate::collaborators::{Notifier, Store};
use crate::order::{Order, OrderId};
use anyhow::bail;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Order table keyed by id. Saving the same id twice overwrites the first copy.
#[derive(Debug, Default)]
pub struct MemoryStore {
  connected: AtomicBool,
  orders: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryStore {
  /// A store that starts disconnected.
  pub fn new() -> Self {
    Self::default()
  }

  /// A store that starts connected.
  pub fn connected() -> Self {
    let store = Self::new();
    store.connected.store(true, Ordering::SeqCst);
    store
  }

  pub fn disconnect(&self) {
    self.connected.store(false, Ordering::SeqCst);
  }

  pub fn get(&self, id: OrderId) -> Option<Order> {
    self.orders.read().get(&id).cloned()
  }

  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }
}

impl Store for MemoryStore {
  fn is_connected(&self) -> bool {
    self.connected.load(Ordering::SeqCst)
  }

  fn connect(&self) -> anyhow::Result<()> {
    self.connected.store(true, Ordering::SeqCst);
    debug!("Memory store connected.");
    Ok(())
  }

  fn save(&self, order: &Order) -> anyhow::Result<()> {
    if !self.is_connected() {
      bail!("memory store is not connected");
    }
    self.orders.write().insert(order.id, order.clone());
    debug!(order_id = order.id, "Order saved to memory store.");
    Ok(())
  }
}

/// A confirmation accepted by `MemoryNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentConfirmation {
  pub to: String,
  pub order_id: OrderId,
}

/// Records confirmations instead of delivering them.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
  sent: Mutex<Vec<SentConfirmation>>,
}

impl MemoryNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  /// Confirmations sent so far, oldest first.
  pub fn sent(&self) -> Vec<SentConfirmation> {
    self.sent.lock().clone()
  }
}

impl Notifier for MemoryNotifier {
  fn send_order_confirmation(&self, email: &str, order_id: OrderId) -> anyhow::Result<()> {
    if email.trim().is_empty() {
      bail!("no recipient address for order {}", order_id);
    }
    info!(to = %email, order_id, "Order confirmation recorded.");
    self.sent.lock().push(SentConfirmation {
      to: email.to_string(),
      order_id,
    });
    Ok(())
  }
}
