// order_flow/src/collaborators.rs

//! Capability traits for the processor's external collaborators.
//!
//! Implementations own their connection handling, retries and delivery
//! mechanics. The processor only calls these methods and treats any `Err` as a
//! failed run. Collaborators are shared behind `Arc`, so methods take `&self`
//! and implementations use interior mutability where they need state.

use crate::order::{Order, OrderId};

/// Persistence collaborator.
pub trait Store: Send + Sync {
  /// Current connection state.
  fn is_connected(&self) -> bool;

  /// Establishes the connection.
  fn connect(&self) -> anyhow::Result<()>;

  /// Persists `order`.
  fn save(&self, order: &Order) -> anyhow::Result<()>;
}

/// Notification collaborator.
pub trait Notifier: Send + Sync {
  /// Sends an order confirmation to `email` for `order_id`.
  fn send_order_confirmation(&self, email: &str, order_id: OrderId) -> anyhow::Result<()>;
}
