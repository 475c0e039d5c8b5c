// order_flow/src/order.rs

//! The `Order` record handed to the processor.

/// Caller-assigned order identifier. Opaque to the workflow.
pub type OrderId = u64;

/// A customer purchase submitted for processing.
///
/// The caller owns the order. Processing mutates only `is_processed`, and only
/// as the last step of a fully successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
  pub id: OrderId,
  /// Signed amount; must be strictly positive for processing to proceed.
  pub total_amount: i64,
  pub customer_email: String,
  pub is_processed: bool,
}

impl Order {
  pub fn new(id: OrderId, total_amount: i64, customer_email: impl Into<String>) -> Self {
    Self {
      id,
      total_amount,
      customer_email: customer_email.into(),
      is_processed: false,
    }
  }
}
