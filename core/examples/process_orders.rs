// order_flow/examples/process_orders.rs

use order_flow::{FlowError, MemoryNotifier, MemoryStore, Order, OrderProcessor, ProcessorConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FlowError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  info!("--- Order Processing Example ---");

  // ORDER_NOTIFICATION_THRESHOLD (env or .env) overrides the default of 100.
  let config = ProcessorConfig::from_env()?;

  // The store starts disconnected; the first accepted order connects it.
  let store = Arc::new(MemoryStore::new());
  let notifier = Arc::new(MemoryNotifier::new());
  let processor = OrderProcessor::with_config(store.clone(), notifier.clone(), config);

  let mut orders = vec![
    Order::new(1, 0, "zero@example.com"),
    Order::new(2, -5, "negative@example.com"),
    Order::new(3, 10, "small@example.com"),
    Order::new(4, 100, "edge@example.com"),
    Order::new(5, 150, "large@example.com"),
    Order::new(6, 900, ""),
  ];

  for order in orders.iter_mut() {
    let processed = processor.process(order);
    info!(order_id = order.id, total_amount = order.total_amount, processed, "Order handled.");
  }

  info!("Orders in store: {}", store.len());
  for confirmation in notifier.sent() {
    info!(to = %confirmation.to, order_id = confirmation.order_id, "Confirmation sent.");
  }

  let processed: Vec<_> = orders.iter().filter(|o| o.is_processed).map(|o| o.id).collect();
  info!(?processed, "Processed orders.");
  Ok(())
}
