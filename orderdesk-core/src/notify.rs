/// Fire-and-forget customer notification. Implementations must never fail
/// visibly.
pub trait Notifier: Send + Sync {
    fn send_notification(&self, order_id: u64);
}

/// Emits notifications as tracing events instead of reaching a real channel.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn send_notification(&self, order_id: u64) {
        tracing::info!(order_id, "notification sent");
    }
}
