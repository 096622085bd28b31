/// Fire-and-forget action logging. Implementations must never fail visibly.
pub trait ActionLog: Send + Sync {
    fn log_action(&self, order_id: u64, action: &str);
}

/// Emits order actions as structured tracing events.
pub struct TracingActionLog;

impl ActionLog for TracingActionLog {
    fn log_action(&self, order_id: u64, action: &str) {
        tracing::info!(order_id, action, "order action");
    }
}
