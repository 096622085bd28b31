use std::sync::Arc;

use tracing::warn;

use orderdesk_core::{AccessPolicy, ActionLog, Notifier};

use crate::cancellation::{CancellationChain, CancellationRequest, ChainOutcome};
use crate::ledger::Customer;
use crate::models::Order;

/// Front desk for order intake and cancellation. Logging, notification and
/// the permission gate are injected capabilities the desk delegates to.
pub struct OrderDesk {
    log: Arc<dyn ActionLog>,
    notifier: Arc<dyn Notifier>,
    access: Arc<dyn AccessPolicy>,
    chain: CancellationChain,
}

impl OrderDesk {
    pub fn new(
        log: Arc<dyn ActionLog>,
        notifier: Arc<dyn Notifier>,
        access: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            log,
            notifier,
            access,
            chain: CancellationChain::standard(),
        }
    }

    /// Appends the order to the customer's ledger, then fires the log and
    /// notification side effects.
    pub fn place_order(&self, customer: &mut Customer, order: Order) {
        let order_id = order.order_id();
        customer.place_order(order);
        self.log.log_action(order_id, "order placed");
        self.notifier.send_notification(order_id);
    }

    /// Runs the approval chain, unless the actor lacks permission — then the
    /// chain is never invoked and the request stays untouched.
    pub fn request_cancellation(
        &self,
        actor: &str,
        request: &mut CancellationRequest<'_>,
    ) -> ChainOutcome {
        if !self.access.check_permission(actor) {
            warn!(
                actor,
                order_id = request.order().order_id(),
                "cancellation skipped: permission denied"
            );
            return ChainOutcome::Skipped;
        }
        let outcome = self.chain.process(request);
        self.log
            .log_action(request.order().order_id(), "cancellation reviewed");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, OnlineOrder};
    use chrono::Utc;
    use orderdesk_core::{Address, AllowList, TracingActionLog, TracingNotifier};

    fn desk_allowing(actors: Vec<String>) -> OrderDesk {
        OrderDesk::new(
            Arc::new(TracingActionLog),
            Arc::new(TracingNotifier),
            Arc::new(AllowList::new(actors)),
        )
    }

    fn sample_order() -> Order {
        Order::Online(OnlineOrder::new(
            1,
            100.0,
            "Ivan Ivanov".to_string(),
            Utc::now(),
            "created".to_string(),
            vec![LineItem {
                name: "laptop".to_string(),
                qty: 1,
            }],
            "card".to_string(),
        ))
    }

    fn sample_customer() -> Customer {
        Customer::new(
            "Ivan Ivanov".to_string(),
            "ivan@mail.ru".to_string(),
            "+7 999 123 4567".to_string(),
            Address {
                street: "10 Lenin St".to_string(),
                city: "Moscow".to_string(),
                zip_code: "101000".to_string(),
                country: "Russia".to_string(),
            },
        )
    }

    #[test]
    fn placing_appends_to_the_ledger() {
        let desk = desk_allowing(vec![]);
        let mut customer = sample_customer();
        desk.place_order(&mut customer, sample_order());
        assert_eq!(customer.order_history().len(), 1);
        assert_eq!(customer.order_history()[0].order_id(), 1);
    }

    #[test]
    fn denied_actor_skips_the_chain_entirely() {
        let desk = desk_allowing(vec!["operator".to_string()]);
        let order = sample_order();
        let mut request = CancellationRequest::new(&order, "changed my mind".to_string());

        let outcome = desk.request_cancellation("intern", &mut request);
        assert_eq!(outcome, ChainOutcome::Skipped);
        assert!(!request.is_approved());
    }

    #[test]
    fn permitted_actor_reaches_the_chain() {
        let desk = desk_allowing(vec!["operator".to_string()]);
        let order = sample_order();
        let mut request = CancellationRequest::new(&order, "changed my mind".to_string());

        let outcome = desk.request_cancellation("operator", &mut request);
        assert_eq!(outcome, ChainOutcome::Approved { role: "manager" });
        assert!(request.is_approved());
    }
}
