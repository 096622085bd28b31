use tracing::debug;

use crate::models::Order;

/// A request to cancel one order. Borrows the order for the lifetime of the
/// review; only the `approved` flag ever changes, and only from inside the
/// chain.
pub struct CancellationRequest<'a> {
    order: &'a Order,
    reason: String,
    approved: bool,
}

impl<'a> CancellationRequest<'a> {
    pub fn new(order: &'a Order, reason: String) -> Self {
        Self {
            order,
            reason,
            approved: false,
        }
    }

    pub fn order(&self) -> &Order {
        self.order
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }
}

/// What a single review step decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
    Escalate,
}

/// One tier of the cancellation approval workflow. `review` is a pure
/// decision over the request's current fields; no step touches the order.
pub trait ReviewStep: Send + Sync {
    fn role(&self) -> &'static str;
    fn review(&self, request: &CancellationRequest<'_>) -> Decision;
}

/// First tier: weeds out requests with no stated reason. Unjustified
/// requests never escalate.
pub struct OperatorReview;

impl ReviewStep for OperatorReview {
    fn role(&self) -> &'static str {
        "operator"
    }

    fn review(&self, request: &CancellationRequest<'_>) -> Decision {
        if request.reason().is_empty() {
            Decision::Reject
        } else {
            Decision::Escalate
        }
    }
}

/// Manager sign-off covers orders priced up to this amount.
const MANAGER_APPROVAL_LIMIT: f64 = 500.0;

/// Second tier: approves low-value cancellations, escalates the rest.
pub struct ManagerReview;

impl ReviewStep for ManagerReview {
    fn role(&self) -> &'static str {
        "manager"
    }

    fn review(&self, request: &CancellationRequest<'_>) -> Decision {
        if request.order().price() <= MANAGER_APPROVAL_LIMIT {
            Decision::Approve
        } else {
            Decision::Escalate
        }
    }
}

/// Terminal authority: approves whatever reaches it, by policy.
pub struct AdminReview;

impl ReviewStep for AdminReview {
    fn role(&self) -> &'static str {
        "admin"
    }

    fn review(&self, _request: &CancellationRequest<'_>) -> Decision {
        Decision::Approve
    }
}

/// How a chain run resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    Approved { role: &'static str },
    Rejected { role: &'static str },
    /// The permission gate stopped the request before any review ran.
    Skipped,
    /// Escalation ran past the last step. The standard chain never produces
    /// this; Admin is terminal.
    Unresolved,
}

/// The review sequence, built once and evaluated front to back by a driver
/// loop. No runtime rewiring.
pub struct CancellationChain {
    steps: Vec<Box<dyn ReviewStep>>,
}

impl CancellationChain {
    /// Operator → Manager → Admin.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                Box::new(OperatorReview),
                Box::new(ManagerReview),
                Box::new(AdminReview),
            ],
        }
    }

    pub fn process(&self, request: &mut CancellationRequest<'_>) -> ChainOutcome {
        for step in &self.steps {
            let decision = step.review(request);
            debug!(
                role = step.role(),
                order_id = request.order().order_id(),
                ?decision,
                "cancellation review"
            );
            match decision {
                Decision::Approve => {
                    request.approved = true;
                    return ChainOutcome::Approved { role: step.role() };
                }
                Decision::Reject => return ChainOutcome::Rejected { role: step.role() },
                Decision::Escalate => continue,
            }
        }
        ChainOutcome::Unresolved
    }
}

impl Default for CancellationChain {
    fn default() -> Self {
        Self::standard()
    }
}
