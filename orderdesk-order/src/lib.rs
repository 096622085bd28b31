pub mod cancellation;
pub mod codec;
pub mod desk;
pub mod factory;
pub mod ledger;
pub mod models;

pub use cancellation::{CancellationChain, CancellationRequest, ChainOutcome};
pub use desk::OrderDesk;
pub use ledger::Customer;
pub use models::{LineItem, OnlineOrder, Order, PhoneOrder, StoreOrder};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("unknown order type: {0}")]
    InvalidOrderType(String),

    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}
