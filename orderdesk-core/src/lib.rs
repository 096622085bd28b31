pub mod access;
pub mod address;
pub mod log;
pub mod notify;

pub use access::{AccessPolicy, AllowAll, AllowList};
pub use address::Address;
pub use log::{ActionLog, TracingActionLog};
pub use notify::{Notifier, TracingNotifier};
