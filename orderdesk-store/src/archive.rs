use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use orderdesk_order::codec::{self, Record};
use orderdesk_order::factory;
use orderdesk_order::{Order, OrderError};

/// Flat-file archive holding an order ledger as a pretty-printed UTF-8 JSON
/// sequence of records. Non-ASCII text is written literally, never escaped.
pub struct OrderArchive {
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive I/O failed")]
    Io(#[from] std::io::Error),

    #[error("archive is not a valid record sequence")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl OrderArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full record sequence atomically: temp file first, then a
    /// rename over the target.
    pub fn save(&self, orders: &[Order]) -> Result<(), ArchiveError> {
        let records: Vec<Value> = orders
            .iter()
            .map(|order| Value::Object(codec::to_record(order)))
            .collect();
        let body = serde_json::to_string_pretty(&records)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;

        info!(count = orders.len(), path = %self.path.display(), "orders archived");
        Ok(())
    }

    /// Reads the record sequence back into live orders through the factory.
    /// The first malformed record aborts the whole load; no partial batch is
    /// returned.
    pub fn load(&self) -> Result<Vec<Order>, ArchiveError> {
        let body = fs::read_to_string(&self.path)?;
        let records: Vec<Record> = serde_json::from_str(&body)?;
        let orders = records
            .iter()
            .map(factory::order_from_record)
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = orders.len(), path = %self.path.display(), "orders restored");
        Ok(orders)
    }
}
