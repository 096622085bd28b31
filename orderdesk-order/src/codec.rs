use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::models::{LineItem, OnlineOrder, Order, PhoneOrder, StoreOrder};

/// A stored order record: flat mapping from field name to primitive value.
pub type Record = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field {field} is not a {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("malformed timestamp in {field}")]
    MalformedTimestamp {
        field: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

/// Flattens an order into its stored record. The `type` tag always matches
/// the live variant and the timestamp is rendered as RFC 3339.
pub fn to_record(order: &Order) -> Record {
    let mut record = Record::new();
    record.insert("type".to_string(), Value::from(order.type_tag()));
    record.insert("order_id".to_string(), Value::from(order.order_id()));
    record.insert("price".to_string(), Value::from(order.price()));
    record.insert("customer".to_string(), Value::from(order.customer()));
    record.insert(
        "order_date".to_string(),
        Value::from(order.order_date().to_rfc3339()),
    );
    record.insert("status".to_string(), Value::from(order.status()));

    match order {
        Order::Online(o) => {
            let items: Vec<Value> = o
                .items()
                .iter()
                .map(|item| json!({ "name": item.name, "qty": item.qty }))
                .collect();
            record.insert("items".to_string(), Value::from(items));
            record.insert(
                "payment_method".to_string(),
                Value::from(o.payment_method()),
            );
        }
        Order::Phone(o) => {
            record.insert("operator_name".to_string(), Value::from(o.operator_name()));
        }
        Order::Store(o) => {
            record.insert(
                "store_location".to_string(),
                Value::from(o.store_location()),
            );
        }
    }
    record
}

pub fn online_from_record(record: &Record) -> Result<Order, CodecError> {
    Ok(Order::Online(OnlineOrder::new(
        require_u64(record, "order_id")?,
        require_f64(record, "price")?,
        require_str(record, "customer")?.to_string(),
        require_timestamp(record, "order_date")?,
        require_str(record, "status")?.to_string(),
        parse_items(record)?,
        require_str(record, "payment_method")?.to_string(),
    )))
}

pub fn phone_from_record(record: &Record) -> Result<Order, CodecError> {
    Ok(Order::Phone(PhoneOrder::new(
        require_u64(record, "order_id")?,
        require_f64(record, "price")?,
        require_str(record, "customer")?.to_string(),
        require_timestamp(record, "order_date")?,
        require_str(record, "status")?.to_string(),
        require_str(record, "operator_name")?.to_string(),
    )))
}

pub fn store_from_record(record: &Record) -> Result<Order, CodecError> {
    Ok(Order::Store(StoreOrder::new(
        require_u64(record, "order_id")?,
        require_f64(record, "price")?,
        require_str(record, "customer")?.to_string(),
        require_timestamp(record, "order_date")?,
        require_str(record, "status")?.to_string(),
        require_str(record, "store_location")?.to_string(),
    )))
}

fn require<'a>(record: &'a Record, field: &'static str) -> Result<&'a Value, CodecError> {
    record.get(field).ok_or(CodecError::MissingField(field))
}

pub(crate) fn require_str<'a>(
    record: &'a Record,
    field: &'static str,
) -> Result<&'a str, CodecError> {
    require(record, field)?.as_str().ok_or(CodecError::InvalidField {
        field,
        expected: "string",
    })
}

fn require_u64(record: &Record, field: &'static str) -> Result<u64, CodecError> {
    require(record, field)?.as_u64().ok_or(CodecError::InvalidField {
        field,
        expected: "unsigned integer",
    })
}

fn require_f64(record: &Record, field: &'static str) -> Result<f64, CodecError> {
    require(record, field)?.as_f64().ok_or(CodecError::InvalidField {
        field,
        expected: "number",
    })
}

fn require_timestamp(record: &Record, field: &'static str) -> Result<DateTime<Utc>, CodecError> {
    let raw = require_str(record, field)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| CodecError::MalformedTimestamp { field, source })
}

fn parse_items(record: &Record) -> Result<Vec<LineItem>, CodecError> {
    let raw = require(record, "items")?
        .as_array()
        .ok_or(CodecError::InvalidField {
            field: "items",
            expected: "array",
        })?;
    raw.iter()
        .map(|entry| {
            let entry = entry.as_object().ok_or(CodecError::InvalidField {
                field: "items",
                expected: "array of objects",
            })?;
            Ok(LineItem {
                name: require_str(entry, "name")?.to_string(),
                qty: require_u64(entry, "qty")?,
            })
        })
        .collect()
}
