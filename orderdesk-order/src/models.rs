use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One purchased line on an online order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub qty: u64,
}

/// An order placed through the web storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineOrder {
    pub(crate) order_id: u64,
    pub(crate) price: f64,
    pub(crate) customer: String,
    pub(crate) order_date: DateTime<Utc>,
    pub(crate) status: String,
    pub(crate) items: Vec<LineItem>,
    pub(crate) payment_method: String,
}

impl OnlineOrder {
    pub fn new(
        order_id: u64,
        price: f64,
        customer: String,
        order_date: DateTime<Utc>,
        status: String,
        items: Vec<LineItem>,
        payment_method: String,
    ) -> Self {
        Self {
            order_id,
            price,
            customer,
            order_date,
            status,
            items,
            payment_method,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }
}

/// An order taken over the phone by a call-center operator.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneOrder {
    pub(crate) order_id: u64,
    pub(crate) price: f64,
    pub(crate) customer: String,
    pub(crate) order_date: DateTime<Utc>,
    pub(crate) status: String,
    pub(crate) operator_name: String,
}

impl PhoneOrder {
    pub fn new(
        order_id: u64,
        price: f64,
        customer: String,
        order_date: DateTime<Utc>,
        status: String,
        operator_name: String,
    ) -> Self {
        Self {
            order_id,
            price,
            customer,
            order_date,
            status,
            operator_name,
        }
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }
}

/// An order rung up at a physical store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOrder {
    pub(crate) order_id: u64,
    pub(crate) price: f64,
    pub(crate) customer: String,
    pub(crate) order_date: DateTime<Utc>,
    pub(crate) status: String,
    pub(crate) store_location: String,
}

impl StoreOrder {
    pub fn new(
        order_id: u64,
        price: f64,
        customer: String,
        order_date: DateTime<Utc>,
        status: String,
        store_location: String,
    ) -> Self {
        Self {
            order_id,
            price,
            customer,
            order_date,
            status,
            store_location,
        }
    }

    pub fn store_location(&self) -> &str {
        &self.store_location
    }
}

/// The closed set of order origins. Reconstruction-by-tag lives in
/// [`crate::factory`]; adding a kind here is a code change on purpose,
/// since cancellation and display logic are variant-specific.
#[derive(Debug, Clone, PartialEq)]
pub enum Order {
    Online(OnlineOrder),
    Phone(PhoneOrder),
    Store(StoreOrder),
}

impl Order {
    /// Caller-assigned identifier, immutable after construction.
    pub fn order_id(&self) -> u64 {
        match self {
            Order::Online(o) => o.order_id,
            Order::Phone(o) => o.order_id,
            Order::Store(o) => o.order_id,
        }
    }

    /// Immutable after construction; no adjustment operation exists.
    pub fn price(&self) -> f64 {
        match self {
            Order::Online(o) => o.price,
            Order::Phone(o) => o.price,
            Order::Store(o) => o.price,
        }
    }

    pub fn customer(&self) -> &str {
        match self {
            Order::Online(o) => &o.customer,
            Order::Phone(o) => &o.customer,
            Order::Store(o) => &o.customer,
        }
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        match self {
            Order::Online(o) => o.order_date,
            Order::Phone(o) => o.order_date,
            Order::Store(o) => o.order_date,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            Order::Online(o) => &o.status,
            Order::Phone(o) => &o.status,
            Order::Store(o) => &o.status,
        }
    }

    /// The stored-record discriminant, derived from the live variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Order::Online(_) => "online",
            Order::Phone(_) => "phone",
            Order::Store(_) => "store",
        }
    }

    /// Human-readable status line with variant-specific wording.
    pub fn track_status(&self) -> String {
        match self {
            Order::Online(o) => {
                format!("Online order {} is currently '{}'", o.order_id, o.status)
            }
            Order::Phone(o) => {
                format!("Phone order {} is currently '{}'", o.order_id, o.status)
            }
            Order::Store(o) => {
                format!("Store order {} is currently '{}'", o.order_id, o.status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_phone_order() -> Order {
        Order::Phone(PhoneOrder::new(
            7,
            250.0,
            "Anna Petrova".to_string(),
            Utc::now(),
            "confirmed".to_string(),
            "Boris".to_string(),
        ))
    }

    #[test]
    fn track_status_embeds_id_and_status() {
        let order = sample_phone_order();
        let line = order.track_status();
        assert!(line.contains('7'));
        assert!(line.contains("confirmed"));
        assert!(line.starts_with("Phone order"));
    }

    #[test]
    fn track_status_wording_differs_per_variant() {
        let online = Order::Online(OnlineOrder::new(
            1,
            100.0,
            "Ivan".to_string(),
            Utc::now(),
            "created".to_string(),
            vec![],
            "card".to_string(),
        ));
        let store = Order::Store(StoreOrder::new(
            2,
            100.0,
            "Ivan".to_string(),
            Utc::now(),
            "created".to_string(),
            "Main St 5".to_string(),
        ));
        assert!(online.track_status().starts_with("Online order"));
        assert!(store.track_status().starts_with("Store order"));
    }

    #[test]
    fn type_tag_matches_variant() {
        assert_eq!(sample_phone_order().type_tag(), "phone");
    }
}
