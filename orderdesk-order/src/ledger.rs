use orderdesk_core::Address;

use crate::models::Order;

/// A customer and their order ledger. The history is append-only and keeps
/// insertion order; nothing is deduplicated or removed.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    history: Vec<Order>,
}

impl Customer {
    pub fn new(name: String, email: String, phone: String, address: Address) -> Self {
        Self {
            name,
            email,
            phone,
            address,
            history: Vec::new(),
        }
    }

    pub fn place_order(&mut self, order: Order) {
        self.history.push(order);
    }

    pub fn order_history(&self) -> &[Order] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreOrder;
    use chrono::Utc;

    fn store_order(order_id: u64) -> Order {
        Order::Store(StoreOrder::new(
            order_id,
            50.0,
            "Ivan Ivanov".to_string(),
            Utc::now(),
            "created".to_string(),
            "Main St 5".to_string(),
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
    fn history_preserves_insertion_order() {
        let mut customer = sample_customer();
        customer.place_order(store_order(1));
        customer.place_order(store_order(2));
        customer.place_order(store_order(3));

        let ids: Vec<u64> = customer
            .order_history()
            .iter()
            .map(Order::order_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn history_starts_empty() {
        assert!(sample_customer().order_history().is_empty());
    }
}
