use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orderdesk_core::{Address, AllowAll, TracingActionLog, TracingNotifier};
use orderdesk_order::cancellation::CancellationRequest;
use orderdesk_order::{Customer, LineItem, OnlineOrder, Order, OrderDesk};
use orderdesk_store::app_config::Config;
use orderdesk_store::OrderArchive;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(path = %config.archive.path, "using order archive");

    let mut customer = Customer::new(
        "Ivan Ivanov".to_string(),
        "ivan@mail.ru".to_string(),
        "+7 999 123 4567".to_string(),
        Address {
            street: "10 Lenin St".to_string(),
            city: "Moscow".to_string(),
            zip_code: "101000".to_string(),
            country: "Russia".to_string(),
        },
    );

    let desk = OrderDesk::new(
        Arc::new(TracingActionLog),
        Arc::new(TracingNotifier),
        Arc::new(AllowAll),
    );

    let order = Order::Online(OnlineOrder::new(
        1,
        100.0,
        customer.name.clone(),
        Utc::now(),
        "created".to_string(),
        vec![LineItem {
            name: "laptop".to_string(),
            qty: 1,
        }],
        "card".to_string(),
    ));

    desk.place_order(&mut customer, order.clone());
    println!("{}", order.track_status());

    let mut request = CancellationRequest::new(&order, "changed my mind".to_string());
    let outcome = desk.request_cancellation("operator", &mut request);
    println!(
        "cancellation outcome: {:?} (approved: {})",
        outcome,
        request.is_approved()
    );

    let archive = OrderArchive::new(&config.archive.path);
    archive
        .save(customer.order_history())
        .context("failed to archive orders")?;

    let restored = archive.load().context("failed to restore orders")?;
    println!("restored orders:");
    for order in &restored {
        println!("  {}", order.track_status());
    }

    Ok(())
}
