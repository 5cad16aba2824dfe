//! Demo: start the café, place one order that fits the stock and one that
//! does not, then shut down.

use cafe_orders::api::{CafeApi, CreateOrderItemRequest, CreateOrderRequest};
use cafe_orders::config::CafeConfig;
use cafe_orders::lifecycle::{setup_tracing, CafeSystem};
use tracing::{error, info, Instrument};

const ESPRESSO: u32 = 1;
const LATTE: u32 = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CafeConfig::from_env()?;
    info!(mailbox_capacity = config.mailbox_capacity, "Starting cafe");
    let system = CafeSystem::start(&config).await?;
    let api = CafeApi::for_system(&system);

    let menu = api.list_products().await;
    info!(status = menu.status(), body = ?menu.body_json()?, "Menu");

    let john = CreateOrderRequest {
        customer_name: "John".to_string(),
        items: vec![
            CreateOrderItemRequest {
                product_id: ESPRESSO,
                quantity: 2,
            },
            CreateOrderItemRequest {
                product_id: LATTE,
                quantity: 3,
            },
        ],
    };
    let response = api
        .create_order(john)
        .instrument(tracing::info_span!("john"))
        .await;
    info!(
        status = response.status(),
        location = ?response.location(),
        body = ?response.body_json()?,
        "John's order"
    );

    // One more latte than is left.
    let lattes_left = system.product_client.check_stock(LATTE.into()).await?;
    let jane = CreateOrderRequest {
        customer_name: "Jane".to_string(),
        items: vec![CreateOrderItemRequest {
            product_id: LATTE,
            quantity: i64::from(lattes_left) + 1,
        }],
    };
    let response = api
        .create_order(jane)
        .instrument(tracing::info_span!("jane"))
        .await;
    match response.status() {
        400 => info!(body = ?response.body_json()?, "Jane's order was rejected"),
        status => error!(status, "Jane's order should have been rejected"),
    }

    let lattes_left = system.product_client.check_stock(LATTE.into()).await?;
    info!(lattes_left, "Stock after both orders");

    drop(api);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
