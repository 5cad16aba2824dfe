use cafe_orders::lifecycle::CafeSystem;
use cafe_orders::model::{OrderLineRequest, ProductCreate, ProductId};
use cafe_orders::order_actor::OrderError;
use rust_decimal_macros::dec;

const CROISSANT: ProductId = ProductId(1);

async fn bakery(croissants: u32) -> CafeSystem {
    let system = CafeSystem::new(4);
    system
        .seed(&[ProductCreate::new(
            "Croissant",
            "Buttery French pastry",
            dec!(3.00),
            croissants,
        )])
        .await
        .unwrap();
    system
}

/// Ten customers race for nine croissants from separate tasks.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_last_unit_is_sold_once() {
    let system = bakery(9).await;

    let tasks: Vec<_> = (0..10)
        .map(|n| {
            let orders = system.order_client.clone();
            tokio::spawn(async move {
                orders
                    .create_order(&format!("customer {n}"), vec![OrderLineRequest::new(CROISSANT, 1)])
                    .await
            })
        })
        .collect();

    let mut placed = 0;
    let mut refused = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(order) => {
                assert_eq!(order.total_amount, dec!(3.00));
                placed += 1;
            }
            Err(e) => refused.push(e),
        }
    }

    assert_eq!(placed, 9);
    assert_eq!(
        refused,
        vec![OrderError::InsufficientStock {
            product_id: CROISSANT,
            available: 0,
            requested: 1
        }]
    );
    assert_eq!(system.product_client.check_stock(CROISSANT).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

/// Multi-unit orders racing: stock never goes negative and every unit sold
/// belongs to exactly one stored order.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_stock_matches_stored_orders() {
    let system = bakery(50).await;

    let tasks: Vec<_> = (1..=12)
        .map(|quantity| {
            let orders = system.order_client.clone();
            tokio::spawn(async move {
                orders
                    .create_order("regular", vec![OrderLineRequest::new(CROISSANT, quantity)])
                    .await
            })
        })
        .collect();

    let mut sold = 0;
    for task in tasks {
        if let Ok(order) = task.await.unwrap() {
            sold += order.items[0].quantity;
        }
    }

    let left = system.product_client.check_stock(CROISSANT).await.unwrap();
    assert_eq!(left + sold, 50);

    system.shutdown().await.unwrap();
}

/// A caller that gives up after sending still gets its order applied as a whole.
#[tokio::test]
async fn test_abandoned_request_still_commits_whole() {
    let system = bakery(5).await;

    let orders = system.order_client.clone();
    let abandoned = tokio::spawn(async move {
        orders
            .create_order("impatient", vec![OrderLineRequest::new(CROISSANT, 2)])
            .await
    });
    tokio::task::yield_now().await;
    abandoned.abort();
    let _ = abandoned.await;

    // Queued behind the create, if the create was sent at all.
    let stored = system.order_client.get_order(1.into()).await.unwrap();
    let left = system.product_client.check_stock(CROISSANT).await.unwrap();
    match stored {
        Some(order) => {
            assert_eq!(order.items[0].quantity, 2);
            assert_eq!(left, 3);
        }
        None => assert_eq!(left, 5),
    }

    system.shutdown().await.unwrap();
}
