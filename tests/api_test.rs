use cafe_orders::api::{ApiResponse, CafeApi, CreateOrderItemRequest, CreateOrderRequest};
use cafe_orders::config::CafeConfig;
use cafe_orders::lifecycle::CafeSystem;
use serde_json::json;

async fn open_cafe() -> (CafeSystem, CafeApi) {
    let system = CafeSystem::start(&CafeConfig::default())
        .await
        .expect("Failed to start");
    let api = CafeApi::for_system(&system);
    (system, api)
}

fn item(product_id: u32, quantity: i64) -> CreateOrderItemRequest {
    CreateOrderItemRequest {
        product_id,
        quantity,
    }
}

#[tokio::test]
async fn test_menu_lists_seeded_products() {
    let (system, api) = open_cafe().await;

    let response = api.list_products().await;
    assert_eq!(response.status(), 200);
    let body = response.body_json().unwrap().unwrap();
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "name": "Espresso",
            "description": "Strong Italian coffee",
            "price": "2.50",
            "stockQuantity": 100
        })
    );
    assert_eq!(body[5]["name"], "Muffin");
    assert_eq!(body[5]["stockQuantity"], 40);

    drop(api);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_by_id() {
    let (system, api) = open_cafe().await;

    let response = api.get_product(5).await;
    assert_eq!(response.status(), 200);
    let body = response.body_json().unwrap().unwrap();
    assert_eq!(body["name"], "Croissant");
    assert_eq!(body["price"], "3.00");

    let missing = api.get_product(42).await;
    assert_eq!(missing, ApiResponse::NotFound);
    assert_eq!(missing.status(), 404);
    assert_eq!(missing.body_json().unwrap(), None);

    drop(api);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_order_returns_created_with_location() {
    let (system, api) = open_cafe().await;

    let response = api
        .create_order_json(
            r#"{"customerName": "John", "items": [{"productId": 1, "quantity": 2}, {"productId": 3, "quantity": 3}]}"#,
        )
        .await;
    assert_eq!(response.status(), 201);
    assert_eq!(response.location(), Some("/orders/1"));

    let body = response.body_json().unwrap().unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["customerName"], "John");
    assert_eq!(body["totalAmount"], "17.00");
    assert_eq!(body["items"][1]["productName"], "Latte");
    assert_eq!(body["items"][1]["unitPrice"], "4.00");
    assert!(body["orderDate"].is_string());

    let fetched = api.get_order(1).await;
    assert_eq!(fetched.status(), 200);
    assert_eq!(fetched.body_json().unwrap().unwrap(), body);
    assert_eq!(api.get_order(2).await.status(), 404);

    drop(api);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_errors_are_bad_requests() {
    let (system, api) = open_cafe().await;

    let cases = [
        CreateOrderRequest {
            customer_name: "".into(),
            items: vec![item(1, 1)],
        },
        CreateOrderRequest {
            customer_name: "Jane".into(),
            items: vec![],
        },
        CreateOrderRequest {
            customer_name: "Jane".into(),
            items: vec![item(1, 0)],
        },
        CreateOrderRequest {
            customer_name: "Jane".into(),
            items: vec![item(1, -2)],
        },
        CreateOrderRequest {
            customer_name: "Jane".into(),
            items: vec![item(99, 1)],
        },
        CreateOrderRequest {
            customer_name: "Jane".into(),
            items: vec![item(6, 41)],
        },
    ];

    for request in cases {
        let response = api.create_order(request.clone()).await;
        assert_eq!(response.status(), 400, "{request:?} gave {response:?}");
        let body = response.body_json().unwrap().unwrap();
        assert!(body["error"].is_string());
    }

    let response = api
        .create_order(CreateOrderRequest {
            customer_name: "Jane".into(),
            items: vec![item(6, 41)],
        })
        .await;
    assert_eq!(
        response.body_json().unwrap().unwrap(),
        json!({"error": "Insufficient stock for product product_6. Available: 40, Requested: 41"})
    );

    let malformed = api.create_order_json("{\"items\": 3}").await;
    assert_eq!(malformed.status(), 400);

    // Nothing was sold.
    let muffin = api.get_product(6).await.body_json().unwrap().unwrap();
    assert_eq!(muffin["stockQuantity"], 40);

    drop(api);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stopped_storage_is_unavailable() {
    // Actors that never run: their mailboxes are closed.
    let (product_actor, products) = cafe_orders::product_actor::new(1);
    let (order_actor, orders) = cafe_orders::order_actor::new(1);
    drop(product_actor);
    drop(order_actor);
    let api = CafeApi::new(products, orders);

    let response = api
        .create_order(CreateOrderRequest {
            customer_name: "Ken".into(),
            items: vec![item(1, 1)],
        })
        .await;
    assert_eq!(response.status(), 503);
    let body = response.body_json().unwrap().unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Storage temporarily unavailable"));

    assert_eq!(api.list_products().await.status(), 503);
    assert_eq!(api.get_product(1).await.status(), 503);
    assert_eq!(api.get_order(1).await.status(), 503);
}
