//! # Request Boundary
//!
//! The HTTP-shaped contract of the café backend, without an HTTP server.
//! Each handler takes the decoded request, calls the typed clients and
//! returns an [`ApiResponse`] that knows its status code and JSON body.
//! A web framework only has to route to these handlers and write the
//! response out.
//!
//! | Handler | Success | Failure |
//! |---|---|---|
//! | [`CafeApi::list_products`] | 200 | 503 |
//! | [`CafeApi::get_product`] | 200 | 404, 503 |
//! | [`CafeApi::create_order`] | 201 + `/orders/{id}` | 400 `{"error": ...}`, 503 |
//! | [`CafeApi::get_order`] | 200 | 404, 503 |

use crate::clients::{ActorClient, OrderClient, ProductClient};
use crate::lifecycle::CafeSystem;
use crate::model::{Order, OrderId, OrderLineRequest, Product, ProductId};
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Body of an order creation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<CreateOrderItemRequest>,
}

/// One requested line. The quantity is signed so that negative values are
/// rejected as invalid requests rather than as unparsable JSON.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub product_id: u32,
    pub quantity: i64,
}

impl CreateOrderItemRequest {
    fn to_line(self) -> Result<OrderLineRequest, OrderError> {
        let product_id = ProductId(self.product_id);
        // Zero passes through and is rejected in line order with the rest.
        if self.quantity < 0 {
            return Err(OrderError::InvalidRequest(format!(
                "quantity for {product_id} must be positive"
            )));
        }
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            OrderError::InvalidRequest(format!("quantity for {product_id} is too large"))
        })?;
        Ok(OrderLineRequest::new(product_id, quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// A handler's outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// 200 with the value as body.
    Ok(T),
    /// 201 with a `Location` header.
    Created { location: String, body: T },
    /// 404 with no body.
    NotFound,
    /// 400: the request can never succeed as sent.
    BadRequest(ErrorBody),
    /// 503: storage could not be reached; retrying may work.
    Unavailable(ErrorBody),
}

impl<T: Serialize> ApiResponse<T> {
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Ok(_) => 200,
            ApiResponse::Created { .. } => 201,
            ApiResponse::NotFound => 404,
            ApiResponse::BadRequest(_) => 400,
            ApiResponse::Unavailable(_) => 503,
        }
    }

    /// The value of the `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            ApiResponse::Created { location, .. } => Some(location),
            _ => None,
        }
    }

    /// The JSON body, or `None` for a bodiless response.
    pub fn body_json(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        match self {
            ApiResponse::Ok(body) | ApiResponse::Created { body, .. } => {
                serde_json::to_value(body).map(Some)
            }
            ApiResponse::NotFound => Ok(None),
            ApiResponse::BadRequest(body) | ApiResponse::Unavailable(body) => {
                serde_json::to_value(body).map(Some)
            }
        }
    }

    fn from_order_error(e: OrderError) -> Self {
        if e.is_client_error() {
            ApiResponse::BadRequest(ErrorBody::new(e))
        } else {
            warn!(error = %e, "Storage unavailable");
            ApiResponse::Unavailable(ErrorBody::new(e))
        }
    }

    fn found(result: Result<Option<T>, impl std::fmt::Display>) -> Self {
        match result {
            Ok(Some(value)) => ApiResponse::Ok(value),
            Ok(None) => ApiResponse::NotFound,
            Err(e) => {
                warn!(error = %e, "Storage unavailable");
                ApiResponse::Unavailable(ErrorBody::new(e))
            }
        }
    }
}

/// Handlers for the four public operations.
#[derive(Clone)]
pub struct CafeApi {
    products: ProductClient,
    orders: OrderClient,
}

impl CafeApi {
    pub fn new(products: ProductClient, orders: OrderClient) -> Self {
        Self { products, orders }
    }

    /// Clones the system's clients. Drop the api before `CafeSystem::shutdown`,
    /// which waits until every client is gone.
    pub fn for_system(system: &CafeSystem) -> Self {
        Self::new(system.product_client.clone(), system.order_client.clone())
    }

    /// `GET /products`
    pub async fn list_products(&self) -> ApiResponse<Vec<Product>> {
        match self.products.list_products().await {
            Ok(products) => ApiResponse::Ok(products),
            Err(e) => {
                warn!(error = %e, "Storage unavailable");
                ApiResponse::Unavailable(ErrorBody::new(e))
            }
        }
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: u32) -> ApiResponse<Product> {
        ApiResponse::found(self.products.get(ProductId(id)).await)
    }

    /// `POST /orders`
    #[instrument(skip(self, request), fields(customer = %request.customer_name))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> ApiResponse<Order> {
        let lines = match request
            .items
            .into_iter()
            .map(CreateOrderItemRequest::to_line)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(lines) => lines,
            Err(e) => return ApiResponse::from_order_error(e),
        };

        match self.orders.create_order(&request.customer_name, lines).await {
            Ok(order) => ApiResponse::Created {
                location: format!("/orders/{}", order.id.0),
                body: order,
            },
            Err(e) => ApiResponse::from_order_error(e),
        }
    }

    /// `POST /orders` with a raw JSON body.
    pub async fn create_order_json(&self, body: &str) -> ApiResponse<Order> {
        match serde_json::from_str::<CreateOrderRequest>(body) {
            Ok(request) => self.create_order(request).await,
            Err(e) => ApiResponse::BadRequest(ErrorBody::new(format!("Malformed request body: {e}"))),
        }
    }

    /// `GET /orders/{id}`
    pub async fn get_order(&self, id: u32) -> ApiResponse<Order> {
        ApiResponse::found(self.orders.get_order(OrderId(id)).await)
    }
}
