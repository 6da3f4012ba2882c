use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_order::{assemble, Order};

use crate::error::AppError;
use crate::products::ProductResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub product_numbers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Assigned by the repository on save.
    pub id: Option<Uuid>,
    pub total_price: i32,
    pub registered_date_time: DateTime<Utc>,
    pub products: Vec<ProductResponse>,
}

impl OrderResponse {
    /// Pure projection of the aggregate. The product list keeps the
    /// aggregate's line sequence exactly, duplicates included.
    pub fn of(order: &Order) -> Self {
        Self {
            id: order.id(),
            total_price: order.total_price(),
            registered_date_time: order.registered_at(),
            products: order
                .order_products()
                .iter()
                .map(|line| ProductResponse::from(line.product()))
                .collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/orders/new", post(create_order))
        .route("/api/v1/orders/{id}", get(get_order))
}

/// POST /api/v1/orders/new
/// Resolve the requested product numbers against the catalog, persist the
/// priced order, and return its projection.
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    if req.product_numbers.is_empty() {
        return Err(AppError::ValidationError(
            "product numbers must not be empty".to_string(),
        ));
    }

    // Taken once here so the core stays deterministic under test.
    let registered_at = Utc::now();

    let order = assemble(&req.product_numbers, registered_at, state.product_repo.as_ref())
        .await
        .map_err(AppError::from_order)?;

    let saved = state
        .order_repo
        .save(order)
        .await
        .map_err(AppError::storage)?;

    tracing::info!(order_id = ?saved.id(), total_price = saved.total_price(), "order created");
    Ok(Json(OrderResponse::of(&saved)))
}

/// GET /api/v1/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state
        .order_repo
        .find_by_id(order_id)
        .await
        .map_err(AppError::storage)?
        .ok_or_else(|| AppError::NotFoundError(format!("order not found: {order_id}")))?;

    Ok(Json(OrderResponse::of(&order)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_catalog::{Product, ProductType, SellingStatus};

    fn product(number: &str, price: i32) -> Product {
        Product::new(
            number.to_string(),
            ProductType::Handmade,
            SellingStatus::Selling,
            format!("product {number}"),
            price,
        )
    }

    #[test]
    fn test_projection_preserves_line_sequence() {
        let a = product("001", 4000);
        let b = product("002", 4500);
        let order = Order::create(vec![a.clone(), b, a], Utc::now()).with_id(Uuid::new_v4());

        let response = OrderResponse::of(&order);

        let numbers: Vec<&str> = response
            .products
            .iter()
            .map(|p| p.product_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["001", "002", "001"]);
        assert_eq!(response.total_price, 12500);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let order = Order::create(vec![product("001", 4000)], Utc::now()).with_id(Uuid::new_v4());

        let first = serde_json::to_vec(&OrderResponse::of(&order)).unwrap();
        let second = serde_json::to_vec(&OrderResponse::of(&order)).unwrap();
        assert_eq!(first, second);
    }
}
