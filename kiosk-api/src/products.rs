use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_catalog::{next_product_number, Product, ProductType, SellingStatus};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_type: Option<ProductType>,
    pub selling_status: Option<SellingStatus>,
    pub name: Option<String>,
    pub price: Option<i32>,
}

impl CreateProductRequest {
    fn validate(self) -> Result<(ProductType, SellingStatus, String, i32), AppError> {
        let product_type = self
            .product_type
            .ok_or_else(|| AppError::ValidationError("product type is required".to_string()))?;
        let selling_status = self
            .selling_status
            .ok_or_else(|| AppError::ValidationError("selling status is required".to_string()))?;
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::ValidationError("product name is required".to_string()))?;
        let price = self
            .price
            .filter(|p| *p > 0)
            .ok_or_else(|| AppError::ValidationError("product price must be positive".to_string()))?;

        Ok((product_type, selling_status, name, price))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: SellingStatus,
    pub name: String,
    pub price: i32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            product_number: product.product_number.clone(),
            product_type: product.product_type,
            selling_status: product.selling_status,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/products/new", post(create_product))
        .route("/api/v1/products/selling", get(list_selling_products))
}

/// POST /api/v1/products/new
/// Register a product; its number is the next in the catalog sequence.
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let (product_type, selling_status, name, price) = req.validate()?;

    let latest = state
        .product_repo
        .find_latest_product_number()
        .await
        .map_err(AppError::storage)?;
    let product_number = next_product_number(latest.as_deref());

    let product = Product::new(product_number, product_type, selling_status, name, price);
    state
        .product_repo
        .create_product(&product)
        .await
        .map_err(AppError::storage)?;

    tracing::info!(product_number = %product.product_number, "product created");
    Ok(Json(ProductResponse::from(&product)))
}

/// GET /api/v1/products/selling
/// Products currently shown to customers.
pub async fn list_selling_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .product_repo
        .list_selling()
        .await
        .map_err(AppError::storage)?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}
