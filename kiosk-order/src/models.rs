use chrono::{DateTime, Utc};
use kiosk_catalog::Product;
use serde::Serialize;
use uuid::Uuid;

/// One order line. Owns a snapshot of the resolved product, so later catalog
/// changes never alter an existing order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderProduct {
    product: Product,
}

impl OrderProduct {
    pub fn new(product: Product) -> Self {
        Self { product }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn price(&self) -> i32 {
        self.product.price
    }
}

/// The record of what was ordered, when, and at what total. Composition and
/// total are fixed at construction; there are no setters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Order {
    id: Option<Uuid>,
    registered_at: DateTime<Utc>,
    order_products: Vec<OrderProduct>,
    total_price: i32,
}

impl Order {
    /// Build an order from resolved products, in the given sequence.
    pub fn create(products: Vec<Product>, registered_at: DateTime<Utc>) -> Self {
        let order_products: Vec<OrderProduct> =
            products.into_iter().map(OrderProduct::new).collect();
        let total_price = order_products.iter().map(OrderProduct::price).sum();
        Self {
            id: None,
            registered_at,
            order_products,
            total_price,
        }
    }

    /// Rebuild a persisted order from its stored lines. The total is
    /// recomputed from the lines rather than trusted from storage.
    pub fn restore(
        id: Uuid,
        products: Vec<Product>,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self::create(products, registered_at).with_id(id)
    }

    /// Attach the persistence identifier assigned on save.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn order_products(&self) -> &[OrderProduct] {
        &self.order_products
    }

    pub fn total_price(&self) -> i32 {
        self.total_price
    }
}
