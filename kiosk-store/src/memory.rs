//! In-memory repositories. Used by API tests and as a stand-in where no
//! database is available.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use kiosk_catalog::{Product, ProductRepository, RepositoryError};
use kiosk_order::{Order, OrderRepository};

#[derive(Default)]
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create_product(&self, product: &Product) -> Result<(), RepositoryError> {
        self.products.write().await.push(product.clone());
        Ok(())
    }

    async fn find_all_by_product_numbers(
        &self,
        numbers: &[String],
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .filter(|p| numbers.contains(&p.product_number))
            .cloned()
            .collect())
    }

    async fn find_latest_product_number(&self) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .map(|p| p.product_number.clone())
            .max())
    }

    async fn list_selling(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut selling: Vec<Product> = self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.selling_status.is_displayed())
            .cloned()
            .collect();
        selling.sort_by(|a, b| a.product_number.cmp(&b.product_number));
        Ok(selling)
    }
}

#[derive(Default)]
pub struct MemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<Order, RepositoryError> {
        let id = Uuid::new_v4();
        let saved = order.with_id(id);
        self.orders.write().await.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kiosk_catalog::{ProductType, SellingStatus};

    fn product(number: &str, status: SellingStatus, price: i32) -> Product {
        Product::new(
            number.to_string(),
            ProductType::Handmade,
            status,
            format!("product {number}"),
            price,
        )
    }

    #[tokio::test]
    async fn test_latest_product_number() {
        let repo = MemoryProductRepository::with_products(vec![
            product("002", SellingStatus::Selling, 4500),
            product("001", SellingStatus::Selling, 4000),
        ]);
        assert_eq!(
            repo.find_latest_product_number().await.unwrap(),
            Some("002".to_string())
        );

        let empty = MemoryProductRepository::new();
        assert_eq!(empty.find_latest_product_number().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_selling_filters_and_sorts() {
        let repo = MemoryProductRepository::with_products(vec![
            product("003", SellingStatus::StopSelling, 7000),
            product("002", SellingStatus::Hold, 4500),
            product("001", SellingStatus::Selling, 4000),
        ]);

        let selling = repo.list_selling().await.unwrap();
        let numbers: Vec<&str> = selling.iter().map(|p| p.product_number.as_str()).collect();
        assert_eq!(numbers, vec!["001", "002"]);
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_round_trips() {
        let repo = MemoryOrderRepository::new();
        let order = Order::create(vec![product("001", SellingStatus::Selling, 4000)], Utc::now());

        let saved = repo.save(order).await.unwrap();
        let id = saved.id().unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
