use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use kiosk_catalog::{Product, ProductRepository, RepositoryError};

use crate::models::Order;

/// Order assembly errors
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// A requested product number has no catalog match. The whole assembly
    /// fails; partial orders with a corrupted total are never produced.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Catalog lookup failed: {0}")]
    Catalog(RepositoryError),

    #[error("Order storage failed: {0}")]
    Storage(RepositoryError),
}

/// Resolve an ordered list of product numbers into a priced order.
///
/// The catalog is hit once with the distinct numbers; the original sequence
/// is then re-walked through a number-keyed map, which restores input order
/// and multiplicity regardless of how the batch came back.
pub async fn assemble(
    product_numbers: &[String],
    registered_at: DateTime<Utc>,
    catalog: &dyn ProductRepository,
) -> Result<Order, OrderError> {
    let mut seen = HashSet::new();
    let distinct: Vec<String> = product_numbers
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect();

    let products = catalog
        .find_all_by_product_numbers(&distinct)
        .await
        .map_err(OrderError::Catalog)?;

    // Product numbers are unique in the catalog, so at most one entry each.
    let by_number: HashMap<&str, &Product> = products
        .iter()
        .map(|p| (p.product_number.as_str(), p))
        .collect();

    let mut resolved = Vec::with_capacity(product_numbers.len());
    for number in product_numbers {
        let product = by_number
            .get(number.as_str())
            .ok_or_else(|| OrderError::ProductNotFound(number.clone()))?;
        resolved.push((*product).clone());
    }

    Ok(Order::create(resolved, registered_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kiosk_catalog::{ProductType, SellingStatus};

    /// Catalog stub returning its fixtures in insertion order.
    struct FixtureCatalog {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductRepository for FixtureCatalog {
        async fn create_product(&self, _product: &Product) -> Result<(), RepositoryError> {
            unreachable!("not used by the assembler")
        }

        async fn find_all_by_product_numbers(
            &self,
            numbers: &[String],
        ) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .products
                .iter()
                .filter(|p| numbers.contains(&p.product_number))
                .cloned()
                .collect())
        }

        async fn find_latest_product_number(&self) -> Result<Option<String>, RepositoryError> {
            unreachable!("not used by the assembler")
        }

        async fn list_selling(&self) -> Result<Vec<Product>, RepositoryError> {
            unreachable!("not used by the assembler")
        }
    }

    fn product(number: &str, price: i32) -> Product {
        Product::new(
            number.to_string(),
            ProductType::Handmade,
            SellingStatus::Selling,
            format!("product {number}"),
            price,
        )
    }

    fn catalog() -> FixtureCatalog {
        FixtureCatalog {
            products: vec![product("001", 4000), product("002", 4500)],
        }
    }

    fn numbers(ns: &[&str]) -> Vec<String> {
        ns.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_duplicates_preserved_in_order() {
        let order = assemble(&numbers(&["001", "002", "001"]), Utc::now(), &catalog())
            .await
            .unwrap();

        let sequence: Vec<&str> = order
            .order_products()
            .iter()
            .map(|op| op.product().product_number.as_str())
            .collect();
        assert_eq!(sequence, vec!["001", "002", "001"]);
        assert_eq!(order.total_price(), 12500);
    }

    #[tokio::test]
    async fn test_single_item_total() {
        let order = assemble(&numbers(&["001"]), Utc::now(), &catalog())
            .await
            .unwrap();
        assert_eq!(order.total_price(), 4000);
    }

    #[tokio::test]
    async fn test_output_order_follows_request_not_catalog() {
        // Fixtures are stored as [001, 002]; request the reverse.
        let order = assemble(&numbers(&["002", "001"]), Utc::now(), &catalog())
            .await
            .unwrap();

        let sequence: Vec<&str> = order
            .order_products()
            .iter()
            .map(|op| op.product().product_number.as_str())
            .collect();
        assert_eq!(sequence, vec!["002", "001"]);
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_order() {
        let order = assemble(&[], Utc::now(), &catalog()).await.unwrap();
        assert!(order.order_products().is_empty());
        assert_eq!(order.total_price(), 0);
    }

    #[tokio::test]
    async fn test_unknown_number_fails_naming_it() {
        let err = assemble(&numbers(&["001", "999"]), Utc::now(), &catalog())
            .await
            .unwrap_err();
        match err {
            OrderError::ProductNotFound(number) => assert_eq!(number, "999"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_registered_at_passes_through() {
        let at = "2026-08-27T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let order = assemble(&numbers(&["001"]), at, &catalog()).await.unwrap();
        assert_eq!(order.registered_at(), at);
    }
}
