use async_trait::async_trait;

use crate::product::Product;

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, product: &Product) -> Result<(), RepositoryError>;

    /// Batch lookup by product number. Output carries no ordering guarantee
    /// and no duplicate numbers.
    async fn find_all_by_product_numbers(
        &self,
        numbers: &[String],
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Highest product number currently in the catalog, if any.
    async fn find_latest_product_number(&self) -> Result<Option<String>, RepositoryError>;

    /// Products in a displayable selling status, ordered by product number.
    async fn list_selling(&self) -> Result<Vec<Product>, RepositoryError>;
}
