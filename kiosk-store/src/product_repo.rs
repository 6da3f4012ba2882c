use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use kiosk_catalog::{Product, ProductRepository, RepositoryError, SellingStatus};

pub struct StoreProductRepository {
    pool: PgPool,
}

impl StoreProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    product_number: String,
    product_type: String,
    selling_status: String,
    name: String,
    price: i32,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: self.id,
            product_number: self.product_number,
            product_type: self.product_type.parse()?,
            selling_status: self.selling_status.parse()?,
            name: self.name,
            price: self.price,
        })
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn create_product(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, product_number, product_type, selling_status, name, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id)
        .bind(&product.product_number)
        .bind(product.product_type.as_str())
        .bind(product.selling_status.as_str())
        .bind(&product.name)
        .bind(product.price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all_by_product_numbers(
        &self,
        numbers: &[String],
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, product_number, product_type, selling_status, name, price
            FROM products
            WHERE product_number = ANY($1)
            "#,
        )
        .bind(numbers)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn find_latest_product_number(&self) -> Result<Option<String>, RepositoryError> {
        let (latest,): (Option<String>,) =
            sqlx::query_as("SELECT MAX(product_number) FROM products")
                .fetch_one(&self.pool)
                .await?;

        Ok(latest)
    }

    async fn list_selling(&self) -> Result<Vec<Product>, RepositoryError> {
        let statuses: Vec<&str> = SellingStatus::for_display()
            .iter()
            .map(|s| s.as_str())
            .collect();

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, product_number, product_type, selling_status, name, price
            FROM products
            WHERE selling_status = ANY($1)
            ORDER BY product_number
            "#,
        )
        .bind(statuses)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }
}
