use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kiosk_catalog::{Product, RepositoryError};
use kiosk_order::{Order, OrderRepository};

pub struct StoreOrderRepository {
    pool: PgPool,
}

impl StoreOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    registered_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct OrderProductRow {
    product_id: Uuid,
    product_number: String,
    product_type: String,
    selling_status: String,
    name: String,
    price: i32,
}

impl OrderProductRow {
    fn into_product(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: self.product_id,
            product_number: self.product_number,
            product_type: self.product_type.parse()?,
            selling_status: self.selling_status.parse()?,
            name: self.name,
            price: self.price,
        })
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn save(&self, order: Order) -> Result<Order, RepositoryError> {
        let order_id = Uuid::new_v4();

        // Order row and all line rows commit together; a failure anywhere
        // leaves no partial order behind.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, registered_at, total_price)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(order_id)
        .bind(order.registered_at())
        .bind(order.total_price())
        .execute(&mut *tx)
        .await?;

        for (position, line) in order.order_products().iter().enumerate() {
            let product = line.product();
            sqlx::query(
                r#"
                INSERT INTO order_products
                    (id, order_id, position, product_id, product_number,
                     product_type, selling_status, name, price)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(order_id)
            .bind(position as i32)
            .bind(product.id)
            .bind(&product.product_number)
            .bind(product.product_type.as_str())
            .bind(product.selling_status.as_str())
            .bind(&product.name)
            .bind(product.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order.with_id(order_id))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> =
            sqlx::query_as("SELECT id, registered_at FROM orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let lines: Vec<OrderProductRow> = sqlx::query_as(
            r#"
            SELECT product_id, product_number, product_type, selling_status, name, price
            FROM order_products
            WHERE order_id = $1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let products = lines
            .into_iter()
            .map(OrderProductRow::into_product)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Order::restore(row.id, products, row.registered_at)))
    }
}
