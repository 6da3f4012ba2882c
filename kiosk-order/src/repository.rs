use async_trait::async_trait;
use kiosk_catalog::RepositoryError;
use uuid::Uuid;

use crate::models::Order;

/// Repository trait for order persistence
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist the order and return it with its assigned identifier.
    /// Either the whole order is stored or nothing is.
    async fn save(&self, order: Order) -> Result<Order, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;
}
