pub mod app_config;
pub mod database;
pub mod memory;
pub mod order_repo;
pub mod product_repo;

pub use database::DbClient;
pub use memory::{MemoryOrderRepository, MemoryProductRepository};
pub use order_repo::StoreOrderRepository;
pub use product_repo::StoreProductRepository;
