pub mod product;
pub mod repository;

pub use product::{next_product_number, Product, ProductType, SellingStatus};
pub use repository::{ProductRepository, RepositoryError};
