pub mod assembler;
pub mod models;
pub mod repository;

pub use assembler::{assemble, OrderError};
pub use models::{Order, OrderProduct};
pub use repository::OrderRepository;
