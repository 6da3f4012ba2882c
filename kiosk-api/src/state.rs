use std::sync::Arc;

use kiosk_catalog::ProductRepository;
use kiosk_order::OrderRepository;

#[derive(Clone)]
pub struct AppState {
    pub product_repo: Arc<dyn ProductRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
}
