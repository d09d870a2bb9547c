//! Domain model types

pub mod client;
pub mod service_order;
pub mod stock_item;

pub use client::Client;
pub use service_order::{ItemCategory, LineItem, ServiceOrder};
pub use stock_item::StockItem;
