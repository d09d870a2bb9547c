//! File-based persistence layer
//!
//! Each store keeps one record type in a pretty-printed JSON file under
//! the store directory, together with its id sequence. Ids are assigned
//! sequentially and never reused.

mod client_store;
mod order_store;
mod stock_store;

pub use client_store::ClientStore;
pub use order_store::OrderStore;
pub use stock_store::StockStore;
