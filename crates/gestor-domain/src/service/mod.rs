//! Domain services

pub mod estimator;
pub mod order_sheet;

pub use estimator::{estimate_items, support_count, ItemEstimate};
pub use order_sheet::render_order_sheet;
