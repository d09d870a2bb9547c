//! Application use cases

pub mod order_service;
pub mod query_service;
