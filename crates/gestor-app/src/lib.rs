//! Application service layer - use cases, config, store adapters

pub mod app;
pub mod config;
pub mod repository;
