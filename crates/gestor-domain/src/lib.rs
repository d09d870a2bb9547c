//! Domain layer for gestor-os: models, repository traits, and services

pub mod model;
pub mod repository;
pub mod service;
