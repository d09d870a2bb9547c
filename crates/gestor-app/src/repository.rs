//! Store adapters for the persistence layer

use std::path::PathBuf;

use gestor_store::{ClientStore, OrderStore, StockStore};
use gestor_types::Result;

use crate::config::Config;

/// Open the client store under the configured store directory
pub fn open_client_store(config: &Config) -> Result<ClientStore> {
    ClientStore::open(config.store_dir()?)
}

/// Open the service order store under the configured store directory
pub fn open_order_store(config: &Config) -> Result<OrderStore> {
    OrderStore::open(config.store_dir()?)
}

/// Open the stock store under the configured store directory
pub fn open_stock_store(config: &Config) -> Result<StockStore> {
    StockStore::open(config.store_dir()?)
}

/// Open the client store at a custom directory
pub fn open_client_store_at(store_dir: PathBuf) -> Result<ClientStore> {
    ClientStore::open(store_dir)
}

/// Open the service order store at a custom directory
pub fn open_order_store_at(store_dir: PathBuf) -> Result<OrderStore> {
    OrderStore::open(store_dir)
}

/// Open the stock store at a custom directory
pub fn open_stock_store_at(store_dir: PathBuf) -> Result<StockStore> {
    StockStore::open(store_dir)
}
