//! Repository trait definitions for data persistence

use crate::model::{Client, ServiceOrder, StockItem};
use gestor_types::Error;

/// Repository for clients
pub trait ClientRepository {
    /// Insert a new client; the store assigns the id
    fn add(&self, client: Client) -> Result<Client, Error>;

    /// Update an existing client
    fn update(&self, client: &Client) -> Result<(), Error>;

    /// Remove a client by id; returns whether it existed
    fn remove(&self, id: u64) -> Result<bool, Error>;

    /// Find a client by id
    fn find_by_id(&self, id: u64) -> Result<Option<Client>, Error>;

    /// Find all clients, sorted by name
    fn find_all(&self) -> Result<Vec<Client>, Error>;
}

/// Repository for service orders (ordens de serviço)
pub trait ServiceOrderRepository {
    /// Insert a new order; the store assigns the order id and item ids
    fn add(&self, order: ServiceOrder) -> Result<ServiceOrder, Error>;

    /// Replace an existing order, keeping submitted item ids and
    /// assigning fresh ids to items without one
    fn update(&self, order: ServiceOrder) -> Result<ServiceOrder, Error>;

    /// Remove an order by id; returns whether it existed
    fn remove(&self, id: u64) -> Result<bool, Error>;

    /// Find an order by id
    fn find_by_id(&self, id: u64) -> Result<Option<ServiceOrder>, Error>;

    /// Find all orders, newest service date first
    fn find_all(&self) -> Result<Vec<ServiceOrder>, Error>;

    /// Find orders for a client
    fn find_by_client(&self, client_id: u64) -> Result<Vec<ServiceOrder>, Error>;
}

/// Repository for stock items (estoque)
pub trait StockRepository {
    /// Insert a new stock item; the store assigns the id
    fn add(&self, item: StockItem) -> Result<StockItem, Error>;

    /// Update an existing stock item
    fn update(&self, item: &StockItem) -> Result<(), Error>;

    /// Remove a stock item by id; returns whether it existed
    fn remove(&self, id: u64) -> Result<bool, Error>;

    /// Find a stock item by id
    fn find_by_id(&self, id: u64) -> Result<Option<StockItem>, Error>;

    /// Find all stock items, newest received date first
    fn find_all(&self) -> Result<Vec<StockItem>, Error>;

    /// Find stock items held for a client
    fn find_by_client(&self, client_id: u64) -> Result<Vec<StockItem>, Error>;
}
