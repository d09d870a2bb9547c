//! File-based implementation of StockRepository

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use gestor_domain::model::StockItem;
use gestor_domain::repository::StockRepository;
use gestor_types::{Error, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StockStoreData {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    items: HashMap<u64, StockItem>,
}

/// Persistent stock store backed by `stock.json`
pub struct StockStore {
    store_path: PathBuf,
    data: RefCell<StockStoreData>,
}

impl StockStore {
    /// Create or load a stock store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("stock.json");

        let mut data: StockStoreData = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            StockStoreData::default()
        };

        let max_id = data.items.keys().max().copied().unwrap_or(0);
        if data.next_id <= max_id {
            data.next_id = max_id + 1;
        }

        Ok(Self {
            store_path,
            data: RefCell::new(data),
        })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.data.borrow())?;
        Ok(())
    }
}

impl StockRepository for StockStore {
    fn add(&self, mut item: StockItem) -> Result<StockItem> {
        {
            let mut data = self.data.borrow_mut();
            item.id = data.next_id;
            data.next_id += 1;
            data.items.insert(item.id, item.clone());
        }
        self.persist()?;
        Ok(item)
    }

    fn update(&self, item: &StockItem) -> Result<()> {
        {
            let mut data = self.data.borrow_mut();
            if !data.items.contains_key(&item.id) {
                return Err(Error::StockItemNotFound(item.id));
            }
            data.items.insert(item.id, item.clone());
        }
        self.persist()
    }

    fn remove(&self, id: u64) -> Result<bool> {
        let removed = self.data.borrow_mut().items.remove(&id).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<StockItem>> {
        Ok(self.data.borrow().items.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<StockItem>> {
        let mut items: Vec<_> = self.data.borrow().items.values().cloned().collect();
        // Newest entries first; undated entries go last
        items.sort_by(|a, b| b.received.cmp(&a.received));
        Ok(items)
    }

    fn find_by_client(&self, client_id: u64) -> Result<Vec<StockItem>> {
        let mut items: Vec<_> = self
            .data
            .borrow()
            .items
            .values()
            .filter(|i| i.client_id == Some(client_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.received.cmp(&a.received));
        Ok(items)
    }
}
