//! File-based implementation of ServiceOrderRepository
//!
//! Orders embed their line items; the store keeps a separate sequence
//! for item ids so edits can match submitted items to stored ones.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use gestor_domain::model::ServiceOrder;
use gestor_domain::repository::ServiceOrderRepository;
use gestor_types::{Error, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrderStoreData {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    next_item_id: u64,
    #[serde(default)]
    orders: HashMap<u64, ServiceOrder>,
}

/// Persistent service order store backed by `orders.json`
pub struct OrderStore {
    store_path: PathBuf,
    data: RefCell<OrderStoreData>,
}

impl OrderStore {
    /// Create or load an order store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("orders.json");

        let mut data: OrderStoreData = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            OrderStoreData::default()
        };

        let max_id = data.orders.keys().max().copied().unwrap_or(0);
        if data.next_id <= max_id {
            data.next_id = max_id + 1;
        }
        let max_item_id = data
            .orders
            .values()
            .flat_map(|o| o.items.iter())
            .filter_map(|i| i.id)
            .max()
            .unwrap_or(0);
        if data.next_item_id <= max_item_id {
            data.next_item_id = max_item_id + 1;
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

    fn assign_item_ids(data: &mut OrderStoreData, order: &mut ServiceOrder) {
        for item in &mut order.items {
            if item.id.is_none() {
                item.id = Some(data.next_item_id);
                data.next_item_id += 1;
            }
        }
    }
}

impl ServiceOrderRepository for OrderStore {
    fn add(&self, mut order: ServiceOrder) -> Result<ServiceOrder> {
        {
            let mut data = self.data.borrow_mut();
            order.id = data.next_id;
            data.next_id += 1;
            Self::assign_item_ids(&mut data, &mut order);
            data.orders.insert(order.id, order.clone());
        }
        self.persist()?;
        Ok(order)
    }

    fn update(&self, mut order: ServiceOrder) -> Result<ServiceOrder> {
        {
            let mut data = self.data.borrow_mut();
            if !data.orders.contains_key(&order.id) {
                return Err(Error::OrderNotFound(order.id));
            }
            Self::assign_item_ids(&mut data, &mut order);
            data.orders.insert(order.id, order.clone());
        }
        self.persist()?;
        Ok(order)
    }

    fn remove(&self, id: u64) -> Result<bool> {
        let removed = self.data.borrow_mut().orders.remove(&id).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<ServiceOrder>> {
        Ok(self.data.borrow().orders.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<ServiceOrder>> {
        let mut orders: Vec<_> = self.data.borrow().orders.values().cloned().collect();
        // Newest service date first; undated orders go last
        orders.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        Ok(orders)
    }

    fn find_by_client(&self, client_id: u64) -> Result<Vec<ServiceOrder>> {
        let mut orders: Vec<_> = self
            .data
            .borrow()
            .orders
            .values()
            .filter(|o| o.client_id == client_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gestor_domain::model::{ItemCategory, LineItem};
    use tempfile::tempdir;

    fn order(client_id: u64, date: Option<NaiveDate>) -> ServiceOrder {
        ServiceOrder {
            id: 0,
            client_id,
            service_date: date,
            service_time: None,
            location: None,
            materials: None,
            status: "Agendada".to_string(),
            items: vec![
                LineItem {
                    id: None,
                    category: ItemCategory::Curtain,
                    height_m: 2.0,
                    width_m: 3.0,
                    material: Some("Linho".to_string()),
                },
                LineItem {
                    id: None,
                    category: ItemCategory::Blind,
                    height_m: 1.2,
                    width_m: 1.0,
                    material: None,
                },
            ],
        }
    }

    #[test]
    fn test_add_assigns_order_and_item_ids() {
        let dir = tempdir().unwrap();
        let store = OrderStore::open(dir.path().to_path_buf()).unwrap();

        let saved = store.add(order(1, None)).unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.items[0].id, Some(1));
        assert_eq!(saved.items[1].id, Some(2));

        let second = store.add(order(1, None)).unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(second.items[0].id, Some(3));
    }

    #[test]
    fn test_update_keeps_existing_item_ids() {
        let dir = tempdir().unwrap();
        let store = OrderStore::open(dir.path().to_path_buf()).unwrap();

        let mut saved = store.add(order(1, None)).unwrap();
        // Drop the second item, add a new one
        saved.items.remove(1);
        saved.items.push(LineItem {
            id: None,
            category: ItemCategory::Awning,
            height_m: 1.0,
            width_m: 2.0,
            material: None,
        });
        let updated = store.update(saved).unwrap();

        assert_eq!(updated.items.len(), 2);
        assert_eq!(updated.items[0].id, Some(1));
        assert_eq!(updated.items[1].id, Some(3));

        let reloaded = store.find_by_id(updated.id).unwrap().unwrap();
        assert_eq!(reloaded.items.len(), 2);
    }

    #[test]
    fn test_find_all_newest_first() {
        let dir = tempdir().unwrap();
        let store = OrderStore::open(dir.path().to_path_buf()).unwrap();

        store
            .add(order(1, NaiveDate::from_ymd_opt(2026, 1, 10)))
            .unwrap();
        store
            .add(order(1, NaiveDate::from_ymd_opt(2026, 5, 2)))
            .unwrap();
        store.add(order(1, None)).unwrap();

        let orders = store.find_all().unwrap();
        assert_eq!(
            orders[0].service_date,
            NaiveDate::from_ymd_opt(2026, 5, 2)
        );
        assert_eq!(
            orders[1].service_date,
            NaiveDate::from_ymd_opt(2026, 1, 10)
        );
        assert!(orders[2].service_date.is_none());
    }

    #[test]
    fn test_item_sequence_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = OrderStore::open(dir.path().to_path_buf()).unwrap();
            store.add(order(1, None)).unwrap();
        }
        let store = OrderStore::open(dir.path().to_path_buf()).unwrap();
        let saved = store.add(order(2, None)).unwrap();
        assert_eq!(saved.items[0].id, Some(3));
    }

    #[test]
    fn test_update_missing_order_fails() {
        let dir = tempdir().unwrap();
        let store = OrderStore::open(dir.path().to_path_buf()).unwrap();

        let mut missing = order(1, None);
        missing.id = 99;
        assert!(matches!(
            store.update(missing),
            Err(Error::OrderNotFound(99))
        ));
    }
}
