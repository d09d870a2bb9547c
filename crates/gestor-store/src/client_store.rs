//! File-based implementation of ClientRepository

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use gestor_domain::model::Client;
use gestor_domain::repository::ClientRepository;
use gestor_types::{Error, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ClientStoreData {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    clients: HashMap<u64, Client>,
}

/// Persistent client store backed by `clients.json`
pub struct ClientStore {
    store_path: PathBuf,
    data: RefCell<ClientStoreData>,
}

impl ClientStore {
    /// Create or load a client store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("clients.json");

        let mut data: ClientStoreData = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            ClientStoreData::default()
        };

        // Sequences start at 1; recover from files written before the
        // sequence field existed
        let max_id = data.clients.keys().max().copied().unwrap_or(0);
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

impl ClientRepository for ClientStore {
    fn add(&self, mut client: Client) -> Result<Client> {
        {
            let mut data = self.data.borrow_mut();
            client.id = data.next_id;
            data.next_id += 1;
            data.clients.insert(client.id, client.clone());
        }
        self.persist()?;
        Ok(client)
    }

    fn update(&self, client: &Client) -> Result<()> {
        {
            let mut data = self.data.borrow_mut();
            if !data.clients.contains_key(&client.id) {
                return Err(Error::ClientNotFound(client.id));
            }
            data.clients.insert(client.id, client.clone());
        }
        self.persist()
    }

    fn remove(&self, id: u64) -> Result<bool> {
        let removed = self.data.borrow_mut().clients.remove(&id).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Client>> {
        Ok(self.data.borrow().clients.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Client>> {
        let mut clients: Vec<_> = self.data.borrow().clients.values().cloned().collect();
        clients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(clients)
    }
}
