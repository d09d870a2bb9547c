//! Stock item type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored or installed product tracked in stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    /// Store-assigned identifier
    pub id: u64,
    pub product_name: String,
    /// Product category, free text (e.g. "Cortina", "Trilho")
    pub category: String,
    pub quantity: u32,
    /// Free text, e.g. "Em estoque", "Instalado"
    pub status: String,
    /// Owning client, when the product is reserved or installed
    #[serde(default)]
    pub client_id: Option<u64>,
    #[serde(default)]
    pub received: Option<NaiveDate>,
    #[serde(default)]
    pub dispatched: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}
