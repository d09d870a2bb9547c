//! Service order and line item types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Product category of a line item
///
/// The set is closed on purpose: each category has its own estimate
/// formula, and a match on this enum keeps them exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Curtain,
    Blind,
    Awning,
    Wallpaper,
}

impl ItemCategory {
    /// Display label (product names as used on the shop floor)
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Curtain => "Cortina",
            ItemCategory::Blind => "Persiana",
            ItemCategory::Awning => "Toldo",
            ItemCategory::Wallpaper => "Papel de parede",
        }
    }

    /// Parse from a display label or English name, case-insensitive
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "cortina" | "curtain" => Some(ItemCategory::Curtain),
            "persiana" | "blind" => Some(ItemCategory::Blind),
            "toldo" | "awning" => Some(ItemCategory::Awning),
            "papel de parede" | "wallpaper" => Some(ItemCategory::Wallpaper),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One measured unit (curtain, blind, ...) within a service order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Store-assigned identifier; `None` until first persisted
    #[serde(default)]
    pub id: Option<u64>,
    pub category: ItemCategory,
    /// Height in meters, > 0
    pub height_m: f64,
    /// Width in meters, > 0
    pub width_m: f64,
    /// Fabric/material label (e.g. "Linho", "Blackout")
    #[serde(default)]
    pub material: Option<String>,
}

/// A job record describing an installation task for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOrder {
    /// Store-assigned identifier
    pub id: u64,
    pub client_id: u64,
    #[serde(default)]
    pub service_date: Option<NaiveDate>,
    #[serde(default)]
    pub service_time: Option<NaiveTime>,
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text materials/notes for the whole order
    #[serde(default)]
    pub materials: Option<String>,
    /// Free text, e.g. "Agendada", "Concluída"
    pub status: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}
