//! Installation estimation service
//!
//! Computes, per line item, the fabric area and curtain support count,
//! and flags ladder/scaffold use when a dimension exceeds the
//! high-access threshold.

use serde::{Deserialize, Serialize};

use crate::model::{ItemCategory, LineItem};

/// Dimension above which ladder or scaffold use is recommended (meters).
/// Installer heuristic, kept as-is.
pub const HIGH_ACCESS_THRESHOLD_M: f64 = 4.0;

/// Wall span covered by one curtain support bracket (meters)
pub const SUPPORT_SPACING_M: f64 = 1.5;

/// A curtain always hangs on at least this many supports
pub const MIN_SUPPORTS: u32 = 2;

/// Estimate for a single line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEstimate {
    pub item: LineItem,
    /// Fabric area in m² (height × width)
    pub area_m2: f64,
    /// Display text, e.g. "10.00 m² de tecido | 3 suportes"
    pub estimate: String,
    /// Safety note when the item needs high access, else `None`
    pub recommendation: Option<String>,
}

/// Number of support brackets for a curtain of the given width
pub fn support_count(width_m: f64) -> u32 {
    let by_spacing = (width_m / SUPPORT_SPACING_M).round() as u32;
    by_spacing.max(MIN_SUPPORTS)
}

/// Produce one estimate per item, in input order.
///
/// Pure function: items are read-only inputs, dimension validation
/// happens upstream.
pub fn estimate_items(items: &[LineItem]) -> Vec<ItemEstimate> {
    items
        .iter()
        .map(|item| {
            let area_m2 = item.height_m * item.width_m;
            let max_dim = item.height_m.max(item.width_m);

            let needs_high_access = matches!(
                item.category,
                ItemCategory::Curtain | ItemCategory::Blind
            ) && max_dim > HIGH_ACCESS_THRESHOLD_M;

            let recommendation = if needs_high_access {
                Some(format!(
                    "{} com {:.2}m: recomenda-se uso de escada ou andaime.",
                    item.category.label(),
                    max_dim
                ))
            } else {
                None
            };

            let estimate = match item.category {
                ItemCategory::Curtain => {
                    let supports = support_count(item.width_m);
                    format!("{:.2} m² de tecido | {} suportes", area_m2, supports)
                }
                ItemCategory::Blind => format!("{:.2} m² de tecido", area_m2),
                ItemCategory::Awning | ItemCategory::Wallpaper => "—".to_string(),
            };

            ItemEstimate {
                item: item.clone(),
                area_m2,
                estimate,
                recommendation,
            }
        })
        .collect()
}
