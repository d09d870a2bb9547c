//! Plain-text job sheet (ficha) for a service order

use crate::model::{ItemCategory, ServiceOrder};
use crate::service::estimator::ItemEstimate;

/// Render the printable sheet for an order: header, per-item estimates
/// and the safety recommendations collected by the estimator.
pub fn render_order_sheet(
    order: &ServiceOrder,
    client_name: &str,
    results: &[ItemEstimate],
) -> String {
    let total_items = results.len();
    let recommendation_count = results.iter().filter(|r| r.recommendation.is_some()).count();
    let fabric_area: f64 = results
        .iter()
        .filter(|r| {
            matches!(r.item.category, ItemCategory::Curtain | ItemCategory::Blind)
        })
        .map(|r| r.area_m2)
        .sum();

    let mut sheet = String::new();
    sheet.push_str("==================================================\n");
    sheet.push_str(&format!("          Ficha de Ordem de Serviço #{}\n", order.id));
    sheet.push_str("==================================================\n\n");

    sheet.push_str(&format!("Cliente:   {}\n", client_name));
    if let Some(date) = order.service_date {
        sheet.push_str(&format!("Data:      {}\n", date.format("%d/%m/%Y")));
    }
    if let Some(time) = order.service_time {
        sheet.push_str(&format!("Hora:      {}\n", time.format("%H:%M")));
    }
    if let Some(ref location) = order.location {
        sheet.push_str(&format!("Local:     {}\n", location));
    }
    sheet.push_str(&format!("Status:    {}\n", order.status));
    if let Some(ref materials) = order.materials {
        sheet.push_str(&format!("Materiais: {}\n", materials));
    }
    sheet.push('\n');

    sheet.push_str("Itens\n");
    sheet.push_str("-".repeat(70).as_str());
    sheet.push('\n');
    sheet.push_str(&format!(
        "{:<16} {:>8} {:>8} {:<12} {}\n",
        "Tipo", "Altura", "Largura", "Material", "Estimativa"
    ));
    sheet.push_str("-".repeat(70).as_str());
    sheet.push('\n');
    for result in results {
        sheet.push_str(&format!(
            "{:<16} {:>7.2}m {:>7.2}m {:<12} {}\n",
            truncate_str(result.item.category.label(), 15),
            result.item.height_m,
            result.item.width_m,
            truncate_str(result.item.material.as_deref().unwrap_or("-"), 11),
            result.estimate
        ));
    }
    sheet.push('\n');

    if recommendation_count > 0 {
        sheet.push_str("Recomendações de instalação\n");
        sheet.push_str("-".repeat(70).as_str());
        sheet.push('\n');
        for recommendation in results.iter().filter_map(|r| r.recommendation.as_deref()) {
            sheet.push_str(&format!("  ! {}\n", recommendation));
        }
        sheet.push('\n');
    }

    sheet.push_str("Resumo\n");
    sheet.push_str(&format!("  Itens:            {}\n", total_items));
    sheet.push_str(&format!("  Tecido estimado:  {:.2} m²\n", fabric_area));
    sheet.push_str(&format!("  Recomendações:    {}\n", recommendation_count));
    sheet.push_str("==================================================\n");
    sheet
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
