//! Service order use cases: create, edit with item reconciliation,
//! and the estimation sheet

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use gestor_domain::model::{ItemCategory, LineItem, ServiceOrder};
use gestor_domain::repository::{ClientRepository, ServiceOrderRepository};
use gestor_domain::service::{estimate_items, render_order_sheet, ItemEstimate};
use gestor_types::{Error, Result};

/// Submitted line item. `id` is `Some` when editing an existing item.
#[derive(Debug, Clone)]
pub struct LineItemDraft {
    pub id: Option<u64>,
    pub category: ItemCategory,
    pub height_m: f64,
    pub width_m: f64,
    pub material: Option<String>,
}

/// Submitted order fields
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub client_id: u64,
    pub service_date: Option<NaiveDate>,
    pub service_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub materials: Option<String>,
    pub status: String,
    pub items: Vec<LineItemDraft>,
}

/// An order joined with its client and estimation results
#[derive(Debug, Clone, Serialize)]
pub struct OrderSheet {
    pub order: ServiceOrder,
    pub client_name: String,
    pub results: Vec<ItemEstimate>,
}

impl OrderSheet {
    /// Printable sheet text
    pub fn render(&self) -> String {
        render_order_sheet(&self.order, &self.client_name, &self.results)
    }
}

fn validate_items(items: &[LineItemDraft]) -> Result<()> {
    for item in items {
        if item.height_m <= 0.0 || !item.height_m.is_finite() {
            return Err(Error::InvalidDimension(item.height_m));
        }
        if item.width_m <= 0.0 || !item.width_m.is_finite() {
            return Err(Error::InvalidDimension(item.width_m));
        }
    }
    Ok(())
}

fn require_client(clients: &impl ClientRepository, client_id: u64) -> Result<()> {
    if clients.find_by_id(client_id)?.is_none() {
        return Err(Error::ClientNotFound(client_id));
    }
    Ok(())
}

/// Create a new order with its line items
pub fn create_order(
    clients: &impl ClientRepository,
    orders: &impl ServiceOrderRepository,
    draft: OrderDraft,
) -> Result<ServiceOrder> {
    require_client(clients, draft.client_id)?;
    validate_items(&draft.items)?;

    let order = ServiceOrder {
        id: 0,
        client_id: draft.client_id,
        service_date: draft.service_date,
        service_time: draft.service_time,
        location: draft.location,
        materials: draft.materials,
        status: draft.status,
        items: draft
            .items
            .into_iter()
            .map(|item| LineItem {
                // ids are ignored on create; the store assigns them
                id: None,
                category: item.category,
                height_m: item.height_m,
                width_m: item.width_m,
                material: item.material,
            })
            .collect(),
    };
    orders.add(order)
}

/// Update an order, reconciling line items against the stored ones:
/// submitted items with a known id are updated in place, stored items
/// left out of the submission are deleted, items without an id (or with
/// an id the order never had) are inserted as new.
pub fn update_order(
    clients: &impl ClientRepository,
    orders: &impl ServiceOrderRepository,
    order_id: u64,
    draft: OrderDraft,
) -> Result<ServiceOrder> {
    let existing = orders
        .find_by_id(order_id)?
        .ok_or(Error::OrderNotFound(order_id))?;
    require_client(clients, draft.client_id)?;
    validate_items(&draft.items)?;

    let existing_ids: HashSet<u64> = existing.items.iter().filter_map(|i| i.id).collect();

    let items = draft
        .items
        .into_iter()
        .map(|item| LineItem {
            id: item.id.filter(|id| existing_ids.contains(id)),
            category: item.category,
            height_m: item.height_m,
            width_m: item.width_m,
            material: item.material,
        })
        .collect();

    orders.update(ServiceOrder {
        id: order_id,
        client_id: draft.client_id,
        service_date: draft.service_date,
        service_time: draft.service_time,
        location: draft.location,
        materials: draft.materials,
        status: draft.status,
        items,
    })
}

/// Load an order, run the estimator over its items and join the client
pub fn build_sheet(
    clients: &impl ClientRepository,
    orders: &impl ServiceOrderRepository,
    order_id: u64,
) -> Result<OrderSheet> {
    let order = orders
        .find_by_id(order_id)?
        .ok_or(Error::OrderNotFound(order_id))?;
    let client = clients
        .find_by_id(order.client_id)?
        .ok_or(Error::ClientNotFound(order.client_id))?;

    let results = estimate_items(&order.items);
    Ok(OrderSheet {
        order,
        client_name: client.name,
        results,
    })
}
