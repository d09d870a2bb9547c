//! Listing and search use cases
//!
//! Filters are case-insensitive substring matches, like the ILIKE
//! searches in the original screens.

use serde::Serialize;

use gestor_domain::model::{Client, ServiceOrder, StockItem};
use gestor_domain::repository::{ClientRepository, ServiceOrderRepository, StockRepository};
use gestor_types::Result;

/// Label shown when an order or stock item points at a deleted client
const MISSING_CLIENT: &str = "(cliente removido)";

/// An order joined with its client name for listing
#[derive(Debug, Clone, Serialize)]
pub struct OrderListEntry {
    pub order: ServiceOrder,
    pub client_name: String,
}

/// A stock item joined with its client name for listing
#[derive(Debug, Clone, Serialize)]
pub struct StockListEntry {
    pub item: StockItem,
    pub client_name: Option<String>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// List clients, optionally filtered by name, CPF/CNPJ or email
pub fn list_clients(
    clients: &impl ClientRepository,
    filter: Option<&str>,
) -> Result<Vec<Client>> {
    let all = clients.find_all()?;
    Ok(match filter {
        Some(f) if !f.is_empty() => all
            .into_iter()
            .filter(|c| {
                contains_ci(&c.name, f)
                    || contains_ci(&c.cpf_cnpj, f)
                    || c.email.as_deref().is_some_and(|e| contains_ci(e, f))
            })
            .collect(),
        _ => all,
    })
}

/// List orders with client names, optionally filtered by client name
/// or status, newest service date first
pub fn list_orders(
    clients: &impl ClientRepository,
    orders: &impl ServiceOrderRepository,
    filter: Option<&str>,
) -> Result<Vec<OrderListEntry>> {
    let entries = orders
        .find_all()?
        .into_iter()
        .map(|order| {
            let client_name = clients
                .find_by_id(order.client_id)?
                .map(|c| c.name)
                .unwrap_or_else(|| MISSING_CLIENT.to_string());
            Ok(OrderListEntry { order, client_name })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(match filter {
        Some(f) if !f.is_empty() => entries
            .into_iter()
            .filter(|e| contains_ci(&e.client_name, f) || contains_ci(&e.order.status, f))
            .collect(),
        _ => entries,
    })
}

/// List stock with client names, optionally filtered by product name,
/// category, status or client name, newest received date first
pub fn list_stock(
    clients: &impl ClientRepository,
    stock: &impl StockRepository,
    filter: Option<&str>,
) -> Result<Vec<StockListEntry>> {
    let entries = stock
        .find_all()?
        .into_iter()
        .map(|item| {
            let client_name = match item.client_id {
                Some(id) => Some(
                    clients
                        .find_by_id(id)?
                        .map(|c| c.name)
                        .unwrap_or_else(|| MISSING_CLIENT.to_string()),
                ),
                None => None,
            };
            Ok(StockListEntry { item, client_name })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(match filter {
        Some(f) if !f.is_empty() => entries
            .into_iter()
            .filter(|e| {
                contains_ci(&e.item.product_name, f)
                    || contains_ci(&e.item.category, f)
                    || contains_ci(&e.item.status, f)
                    || e.client_name.as_deref().is_some_and(|n| contains_ci(n, f))
            })
            .collect(),
        _ => entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestor_store::{ClientStore, OrderStore, StockStore};
    use tempfile::tempdir;

    fn client(name: &str, email: Option<&str>) -> Client {
        Client {
            id: 0,
            name: name.to_string(),
            cpf_cnpj: "111.222.333-44".to_string(),
            address: None,
            phone: None,
            email: email.map(|e| e.to_string()),
        }
    }

    #[test]
    fn test_client_filter_matches_name_and_email() {
        let dir = tempdir().unwrap();
        let store = ClientStore::open(dir.path().to_path_buf()).unwrap();
        store.add(client("Maria Souza", Some("maria@example.com"))).unwrap();
        store.add(client("João Lima", Some("joao@example.com"))).unwrap();

        let by_name = list_clients(&store, Some("SOUZA")).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Maria Souza");

        let by_email = list_clients(&store, Some("joao@")).unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "João Lima");

        let all = list_clients(&store, None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_order_filter_matches_client_or_status() {
        let dir = tempdir().unwrap();
        let clients = ClientStore::open(dir.path().to_path_buf()).unwrap();
        let orders = OrderStore::open(dir.path().to_path_buf()).unwrap();

        let maria = clients.add(client("Maria Souza", None)).unwrap();
        let joao = clients.add(client("João Lima", None)).unwrap();

        for (client_id, status) in [(maria.id, "Agendada"), (joao.id, "Concluída")] {
            orders
                .add(ServiceOrder {
                    id: 0,
                    client_id,
                    service_date: None,
                    service_time: None,
                    location: None,
                    materials: None,
                    status: status.to_string(),
                    items: vec![],
                })
                .unwrap();
        }

        let by_client = list_orders(&clients, &orders, Some("maria")).unwrap();
        assert_eq!(by_client.len(), 1);
        assert_eq!(by_client[0].client_name, "Maria Souza");

        let by_status = list_orders(&clients, &orders, Some("conclu")).unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].order.status, "Concluída");
    }

    #[test]
    fn test_stock_filter_matches_product_and_client() {
        let dir = tempdir().unwrap();
        let clients = ClientStore::open(dir.path().to_path_buf()).unwrap();
        let stock = StockStore::open(dir.path().to_path_buf()).unwrap();

        let maria = clients.add(client("Maria Souza", None)).unwrap();
        stock
            .add(StockItem {
                id: 0,
                product_name: "Persiana romana".to_string(),
                category: "Persiana".to_string(),
                quantity: 1,
                status: "Instalado".to_string(),
                client_id: Some(maria.id),
                received: None,
                dispatched: None,
                notes: None,
            })
            .unwrap();
        stock
            .add(StockItem {
                id: 0,
                product_name: "Trilho suíço 3m".to_string(),
                category: "Trilho".to_string(),
                quantity: 4,
                status: "Em estoque".to_string(),
                client_id: None,
                received: None,
                dispatched: None,
                notes: None,
            })
            .unwrap();

        let by_product = list_stock(&clients, &stock, Some("romana")).unwrap();
        assert_eq!(by_product.len(), 1);
        assert_eq!(by_product[0].client_name.as_deref(), Some("Maria Souza"));

        let by_client = list_stock(&clients, &stock, Some("souza")).unwrap();
        assert_eq!(by_client.len(), 1);

        let all = list_stock(&clients, &stock, None).unwrap();
        assert_eq!(all.len(), 2);
    }
}
