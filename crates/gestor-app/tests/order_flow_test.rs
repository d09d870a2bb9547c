//! End-to-end flow: register a client, open an order, edit it, print
//! the estimation sheet.

use tempfile::tempdir;

use gestor_app::app::order_service::{
    build_sheet, create_order, update_order, LineItemDraft, OrderDraft,
};
use gestor_app::app::query_service::{list_clients, list_orders};
use gestor_app::repository::{open_client_store_at, open_order_store_at};
use gestor_domain::model::{Client, ItemCategory};
use gestor_domain::repository::{ClientRepository, ServiceOrderRepository};

#[test]
fn test_full_order_flow() {
    let dir = tempdir().expect("Failed to create temp dir");
    let clients = open_client_store_at(dir.path().to_path_buf()).expect("open client store");
    let orders = open_order_store_at(dir.path().to_path_buf()).expect("open order store");

    let client = clients
        .add(Client {
            id: 0,
            name: "Maria Souza".to_string(),
            cpf_cnpj: "123.456.789-00".to_string(),
            address: Some("Rua das Flores, 12".to_string()),
            phone: Some("(11) 99999-0000".to_string()),
            email: Some("maria@example.com".to_string()),
        })
        .expect("add client");

    let order = create_order(
        &clients,
        &orders,
        OrderDraft {
            client_id: client.id,
            service_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1),
            service_time: chrono::NaiveTime::from_hms_opt(14, 0, 0),
            location: Some("Av. Paulista, 1000".to_string()),
            materials: Some("Trilhos e suportes inclusos".to_string()),
            status: "Agendada".to_string(),
            items: vec![
                LineItemDraft {
                    id: None,
                    category: ItemCategory::Curtain,
                    height_m: 2.0,
                    width_m: 5.0,
                    material: Some("Linho".to_string()),
                },
                LineItemDraft {
                    id: None,
                    category: ItemCategory::Blind,
                    height_m: 1.0,
                    width_m: 1.0,
                    material: None,
                },
                LineItemDraft {
                    id: None,
                    category: ItemCategory::Awning,
                    height_m: 3.0,
                    width_m: 6.0,
                    material: None,
                },
            ],
        },
    )
    .expect("create order");

    // The search screen finds the order by client name
    let listed = list_orders(&clients, &orders, Some("maria")).expect("list orders");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].order.id, order.id);

    // The sheet carries one estimate per item, in input order
    let sheet = build_sheet(&clients, &orders, order.id).expect("build sheet");
    assert_eq!(sheet.results.len(), 3);
    assert_eq!(sheet.results[0].estimate, "10.00 m² de tecido | 3 suportes");
    assert_eq!(
        sheet.results[0].recommendation.as_deref(),
        Some("Cortina com 5.00m: recomenda-se uso de escada ou andaime.")
    );
    assert_eq!(sheet.results[1].estimate, "1.00 m² de tecido");
    assert!(sheet.results[1].recommendation.is_none());
    assert_eq!(sheet.results[2].estimate, "—");
    assert!(sheet.results[2].recommendation.is_none());

    let text = sheet.render();
    assert!(text.contains("Maria Souza"));
    assert!(text.contains("Av. Paulista, 1000"));

    // Edit: keep only the curtain, shrink it below the threshold
    let kept_id = order.items[0].id;
    let updated = update_order(
        &clients,
        &orders,
        order.id,
        OrderDraft {
            client_id: client.id,
            service_date: order.service_date,
            service_time: order.service_time,
            location: order.location.clone(),
            materials: order.materials.clone(),
            status: "Concluída".to_string(),
            items: vec![LineItemDraft {
                id: kept_id,
                category: ItemCategory::Curtain,
                height_m: 2.0,
                width_m: 3.0,
                material: Some("Linho".to_string()),
            }],
        },
    )
    .expect("update order");

    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].id, kept_id);

    let sheet = build_sheet(&clients, &orders, order.id).expect("rebuild sheet");
    assert_eq!(sheet.results.len(), 1);
    assert_eq!(sheet.results[0].estimate, "6.00 m² de tecido | 2 suportes");
    assert!(sheet.results[0].recommendation.is_none());

    // Everything above is visible from a fresh store handle (persisted)
    let reopened = open_order_store_at(dir.path().to_path_buf()).expect("reopen order store");
    let reloaded = reopened
        .find_by_id(order.id)
        .expect("find order")
        .expect("order exists");
    assert_eq!(reloaded.status, "Concluída");
    assert_eq!(reloaded.items.len(), 1);

    assert_eq!(list_clients(&clients, None).expect("list clients").len(), 1);
}
