//! Output formatting module

use gestor_app::app::order_service::OrderSheet;
use gestor_app::app::query_service::{OrderListEntry, StockListEntry};
use gestor_domain::model::Client;
use gestor_types::{OutputFormat, Result};

pub fn output_clients(output_format: OutputFormat, clients: &[Client]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(clients)?);
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients found");
        return Ok(());
    }

    println!(
        "{:>4} {:<24} {:<18} {:<24} {}",
        "ID", "Name", "CPF/CNPJ", "Email", "Phone"
    );
    println!("{}", "-".repeat(86));
    for client in clients {
        println!(
            "{:>4} {:<24} {:<18} {:<24} {}",
            client.id,
            truncate_str(&client.name, 23),
            truncate_str(&client.cpf_cnpj, 17),
            truncate_str(client.email.as_deref().unwrap_or("-"), 23),
            client.phone.as_deref().unwrap_or("-")
        );
    }
    println!("{} client(s)", clients.len());
    Ok(())
}

pub fn output_orders(output_format: OutputFormat, entries: &[OrderListEntry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No orders found");
        return Ok(());
    }

    println!(
        "{:>4} {:<24} {:<12} {:<6} {:<20} {:>5} {}",
        "ID", "Client", "Date", "Time", "Location", "Items", "Status"
    );
    println!("{}", "-".repeat(86));
    for entry in entries {
        let date = entry
            .order
            .service_date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        let time = entry
            .order
            .service_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4} {:<24} {:<12} {:<6} {:<20} {:>5} {}",
            entry.order.id,
            truncate_str(&entry.client_name, 23),
            date,
            time,
            truncate_str(entry.order.location.as_deref().unwrap_or("-"), 19),
            entry.order.items.len(),
            entry.order.status
        );
    }
    println!("{} order(s)", entries.len());
    Ok(())
}

pub fn output_stock(output_format: OutputFormat, entries: &[StockListEntry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No stock items found");
        return Ok(());
    }

    println!(
        "{:>4} {:<26} {:<14} {:>4} {:<14} {:<20} {}",
        "ID", "Product", "Category", "Qty", "Status", "Client", "Received"
    );
    println!("{}", "-".repeat(94));
    for entry in entries {
        let received = entry
            .item
            .received
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4} {:<26} {:<14} {:>4} {:<14} {:<20} {}",
            entry.item.id,
            truncate_str(&entry.item.product_name, 25),
            truncate_str(&entry.item.category, 13),
            entry.item.quantity,
            truncate_str(&entry.item.status, 13),
            truncate_str(entry.client_name.as_deref().unwrap_or("-"), 19),
            received
        );
    }
    println!("{} stock item(s)", entries.len());
    Ok(())
}

pub fn output_sheet(output_format: OutputFormat, sheet: &OrderSheet) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(sheet)?);
    } else {
        print!("{}", sheet.render());
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
