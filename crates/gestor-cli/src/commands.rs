//! Command handlers

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use gestor_app::app::order_service::{
    build_sheet, create_order, update_order, LineItemDraft, OrderDraft,
};
use gestor_app::app::query_service::{list_clients, list_orders, list_stock};
use gestor_app::config::Config;
use gestor_app::repository::{open_client_store, open_order_store, open_stock_store};
use gestor_domain::model::{Client, ItemCategory, StockItem};
use gestor_domain::repository::{ClientRepository, ServiceOrderRepository, StockRepository};
use gestor_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, ClientCommand, Commands, OrderCommand, StockCommand};
use crate::output::{output_clients, output_orders, output_sheet, output_stock};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Client { command } => cmd_client(&config, output_format, command),
        Commands::Order { command } => cmd_order(&config, output_format, command),
        Commands::Stock { command } => cmd_stock(&config, output_format, command),
        Commands::Config {
            show,
            set_output,
            set_store_dir,
            reset,
        } => cmd_config(show, set_output, set_store_dir, reset),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::DateParse(s.to_string()))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| Error::DateParse(s.to_string()))
}

/// Parse an "--item" spec: "[id=N,]CATEGORY,HEIGHT,WIDTH[,MATERIAL]"
fn parse_item_spec(spec: &str) -> Result<LineItemDraft> {
    let mut parts: Vec<&str> = spec.split(',').map(str::trim).collect();

    let id = match parts.first().and_then(|p| p.strip_prefix("id=")) {
        Some(raw) => {
            let id = raw
                .parse()
                .map_err(|_| Error::InvalidItemSpec(spec.to_string()))?;
            parts.remove(0);
            Some(id)
        }
        None => None,
    };

    if parts.len() < 3 || parts.len() > 4 {
        return Err(Error::InvalidItemSpec(spec.to_string()));
    }

    let category = ItemCategory::from_label(parts[0])
        .ok_or_else(|| Error::InvalidCategory(parts[0].to_string()))?;
    let height_m: f64 = parts[1]
        .parse()
        .map_err(|_| Error::InvalidItemSpec(spec.to_string()))?;
    let width_m: f64 = parts[2]
        .parse()
        .map_err(|_| Error::InvalidItemSpec(spec.to_string()))?;
    let material = parts
        .get(3)
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string());

    Ok(LineItemDraft {
        id,
        category,
        height_m,
        width_m,
        material,
    })
}

fn parse_item_specs(specs: &[String]) -> Result<Vec<LineItemDraft>> {
    specs.iter().map(|s| parse_item_spec(s)).collect()
}

fn cmd_client(config: &Config, format: OutputFormat, command: ClientCommand) -> Result<()> {
    let clients = open_client_store(config)?;

    match command {
        ClientCommand::Add {
            name,
            cpf_cnpj,
            address,
            phone,
            email,
        } => {
            let client = clients.add(Client {
                id: 0,
                name,
                cpf_cnpj,
                address,
                phone,
                email,
            })?;
            println!("Client #{} added: {}", client.id, client.name);
        }

        ClientCommand::List { filter } => {
            let found = list_clients(&clients, filter.as_deref())?;
            output_clients(format, &found)?;
        }

        ClientCommand::Edit {
            id,
            name,
            cpf_cnpj,
            address,
            phone,
            email,
        } => {
            let mut client = clients
                .find_by_id(id)?
                .ok_or(Error::ClientNotFound(id))?;
            if let Some(name) = name {
                client.name = name;
            }
            if let Some(cpf_cnpj) = cpf_cnpj {
                client.cpf_cnpj = cpf_cnpj;
            }
            if address.is_some() {
                client.address = address;
            }
            if phone.is_some() {
                client.phone = phone;
            }
            if email.is_some() {
                client.email = email;
            }
            clients.update(&client)?;
            println!("Client #{} updated", id);
        }

        ClientCommand::Remove { id } => {
            if !clients.remove(id)? {
                return Err(Error::ClientNotFound(id));
            }
            println!("Client #{} removed", id);
        }
    }

    Ok(())
}

fn cmd_order(config: &Config, format: OutputFormat, command: OrderCommand) -> Result<()> {
    let clients = open_client_store(config)?;
    let orders = open_order_store(config)?;

    match command {
        OrderCommand::Add {
            client,
            date,
            time,
            location,
            materials,
            status,
            items,
        } => {
            let draft = OrderDraft {
                client_id: client,
                service_date: date.as_deref().map(parse_date).transpose()?,
                service_time: time.as_deref().map(parse_time).transpose()?,
                location,
                materials,
                status,
                items: parse_item_specs(&items)?,
            };
            let order = create_order(&clients, &orders, draft)?;
            println!(
                "Order #{} opened with {} item(s)",
                order.id,
                order.items.len()
            );
        }

        OrderCommand::List { filter } => {
            let found = list_orders(&clients, &orders, filter.as_deref())?;
            output_orders(format, &found)?;
        }

        OrderCommand::Edit {
            id,
            client,
            date,
            time,
            location,
            materials,
            status,
            items,
        } => {
            let existing = orders.find_by_id(id)?.ok_or(Error::OrderNotFound(id))?;

            // No --item flags: keep the stored items untouched
            let item_drafts = if items.is_empty() {
                existing
                    .items
                    .iter()
                    .map(|i| LineItemDraft {
                        id: i.id,
                        category: i.category,
                        height_m: i.height_m,
                        width_m: i.width_m,
                        material: i.material.clone(),
                    })
                    .collect()
            } else {
                parse_item_specs(&items)?
            };

            let draft = OrderDraft {
                client_id: client.unwrap_or(existing.client_id),
                service_date: match date {
                    Some(d) => Some(parse_date(&d)?),
                    None => existing.service_date,
                },
                service_time: match time {
                    Some(t) => Some(parse_time(&t)?),
                    None => existing.service_time,
                },
                location: location.or(existing.location),
                materials: materials.or(existing.materials),
                status: status.unwrap_or(existing.status),
                items: item_drafts,
            };
            let order = update_order(&clients, &orders, id, draft)?;
            println!(
                "Order #{} updated, {} item(s)",
                order.id,
                order.items.len()
            );
        }

        OrderCommand::Sheet { id } => {
            let sheet = build_sheet(&clients, &orders, id)?;
            output_sheet(format, &sheet)?;
        }

        OrderCommand::Remove { id } => {
            if !orders.remove(id)? {
                return Err(Error::OrderNotFound(id));
            }
            println!("Order #{} removed", id);
        }
    }

    Ok(())
}

fn cmd_stock(config: &Config, format: OutputFormat, command: StockCommand) -> Result<()> {
    let clients = open_client_store(config)?;
    let stock = open_stock_store(config)?;

    match command {
        StockCommand::Add {
            product,
            category,
            quantity,
            status,
            client,
            received,
            notes,
        } => {
            let item = stock.add(StockItem {
                id: 0,
                product_name: product,
                category,
                quantity,
                status,
                client_id: client,
                received: received.as_deref().map(parse_date).transpose()?,
                dispatched: None,
                notes,
            })?;
            println!("Stock item #{} added: {}", item.id, item.product_name);
        }

        StockCommand::List { filter } => {
            let found = list_stock(&clients, &stock, filter.as_deref())?;
            output_stock(format, &found)?;
        }

        StockCommand::Edit {
            id,
            product,
            category,
            quantity,
            status,
            client,
            received,
            dispatched,
            notes,
        } => {
            let mut item = stock
                .find_by_id(id)?
                .ok_or(Error::StockItemNotFound(id))?;
            if let Some(product) = product {
                item.product_name = product;
            }
            if let Some(category) = category {
                item.category = category;
            }
            if let Some(quantity) = quantity {
                item.quantity = quantity;
            }
            if let Some(status) = status {
                item.status = status;
            }
            if client.is_some() {
                item.client_id = client;
            }
            if let Some(received) = received {
                item.received = Some(parse_date(&received)?);
            }
            if let Some(dispatched) = dispatched {
                item.dispatched = Some(parse_date(&dispatched)?);
            }
            if notes.is_some() {
                item.notes = notes;
            }
            stock.update(&item)?;
            println!("Stock item #{} updated", id);
        }

        StockCommand::Remove { id } => {
            if !stock.remove(id)? {
                return Err(Error::StockItemNotFound(id));
            }
            println!("Stock item #{} removed", id);
        }
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_store_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(output) = set_output {
        config.output_format = output;
        changed = true;
    }
    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("Output format: {}", config.output_format);
        println!("Store dir:     {}", config.store_dir()?.display());
        println!("Config file:   {}", Config::config_path()?.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_spec_full() {
        let draft = parse_item_spec("Cortina,2.0,5.0,Linho").unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.category, ItemCategory::Curtain);
        assert!((draft.height_m - 2.0).abs() < 1e-9);
        assert!((draft.width_m - 5.0).abs() < 1e-9);
        assert_eq!(draft.material.as_deref(), Some("Linho"));
    }

    #[test]
    fn test_parse_item_spec_with_id() {
        let draft = parse_item_spec("id=3, persiana, 1.2, 1.0").unwrap();
        assert_eq!(draft.id, Some(3));
        assert_eq!(draft.category, ItemCategory::Blind);
        assert!(draft.material.is_none());
    }

    #[test]
    fn test_parse_item_spec_errors() {
        assert!(matches!(
            parse_item_spec("Cortina,2.0"),
            Err(Error::InvalidItemSpec(_))
        ));
        assert!(matches!(
            parse_item_spec("Veneziana,2.0,1.0"),
            Err(Error::InvalidCategory(_))
        ));
        assert!(matches!(
            parse_item_spec("Cortina,alta,1.0"),
            Err(Error::InvalidItemSpec(_))
        ));
        assert!(matches!(
            parse_item_spec("id=x,Cortina,2.0,1.0"),
            Err(Error::InvalidItemSpec(_))
        ));
    }

    #[test]
    fn test_parse_date_and_time() {
        assert!(parse_date("2026-08-23").is_ok());
        assert!(matches!(parse_date("23/08/2026"), Err(Error::DateParse(_))));
        assert!(parse_time("14:30").is_ok());
        assert!(matches!(parse_time("2pm"), Err(Error::DateParse(_))));
    }
}
