//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gestor_types::OutputFormat;

#[derive(Parser)]
#[command(name = "gestor-os")]
#[command(version)]
#[command(about = "Client, service order and stock management for a window-covering installer")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage clients
    Client {
        #[command(subcommand)]
        command: ClientCommand,
    },

    /// Manage service orders
    Order {
        #[command(subcommand)]
        command: OrderCommand,
    },

    /// Manage stock
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum ClientCommand {
    /// Register a client
    Add {
        /// Full name or company name
        name: String,

        /// CPF or CNPJ
        #[arg(long)]
        cpf_cnpj: String,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// List clients
    List {
        /// Filter by name, CPF/CNPJ or email (substring, case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Edit a client; only the given fields change
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        cpf_cnpj: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a client
    Remove { id: u64 },
}

#[derive(Subcommand)]
pub enum OrderCommand {
    /// Open a service order
    Add {
        /// Client id
        #[arg(long)]
        client: u64,

        /// Service date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Service time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Free-text materials/notes
        #[arg(long)]
        materials: Option<String>,

        /// Order status
        #[arg(long, default_value = "Agendada")]
        status: String,

        /// Line item: "CATEGORY,HEIGHT,WIDTH[,MATERIAL]" (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// List orders
    List {
        /// Filter by client name or status (substring, case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Edit an order. --item replaces the item list: specs carrying
    /// "id=N," update stored items, omitted stored items are deleted,
    /// specs without an id are added. Omit --item to keep items as-is.
    Edit {
        id: u64,

        #[arg(long)]
        client: Option<u64>,

        /// Service date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Service time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        materials: Option<String>,

        #[arg(long)]
        status: Option<String>,

        /// Line item: "[id=N,]CATEGORY,HEIGHT,WIDTH[,MATERIAL]" (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Print the estimation sheet for an order
    Sheet { id: u64 },

    /// Remove an order
    Remove { id: u64 },
}

#[derive(Subcommand)]
pub enum StockCommand {
    /// Register a stock item
    Add {
        /// Product name
        product: String,

        /// Product category (e.g. "Cortina", "Trilho")
        #[arg(long)]
        category: String,

        #[arg(long, default_value_t = 1)]
        quantity: u32,

        #[arg(long, default_value = "Em estoque")]
        status: String,

        /// Owning client id
        #[arg(long)]
        client: Option<u64>,

        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        received: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List stock items
    List {
        /// Filter by product, category, status or client name
        #[arg(long)]
        filter: Option<String>,
    },

    /// Edit a stock item; only the given fields change
    Edit {
        id: u64,

        #[arg(long)]
        product: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        quantity: Option<u32>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        client: Option<u64>,

        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        received: Option<String>,

        /// Exit date (YYYY-MM-DD)
        #[arg(long)]
        dispatched: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a stock item
    Remove { id: u64 },
}
