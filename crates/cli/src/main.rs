//! Supply Stall CLI - browse, buy and sell raw materials from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally only what is in stock
//! stall catalog --in-stock
//!
//! # Search businesses and items, optionally drilling into one business
//! stall search tomato --business "Fresh Farm Supplies Co."
//!
//! # Put items in the cart (repeat an id to add more) and check out
//! stall checkout --item 1 --item 1 --item 3
//!
//! # Save items to the wishlist and move some to the cart
//! stall wishlist --item 2 --item 6 --move 2
//!
//! # Buyer order history, or put a past order back in the cart
//! stall orders --reorder ORD-001
//!
//! # Seller dashboard
//! stall seller products
//! stall seller add --name "Garlic" --category Spices --price 3.5 --unit kg --stock 40 --description "Purple garlic"
//! stall seller stats
//! stall seller reviews
//! stall seller ship ORD-001
//! ```
//!
//! Add `--json` to any command for machine-readable output. Logs go to
//! stderr; see [`config`] for environment variables.
//!
//! Every invocation starts from the configured catalog and the demo buyer
//! and seller state; nothing is persisted between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use supply_stall_core::{ItemId, ListingId, OrderNumber};

mod commands;
mod config;
mod output;

use config::{LogFormat, StallConfig};
use output::Printer;

#[derive(Parser)]
#[command(name = "stall")]
#[command(author, version, about = "Supply Stall marketplace tools")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items
    Catalog {
        /// Only show items that are in stock
        #[arg(long)]
        in_stock: bool,
    },
    /// Search businesses and items by name, category or description
    Search {
        /// Text to search for (case-insensitive)
        query: String,

        /// Drill into the products of this business
        #[arg(short, long)]
        business: Option<String>,
    },
    /// Add items to the cart and show the checkout summary
    Checkout {
        /// Item id to add; repeat to add more than one
        #[arg(short, long = "item")]
        items: Vec<ItemId>,
    },
    /// Save items to the wishlist
    Wishlist {
        /// Item id to save
        #[arg(short, long = "item")]
        items: Vec<ItemId>,

        /// Wishlisted item id to also add to the cart
        #[arg(long = "move")]
        move_to_cart: Vec<ItemId>,
    },
    /// Show buyer order history
    Orders {
        /// Put this order's items back in the cart
        #[arg(long)]
        reorder: Option<OrderNumber>,
    },
    /// Manage the seller dashboard
    Seller {
        #[command(subcommand)]
        action: SellerAction,
    },
}

#[derive(Subcommand)]
enum SellerAction {
    /// List product listings
    Products,
    /// Add a product listing
    Add(commands::seller::ProductArgs),
    /// Edit a product listing; leaving out --image keeps the current one
    Update {
        /// Listing id
        id: ListingId,

        #[command(flatten)]
        product: commands::seller::ProductArgs,
    },
    /// Delete a product listing
    Delete {
        /// Listing id
        id: ListingId,
    },
    /// Show dashboard stats
    Stats,
    /// Show incoming orders
    Orders,
    /// Show customer reviews
    Reviews,
    /// Mark a pending order as shipped
    Ship {
        /// Order number (e.g., ORD-001)
        order: OrderNumber,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = StallConfig::from_env();

    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::Pretty, |config| config.log_format),
    );

    let result: Result<(), Box<dyn std::error::Error>> = match config {
        Ok(config) => run(cli, &config),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "supply_stall=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn run(cli: Cli, config: &StallConfig) -> Result<(), Box<dyn std::error::Error>> {
    let printer = Printer::new(cli.json);
    let threshold = config.verified_threshold;

    match cli.command {
        Commands::Catalog { in_stock } => {
            let catalog = config.load_catalog()?;
            commands::catalog::list(&catalog, in_stock, threshold, printer)?;
        }
        Commands::Search { query, business } => {
            let catalog = config.load_catalog()?;
            commands::search::run(catalog, &query, business.as_deref(), threshold, printer)?;
        }
        Commands::Checkout { items } => {
            let catalog = config.load_catalog()?;
            commands::checkout::run(catalog, &items, printer)?;
        }
        Commands::Wishlist {
            items,
            move_to_cart,
        } => {
            let catalog = config.load_catalog()?;
            commands::wishlist::run(catalog, &items, &move_to_cart, threshold, printer)?;
        }
        Commands::Orders { reorder } => {
            let catalog = config.load_catalog()?;
            commands::orders::run(catalog, reorder.as_ref(), printer)?;
        }
        Commands::Seller { action } => {
            let mut dashboard = supply_stall_seller::SellerDashboard::demo();
            match action {
                SellerAction::Products => commands::seller::products(&dashboard, printer)?,
                SellerAction::Add(product) => {
                    commands::seller::add(&mut dashboard, product.into(), printer)?;
                }
                SellerAction::Update { id, product } => {
                    commands::seller::update(&mut dashboard, id, product.into(), printer)?;
                }
                SellerAction::Delete { id } => {
                    commands::seller::delete(&mut dashboard, id, printer)?;
                }
                SellerAction::Stats => commands::seller::stats(&dashboard, printer)?,
                SellerAction::Orders => commands::seller::orders(&dashboard, printer)?,
                SellerAction::Reviews => commands::seller::reviews(&dashboard, printer)?,
                SellerAction::Ship { order } => {
                    commands::seller::ship(&mut dashboard, &order, printer)?;
                }
            }
        }
    }
    Ok(())
}
