//! # Pricetag CLI
//!
//! ```text
//! pricetag parse "Молоко 2.5% 1л. Цена: 89.90 руб"
//! pricetag add-product --name "Молоко 2.5%" --barcode 4607025392244
//! pricetag record --store "Магнит" < tag.txt
//! pricetag history <PRODUCT_ID>
//! pricetag products --limit 20
//! ```
//!
//! Results go to stdout as pretty JSON; logs go to stderr (`RUST_LOG`).

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use pricetag_db::{Database, DbConfig};

#[derive(Parser)]
#[command(name = "pricetag")]
#[command(about = "Price tag OCR parsing and price history tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse OCR text and print the extracted fields
    Parse {
        /// OCR text (read from stdin when omitted)
        text: Option<String>,
    },
    /// Register a product
    AddProduct {
        /// Display name
        #[arg(long)]
        name: String,
        /// EAN-13, EAN-8 or UPC-A barcode
        #[arg(long)]
        barcode: Option<String>,
    },
    /// Parse OCR text and append the price to a product's history
    Record {
        /// Product ID (looked up by the parsed barcode when omitted)
        #[arg(long)]
        product: Option<String>,
        /// Store where the tag was scanned
        #[arg(long)]
        store: Option<String>,
        /// OCR text (read from stdin when omitted)
        text: Option<String>,
    },
    /// Show a product's price history and summary
    History {
        /// Product ID
        product_id: String,
    },
    /// List products
    Products {
        /// Maximum number of products to print
        #[arg(short, long, default_value_t = 50)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        // Parsing needs no database
        Commands::Parse { text } => {
            let text = commands::read_text(text)?;
            commands::parse(&text, &config.parser)
        }
        command => {
            let db_path = config.database_path()?;
            let db_config = DbConfig::new(&db_path).max_price(config.parser.max_price);
            let db = Database::new(db_config).await?;
            info!(path = %db_path.display(), "Database ready");

            let outcome = run(&db, &config, command).await;
            db.close().await;
            outcome
        }
    }
}

async fn run(db: &Database, config: &AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Parse { text } => commands::parse(&commands::read_text(text)?, &config.parser),
        Commands::AddProduct { name, barcode } => {
            commands::add_product(db, &name, barcode.as_deref()).await
        }
        Commands::Record {
            product,
            store,
            text,
        } => {
            let text = commands::read_text(text)?;
            commands::record(db, &config.parser, product.as_deref(), store, &text).await
        }
        Commands::History { product_id } => commands::history(db, &product_id).await,
        Commands::Products { limit } => commands::products(db, limit).await,
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pricetag=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
