//! Main entry point for the Billed CLI
//! Lists and records expense bills against a JSON-file-backed store.

use anyhow::Result;
use billed::application::bills::{
    bills_in_display_order, format_date, format_status, validate_justification, with_display_dates,
};
use billed::domain::{Bill, BillStatus};
use billed::infra::app_config::{self, AppConfig};
use billed::infra::store::{BillStore, JsonFileBillStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "billed", about = "Expense bill listing and submission")]
struct Cli {
    /// Bill store file (defaults to BILLED_STORE_PATH, then the config file)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bills, most recent first
    List,
    /// Record a new bill
    Add {
        /// Short label for the expense
        #[arg(long)]
        name: String,
        /// Claim date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Amount in euros
        #[arg(long)]
        amount: f64,
        /// Expense category
        #[arg(long = "type")]
        bill_type: Option<String>,
        /// Justification file name (jpg, jpeg or png)
        #[arg(long)]
        file: Option<String>,
    },
    /// Remember a store file path in the config
    SetStore { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let store = JsonFileBillStore::new(app_config::resolve_store_path(cli.store));
            billed::block_on(list_bills(&store))
        }
        Commands::Add {
            name,
            date,
            amount,
            bill_type,
            file,
        } => {
            let store = JsonFileBillStore::new(app_config::resolve_store_path(cli.store));
            billed::block_on(add_bill(&store, name, date, amount, bill_type, file))
        }
        Commands::SetStore { path } => {
            let config = AppConfig {
                store_path: Some(path.clone()),
            };
            app_config::save_config(&config)?;
            println!("Store path set to {}", path.display());
            Ok(())
        }
    }
}

async fn list_bills(store: &dyn BillStore) -> Result<()> {
    let bills = store.list().await?;
    // Order on the raw ISO dates, then rewrite them for display.
    let ordered: Vec<Bill> = bills_in_display_order(&bills).into_iter().cloned().collect();
    let ordered = with_display_dates(ordered);

    if ordered.is_empty() {
        println!("No bills recorded.");
        return Ok(());
    }
    for bill in &ordered {
        let status = bill.status.map(format_status).unwrap_or("-");
        println!(
            "{:<12} {:<24} {:>10.2} €  {}",
            bill.date,
            bill.name.as_deref().unwrap_or("(unnamed)"),
            bill.amount.unwrap_or(0.0),
            status,
        );
    }
    Ok(())
}

async fn add_bill(
    store: &dyn BillStore,
    name: String,
    date: String,
    amount: f64,
    bill_type: Option<String>,
    file: Option<String>,
) -> Result<()> {
    if let Some(file_name) = &file {
        validate_justification(file_name)?;
    }
    if let Err(err) = format_date(&date) {
        log::warn!("Date will display unformatted: {err}");
    }

    let bill = Bill {
        name: Some(name),
        date,
        amount: Some(amount),
        bill_type,
        file_name: file,
        status: Some(BillStatus::Pending),
        ..Default::default()
    };
    let created = store.create(bill).await?;
    println!("Recorded bill {}", created.id);
    Ok(())
}
