use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::AdminClient;
use shared::domain::ChefRecord;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "CHEF_API_URL", default_value = "http://localhost:3001")]
    api_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a chef, either by name or from a JSON record file.
    AddChef {
        #[arg(long, conflicts_with = "file")]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the admin chef listing as JSON.
    ListChefs,
}

fn record_from_args(
    name: Option<String>,
    location: Option<String>,
    cuisine: Option<String>,
    file: Option<PathBuf>,
) -> Result<ChefRecord> {
    let mut record = match (name, file) {
        (Some(name), None) => ChefRecord::named(name),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing chef record in {}", path.display()))?
        }
        _ => bail!("pass either --name or --file"),
    };
    if let Some(location) = location {
        record.location = location;
    }
    if let Some(cuisine) = cuisine {
        record.cuisine = cuisine;
    }
    Ok(record)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();
    let client = AdminClient::new(&cli.api_url)?;

    match cli.command {
        Command::AddChef {
            name,
            location,
            cuisine,
            file,
        } => {
            let record = record_from_args(name, location, cuisine, file)?;
            let chef_id = client.add_chef(record).await?;
            println!("created chef_id={chef_id}");
        }
        Command::ListChefs => {
            let chefs = client.list_chefs().await?;
            println!("{}", serde_json::to_string_pretty(&chefs)?);
        }
    }

    Ok(())
}
