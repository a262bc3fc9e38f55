use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    load_explore_view, AggregatorSettings, ChefAggregator, ClientError, FormRelayClient,
    SearchCriteria,
};
use shared::protocol::FormFields;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Browse chefs and send contact or booking forms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List static and remote chefs, optionally filtered.
    List {
        /// Chef API base URL. Repeat to add fallbacks, tried in order.
        #[arg(
            long = "endpoint",
            env = "CHEF_ENDPOINTS",
            value_delimiter = ',',
            default_value = "http://localhost:3001"
        )]
        endpoints: Vec<String>,
        /// Per-endpoint timeout in milliseconds.
        #[arg(long, env = "CHEF_TIMEOUT_MS")]
        timeout_ms: Option<u64>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        dietary: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Send a form to the mail relay.
    SendForm {
        #[arg(
            long,
            env = "RELAY_URL",
            default_value = "http://localhost:3001/send-email"
        )]
        relay_url: String,
        /// Form field as `name=value`. Repeatable.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Fields that must be non-blank before sending.
        #[arg(long, value_delimiter = ',', default_value = "name,email")]
        required: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::List {
            endpoints,
            timeout_ms,
            location,
            cuisine,
            dietary,
            format,
        } => {
            let aggregator = ChefAggregator::new(AggregatorSettings {
                endpoints,
                per_endpoint_timeout: timeout_ms.map(Duration::from_millis),
            })?;
            let criteria = SearchCriteria {
                location,
                cuisine,
                dietary,
            };
            list(&aggregator, &criteria, format).await
        }
        Command::SendForm {
            relay_url,
            fields,
            required,
        } => send_form(&relay_url, fields.into_iter().collect(), required).await,
    }
}

async fn list(aggregator: &ChefAggregator, criteria: &SearchCriteria, format: Format) -> Result<()> {
    let (mut view, chefs) = load_explore_view(aggregator).await;
    if !criteria.is_empty() {
        view.apply_search(criteria);
    }
    info!(total = chefs.len(), shown = view.visible_count(), "chefs loaded");

    match format {
        Format::Html => print!("{}", view.to_html()),
        Format::Json => {
            let shown: Vec<_> = chefs
                .iter()
                .zip(view.cards())
                .filter(|(_, card)| card.visible)
                .map(|(chef, _)| chef)
                .collect();
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
        Format::Text => {
            for card in view.visible_cards() {
                println!(
                    "{:<20} {:<28} {:<10} {}",
                    card.name, card.location, card.data_cuisine, card.rating_text
                );
            }
            if view.shows_empty_state() {
                println!("No chefs found matching your criteria");
            }
            if let Some(feedback) = view.feedback() {
                println!("{feedback}");
            }
        }
    }
    Ok(())
}

async fn send_form(relay_url: &str, form: FormFields, required: Vec<String>) -> Result<()> {
    let client = FormRelayClient::new(relay_url, required).context("invalid relay url")?;
    match client.send(&form).await {
        Ok(()) => {
            println!("Thank you! Your message has been sent.");
            Ok(())
        }
        Err(ClientError::Validation(message)) => bail!(message),
        Err(ClientError::RelayRejected(reason)) => {
            bail!("Sorry, there was an error sending your message: {reason}")
        }
        Err(other) => Err(other).context("could not reach the mail relay"),
    }
}
