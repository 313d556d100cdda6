use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glowdex_resolver::{bucketize, build_detail, distinct_categories, to_listing_cards};
use tracing_subscriber::EnvFilter;

mod catalog;

#[derive(Debug, Parser)]
#[command(name = "glowdex-cli")]
#[command(about = "Multi-store catalog resolution for price comparison")]
struct Cli {
    /// Path to the store registry.
    #[arg(long, global = true, default_value = "config/stores.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// One summary card per canonical product, cheapest first.
    Cards {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Full multi-store offer list for one canonical id.
    Detail {
        /// Canonical id, plain or percent-encoded.
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Distinct raw categories across all configured feeds.
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Configured stores and where their feed snapshots live.
    Stores {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let stores = glowdex_core::load_stores(&cli.config)?;

    match cli.command {
        Commands::Cards { json } => run_cards(&cli.config, &stores, json),
        Commands::Detail { id, json } => run_detail(&cli.config, &stores, &id, json),
        Commands::Categories { json } => run_categories(&cli.config, &stores, json),
        Commands::Stores { json } => run_stores(&stores, json),
    }
}

fn run_cards(
    config: &std::path::Path,
    stores: &glowdex_core::StoresFile,
    json: bool,
) -> anyhow::Result<()> {
    let merged = catalog::load_catalog(config, stores)?;
    let listing_count = merged.len();
    let cards = to_listing_cards(&bucketize(merged));

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    for card in &cards {
        println!(
            "{:>12}  {:>2} store(s)  {:<32}  {}",
            fmt_price(card.min_price),
            card.store_count,
            card.display_name,
            card.canonical_id
        );
    }
    println!(
        "{} products from {} listings across {} store(s)",
        cards.len(),
        listing_count,
        stores.stores.len()
    );
    Ok(())
}

fn run_detail(
    config: &std::path::Path,
    stores: &glowdex_core::StoresFile,
    id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let merged = catalog::load_catalog(config, stores)?;
    let buckets = bucketize(merged);
    let Some(detail) = build_detail(&buckets, id) else {
        anyhow::bail!("no product with canonical id '{id}'");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{}  [{}]", detail.display_name, detail.category);
    if let Some(image) = &detail.image {
        println!("image: {image}");
    }
    for offer in &detail.offers {
        println!(
            "  {:<20} {:>12}  {:<12} {}",
            offer.store,
            fmt_price(offer.price),
            offer.stock.as_deref().unwrap_or("-"),
            offer.url.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn run_categories(
    config: &std::path::Path,
    stores: &glowdex_core::StoresFile,
    json: bool,
) -> anyhow::Result<()> {
    let merged = catalog::load_catalog(config, stores)?;
    let categories = distinct_categories(&merged);

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }
    for category in &categories {
        println!("{category}");
    }
    Ok(())
}

fn run_stores(stores: &glowdex_core::StoresFile, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&stores.stores)?);
        return Ok(());
    }
    for store in &stores.stores {
        println!(
            "{:<20} {:<24} {:<6} {}",
            store.slug(),
            store.name,
            store.currency.as_deref().unwrap_or("-"),
            store.feed.display()
        );
    }
    Ok(())
}

/// Table rendering of an optional price; unknown prices show as `n/a`,
/// never a bare zero.
fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "n/a".to_string(),
    }
}
