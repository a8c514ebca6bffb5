//! dmcat - DM-01 card catalog generator
//!
//! Builds the static card catalog from a store of saved wiki pages, and can
//! deal a sample opening hand from a generated catalog.

use clap::{Parser, Subcommand, ValueEnum};
use dm_catalog_rs::{
    catalog::{Catalog, RecordBuilder, DEFAULT_IMAGES_DIR},
    game::GameState,
    loader::{Anomaly, AsyncPageLoader, PageLoader},
    Result,
};
use std::path::PathBuf;

/// Catalog serialization format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain JSON array (cardData.json)
    Json,
    /// ES module exporting the card array (cardData.js)
    Js,
}

#[derive(Parser)]
#[command(name = "dmcat")]
#[command(about = "DM-01 card catalog generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the card catalog from a page store
    Generate {
        /// Directory of <image file name>.wikitext documents
        pages: PathBuf,

        /// Output path
        #[arg(long, short = 'o', default_value = "cardData.json")]
        out: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Directory name joined onto card image paths
        #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
        images_dir: String,

        /// Manifest pinning catalog order (one image file name per line)
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Load pages concurrently
        #[arg(long)]
        parallel: bool,

        /// Suppress per-card warnings
        #[arg(long, short = 'q')]
        quiet: bool,
    },
    /// Deal an opening hand from a generated catalog
    Hand {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Random seed for a reproducible deal
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            pages,
            out,
            format,
            images_dir,
            manifest,
            parallel,
            quiet,
        } => run_generate(pages, out, format, images_dir, manifest, parallel, quiet).await?,
        Commands::Hand { catalog, seed } => run_hand(catalog, seed)?,
    }

    Ok(())
}

async fn run_generate(
    pages: PathBuf,
    out: PathBuf,
    format: OutputFormat,
    images_dir: String,
    manifest: Option<PathBuf>,
    parallel: bool,
    quiet: bool,
) -> Result<()> {
    let builder = RecordBuilder::with_images_dir(images_dir);

    let outcome = if let Some(manifest) = manifest {
        PageLoader::with_builder(builder).load_manifest(&pages, &manifest)?
    } else if parallel {
        AsyncPageLoader::with_builder(builder).load_dir(&pages).await?
    } else {
        PageLoader::with_builder(builder).load_dir(&pages)?
    };

    if !quiet {
        for anomaly in &outcome.anomalies {
            warn_anomaly(anomaly);
        }
    }

    let catalog = outcome.catalog;
    let serialized = match format {
        OutputFormat::Json => catalog.to_json()?,
        OutputFormat::Js => catalog.to_js_module()?,
    };
    std::fs::write(&out, serialized)?;

    println!("Wrote {} cards to {}", catalog.len(), out.display());
    Ok(())
}

fn warn_anomaly(anomaly: &Anomaly) {
    if anomaly.missing_page {
        eprintln!("warning: no stored page for {}", anomaly.name);
    }
    if !anomaly.report.missing.is_empty() {
        eprintln!(
            "warning: missing fields for {}: {}",
            anomaly.name,
            anomaly.report.missing.join(", ")
        );
    }
    for (field, raw) in &anomaly.report.malformed {
        eprintln!(
            "warning: non-numeric {field} for {}: {raw:?} (defaulting to 0)",
            anomaly.name
        );
    }
}

fn run_hand(catalog_path: PathBuf, seed: u64) -> Result<()> {
    let json = std::fs::read_to_string(&catalog_path)?;
    let catalog = Catalog::from_json(&json)?;
    let state = GameState::deal(&catalog, seed);

    println!(
        "Opening hand ({} of {} cards, seed {seed}):",
        state.hand.len(),
        catalog.len()
    );
    for id in &state.hand.cards {
        match catalog.get(id.as_str()) {
            Some(card) => {
                let abilities: Vec<&str> = card.abilities.iter().map(|a| a.as_str()).collect();
                println!(
                    "  {} (cost {}, power {}) [{}]",
                    card.name,
                    card.cost,
                    card.power,
                    abilities.join(", ")
                );
            }
            None => println!("  {id}"),
        }
    }
    println!("{} cards left in the deck", state.deck.len());
    Ok(())
}
