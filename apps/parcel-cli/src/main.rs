//! Parcel CLI Binary
//!
//! Operator entry point: batch triple extraction from assessor text exports
//! and one-shot queries against the tax-lot dataset.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use parcel_engine::{extract, index::PropertyIndex, ParcelEngine};
use parcel_types::{LatLng, SearchQuery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "parcel-cli")]
#[command(version, about = "Legal-description extraction and tax-lot search")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract lot/block/section triples from a text corpus as CSV
    Extract {
        /// Path to the assessor text export
        corpus: PathBuf,

        /// Write the CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Query the tax-lot dataset and print markers plus the route decision
    Search {
        /// Path to the tax-lot feature collection (GeoJSON)
        #[arg(long)]
        dataset: PathBuf,

        /// Lot number
        #[arg(long, default_value = "")]
        lot: String,

        /// Block number
        #[arg(long, default_value = "")]
        block: String,

        /// Section number
        #[arg(long, default_value = "")]
        section: String,

        /// Known origin as "lat,lng"; enables route triggering
        #[arg(long)]
        origin: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // diagnostics go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("parcel-cli v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Extract { corpus, output } => run_extract(&corpus, output.as_deref()),
        Command::Search {
            dataset,
            lot,
            block,
            section,
            origin,
        } => run_search(&dataset, SearchQuery::new(lot, block, section), origin),
    }
}

fn run_extract(corpus: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    // a missing corpus is fatal; there is no partial-run recovery
    let text = fs::read_to_string(corpus)
        .with_context(|| format!("failed to read corpus {}", corpus.display()))?;

    let triples = extract::extract_triples(&text);
    tracing::info!("Extracted {} triples from {}", triples.len(), corpus.display());

    let csv = extract::to_csv(&triples);
    match output {
        Some(path) => fs::write(path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", csv),
    }
    Ok(())
}

fn run_search(dataset: &Path, query: SearchQuery, origin: Option<String>) -> anyhow::Result<()> {
    let origin = origin.as_deref().map(parse_origin).transpose()?;

    let index = PropertyIndex::load_from_path(dataset)
        .with_context(|| format!("failed to load dataset {}", dataset.display()))?;
    let engine = ParcelEngine::new(index);

    let (markers, route) = engine.evaluate(&query, origin);
    if !query.is_complete() {
        tracing::info!("Query incomplete; no filtering performed");
    } else {
        tracing::info!("Query matched {} features", markers.len());
    }

    let report = serde_json::json!({
        "markers": markers,
        "route": route,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Parse a "lat,lng" pair.
fn parse_origin(raw: &str) -> anyhow::Result<LatLng> {
    let (lat, lng) = match raw.split_once(',') {
        Some(parts) => parts,
        None => bail!("origin must be \"lat,lng\", got {:?}", raw),
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("bad origin latitude {:?}", lat))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("bad origin longitude {:?}", lng))?;
    Ok(LatLng::new(lat, lng))
}
