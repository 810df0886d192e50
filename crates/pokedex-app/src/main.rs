//! Pokédex data explorer entry point
//!
//! Thin presentation layer over `pokedex-core` and `pokedex-data`: loads
//! the table once, translates arguments into a predicate configuration,
//! and renders the results. A load failure is fatal; an empty query result
//! is an informational notice.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pokedex_core::{aggregate, EmptyResult, FilterPredicates};
use pokedex_data::CsvSource;

mod cli;
mod render;

use cli::{Cli, Commands, OutputFormat};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let dataset = CsvSource::new(&cli.data)
        .load()
        .with_context(|| format!("failed to load {}", cli.data.display()))?;

    match &cli.command {
        Commands::Types(filters) => {
            let predicates = FilterPredicates::from(filters);
            if predicates.is_unconstrained() {
                info!("aggregating the full dataset");
            } else {
                debug!(?predicates, "aggregating under filters");
            }

            let counts = aggregate(dataset.records(), &predicates);
            match counts.require_non_empty() {
                Ok(counts) => match cli.format {
                    OutputFormat::Table => print!("{}", render::histogram(counts)),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(counts)?),
                },
                Err(notice) => println!("{notice}"),
            }
        }

        Commands::List(filters) => {
            let predicates = FilterPredicates::from(filters);
            let records = dataset.filter(&predicates);
            if records.is_empty() {
                println!("{EmptyResult}");
            } else {
                match cli.format {
                    OutputFormat::Table => println!("{}", render::record_table(&records)),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
                }
            }
        }

        Commands::Show { name } => match dataset.find_by_name(name) {
            Some(record) => match cli.format {
                OutputFormat::Table => print!("{}", render::record_detail(record)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
            },
            None => println!("no record named {name:?}"),
        },

        Commands::Info => match cli.format {
            OutputFormat::Table => print!("{}", render::dataset_summary(&dataset)),
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "records": dataset.len(),
                    "generations": dataset.generations(),
                    "types": dataset.type_labels(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        },
    }

    Ok(())
}
