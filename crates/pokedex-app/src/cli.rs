//! Command-line interface definitions

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pokedex_core::FilterPredicates;

/// Pokédex data explorer
#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about = "Browse and aggregate a Pokémon stats table")]
pub struct Cli {
    /// Path to the delimited stats table
    #[arg(long, global = true, default_value = "pokedata.csv")]
    pub data: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the type-distribution histogram under the active filters
    Types(FilterArgs),

    /// List the records passing the active filters
    List(FilterArgs),

    /// Show every field of a single record
    Show {
        /// Species name, matched case-insensitively
        name: String,
    },

    /// Summarize the loaded table: row count, generations, type labels
    Info,
}

/// Output format for query results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Filter flags shared by the aggregate and listing commands
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Keep records whose name starts with this prefix (case-insensitive)
    #[arg(long)]
    pub name_prefix: Option<String>,

    /// Keep records whose primary type equals this value
    #[arg(long)]
    pub type1: Option<String>,

    /// Keep records whose secondary type equals this value
    #[arg(long)]
    pub type2: Option<String>,

    /// Keep records from this generation
    #[arg(long)]
    pub generation: Option<u32>,

    /// Keep only legendary records
    #[arg(long)]
    pub legendary: bool,
}

impl From<&FilterArgs> for FilterPredicates {
    fn from(args: &FilterArgs) -> Self {
        FilterPredicates {
            name_prefix: args.name_prefix.clone(),
            type1: args.type1.clone(),
            type2: args.type2.clone(),
            generation: args.generation,
            legendary_only: args.legendary,
        }
    }
}
