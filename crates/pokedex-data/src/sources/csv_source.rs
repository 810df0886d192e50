//! CSV-backed source for the Pokémon stats table

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use pokedex_core::{Dataset, PokemonRecord};

use crate::config::LoaderConfig;
use crate::schema::ColumnIndex;
use crate::LoadError;

/// Loader for a delimited stats table
pub struct CsvSource {
    /// Path to the delimited file
    path: PathBuf,

    /// Loader configuration
    config: LoaderConfig,
}

impl CsvSource {
    /// Create a source with the default configuration
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: LoaderConfig::default(),
        }
    }

    /// Override the loader configuration
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, validate, and normalize the whole table
    ///
    /// A missing file or a missing required column is fatal. Individual
    /// rows that cannot satisfy the record invariants are dropped with a
    /// warning; field-level oddities are coerced instead.
    pub fn load(&self) -> Result<Dataset, LoadError> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.config.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (row_idx, result) in reader.records().enumerate() {
            let row = result?;
            match self.normalize_row(&row, &columns) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    warn!(row = row_idx + 1, "dropping row with empty name or primary type");
                }
            }
        }

        if records.is_empty() {
            return Err(LoadError::Empty(self.path.display().to_string()));
        }

        info!(
            rows = records.len(),
            dropped,
            path = %self.path.display(),
            "loaded stats table"
        );

        Ok(Dataset::new(records))
    }

    /// Build a normalized record from a raw row
    ///
    /// Returns `None` when the row cannot satisfy the non-empty name and
    /// primary type invariants.
    fn normalize_row(&self, row: &StringRecord, columns: &ColumnIndex) -> Option<PokemonRecord> {
        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let name = field(columns.name);
        let type1 = field(columns.type1);
        if name.is_empty() || type1.is_empty() {
            return None;
        }

        // Blank and missing secondary types both normalize to the empty
        // string; downstream code never sees a null.
        let type2_raw = field(columns.type2);
        let type2 = if self.config.blank_policy.is_blank(type2_raw) {
            ""
        } else {
            type2_raw
        };

        Some(PokemonRecord {
            name: name.to_string(),
            type1: type1.to_string(),
            type2: type2.to_string(),
            // Generations are 1-based.
            generation: parse_int(field(columns.generation)).max(1),
            hp: parse_int(field(columns.hp)),
            attack: parse_int(field(columns.attack)),
            defense: parse_int(field(columns.defense)),
            sp_atk: parse_int(field(columns.sp_atk)),
            sp_def: parse_int(field(columns.sp_def)),
            speed: parse_int(field(columns.speed)),
            legendary: parse_bool(field(columns.legendary)),
        })
    }
}

/// Lenient integer coercion: integer parse, then float truncation, then 0
///
/// The source data round-trips through spreadsheet tools that rewrite
/// integer columns as floats.
fn parse_int(value: &str) -> u32 {
    if let Ok(parsed) = value.parse::<u32>() {
        return parsed;
    }
    value
        .parse::<f64>()
        .map(|parsed| parsed.max(0.0) as u32)
        .unwrap_or(0)
}

/// Boolean coercion over the common spreadsheet spellings
fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
