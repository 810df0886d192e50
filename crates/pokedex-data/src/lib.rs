//! Dataset loading for the Pokédex data explorer
//!
//! Reads the delimited stats table from disk, validates the required
//! columns, and normalizes every row into a
//! [`pokedex_core::PokemonRecord`]. The resulting [`Dataset`] is built once
//! at startup and treated as read-only afterwards.
//!
//! [`Dataset`]: pokedex_core::Dataset

pub mod config;
pub mod schema;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use config::{BlankPolicy, LoaderConfig};
pub use schema::ColumnIndex;
pub use sources::CsvSource;

/// Errors that can occur while loading the dataset
///
/// Every variant is fatal: the caller reports it and exits without
/// rendering the main view.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("no usable rows in {0}")]
    Empty(String),
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                LoadError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => LoadError::Csv(error.to_string()),
        }
    }
}

/// Load the stats table with the default configuration
pub fn load(path: impl Into<std::path::PathBuf>) -> Result<pokedex_core::Dataset, LoadError> {
    CsvSource::new(path).load()
}
