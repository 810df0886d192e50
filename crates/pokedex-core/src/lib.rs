//! Core domain model and aggregation for the Pokédex data explorer
//!
//! This crate holds the record model, the filter predicates, and the pure
//! type-aggregation routine. It performs no I/O; loading lives in
//! `pokedex-data`, and all rendering lives in the presentation layer.

pub mod aggregate;
pub mod filter;
pub mod record;

// Re-export commonly used types
pub use aggregate::{aggregate, EmptyResult, TypeCount};
pub use filter::FilterPredicates;
pub use record::{Dataset, PokemonRecord};
