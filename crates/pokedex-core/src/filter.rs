//! Filter predicate configuration for dataset queries

use serde::{Deserialize, Serialize};

use crate::record::PokemonRecord;

/// Conjunctive filter over the dataset
///
/// Every option left unset imposes no constraint; all set options must hold
/// for a record to pass. The presentation layer builds one of these from
/// its widget or argument state and passes it into the pure query
/// functions, so no filter state is shared globally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicates {
    /// Keep records whose lower-cased name starts with this lower-cased prefix
    pub name_prefix: Option<String>,

    /// Keep records whose primary type equals this value
    pub type1: Option<String>,

    /// Keep records whose secondary type equals this value
    pub type2: Option<String>,

    /// Keep records from this generation
    pub generation: Option<u32>,

    /// When true, keep only legendary records; when false, no constraint
    pub legendary_only: bool,
}

impl FilterPredicates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    pub fn with_type1(mut self, type1: impl Into<String>) -> Self {
        self.type1 = Some(type1.into());
        self
    }

    pub fn with_type2(mut self, type2: impl Into<String>) -> Self {
        self.type2 = Some(type2.into());
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn legendary_only(mut self) -> Self {
        self.legendary_only = true;
        self
    }

    /// Whether every option is unset
    pub fn is_unconstrained(&self) -> bool {
        self.name_prefix.is_none()
            && self.type1.is_none()
            && self.type2.is_none()
            && self.generation.is_none()
            && !self.legendary_only
    }

    /// Check a record against every set predicate
    pub fn matches(&self, record: &PokemonRecord) -> bool {
        if let Some(prefix) = &self.name_prefix {
            if !record
                .name
                .to_lowercase()
                .starts_with(&prefix.to_lowercase())
            {
                return false;
            }
        }

        if let Some(type1) = &self.type1 {
            if record.type1 != *type1 {
                return false;
            }
        }

        if let Some(type2) = &self.type2 {
            if record.type2 != *type2 {
                return false;
            }
        }

        if let Some(generation) = self.generation {
            if record.generation != generation {
                return false;
            }
        }

        if self.legendary_only && !record.legendary {
            return false;
        }

        true
    }
}
