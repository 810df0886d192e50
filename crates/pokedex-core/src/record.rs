//! Record model for the Pokédex dataset

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::filter::FilterPredicates;

/// A single species row, normalized at load time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Species name, whitespace-trimmed
    pub name: String,

    /// Primary type, always non-empty
    pub type1: String,

    /// Secondary type; the empty string for single-typed species
    pub type2: String,

    /// Release-era grouping, 1-based
    pub generation: u32,

    /// Base stats
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,

    /// Rare/special species flag
    pub legendary: bool,
}

impl PokemonRecord {
    /// Combined display label: `Type1`, or `Type1/Type2` for dual-typed species.
    ///
    /// Display-only. Filtering and aggregation always consult the separate
    /// type fields so that a single-type query can match either slot of a
    /// dual-typed record.
    pub fn type_label(&self) -> String {
        if self.type2.is_empty() {
            self.type1.clone()
        } else {
            format!("{}/{}", self.type1, self.type2)
        }
    }

    /// Sum of the six base stats
    pub fn stat_total(&self) -> u32 {
        self.hp + self.attack + self.defense + self.sp_atk + self.sp_def + self.speed
    }
}

/// The loaded table, read-only for the life of the process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<PokemonRecord>,
}

impl Dataset {
    /// Wrap an already-normalized set of records
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Self { records }
    }

    /// All records in load order
    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PokemonRecord> {
        self.records.iter()
    }

    /// Sorted distinct type labels across both slots
    ///
    /// The empty secondary slot never contributes a label. This is the set
    /// a frontend offers as type filter choices.
    pub fn type_labels(&self) -> Vec<String> {
        let mut labels = BTreeSet::new();
        for record in &self.records {
            labels.insert(record.type1.clone());
            if !record.type2.is_empty() {
                labels.insert(record.type2.clone());
            }
        }
        labels.into_iter().collect()
    }

    /// Sorted distinct generations present in the data
    pub fn generations(&self) -> Vec<u32> {
        let gens: BTreeSet<u32> = self.records.iter().map(|r| r.generation).collect();
        gens.into_iter().collect()
    }

    /// Case-insensitive exact name lookup, first match wins
    pub fn find_by_name(&self, name: &str) -> Option<&PokemonRecord> {
        let needle = name.trim().to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == needle)
    }

    /// Records passing every set predicate
    pub fn filter<'a>(&'a self, predicates: &FilterPredicates) -> Vec<&'a PokemonRecord> {
        self.records.iter().filter(|r| predicates.matches(r)).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PokemonRecord;
    type IntoIter = std::slice::Iter<'a, PokemonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
