//! Type-distribution aggregation
//!
//! The one derived view every frontend renders: a histogram of type-label
//! occurrences over the records passing the active filters. A dual-typed
//! record contributes to both of its bins; the empty secondary slot never
//! appears in the output.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::filter::FilterPredicates;
use crate::record::PokemonRecord;

/// Non-fatal signal: the active predicates matched no records
///
/// The presentation layer surfaces this as an informational notice instead
/// of rendering an empty chart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no records matched the active filters")]
pub struct EmptyResult;

/// Histogram of type-label occurrences
///
/// Only labels with at least one occurrence are present. Labels are stored
/// in first-contribution order; [`TypeCount::by_count_desc`] gives the
/// deterministic display ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeCount {
    counts: IndexMap<String, usize>,
}

impl TypeCount {
    fn increment(&mut self, label: &str) {
        if let Some(count) = self.counts.get_mut(label) {
            *count += 1;
        } else {
            self.counts.insert(label.to_string(), 1);
        }
    }

    /// Occurrences of a label, 0 when absent
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Label/count pairs sorted by descending count, alphabetical on ties
    pub fn by_count_desc(&self) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(label, count)| (label.clone(), *count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        pairs
    }

    /// Err when nothing matched, so callers signal a notice instead of
    /// drawing an empty chart
    pub fn require_non_empty(&self) -> Result<&Self, EmptyResult> {
        if self.counts.is_empty() {
            Err(EmptyResult)
        } else {
            Ok(self)
        }
    }
}

/// Count type occurrences over the records passing every set predicate
///
/// Accepts the full dataset or any already-filtered subsequence. Each
/// surviving record contributes its primary type, plus its secondary type
/// when present. Pure over its inputs; an empty filtered set yields an
/// empty histogram.
pub fn aggregate(records: &[PokemonRecord], predicates: &FilterPredicates) -> TypeCount {
    let mut counts = TypeCount::default();
    for record in records.iter().filter(|r| predicates.matches(r)) {
        counts.increment(&record.type1);
        if !record.type2.is_empty() {
            counts.increment(&record.type2);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn record(name: &str, type1: &str, type2: &str, generation: u32) -> PokemonRecord {
        PokemonRecord {
            name: name.to_string(),
            type1: type1.to_string(),
            type2: type2.to_string(),
            generation,
            hp: 60,
            attack: 60,
            defense: 60,
            sp_atk: 60,
            sp_def: 60,
            speed: 60,
            legendary: false,
        }
    }

    fn sample() -> Vec<PokemonRecord> {
        vec![
            record("Charizard", "Fire", "Flying", 1),
            record("Pikachu", "Electric", "", 1),
            record("Moltres", "Fire", "Flying", 1),
        ]
    }

    #[test]
    fn unfiltered_counts_both_slots() {
        let counts = aggregate(&sample(), &FilterPredicates::new());
        assert_eq!(counts.get("Fire"), 2);
        assert_eq!(counts.get("Flying"), 2);
        assert_eq!(counts.get("Electric"), 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn total_equals_records_plus_dual_typed_records() {
        let records = sample();
        let counts = aggregate(&records, &FilterPredicates::new());
        let dual_typed = records.iter().filter(|r| !r.type2.is_empty()).count();
        assert_eq!(counts.total(), records.len() + dual_typed);
    }

    #[test]
    fn matching_generation_filter_changes_nothing() {
        let records = sample();
        let unfiltered = aggregate(&records, &FilterPredicates::new());
        let filtered = aggregate(&records, &FilterPredicates::new().with_generation(1));
        assert_eq!(unfiltered, filtered);
    }

    #[test]
    fn type1_filter_still_surfaces_secondary_bins() {
        // Filtering on type1 = Fire keeps the Fire/Flying records, whose
        // secondary slot still contributes a Flying bin.
        let counts = aggregate(&sample(), &FilterPredicates::new().with_type1("Fire"));
        assert_eq!(counts.get("Fire"), 2);
        assert_eq!(counts.get("Flying"), 2);
        assert_eq!(counts.get("Electric"), 0);
    }

    #[test]
    fn type1_filter_on_single_typed_record() {
        let counts = aggregate(&sample(), &FilterPredicates::new().with_type1("Electric"));
        assert_eq!(counts.by_count_desc(), vec![("Electric".to_string(), 1)]);
    }

    #[test]
    fn name_prefix_matches_case_insensitively() {
        let counts = aggregate(&sample(), &FilterPredicates::new().with_name_prefix("char"));
        assert_eq!(counts.get("Fire"), 1);
        assert_eq!(counts.get("Flying"), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn no_matches_yields_empty_histogram() {
        let counts = aggregate(&sample(), &FilterPredicates::new().with_generation(99));
        assert!(counts.is_empty());
        assert_eq!(counts.require_non_empty(), Err(EmptyResult));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records = sample();
        let predicates = FilterPredicates::new().with_type1("Fire");
        assert_eq!(
            aggregate(&records, &predicates),
            aggregate(&records, &predicates)
        );
    }

    #[test]
    fn display_order_is_count_desc_then_alphabetical() {
        let records = vec![
            record("Zapdos", "Electric", "Flying", 1),
            record("Pikachu", "Electric", "", 1),
            record("Charizard", "Fire", "Flying", 1),
            record("Vulpix", "Fire", "", 1),
        ];
        let counts = aggregate(&records, &FilterPredicates::new());
        // Electric and Fire tie at 2, Flying ties too; alphabetical breaks it.
        assert_eq!(
            counts.by_count_desc(),
            vec![
                ("Electric".to_string(), 2),
                ("Fire".to_string(), 2),
                ("Flying".to_string(), 2),
            ]
        );
    }

    fn record_strategy() -> impl Strategy<Value = PokemonRecord> {
        let primary = prop::sample::select(vec![
            "Fire", "Water", "Grass", "Electric", "Psychic", "Rock",
        ]);
        let secondary = prop::sample::select(vec![
            "", "Flying", "Poison", "Ground", "Steel",
        ]);
        ("[A-Za-z]{3,12}", primary, secondary, 1u32..=9u32, any::<bool>()).prop_map(
            |(name, type1, type2, generation, legendary)| PokemonRecord {
                name,
                type1: type1.to_string(),
                type2: type2.to_string(),
                generation,
                hp: 50,
                attack: 50,
                defense: 50,
                sp_atk: 50,
                sp_def: 50,
                speed: 50,
                legendary,
            },
        )
    }

    proptest! {
        #[test]
        fn unfiltered_total_counts_every_occupied_slot(
            records in prop::collection::vec(record_strategy(), 0..64)
        ) {
            let counts = aggregate(&records, &FilterPredicates::new());
            let dual_typed = records.iter().filter(|r| !r.type2.is_empty()).count();
            prop_assert_eq!(counts.total(), records.len() + dual_typed);
        }

        #[test]
        fn generation_filter_only_counts_that_generation(
            records in prop::collection::vec(record_strategy(), 0..64),
            generation in 1u32..=9u32,
        ) {
            let predicates = FilterPredicates::new().with_generation(generation);
            let counts = aggregate(&records, &predicates);
            let expected: usize = records
                .iter()
                .filter(|r| r.generation == generation)
                .map(|r| if r.type2.is_empty() { 1 } else { 2 })
                .sum();
            prop_assert_eq!(counts.total(), expected);
        }
    }
}
