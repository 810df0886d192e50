//! Required-column validation for the stats table

use csv::StringRecord;

use crate::LoadError;

/// Columns the loader requires, as written in the source header
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Name", "Type 1", "Type 2", "Generation", "HP", "Attack", "Defense", "Sp. Atk", "Sp. Def",
    "Speed", "Legendary",
];

/// Resolved positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub name: usize,
    pub type1: usize,
    pub type2: usize,
    pub generation: usize,
    pub hp: usize,
    pub attack: usize,
    pub defense: usize,
    pub sp_atk: usize,
    pub sp_def: usize,
    pub speed: usize,
    pub legendary: usize,
}

impl ColumnIndex {
    /// Map each required column to its position in the header row
    ///
    /// Header names are trimmed before matching; extra columns are ignored.
    /// Any missing required column fails the whole load.
    pub fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |wanted: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|header| header.trim() == wanted)
                .ok_or_else(|| LoadError::MissingColumn(wanted.to_string()))
        };

        Ok(Self {
            name: find("Name")?,
            type1: find("Type 1")?,
            type2: find("Type 2")?,
            generation: find("Generation")?,
            hp: find("HP")?,
            attack: find("Attack")?,
            defense: find("Defense")?,
            sp_atk: find("Sp. Atk")?,
            sp_def: find("Sp. Def")?,
            speed: find("Speed")?,
            legendary: find("Legendary")?,
        })
    }
}
