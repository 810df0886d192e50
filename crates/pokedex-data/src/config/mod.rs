//! Loader configuration

use serde::{Deserialize, Serialize};

/// Values treated as an absent field during normalization
///
/// Spreadsheet exports disagree on how a missing secondary type is
/// written; every pattern here normalizes to the empty string, so
/// downstream code never distinguishes blank from missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlankPolicy {
    /// Patterns to treat as absent
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for BlankPolicy {
    fn default() -> Self {
        Self {
            patterns: vec![
                String::new(),
                "-".to_string(),
                "N/A".to_string(),
                "NaN".to_string(),
                "null".to_string(),
                "None".to_string(),
            ],
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl BlankPolicy {
    /// Check if a raw field should be treated as absent
    pub fn is_blank(&self, value: &str) -> bool {
        let test_value = if self.trim_whitespace {
            value.trim()
        } else {
            value
        };

        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                test_value == pattern
            } else {
                test_value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Add a blank pattern
    pub fn add_pattern(&mut self, pattern: String) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}

/// Configuration for loading the stats table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field delimiter
    pub delimiter: u8,

    /// Blank-value handling
    pub blank_policy: BlankPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            blank_policy: BlankPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_recognizes_common_blank_spellings() {
        let policy = BlankPolicy::default();
        for value in ["", "  ", "-", "N/A", "n/a", "NaN", "nan", "null", "None"] {
            assert!(policy.is_blank(value), "{value:?} should read as blank");
        }
        assert!(!policy.is_blank("Flying"));
    }

    #[test]
    fn case_sensitive_policy_distinguishes_spellings() {
        let policy = BlankPolicy {
            case_sensitive: true,
            ..BlankPolicy::default()
        };
        assert!(policy.is_blank("None"));
        assert!(!policy.is_blank("NONE"));
    }

    #[test]
    fn add_pattern_deduplicates() {
        let mut policy = BlankPolicy::default();
        let before = policy.patterns.len();
        policy.add_pattern("-".to_string());
        assert_eq!(policy.patterns.len(), before);
        policy.add_pattern("?".to_string());
        assert_eq!(policy.patterns.len(), before + 1);
    }
}
