use crate::{Error, Result};

use std::collections::HashMap;
use std::fmt;

/// A code type that can appear on the code side of a [`Dictionary`].
pub trait DictionaryCode: Copy + Eq + fmt::Debug {
    /// The integer form of the code, used for ordering and contiguity checks.
    fn code(self) -> usize;
}

/// A closed bidirectional mapping between a small code domain and display
/// names, validated for completeness at construction.
///
/// The definition list must form a contiguous code sequence with no gaps,
/// no duplicate codes, and no duplicate names. All checks run before
/// construction fails, so a single error reports every problem found.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Dictionary<C: DictionaryCode> {
    by_code: HashMap<usize, String>,
    by_name: HashMap<String, C>,
}

impl<C: DictionaryCode> Dictionary<C> {
    pub fn new<N: Into<String>>(definitions: impl IntoIterator<Item = (C, N)>) -> Result<Self> {
        let mut entries: Vec<(C, String)> = definitions
            .into_iter()
            .map(|(code, name)| (code, name.into()))
            .collect();
        entries.sort_by_key(|(code, _)| code.code());

        let mut report = String::new();

        for window in entries.windows(2) {
            let [(prev, prev_name), (next, next_name)] = window else {
                unreachable!()
            };
            let (prev_code, next_code) = (prev.code(), next.code());

            if prev_code == next_code {
                report.push_str(&format!(
                    "duplicate code values: {prev_code} name: {prev_name} - {next_code} name: {next_name}\n"
                ));
            } else {
                for missing in prev_code + 1..next_code {
                    report.push_str(&format!("missing code value: {missing}\n"));
                }
            }
        }

        for (i, (code, name)) in entries.iter().enumerate() {
            let duplicated = entries[..i].iter().any(|(_, seen)| seen == name);
            let repeats = entries.iter().filter(|(_, other)| other == name).count();
            if repeats > 1 && !duplicated {
                report.push_str(&format!(
                    "duplicate name: {name} (used by {repeats} codes, first: {})\n",
                    code.code()
                ));
            }
        }

        if !report.is_empty() {
            return Err(Error::invalid_dictionary(report.trim_end().to_string()));
        }

        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for (code, name) in entries {
            by_code.insert(code.code(), name.clone());
            by_name.insert(name, code);
        }

        Ok(Self { by_code, by_name })
    }

    pub fn name(&self, code: C) -> Result<&str> {
        self.by_code
            .get(&code.code())
            .map(String::as_str)
            .ok_or_else(|| {
                Error::dictionary_lookup(format!("code not found in dictionary: {code:?}"))
            })
    }

    pub fn code(&self, name: &str) -> Result<C> {
        self.by_name.get(name).copied().ok_or_else(|| {
            Error::dictionary_lookup(format!("name not found in dictionary: {name}"))
        })
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl DictionaryCode for usize {
        fn code(self) -> usize {
            self
        }
    }

    #[test]
    fn valid_definitions() {
        let dictionary = Dictionary::new([(0usize, "Zero"), (1, "One"), (2, "Two")]).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.name(1).unwrap(), "One");
        assert_eq!(dictionary.code("Two").unwrap(), 2);
    }

    #[test]
    fn unordered_definitions_are_accepted() {
        let dictionary = Dictionary::new([(2usize, "Two"), (0, "Zero"), (1, "One")]).unwrap();
        assert_eq!(dictionary.name(2).unwrap(), "Two");
    }

    #[test]
    fn duplicate_code_is_reported() {
        let err = Dictionary::new([(0usize, "Zero"), (1, "One"), (1, "Uno")]).unwrap_err();

        assert!(err.is_invalid_dictionary());
        assert!(err.to_string().contains("duplicate code values: 1"));
    }

    #[test]
    fn missing_code_is_reported() {
        let err = Dictionary::new([(0usize, "Zero"), (2, "Two")]).unwrap_err();
        assert!(err.to_string().contains("missing code value: 1"));
    }

    #[test]
    fn duplicate_name_is_reported() {
        let err = Dictionary::new([(0usize, "Same"), (1, "Same")]).unwrap_err();
        assert!(err.to_string().contains("duplicate name: Same"));
    }

    #[test]
    fn all_problems_reported_in_one_failure() {
        let err = Dictionary::new([(0usize, "A"), (2, "B"), (2, "C"), (4, "A")]).unwrap_err();
        let report = err.to_string();

        assert!(report.contains("missing code value: 1"));
        assert!(report.contains("missing code value: 3"));
        assert!(report.contains("duplicate code values: 2"));
        assert!(report.contains("duplicate name: A"));
    }

    #[test]
    fn lookups_fail_explicitly_when_absent() {
        let dictionary = Dictionary::new([(0usize, "Zero")]).unwrap();

        assert!(dictionary.name(9).is_err());
        assert!(dictionary.code("Nine").is_err());
    }
}
