//! Static state → district reference index.
//!
//! Backs the dependent dropdowns in the filter panel: selecting a state
//! narrows the district dropdown to that state's districts. The index is a
//! fixed resource loaded once at startup and never mutated.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Mapping from state name to its district names.
///
/// States iterate in alphabetical order (`BTreeMap`); districts keep the
/// order given by the resource file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StateDistrictIndex {
    #[serde(flatten)]
    map: BTreeMap<String, Vec<String>>,
}

impl StateDistrictIndex {
    /// Parse the index from its JSON resource:
    /// `{ "Assam": ["Baksa", "Barpeta", ...], ... }`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let index: Self =
            serde_json::from_str(json).context("state/district index JSON is malformed")?;
        log::info!(
            "[IFI Debug] index: Loaded {} states, {} districts",
            index.map.len(),
            index.map.values().map(Vec::len).sum::<usize>()
        );
        Ok(index)
    }

    /// All state names, alphabetically.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Districts of one state, in resource order. Unknown states yield an
    /// empty slice — the district dropdown simply offers nothing.
    pub fn districts_for(&self, state: &str) -> &[String] {
        self.map.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Bihar": ["Patna", "Gaya"],
        "Assam": ["Kamrup", "Barpeta", "Dhubri"]
    }"#;

    #[test]
    fn states_are_alphabetical() {
        let index = StateDistrictIndex::from_json(SAMPLE).unwrap();
        let states: Vec<&str> = index.states().collect();
        assert_eq!(states, vec!["Assam", "Bihar"]);
    }

    #[test]
    fn districts_keep_resource_order() {
        let index = StateDistrictIndex::from_json(SAMPLE).unwrap();
        assert_eq!(
            index.districts_for("Assam"),
            &["Kamrup".to_string(), "Barpeta".to_string(), "Dhubri".to_string()]
        );
    }

    #[test]
    fn unknown_state_has_no_districts() {
        let index = StateDistrictIndex::from_json(SAMPLE).unwrap();
        assert!(index.districts_for("Atlantis").is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StateDistrictIndex::from_json("{ not json").is_err());
    }
}
