//! Map highlight computation.
//!
//! Turns the current selection into the set of geographic unit names the map
//! should emphasize. Names are normalized before crossing into the geo layer
//! because the boundary GeoJSON and the flood inventory disagree on
//! diacritics and casing; a name that still fails to match after
//! normalization simply highlights nothing.

use crate::selection::{Granularity, SelectionState};
use serde::Serialize;

/// What the map should highlight, serialized to JSON for the JS geo layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    /// Whether `units` are state names or district names.
    pub granularity: Granularity,
    /// Normalized unit names to emphasize. Empty when nothing is selected.
    pub units: Vec<String>,
}

impl Highlight {
    /// Compute the highlight for the current selection.
    pub fn for_selection(selection: &SelectionState) -> Self {
        let units = match &selection.selected {
            None => Vec::new(),
            Some(record) => {
                let raw = match selection.granularity {
                    Granularity::State => &record.state,
                    Granularity::District => &record.district,
                };
                let normalized = ifi_utils::names::normalize_unit_name(raw);
                if normalized.is_empty() {
                    Vec::new()
                } else {
                    vec![normalized]
                }
            }
        };
        Self {
            granularity: selection.granularity,
            units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectionEvent, SelectionState};
    use ifi_data::FloodRecord;

    fn bihar_record() -> FloodRecord {
        FloodRecord {
            id: "B".to_string(),
            start_date: None,
            end_date: None,
            state: "Bihar".to_string(),
            district: "Patna".to_string(),
            duration_days: None,
            main_cause: String::new(),
            severity: None,
            area_affected_sqkm: None,
            human_fatalities: None,
            human_displaced: None,
            source: String::new(),
            extra: Vec::new(),
        }
    }

    #[test]
    fn no_selection_highlights_nothing() {
        let h = Highlight::for_selection(&SelectionState::default());
        assert!(h.units.is_empty());
    }

    #[test]
    fn district_then_state_granularity_for_same_record() {
        let selected = SelectionState::default()
            .reduce(SelectionEvent::GranularityChanged(Granularity::District))
            .reduce(SelectionEvent::RowClicked(bihar_record()));
        let h = Highlight::for_selection(&selected);
        assert_eq!(h.units, vec!["Patna".to_string()]);

        // Switching granularity without a new row click re-highlights the state.
        let switched = selected.reduce(SelectionEvent::GranularityChanged(Granularity::State));
        let h = Highlight::for_selection(&switched);
        assert_eq!(h.units, vec!["Bihar".to_string()]);
    }

    #[test]
    fn unit_names_are_normalized() {
        let mut record = bihar_record();
        record.district = "  pāṭna  ".to_string();
        let selected = SelectionState::default()
            .reduce(SelectionEvent::GranularityChanged(Granularity::District))
            .reduce(SelectionEvent::RowClicked(record));
        let h = Highlight::for_selection(&selected);
        assert_eq!(h.units, vec!["Patna".to_string()]);
    }

    #[test]
    fn serializes_for_the_geo_layer() {
        let selected =
            SelectionState::default().reduce(SelectionEvent::RowClicked(bihar_record()));
        let json = serde_json::to_string(&Highlight::for_selection(&selected)).unwrap();
        assert_eq!(json, r#"{"granularity":"state","units":["Bihar"]}"#);
    }
}
