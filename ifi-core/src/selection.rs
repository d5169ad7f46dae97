//! Selection state machine for the explorer.
//!
//! UI state is an immutable snapshot advanced by a pure reducer: each user
//! event produces a new `SelectionState`, and the views re-render from the
//! latest snapshot. The machine never terminates; a page reload is the only
//! reset.

use ifi_data::FloodRecord;
use serde::Serialize;

/// Which geographic unit the map emphasizes for the selected record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Highlight the record's state.
    #[default]
    State,
    /// Highlight the record's district.
    District,
}

impl Granularity {
    /// Parse a radio input value. Anything other than "district" falls back
    /// to state-level, the initial mode.
    pub fn from_radio_value(value: &str) -> Self {
        if value == "district" {
            Granularity::District
        } else {
            Granularity::State
        }
    }
}

/// Events the selection machine reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A table row was clicked.
    RowClicked(FloodRecord),
    /// The highlight-mode radio group changed.
    GranularityChanged(Granularity),
}

/// The currently highlighted record (if any) and the highlight granularity.
///
/// Granularity is orthogonal to the selection: toggling it never changes
/// which record is selected, only how the map interprets it. Selection is
/// also independent of the active filter — a selected record stays selected
/// even when a later filter submission removes it from the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Option<FloodRecord>,
    pub granularity: Granularity,
}

impl SelectionState {
    /// Advance the machine by one event, returning the next snapshot.
    pub fn reduce(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::RowClicked(record) => Self {
                selected: Some(record),
                granularity: self.granularity,
            },
            SelectionEvent::GranularityChanged(granularity) => Self {
                selected: self.selected,
                granularity,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> FloodRecord {
        FloodRecord {
            id: id.to_string(),
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
    fn initial_state_is_idle_at_state_level() {
        let state = SelectionState::default();
        assert_eq!(state.selected, None);
        assert_eq!(state.granularity, Granularity::State);
    }

    #[test]
    fn row_click_selects() {
        let state = SelectionState::default().reduce(SelectionEvent::RowClicked(record("A")));
        assert_eq!(state.selected.as_ref().map(|r| r.id.as_str()), Some("A"));
    }

    #[test]
    fn second_click_replaces_selection() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::RowClicked(record("A")))
            .reduce(SelectionEvent::RowClicked(record("B")));
        assert_eq!(state.selected.as_ref().map(|r| r.id.as_str()), Some("B"));
    }

    #[test]
    fn reselecting_same_record_is_idempotent() {
        let once = SelectionState::default().reduce(SelectionEvent::RowClicked(record("A")));
        let twice = once.clone().reduce(SelectionEvent::RowClicked(record("A")));
        assert_eq!(once, twice);
    }

    #[test]
    fn granularity_toggle_keeps_selection() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::RowClicked(record("A")))
            .reduce(SelectionEvent::GranularityChanged(Granularity::District));
        assert_eq!(state.selected.as_ref().map(|r| r.id.as_str()), Some("A"));
        assert_eq!(state.granularity, Granularity::District);
    }

    #[test]
    fn row_click_keeps_granularity() {
        let state = SelectionState::default()
            .reduce(SelectionEvent::GranularityChanged(Granularity::District))
            .reduce(SelectionEvent::RowClicked(record("A")));
        assert_eq!(state.granularity, Granularity::District);
    }

    #[test]
    fn radio_value_parsing() {
        assert_eq!(Granularity::from_radio_value("district"), Granularity::District);
        assert_eq!(Granularity::from_radio_value("state"), Granularity::State);
        assert_eq!(Granularity::from_radio_value(""), Granularity::State);
    }
}
