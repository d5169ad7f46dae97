//! The filter evaluator: a pure pass over the full dataset.
//!
//! Every submission re-evaluates the complete criteria snapshot against the
//! original dataset, never against a previously filtered result. Submitting
//! "state = Assam" and then "state = Bihar" therefore shows Bihar records,
//! not the empty intersection — filters replace, they do not compound.

use crate::criteria::FilterCriteria;
use ifi_data::FloodRecord;

/// Apply `criteria` to `dataset`, returning the matching records in their
/// original relative order.
///
/// Predicates are conjunctive and each applies only when its criterion is
/// set. A record whose relevant date is missing or was unparseable at load
/// time fails an active date predicate (it cannot be shown to satisfy the
/// range), but passes freely when no date constraint is set.
pub fn apply(dataset: &[FloodRecord], criteria: &FilterCriteria) -> Vec<FloodRecord> {
    let matched: Vec<FloodRecord> = dataset
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect();
    log::info!(
        "[IFI Debug] filter: {} of {} records match",
        matched.len(),
        dataset.len()
    );
    matched
}

fn matches(record: &FloodRecord, criteria: &FilterCriteria) -> bool {
    if let Some(from) = criteria.start_date {
        match record.start_date {
            Some(d) if d >= from => {}
            _ => return false,
        }
    }
    if let Some(until) = criteria.end_date {
        match record.end_date {
            Some(d) if d <= until => {}
            _ => return false,
        }
    }
    if let Some(state) = &criteria.state {
        if record.state != *state {
            return false;
        }
    }
    if let Some(district) = &criteria.district {
        if record.district != *district {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, state: &str, district: &str, start: &str, end: &str) -> FloodRecord {
        FloodRecord {
            id: id.to_string(),
            start_date: ifi_utils::dates::parse_date(start).ok(),
            end_date: ifi_utils::dates::parse_date(end).ok(),
            state: state.to_string(),
            district: district.to_string(),
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

    fn dataset() -> Vec<FloodRecord> {
        vec![
            record("A", "Assam", "Kamrup", "2010-01-01", "2010-01-05"),
            record("B", "Bihar", "Patna", "2012-06-01", "2012-06-10"),
        ]
    }

    #[test]
    fn empty_criteria_is_identity() {
        let data = dataset();
        let out = apply(&data, &FilterCriteria::default());
        assert_eq!(out, data);
    }

    #[test]
    fn state_filter_keeps_only_that_state() {
        let data = dataset();
        let criteria = FilterCriteria {
            state: Some("Assam".to_string()),
            ..Default::default()
        };
        let out = apply(&data, &criteria);
        assert_eq!(out.len(), 1);
        assert!(out.iter().all(|r| r.state == "Assam"));
    }

    #[test]
    fn start_date_excludes_earlier_events() {
        let data = dataset();
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2011, 1, 1),
            ..Default::default()
        };
        let out = apply(&data, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "B");
    }

    #[test]
    fn end_date_excludes_later_events() {
        let data = dataset();
        let criteria = FilterCriteria {
            end_date: NaiveDate::from_ymd_opt(2011, 1, 1),
            ..Default::default()
        };
        let out = apply(&data, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "A");
    }

    #[test]
    fn predicates_are_conjunctive() {
        let data = dataset();
        let criteria = FilterCriteria {
            state: Some("Bihar".to_string()),
            district: Some("Kamrup".to_string()),
            ..Default::default()
        };
        assert!(apply(&data, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let data = dataset();
        let criteria = FilterCriteria {
            state: Some("Bihar".to_string()),
            ..Default::default()
        };
        let once = apply(&data, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_restores_full_dataset() {
        let data = dataset();
        let narrowed = apply(
            &data,
            &FilterCriteria {
                district: Some("Patna".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(narrowed.len(), 1);
        // Reset always goes back to the original dataset, not the narrowed view.
        let restored = apply(&data, &FilterCriteria::default());
        assert_eq!(restored, data);
    }

    #[test]
    fn order_is_preserved() {
        let mut data = dataset();
        data.push(record("C", "Assam", "Barpeta", "2015-07-01", "2015-07-09"));
        let criteria = FilterCriteria {
            state: Some("Assam".to_string()),
            ..Default::default()
        };
        let out = apply(&data, &criteria);
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn selection_survives_exclusion_by_filter() {
        use crate::highlight::Highlight;
        use crate::selection::{SelectionEvent, SelectionState};

        let data = dataset();
        let selected =
            SelectionState::default().reduce(SelectionEvent::RowClicked(data[0].clone()));

        // A later submission removes the selected record from the table...
        let criteria = FilterCriteria {
            state: Some("Bihar".to_string()),
            ..Default::default()
        };
        let narrowed = apply(&data, &criteria);
        assert!(narrowed.iter().all(|r| r.id != "A"));

        // ...but the selection snapshot and its map highlight are untouched.
        assert_eq!(selected.selected.as_ref().map(|r| r.id.as_str()), Some("A"));
        let highlight = Highlight::for_selection(&selected);
        assert_eq!(highlight.units, vec!["Assam".to_string()]);
    }

    #[test]
    fn record_without_date_fails_active_date_predicate() {
        let mut data = dataset();
        data.push(record("D", "Odisha", "Puri", "undated", "undated"));
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(1967, 1, 1),
            ..Default::default()
        };
        let out = apply(&data, &criteria);
        assert!(out.iter().all(|r| r.id != "D"));
        // Without a date constraint the undated record passes through.
        let all = apply(&data, &FilterCriteria::default());
        assert_eq!(all.len(), 3);
    }
}
