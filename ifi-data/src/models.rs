//! Record model for the India Flood Inventory dataset.
//!
//! `FloodRecord` derives `Serialize` so selected records can be passed to the
//! JS map layer as JSON from the Dioxus WASM frontend.

use chrono::NaiveDate;
use serde::Serialize;

/// One flood event from the IFI-Impacts dataset (1967-2023).
///
/// Records are immutable once loaded. The inventory does not guarantee
/// uniqueness; duplicate rows are kept as-is.
///
/// Dates are `None` when the source cell was blank or unparseable. Such a
/// record still appears in the unfiltered view but is excluded by an active
/// date-range predicate (see `ifi_core::filter`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodRecord {
    /// Inventory identifier (UID column).
    pub id: String,
    /// First day of the flood event.
    pub start_date: Option<NaiveDate>,
    /// Last day of the flood event.
    pub end_date: Option<NaiveDate>,
    /// Affected state name (dataset column `States`; one state per row).
    pub state: String,
    /// Affected district name (dataset column `Districts`; one district per row).
    pub district: String,
    /// Event duration in days, when reported.
    pub duration_days: Option<u32>,
    /// Primary cause as recorded by IMD (e.g. "Heavy rain", "Cyclone").
    pub main_cause: String,
    /// District-level flood severity index, when computed.
    pub severity: Option<f64>,
    /// Flooded area in square kilometres, when reported.
    pub area_affected_sqkm: Option<f64>,
    /// Reported human fatalities.
    pub human_fatalities: Option<u32>,
    /// Reported displaced persons.
    pub human_displaced: Option<u32>,
    /// Originating source of the event entry.
    pub source: String,
    /// Columns the explorer does not interpret, preserved verbatim in
    /// header order for display in the detail panel.
    pub extra: Vec<(String, String)>,
}

impl FloodRecord {
    /// Display label for the table and detail panel header.
    pub fn label(&self) -> String {
        format!("{} — {}, {}", self.id, self.district, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FloodRecord {
        FloodRecord {
            id: "IFI-0042".to_string(),
            start_date: NaiveDate::from_ymd_opt(2010, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2010, 1, 5),
            state: "Assam".to_string(),
            district: "Kamrup".to_string(),
            duration_days: Some(5),
            main_cause: "Heavy rain".to_string(),
            severity: Some(2.4),
            area_affected_sqkm: Some(130.5),
            human_fatalities: Some(3),
            human_displaced: Some(1200),
            source: "IMD".to_string(),
            extra: vec![("LGD State Code".to_string(), "18".to_string())],
        }
    }

    #[test]
    fn label_includes_id_and_geography() {
        assert_eq!(record().label(), "IFI-0042 — Kamrup, Assam");
    }

    #[test]
    fn records_compare_by_value() {
        assert_eq!(record(), record());
    }
}
