//! Detail panel: full projection of the selected record.

use crate::state::AppState;
use dioxus::prelude::*;
use ifi_utils::dates::format_date;

fn opt_num<T: std::fmt::Display>(v: &Option<T>) -> String {
    v.as_ref().map(|n| n.to_string()).unwrap_or_else(|| "—".to_string())
}

/// Shows every field of the selected record, including pass-through columns
/// the explorer does not interpret, or an empty-state message when nothing
/// is selected. A pure projection: re-selecting the same record renders the
/// same output.
#[component]
pub fn DetailPanel() -> Element {
    let state = use_context::<AppState>();
    let selection = state.selection.read().clone();

    let Some(record) = selection.selected else {
        return rsx! {
            div {
                style: "padding: 24px; text-align: center; color: #888;",
                "Click a table row to see the full record."
            }
        };
    };

    let rows: Vec<(String, String)> = [
        ("Event".to_string(), record.id.clone()),
        (
            "Start date".to_string(),
            record
                .start_date
                .as_ref()
                .map(format_date)
                .unwrap_or_else(|| "—".to_string()),
        ),
        (
            "End date".to_string(),
            record
                .end_date
                .as_ref()
                .map(format_date)
                .unwrap_or_else(|| "—".to_string()),
        ),
        ("State".to_string(), record.state.clone()),
        ("District".to_string(), record.district.clone()),
        ("Duration (days)".to_string(), opt_num(&record.duration_days)),
        ("Main cause".to_string(), record.main_cause.clone()),
        ("Severity".to_string(), opt_num(&record.severity)),
        (
            "Area affected (sq km)".to_string(),
            opt_num(&record.area_affected_sqkm),
        ),
        ("Human fatalities".to_string(), opt_num(&record.human_fatalities)),
        ("Human displaced".to_string(), opt_num(&record.human_displaced)),
        ("Source".to_string(), record.source.clone()),
    ]
    .into_iter()
    .chain(record.extra.iter().cloned())
    .collect();

    rsx! {
        div {
            style: "padding: 8px 12px; font-size: 13px;",
            div {
                style: "font-weight: bold; padding: 4px 0 8px 0;",
                {record.label()}
            }
            for (name, value) in rows.into_iter() {
                div {
                    style: "display: flex; border-bottom: 1px solid #ECEFF1; padding: 4px 0;",
                    span { style: "flex: 0 0 180px; font-weight: bold; color: #555;", "{name}" }
                    span { "{value}" }
                }
            }
        }
    }
}
