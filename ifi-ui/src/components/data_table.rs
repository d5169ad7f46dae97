//! Flood event table with clickable rows.

use crate::state::AppState;
use dioxus::prelude::*;
use ifi_core::SelectionEvent;
use ifi_utils::dates::format_date;

fn date_cell(date: &Option<chrono::NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_else(|| "—".to_string())
}

/// One row per record in the current filter result, in dataset order.
/// Clicking a row dispatches `RowClicked` through the selection reducer;
/// the map and detail panel re-render from the new snapshot.
#[component]
pub fn DataTable() -> Element {
    let mut state = use_context::<AppState>();
    let rows = state.filtered.read().clone();
    let selected_id = state
        .selection
        .read()
        .selected
        .as_ref()
        .map(|r| r.id.clone());

    rsx! {
        if rows.is_empty() {
            div {
                style: "padding: 24px; text-align: center; color: #888;",
                "No flood events match the current filter."
            }
        } else {
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        style: "background: #ECEFF1; text-align: left;",
                        th { style: "padding: 6px 8px;", "Event" }
                        th { style: "padding: 6px 8px;", "Start" }
                        th { style: "padding: 6px 8px;", "End" }
                        th { style: "padding: 6px 8px;", "State" }
                        th { style: "padding: 6px 8px;", "District" }
                        th { style: "padding: 6px 8px;", "Main Cause" }
                        th { style: "padding: 6px 8px;", "Fatalities" }
                    }
                }
                tbody {
                    // Keyed by position: the inventory permits duplicate rows,
                    // so no field combination is guaranteed unique.
                    for (i, row) in rows.into_iter().enumerate() {
                        tr {
                            key: "{i}",
                            style: if selected_id.as_deref() == Some(row.id.as_str()) {
                                "cursor: pointer; background: #E3F2FD;"
                            } else {
                                "cursor: pointer;"
                            },
                            onclick: {
                                let record = row.clone();
                                move |_| state.dispatch(SelectionEvent::RowClicked(record.clone()))
                            },
                            td { style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;", "{row.id}" }
                            td { style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;", {date_cell(&row.start_date)} }
                            td { style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;", {date_cell(&row.end_date)} }
                            td { style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;", "{row.state}" }
                            td { style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;", "{row.district}" }
                            td { style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;", "{row.main_cause}" }
                            td {
                                style: "padding: 6px 8px; border-top: 1px solid #ECEFF1;",
                                {row.human_fatalities.map(|n| n.to_string()).unwrap_or_else(|| "—".to_string())}
                            }
                        }
                    }
                }
            }
        }
    }
}
