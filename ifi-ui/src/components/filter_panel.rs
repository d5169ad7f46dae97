//! Filter panel: date range, state and district dropdowns, Apply/Reset.
//!
//! The district dropdown is derived from the currently chosen state via the
//! `StateDistrictIndex`; changing the state clears any district choice so a
//! stale district can never constrain a different state.

use crate::state::AppState;
use dioxus::prelude::*;
use ifi_core::{filter, FilterCriteria};

/// Controlled filter form. Apply recomputes the filtered sequence from the
/// full dataset with the complete criteria snapshot (filters never compound
/// across submissions); Reset restores the unfiltered view.
#[component]
pub fn FilterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let index = state.index.read().clone();
    let chosen_state = (state.form_state)();
    let chosen_district = (state.form_district)();
    let start = (state.form_start)();
    let end = (state.form_end)();

    let districts: Vec<String> = index.districts_for(&chosen_state).to_vec();

    let on_state_change = move |evt: Event<FormData>| {
        state.form_state.set(evt.value());
        // District options are about to change; drop the stale choice.
        state.form_district.set(String::new());
    };

    let on_submit = move |_| {
        let criteria = FilterCriteria::from_form(
            &state.form_start.peek(),
            &state.form_end.peek(),
            &state.form_state.peek(),
            &state.form_district.peek(),
        );
        let result = filter::apply(&state.dataset.read(), &criteria);
        state.filtered.set(result);
    };

    let on_reset = move |_| {
        state.form_start.set(String::new());
        state.form_end.set(String::new());
        state.form_state.set(String::new());
        state.form_district.set(String::new());
        let all = state.dataset.read().clone();
        state.filtered.set(all);
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap; margin: 8px 0;",

            label {
                style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
                "From"
                input {
                    r#type: "date",
                    value: "{start}",
                    onchange: move |evt: Event<FormData>| state.form_start.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
                "To"
                input {
                    r#type: "date",
                    value: "{end}",
                    onchange: move |evt: Event<FormData>| state.form_end.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
                "State"
                select {
                    id: "state-select",
                    disabled: index.is_empty(),
                    onchange: on_state_change,
                    option { value: "", selected: chosen_state.is_empty(), "All states" }
                    for name in index.states() {
                        option {
                            value: "{name}",
                            selected: name == chosen_state,
                            "{name}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
                "District"
                select {
                    id: "district-select",
                    disabled: chosen_state.is_empty(),
                    onchange: move |evt: Event<FormData>| state.form_district.set(evt.value()),
                    option { value: "", selected: chosen_district.is_empty(), "All districts" }
                    for name in districts.iter() {
                        option {
                            value: "{name}",
                            selected: *name == chosen_district,
                            "{name}"
                        }
                    }
                }
            }
            button {
                style: "padding: 6px 16px; background: #1976D2; color: white; border: none; border-radius: 4px; cursor: pointer;",
                onclick: on_submit,
                "Apply"
            }
            button {
                style: "padding: 6px 16px; background: #ECEFF1; color: #333; border: 1px solid #B0BEC5; border-radius: 4px; cursor: pointer;",
                onclick: on_reset,
                "Reset"
            }
        }
    }
}
