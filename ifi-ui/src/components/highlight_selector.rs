//! Radio group toggling the map highlight granularity.

use crate::state::AppState;
use dioxus::prelude::*;
use ifi_core::{Granularity, SelectionEvent};

/// Two-option radio control: highlight affected states or affected
/// districts. Orthogonal to the selection — toggling never changes which
/// record is selected.
#[component]
pub fn HighlightSelector() -> Element {
    let mut state = use_context::<AppState>();
    let granularity = state.selection.read().granularity;

    rsx! {
        div {
            style: "display: flex; gap: 16px; font-size: 13px;",
            label {
                style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
                input {
                    r#type: "radio",
                    name: "highlight-granularity",
                    value: "state",
                    checked: granularity == Granularity::State,
                    onchange: move |evt: Event<FormData>| {
                        let next = Granularity::from_radio_value(&evt.value());
                        state.dispatch(SelectionEvent::GranularityChanged(next));
                    },
                }
                "Show affected States"
            }
            label {
                style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
                input {
                    r#type: "radio",
                    name: "highlight-granularity",
                    value: "district",
                    checked: granularity == Granularity::District,
                    onchange: move |evt: Event<FormData>| {
                        let next = Granularity::from_radio_value(&evt.value());
                        state.dispatch(SelectionEvent::GranularityChanged(next));
                    },
                }
                "Show affected Districts"
            }
        }
    }
}
