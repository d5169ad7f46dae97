//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The signals hold immutable snapshots from `ifi-core`: the full dataset,
//! the latest filter result, and the selection snapshot advanced by the pure
//! reducer. Components never mutate a snapshot in place; they compute the
//! next one and `set` it.

use dioxus::prelude::*;
use ifi_core::{SelectionEvent, SelectionState};
use ifi_data::{FloodRecord, StateDistrictIndex};

/// Shared application state for the flood explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The full, immutable dataset in file order (empty until loaded).
    pub dataset: Signal<Vec<FloodRecord>>,
    /// The current filter result; always recomputed from `dataset`.
    pub filtered: Signal<Vec<FloodRecord>>,
    /// State → district reference index for the dependent dropdowns.
    pub index: Signal<StateDistrictIndex>,
    /// Current selection snapshot (selected record + highlight granularity).
    pub selection: Signal<SelectionState>,
    /// Whether the app is still loading its embedded resources.
    pub loading: Signal<bool>,
    /// Fatal startup error, if any.
    pub error_msg: Signal<Option<String>>,
    /// Raw filter form values (controlled inputs).
    pub form_start: Signal<String>,
    pub form_end: Signal<String>,
    pub form_state: Signal<String>,
    pub form_district: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(Vec::new()),
            filtered: Signal::new(Vec::new()),
            index: Signal::new(StateDistrictIndex::default()),
            selection: Signal::new(SelectionState::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            form_start: Signal::new(String::new()),
            form_end: Signal::new(String::new()),
            form_state: Signal::new(String::new()),
            form_district: Signal::new(String::new()),
        }
    }

    /// Run one selection event through the reducer and publish the next
    /// snapshot. All row clicks and radio changes funnel through here.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let next = self.selection.peek().clone().reduce(event);
        self.selection.set(next);
    }
}
