//! Pure domain logic for the India Flood Inventory explorer.
//!
//! Everything here is synchronous and side-effect free: the filter evaluator
//! is a function of (dataset, criteria), selection is a reducer over
//! immutable snapshots, and the map highlight is derived from the latest
//! snapshot. The Dioxus layer in `ifi-ui` holds the snapshots in Signals and
//! re-renders views from them; nothing in this crate touches the DOM.

pub mod criteria;
pub mod filter;
pub mod highlight;
pub mod selection;

pub use criteria::FilterCriteria;
pub use highlight::Highlight;
pub use selection::{Granularity, SelectionEvent, SelectionState};
