//! Dataset layer for the India Flood Inventory explorer.
//!
//! This crate owns the record model and the loaders for the two static
//! resources the dashboard runs on:
//!
//! - the flood event CSV (IFI-Impacts, 1967-2023), loaded once at startup
//!   into an ordered in-memory `Vec<FloodRecord>` and never mutated;
//! - the state → district JSON index backing the dependent filter dropdowns.
//!
//! Resources are embedded into the WASM binary via `include_str!` in the app
//! crate (copied into `OUT_DIR` by its `build.rs`) and parsed here. A parse
//! failure at startup is fatal for the app; per-cell problems inside the CSV
//! degrade to `None` fields instead.
//!
//! ```rust
//! let records = ifi_data::loader::load_flood_events(
//!     "UID,Start Date,End Date,States,Districts\nIFI-1,2010-01-01,2010-01-05,Assam,Kamrup\n",
//! ).unwrap();
//! assert_eq!(records[0].state, "Assam");
//! ```

pub mod loader;
pub mod models;

mod index;

pub use index::StateDistrictIndex;
pub use models::FloodRecord;
