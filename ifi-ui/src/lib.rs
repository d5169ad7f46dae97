//! Shared Dioxus components and D3 geo bridge for the IFI explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3 map functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filter panel, table, detail panel, ...)

pub mod components;
pub mod js_bridge;
pub mod state;
