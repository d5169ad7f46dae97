//! Reusable Dioxus RSX components for the IFI explorer.

mod data_table;
mod detail_panel;
mod error_display;
mod filter_panel;
mod highlight_selector;
mod loading_spinner;
mod map_container;
mod section_header;

pub use data_table::DataTable;
pub use detail_panel::DetailPanel;
pub use error_display::ErrorDisplay;
pub use filter_panel::FilterPanel;
pub use highlight_selector::HighlightSelector;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use section_header::SectionHeader;
