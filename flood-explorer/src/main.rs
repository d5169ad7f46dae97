//! India Flood Inventory Explorer
//!
//! Browser dashboard over the IFI-Impacts dataset (1967-2023): a filterable
//! event table, a choropleth map of the affected state or district for the
//! selected record, and a detail panel showing the full record.
//!
//! Data flow:
//! 1. `build.rs` copies `flood_events.csv` and `districts_of_states.json`
//!    into `OUT_DIR`.
//! 2. `include_str!` embeds both resources into the WASM binary.
//! 3. On mount they are parsed into the in-memory dataset and index; a parse
//!    failure is fatal and switches the page to the error state.
//! 4. Filter submissions re-run the evaluator over the full dataset; row
//!    clicks and the granularity radio advance the selection snapshot, and a
//!    `use_effect` pushes the resulting highlight to the D3 geo layer.

use dioxus::prelude::*;
use ifi_core::Highlight;
use ifi_ui::components::{
    DataTable, DetailPanel, ErrorDisplay, FilterPanel, HighlightSelector, LoadingSpinner,
    MapContainer, SectionHeader,
};
use ifi_ui::js_bridge;
use ifi_ui::state::AppState;

/// The flood event inventory.
const FLOOD_EVENTS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/flood_events.csv"));
/// State → district reference index for the filter dropdowns.
const DISTRICTS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/districts_of_states.json"));

/// Map container DOM element ID used by D3 to render into.
const MAP_ID: &str = "india-flood-map";

/// Dataset archive and publication links (Zenodo).
const DOWNLOAD_URL: &str = "https://zenodo.org/api/records/11275211/files-archive";
const INFO_URL: &str = "https://zenodo.org/doi/10.5281/zenodo.4742142";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("flood-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded resources on mount
    use_effect(move || {
        match ifi_data::loader::load_flood_events(FLOOD_EVENTS_CSV) {
            Ok(records) => {
                log::info!("[IFI Debug] app: dataset ready, {} events", records.len());
                state.filtered.set(records.clone());
                state.dataset.set(records);
            }
            Err(e) => {
                log::error!("Failed to load flood events: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load flood event data: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        match ifi_data::StateDistrictIndex::from_json(DISTRICTS_JSON) {
            Ok(index) => state.index.set(index),
            Err(e) => {
                log::error!("Failed to load state/district index: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load state/district index: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        state.loading.set(false);
    });

    // Push the highlight to the geo layer whenever the selection changes
    use_effect(move || {
        let selection = state.selection.read().clone();

        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            js_bridge::destroy_map(MAP_ID);
            return;
        }

        js_bridge::init_map();

        let highlight = Highlight::for_selection(&selection);
        let highlight_json = serde_json::to_string(&highlight).unwrap_or_default();
        js_bridge::render_map_highlight(MAP_ID, &highlight_json);
    });

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #212121;",

            Navbar {}

            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 16px;",

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    div {
                        style: "padding: 12px; border: 1px solid #E0E0E0; border-radius: 4px; margin-bottom: 16px;",
                        SectionHeader {
                            title: "Apply filter to the data".to_string(),
                            subtitle: "Date range plus state and district; district options follow the chosen state.".to_string(),
                        }
                        FilterPanel {}
                    }

                    div {
                        style: "display: flex; gap: 16px; align-items: flex-start; flex-wrap: wrap;",

                        div {
                            style: "flex: 1 1 520px; border: 1px solid #E0E0E0; border-radius: 4px;",
                            div {
                                style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; background: #FAFAFA; border-bottom: 1px solid #E0E0E0;",
                                strong { "Data Table" }
                                div {
                                    style: "display: flex; gap: 8px;",
                                    a {
                                        href: DOWNLOAD_URL,
                                        style: "padding: 4px 12px; background: #1976D2; color: white; border-radius: 4px; text-decoration: none; font-size: 13px;",
                                        "Download"
                                    }
                                    a {
                                        href: INFO_URL,
                                        style: "padding: 4px 12px; background: #ECEFF1; color: #333; border-radius: 4px; text-decoration: none; font-size: 13px;",
                                        "More Info"
                                    }
                                }
                            }
                            div {
                                style: "max-height: 640px; overflow-y: auto;",
                                DataTable {}
                            }
                        }

                        div {
                            style: "flex: 1 1 420px; display: flex; flex-direction: column; gap: 16px;",
                            div {
                                style: "border: 1px solid #E0E0E0; border-radius: 4px;",
                                div {
                                    style: "padding: 8px 12px; background: #FAFAFA; border-bottom: 1px solid #E0E0E0;",
                                    HighlightSelector {}
                                }
                                MapContainer { id: MAP_ID.to_string() }
                            }
                            div {
                                style: "border: 1px solid #E0E0E0; border-radius: 4px;",
                                div {
                                    style: "padding: 8px 12px; background: #FAFAFA; border-bottom: 1px solid #E0E0E0;",
                                    strong { "Info" }
                                }
                                DetailPanel {}
                            }
                        }
                    }

                    AboutSection {}
                }
            }

            Footer {}
        }
    }
}

/// Top banner with the project title.
#[component]
fn Navbar() -> Element {
    rsx! {
        div {
            style: "background: #0D47A1; color: white; padding: 16px 24px;",
            div {
                style: "font-size: 20px; font-weight: bold;",
                "India Flood Inventory"
            }
            div {
                style: "font-size: 13px; opacity: 0.85;",
                "A national geospatial database to facilitate flood research."
            }
        }
    }
}

/// Dataset description and citations, shown under the dashboard.
#[component]
fn AboutSection() -> Element {
    rsx! {
        div {
            style: "margin-top: 24px; font-size: 14px; line-height: 1.5;",
            h3 { "India Flood Inventory [1967-2023]" }
            p {
                "This dashboard hosts the India Flood Inventory with Impacts (IFI-Impacts) "
                "database, containing flood event data sourced from the Indian Meteorological "
                "Department from 1967-2023. It has undergone extensive manual digitization and "
                "cleaning to make it suitable for computational research in hydroclimate."
            }
            p { "v1.0: India Flood Inventory (IFI) 1967-2016." }
            p { "v2.0: IFI 1967-2023, with impacts and district flooded area." }
            p { "v3.0: IFI 1967-2023, updated with local government codes (LGD) for state and district." }
            h4 { "Citations" }
            p {
                "IFI v1.0: Saharia, M., et al., 2021. India flood inventory: creation of a "
                "multi-source national geospatial database to facilitate comprehensive flood "
                "research. Nat Hazards. "
                a { href: "https://doi.org/10.1007/s11069-021-04698-6", "read this article" }
            }
            p {
                "IFI v2.0: Saharia, Manabendra, et al. A District Level Flood Severity Index "
                "for India. arXiv:2405.01602, 2024. "
                a { href: "https://doi.org/10.48550/arXiv.2405.01602", "read this article" }
            }
        }
    }
}

/// Contact footer.
#[component]
fn Footer() -> Element {
    rsx! {
        div {
            style: "margin-top: 32px; padding: 16px 24px; background: #ECEFF1; font-size: 13px; color: #455A64;",
            "Developed at the Indian Institute of Technology, Delhi, with the Indian "
            "Meteorological Department (Climate Research & Services)."
        }
    }
}
