//! Gun Deaths by State
//!
//! A choropleth of gun deaths per 100,000 people with city markers, linked
//! to a stacked bar chart of deaths by gender.
//!
//! Data flow:
//! 1. `build.rs` copies the state, city and map fixtures into OUT_DIR.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: parse them into a `Dataset` and a `Geography`, log the join
//!    report and publish both through `AppState`.
//! 4. Hovering a state on the map brushes it in both views; clicking zooms
//!    the map onto it.

use dioxus::prelude::*;
use gdv_chart_ui::components::{BarChartView, MapView, StatusBar, TooltipOverlay};
use gdv_chart_ui::state::AppState;
use gdv_data::{Dataset, Geography, JoinReport, StateKey, DEFAULT_NAME_PROPERTY};

const STATES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/states.csv"));
const CITIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cities.csv"));
const STATES_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/us-states.geojson"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gun-deaths-root"))
        .launch(App);
}

/// Parse the embedded records and outlines.
fn load_embedded() -> gdv_data::Result<(Dataset, Geography)> {
    let dataset = Dataset::from_csv(STATES_CSV, CITIES_CSV)?;
    let geography = Geography::from_geojson(STATES_GEOJSON, DEFAULT_NAME_PROPERTY)?;
    Ok((dataset, geography))
}

/// Status line under the map title.
fn selection_status(brushed: Option<&StateKey>, zoomed: Option<&str>) -> String {
    match (zoomed, brushed) {
        (Some(name), _) => format!("Zoomed into {}. Click anywhere on the map to zoom out.", name),
        (None, Some(key)) => format!("Highlighting {}", key.display_name()),
        (None, None) => "Hover a state to highlight it in both charts, click it to zoom in.".to_string(),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load embedded data once on mount ───
    use_effect(move || {
        match load_embedded() {
            Ok((dataset, geography)) => {
                JoinReport::build(&geography, &dataset).log();
                state.dataset.set(Some(dataset));
                state.geography.set(Some(geography));
            }
            Err(e) => {
                log::error!("Failed to load gun deaths data: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    let brushed = (state.brushed_state)();
    let zoomed = (state.zoomed_state)();
    let hint = selection_status(brushed.as_ref(), zoomed.as_deref());
    let status = state.load_status();
    let ready = status.is_ready();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            StatusBar {
                title: "Gun Deaths per 100,000 People by State".to_string(),
                hint: hint,
                status: status,
            }

            if ready {
                MapView {
                    brushed_state: brushed.clone(),
                    on_brush: move |key: Option<StateKey>| state.brushed_state.set(key),
                    on_zoom: move |name: Option<String>| {
                        if let Some(name) = &name {
                            log::info!("Zoomed into {}", name);
                        }
                        state.zoomed_state.set(name);
                    },
                }

                BarChartView { brushed_state: brushed }
            }

            TooltipOverlay {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let (dataset, geography) = load_embedded().unwrap();
        assert!(!dataset.is_empty());
        assert!(!geography.is_empty());
        assert!(!JoinReport::build(&geography, &dataset).matched.is_empty());
    }

    #[test]
    fn test_selection_status() {
        let new_york = StateKey::from_name("New York");
        assert_eq!(selection_status(Some(&new_york), None), "Highlighting New York");
        assert!(selection_status(Some(&new_york), Some("Texas")).starts_with("Zoomed into Texas."));
        assert!(selection_status(None, None).starts_with("Hover a state"));
    }
}
