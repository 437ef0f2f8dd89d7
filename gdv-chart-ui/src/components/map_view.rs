//! Choropleth map of gun deaths per 100,000 people with city markers.
//!
//! Hovering a state brushes it (reported through `on_brush`) and shows its
//! tooltip. Clicking a state zooms onto it; any click while zoomed zooms
//! back out. Both transitions are reported through `on_zoom`.

use crate::components::CanvasContainer;
use crate::state::AppState;
use dioxus::prelude::*;
use gdv_chart::map_view::{brush_style, hover_brush, CityMarker, ShapeStyle, StateShape};
use gdv_chart::{CanvasSize, MapViewModel, MapZoom, TooltipContent, TooltipOwner};
use gdv_data::StateKey;

/// DOM id for the map container div.
const MAP_CONTAINER_ID: &str = "gun-deaths-map";

#[component]
pub fn MapView(
    brushed_state: Option<StateKey>,
    on_brush: EventHandler<Option<StateKey>>,
    on_zoom: EventHandler<Option<String>>,
) -> Element {
    let state = use_context::<AppState>();
    let mut canvas: Signal<Option<CanvasSize>> = use_signal(|| None);
    let mut zoom = use_signal(MapZoom::default);

    // Recomputed whenever the data, the config or the canvas size changes.
    let view = use_memo(move || {
        let size = canvas()?;
        if !size.is_drawable() {
            return None;
        }
        let dataset = state.dataset.read();
        let geography = state.geography.read();
        let config = state.map_config.read();
        let (Some(data), Some(geo)) = (dataset.as_ref(), geography.as_ref()) else {
            return None;
        };
        let model = MapViewModel::build(geo, data, size, &config);
        log::debug!(
            "map: {} shapes, {} cities on {}x{}",
            model.shapes.len(),
            model.cities.len(),
            size.width,
            size.height
        );
        Some(model)
    });

    let on_resize = move |size: CanvasSize| {
        if canvas() == Some(size) {
            return;
        }
        canvas.set(Some(size));
        let change = zoom.write().canvas_resized();
        if let Some(zoomed) = change.notification() {
            on_zoom.call(zoomed);
        }
    };

    let on_select = move |key: StateKey| {
        let current = view.read();
        let Some(model) = current.as_ref() else {
            return;
        };
        let Some(shape) = model.shape(&key) else {
            return;
        };
        let change = zoom
            .write()
            .click_feature(&shape.name, &shape.bounds, model.canvas, &state.map_config.read());
        if let Some(zoomed) = change.notification() {
            on_zoom.call(zoomed);
        }
    };

    let on_background = move |_: MouseEvent| {
        let change = zoom.write().click_elsewhere(&state.map_config.read());
        if let Some(zoomed) = change.notification() {
            on_zoom.call(zoomed);
        }
    };

    let model = view.read().clone();
    let current_zoom = zoom.read().clone();
    let transform = current_zoom.transform();
    let zoomed = current_zoom.is_zoomed();
    let group_style = format!(
        "transform: {}; transform-origin: 0 0; transition: transform {}ms ease-in-out;",
        transform.css(),
        current_zoom.duration_ms()
    );
    let outline_style = |key: &StateKey| {
        let style = brush_style(key, brushed_state.as_ref());
        if zoomed {
            style.zoomed(transform.k)
        } else {
            style
        }
    };
    let config = state.map_config.read().clone();

    rsx! {
        CanvasContainer {
            id: MAP_CONTAINER_ID.to_string(),
            height: 500,
            on_resize: on_resize,
            if let Some(model) = model {
                svg {
                    width: "{model.canvas.width}",
                    height: "{model.canvas.height}",
                    style: "overflow: hidden; display: block;",
                    onclick: on_background,
                    g {
                        class: "map-layer",
                        style: "{group_style}",
                        for shape in model.shapes.iter() {
                            StateOutline {
                                key: "{shape.key}",
                                shape: shape.clone(),
                                shape_style: outline_style(&shape.key),
                                current_brush: brushed_state.clone(),
                                stroke: config.state_stroke.clone(),
                                on_brush: on_brush,
                                on_select: on_select,
                            }
                        }
                        for marker in model.cities.iter() {
                            CityCircle {
                                key: "{marker.record.key}",
                                marker: marker.clone(),
                                fill: config.city_fill.clone(),
                                opacity: config.city_opacity,
                            }
                        }
                    }
                    g {
                        class: "legend",
                        text {
                            x: "{model.legend.title.x}",
                            y: "{model.legend.title.y}",
                            font_size: "{model.legend.title.font_size}",
                            font_weight: "bold",
                            "{model.legend.title.text}"
                        }
                        for bin in model.legend.bins.iter() {
                            g {
                                key: "{bin.color}",
                                rect {
                                    x: "{bin.x}",
                                    y: "{bin.y}",
                                    width: "{bin.width}",
                                    height: "{bin.height}",
                                    fill: "{bin.color}",
                                }
                                text {
                                    x: "{bin.text_x}",
                                    y: "{bin.text_y}",
                                    font_size: "{model.legend.font_size}",
                                    "{bin.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One state outline with its hover and click handlers.
#[component]
fn StateOutline(
    shape: StateShape,
    shape_style: ShapeStyle,
    current_brush: Option<StateKey>,
    stroke: String,
    on_brush: EventHandler<Option<StateKey>>,
    on_select: EventHandler<StateKey>,
) -> Element {
    let mut state = use_context::<AppState>();

    let on_enter = {
        let key = shape.key.clone();
        let name = shape.name.clone();
        move |evt: MouseEvent| {
            if let Some(brush) = hover_brush(&key, current_brush.as_ref()) {
                on_brush.call(brush);
            }
            let content = {
                let dataset = state.dataset.read();
                TooltipContent::for_state(&name, &key, dataset.as_ref().and_then(|d| d.state(&key)))
            };
            let point = evt.client_coordinates();
            let mut tooltip = state.tooltip.write();
            tooltip.show(content);
            tooltip.move_to(point.x, point.y);
        }
    };

    let on_move = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        state.tooltip.write().move_to(point.x, point.y);
    };

    let on_leave = {
        let owner = TooltipOwner::State(shape.key.clone());
        move |_: MouseEvent| {
            on_brush.call(None);
            state.tooltip.write().hide(&owner);
        }
    };

    let on_click = {
        let key = shape.key.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            on_select.call(key.clone());
        }
    };

    rsx! {
        path {
            id: "{shape.key}",
            class: if shape.matched { "state" } else { "state unmatched" },
            d: "{shape.path}",
            fill: "{shape.fill}",
            stroke: "{stroke}",
            stroke_width: "{shape_style.stroke_width}",
            opacity: "{shape_style.opacity}",
            style: "cursor: pointer;",
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: on_leave,
            onclick: on_click,
        }
    }
}

/// One city marker; hovering shows its tooltip but does not brush.
#[component]
fn CityCircle(marker: CityMarker, fill: String, opacity: f64) -> Element {
    let mut state = use_context::<AppState>();

    let on_enter = {
        let content = TooltipContent::for_city(&marker.record);
        move |evt: MouseEvent| {
            let point = evt.client_coordinates();
            let mut tooltip = state.tooltip.write();
            tooltip.show(content.clone());
            tooltip.move_to(point.x, point.y);
        }
    };

    let on_move = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        state.tooltip.write().move_to(point.x, point.y);
    };

    let on_leave = {
        let owner = TooltipOwner::City(marker.record.key.clone());
        move |_: MouseEvent| {
            state.tooltip.write().hide(&owner);
        }
    };

    rsx! {
        circle {
            class: "city",
            cx: "{marker.cx}",
            cy: "{marker.cy}",
            r: "{marker.r}",
            fill: "{fill}",
            opacity: "{opacity}",
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: on_leave,
        }
    }
}
