//! Stacked bar chart of gun deaths by gender, one bar per state.

use crate::components::CanvasContainer;
use crate::state::AppState;
use dioxus::prelude::*;
use gdv_chart::bar_chart::{bar_opacity, BarSegment};
use gdv_chart::{BarChartViewModel, CanvasSize, TooltipContent, TooltipOwner};
use gdv_data::StateKey;

/// DOM id for the bar chart container div.
const BAR_CONTAINER_ID: &str = "gun-deaths-bar-chart";

#[component]
pub fn BarChartView(brushed_state: Option<StateKey>) -> Element {
    let state = use_context::<AppState>();
    let mut canvas: Signal<Option<CanvasSize>> = use_signal(|| None);

    let view = use_memo(move || {
        let size = canvas()?;
        if !size.is_drawable() {
            return None;
        }
        let dataset = state.dataset.read();
        let config = state.bar_config.read();
        let model = BarChartViewModel::build(dataset.as_ref()?, size, &config);
        Some(model)
    });

    let on_resize = move |size: CanvasSize| {
        if canvas() != Some(size) {
            canvas.set(Some(size));
        }
    };

    let model = view.read().clone();

    rsx! {
        CanvasContainer {
            id: BAR_CONTAINER_ID.to_string(),
            height: 500,
            on_resize: on_resize,
            if let Some(model) = model {
                BarChartSvg { model: model, brushed_state: brushed_state }
            }
        }
    }
}

#[component]
fn BarChartSvg(model: BarChartViewModel, brushed_state: Option<StateKey>) -> Element {
    let axis_x = model.y_axis_x;
    let axis_y = model.x_axis_y;
    let x_axis_end = model.canvas.width - axis_x;
    let y_axis_top = model.y_scale.range.1;
    let label_y = axis_y + 12.0;
    let tick_x0 = axis_x - 6.0;
    let tick_label_x = axis_x - 9.0;

    rsx! {
        svg {
            width: "{model.canvas.width}",
            height: "{model.canvas.height}",
            style: "overflow: visible; display: block;",
            text {
                x: "{model.title.x}",
                y: "{model.title.y}",
                font_size: "{model.title.font_size}",
                font_weight: "bold",
                text_anchor: "middle",
                "{model.title.text}"
            }
            g {
                class: "bars",
                for segment in model.segments.iter() {
                    BarRect {
                        key: "{segment.state}-{segment.series}",
                        segment: segment.clone(),
                        opacity: bar_opacity(&segment.state, brushed_state.as_ref()),
                    }
                }
            }
            g {
                class: "x-axis",
                line {
                    x1: "{axis_x}",
                    x2: "{x_axis_end}",
                    y1: "{axis_y}",
                    y2: "{axis_y}",
                    stroke: "#000",
                }
                for tick in model.x_ticks.iter() {
                    text {
                        key: "{tick.label}",
                        x: "{tick.position}",
                        y: "{label_y}",
                        font_size: "10",
                        text_anchor: "end",
                        transform: "rotate(-45 {tick.position} {label_y})",
                        "{tick.label}"
                    }
                }
            }
            g {
                class: "y-axis",
                line {
                    x1: "{axis_x}",
                    x2: "{axis_x}",
                    y1: "{axis_y}",
                    y2: "{y_axis_top}",
                    stroke: "#000",
                }
                for tick in model.y_ticks.iter() {
                    g {
                        key: "{tick.label}",
                        line {
                            x1: "{tick_x0}",
                            x2: "{axis_x}",
                            y1: "{tick.position}",
                            y2: "{tick.position}",
                            stroke: "#000",
                        }
                        text {
                            x: "{tick_label_x}",
                            y: "{tick.position}",
                            dy: "0.32em",
                            font_size: "10",
                            text_anchor: "end",
                            "{tick.label}"
                        }
                    }
                }
            }
            g {
                class: "legend",
                for entry in model.legend.iter() {
                    g {
                        key: "{entry.series}",
                        rect {
                            x: "{entry.x}",
                            y: "{entry.y}",
                            width: "{entry.size}",
                            height: "{entry.size}",
                            fill: "{entry.color}",
                        }
                        text {
                            x: "{entry.label.x}",
                            y: "{entry.label.y}",
                            font_size: "{entry.label.font_size}",
                            "{entry.label.text}"
                        }
                    }
                }
            }
        }
    }
}

/// One stacked segment with its tooltip handlers.
#[component]
fn BarRect(segment: BarSegment, opacity: f64) -> Element {
    let mut state = use_context::<AppState>();

    let on_enter = {
        let content = TooltipContent::for_bar(&segment.state, segment.series, segment.count, segment.total);
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
        let owner = TooltipOwner::Bar {
            state: segment.state.clone(),
            series: segment.series,
        };
        move |_: MouseEvent| {
            state.tooltip.write().hide(&owner);
        }
    };

    rsx! {
        rect {
            class: "{segment.series}",
            x: "{segment.x}",
            y: "{segment.y}",
            width: "{segment.width}",
            height: "{segment.height}",
            fill: "{segment.fill}",
            opacity: "{opacity}",
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: on_leave,
        }
    }
}
