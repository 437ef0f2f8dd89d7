//! Floating tooltip that follows the pointer.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders `AppState::tooltip`; hidden while no element owns it.
#[component]
pub fn TooltipOverlay() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read().clone();
    let lines = tooltip.lines().to_vec();

    let style = format!(
        "position: fixed; left: {}px; top: {}px; visibility: {}; pointer-events: none; \
         background: rgba(255, 255, 255, 0.95); border: 1px solid #999; border-radius: 4px; \
         padding: 6px 8px; font-size: 12px; line-height: 1.4; z-index: 10;",
        tooltip.left,
        tooltip.top,
        if tooltip.visible { "visible" } else { "hidden" },
    );

    rsx! {
        div {
            class: "tooltip",
            style: "{style}",
            for (i, line) in lines.into_iter().enumerate() {
                div {
                    key: "{i}",
                    font_weight: if i == 0 { "bold" } else { "normal" },
                    "{line}"
                }
            }
        }
    }
}
