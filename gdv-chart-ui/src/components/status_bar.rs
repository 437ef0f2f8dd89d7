//! Title line of the page with the load status or interaction hint under it.

use crate::state::LoadStatus;
use dioxus::prelude::*;

#[component]
pub fn StatusBar(
    title: String,
    // shown once the data is ready
    hint: String,
    status: LoadStatus,
) -> Element {
    let (line_style, line) = match &status {
        LoadStatus::Loading => ("color: #666; font-style: italic;", "Loading gun deaths data...".to_string()),
        LoadStatus::Failed(message) => (
            "color: #C62828; background: #FFEBEE; border-left: 3px solid #C62828; padding: 4px 8px;",
            format!("Could not load data: {}", message),
        ),
        LoadStatus::Ready => ("color: #666;", hint),
    };

    rsx! {
        header {
            class: "status-bar",
            style: "display: flex; flex-direction: column; gap: 4px; margin-bottom: 8px;",
            h3 {
                style: "margin: 0; font-size: 16px;",
                "{title}"
            }
            p {
                role: if matches!(status, LoadStatus::Failed(_)) { "alert" } else { "status" },
                style: "margin: 0; font-size: 12px; {line_style}",
                "{line}"
            }
        }
    }
}
