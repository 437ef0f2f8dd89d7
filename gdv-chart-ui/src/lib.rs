//! Shared Dioxus components for the gun deaths visualizations.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: the map, the bar chart, the tooltip overlay, the
//!   status bar and the sized containers around them

pub mod components;
pub mod state;
