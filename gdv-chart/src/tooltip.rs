//! Floating tooltip shared by both views.
//!
//! Every piece of content records which element put it there. Overlapping
//! elements resolve as topmost-wins: the element under the pointer shows
//! its content last, and a late mouse-out from an element underneath
//! cannot hide content it does not own.

use crate::bar_chart::Series;
use gdv_data::{CityRecord, StateKey, StateRecord};

/// Offset of the tooltip from the pointer, in pixels.
pub const OFFSET_X: f64 = 30.0;
pub const OFFSET_Y: f64 = -20.0;

/// Element that produced the tooltip content.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipOwner {
    State(StateKey),
    City(String),
    Bar { state: StateKey, series: Series },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub owner: TooltipOwner,
    /// One entry per rendered line
    pub lines: Vec<String>,
}

impl TooltipContent {
    /// Map tooltip for a state outline; a missing record reads as zero.
    pub fn for_state(name: &str, key: &StateKey, record: Option<&StateRecord>) -> Self {
        let count = record.map(|r| r.count).unwrap_or(0);
        let rate = record.map(StateRecord::rate_per_100k).unwrap_or(0.0);
        TooltipContent {
            owner: TooltipOwner::State(key.clone()),
            lines: vec![
                name.to_string(),
                format!("Gun Deaths: {}", count),
                format!("Deaths per 100,000: {:.2}", rate),
            ],
        }
    }

    pub fn for_city(city: &CityRecord) -> Self {
        TooltipContent {
            owner: TooltipOwner::City(city.key.clone()),
            lines: vec![city.city.clone(), format!("Gun Deaths: {}", city.count)],
        }
    }

    pub fn for_bar(state: &StateKey, series: Series, count: u64, total: u64) -> Self {
        TooltipContent {
            owner: TooltipOwner::Bar {
                state: state.clone(),
                series,
            },
            lines: vec![
                state.display_name(),
                format!("{} Deaths: {}", series.label(), count),
                format!("Total Deaths: {}", total),
            ],
        }
    }
}

/// Content and position of the tooltip overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub content: Option<TooltipContent>,
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

impl TooltipState {
    /// Replace the content; whoever shows last owns the tooltip.
    pub fn show(&mut self, content: TooltipContent) {
        self.content = Some(content);
    }

    /// Follow the pointer (client coordinates) and make the tooltip visible.
    pub fn move_to(&mut self, client_x: f64, client_y: f64) {
        self.left = client_x + OFFSET_X;
        self.top = client_y + OFFSET_Y;
        self.visible = self.content.is_some();
    }

    /// Hide the tooltip if `owner` still owns it.
    pub fn hide(&mut self, owner: &TooltipOwner) {
        let owned = self.content.as_ref().map(|c| &c.owner == owner).unwrap_or(false);
        if owned {
            self.visible = false;
            self.content = None;
        }
    }

    pub fn lines(&self) -> &[String] {
        match &self.content {
            Some(content) if self.visible => &content.lines,
            _ => &[],
        }
    }
}
