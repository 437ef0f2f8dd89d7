use serde::{Deserialize, Serialize};

/// Gun deaths recorded in a single city.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    /// Unique identifier, used as the marker id
    pub key: String,
    /// City name shown in the tooltip
    pub city: String,
    /// State the city belongs to, when the source provides it
    #[serde(default)]
    pub state: Option<String>,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    /// Total gun deaths
    pub count: u64,
}
