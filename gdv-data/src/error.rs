/// Error types for loading the dataset and the map geography
use thiserror::Error;

/// Main error type for data loading
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to parse GeoJSON data
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJsonParse(#[from] geojson::Error),

    /// GeoJSON document is not a FeatureCollection
    #[error("GeoJSON must be a FeatureCollection")]
    NotFeatureCollection,

    /// A feature has no usable name property
    #[error("Feature {index} has no string property '{property}'")]
    MissingName { index: usize, property: String },

    /// A feature geometry is missing or is not a polygon
    #[error("Feature '{0}' has no polygon geometry")]
    InvalidGeometry(String),

    /// The same state appears twice
    #[error("Duplicate state key: {0}")]
    DuplicateState(String),
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
