//! Core record types and loaders for the gun deaths by state dataset.
//!
//! This crate provides:
//! - `state_key`: canonical state identifiers shared by records and map features
//! - `state_record` / `city`: per-state and per-city death counts
//! - `dataset`: the validated collection of records, loaded from CSV or JSON
//! - `geography`: state outlines loaded from a GeoJSON FeatureCollection
//! - `join`: the record/feature join report

pub mod city;
pub mod dataset;
pub mod error;
pub mod geography;
pub mod join;
pub mod state_key;
pub mod state_record;

pub use city::CityRecord;
pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use geography::{GeoFeature, Geography, DEFAULT_NAME_PROPERTY};
pub use join::JoinReport;
pub use state_key::StateKey;
pub use state_record::StateRecord;
