//! State outlines loaded from a GeoJSON FeatureCollection.

use crate::error::{DataError, Result};
use crate::state_key::StateKey;
use geo::{Geometry, MultiPolygon};
use geojson::GeoJson;
use std::collections::HashSet;

/// Feature property holding the state name in the US states GeoJSON.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME";

/// One state outline in lon/lat degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    /// Display name as found in the source (e.g., "New York")
    pub name: String,
    /// Join key against `StateRecord::state`
    pub key: StateKey,
    pub geometry: MultiPolygon<f64>,
}

/// Ordered list of state outlines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geography {
    features: Vec<GeoFeature>,
}

impl Geography {
    /// Build from already-converted features, rejecting duplicate keys.
    pub fn new(features: Vec<GeoFeature>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(features.len());
        for feature in &features {
            if !seen.insert(&feature.key) {
                return Err(DataError::DuplicateState(feature.key.to_string()));
            }
        }
        Ok(Geography { features })
    }

    /// Parse a FeatureCollection whose features carry the state name in `name_property`.
    ///
    /// Polygon and MultiPolygon geometries are accepted; anything else is an error.
    pub fn from_geojson(text: &str, name_property: &str) -> Result<Self> {
        let geojson: GeoJson = text.parse()?;
        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(DataError::NotFeatureCollection),
        };

        let mut features = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let name = feature
                .property(name_property)
                .and_then(|value| value.as_str())
                .map(str::to_string)
                .ok_or_else(|| DataError::MissingName {
                    index,
                    property: name_property.to_string(),
                })?;

            let value = match feature.geometry {
                Some(geometry) => geometry.value,
                None => return Err(DataError::InvalidGeometry(name)),
            };
            let geometry: Geometry<f64> = match value.try_into() {
                Ok(geometry) => geometry,
                Err(_) => return Err(DataError::InvalidGeometry(name)),
            };
            let geometry = match geometry {
                Geometry::MultiPolygon(mp) => mp,
                Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
                _ => return Err(DataError::InvalidGeometry(name)),
            };

            features.push(GeoFeature {
                key: StateKey::from_name(&name),
                name,
                geometry,
            });
        }

        log::info!("geography: loaded {} features", features.len());
        Geography::new(features)
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STATES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"NAME": "New Mexico"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-109.05, 37.0], [-103.0, 37.0], [-103.0, 31.33], [-109.05, 31.33], [-109.05, 37.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"NAME": "Rhode Island"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-71.9, 42.0], [-71.4, 42.0], [-71.4, 41.3], [-71.9, 41.3], [-71.9, 42.0]]],
                        [[[-71.6, 41.2], [-71.5, 41.2], [-71.5, 41.1], [-71.6, 41.2]]]
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_from_geojson() {
        let geo = Geography::from_geojson(TWO_STATES, DEFAULT_NAME_PROPERTY).unwrap();
        assert_eq!(geo.features().len(), 2);

        let nm = &geo.features()[0];
        assert_eq!(nm.name, "New Mexico");
        assert_eq!(nm.key.as_str(), "New_Mexico");
        assert_eq!(nm.geometry.0.len(), 1);

        let ri = &geo.features()[1];
        assert_eq!(ri.key, StateKey::from_name("Rhode Island"));
        assert_eq!(ri.geometry.0.len(), 2);
    }

    #[test]
    fn test_missing_name_property() {
        let err = Geography::from_geojson(TWO_STATES, "STATE_NAME").unwrap_err();
        assert!(matches!(err, DataError::MissingName { index: 0, .. }));
    }

    #[test]
    fn test_point_geometry_rejected() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME": "Dot"},
                 "geometry": {"type": "Point", "coordinates": [-100.0, 40.0]}}
            ]
        }"#;
        let err = Geography::from_geojson(text, DEFAULT_NAME_PROPERTY).unwrap_err();
        assert!(matches!(err, DataError::InvalidGeometry(ref n) if n == "Dot"));
    }

    #[test]
    fn test_not_a_feature_collection() {
        let text = r#"{"type": "Point", "coordinates": [-100.0, 40.0]}"#;
        assert!(matches!(
            Geography::from_geojson(text, DEFAULT_NAME_PROPERTY),
            Err(DataError::NotFeatureCollection)
        ));
    }
}
