use crate::dataset::Dataset;
use crate::geography::Geography;
use crate::state_key::StateKey;
use std::collections::HashSet;

/// Outcome of joining map features to state records by `StateKey`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinReport {
    /// Keys present on both sides, in feature order
    pub matched: Vec<StateKey>,
    /// Features that will render with the zero-rate color
    pub features_without_record: Vec<StateKey>,
    /// Records that have no outline to draw
    pub records_without_feature: Vec<StateKey>,
}

impl JoinReport {
    pub fn build(geography: &Geography, dataset: &Dataset) -> Self {
        let mut report = JoinReport::default();
        let mut feature_keys = HashSet::new();

        for feature in geography.features() {
            feature_keys.insert(&feature.key);
            if dataset.state(&feature.key).is_some() {
                report.matched.push(feature.key.clone());
            } else {
                report.features_without_record.push(feature.key.clone());
            }
        }

        report.records_without_feature = dataset
            .states()
            .iter()
            .filter(|r| !feature_keys.contains(&r.state))
            .map(|r| r.state.clone())
            .collect();

        report
    }

    pub fn is_complete(&self) -> bool {
        self.features_without_record.is_empty() && self.records_without_feature.is_empty()
    }

    /// Warn about every unmatched key.
    pub fn log(&self) {
        for key in &self.features_without_record {
            log::warn!("join: feature {} has no state record, rate treated as 0", key);
        }
        for key in &self.records_without_feature {
            log::warn!("join: state record {} has no map feature", key);
        }
        log::info!(
            "join: {} matched, {} unmatched features, {} unmatched records",
            self.matched.len(),
            self.features_without_record.len(),
            self.records_without_feature.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::GeoFeature;
    use crate::state_record::StateRecord;
    use geo::{polygon, MultiPolygon};

    fn feature(name: &str) -> GeoFeature {
        let square = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        GeoFeature {
            name: name.to_string(),
            key: StateKey::from_name(name),
            geometry: MultiPolygon::new(vec![square]),
        }
    }

    #[test]
    fn test_join_report() {
        let geography = Geography::new(vec![
            feature("New York"),
            feature("Puerto Rico"),
            feature("Texas"),
        ])
        .unwrap();
        let dataset = Dataset::new(
            vec![
                StateRecord::new("New_York", 10, 5, 100),
                StateRecord::new("Texas", 10, 5, 100),
                StateRecord::new("Alaska", 10, 5, 100),
            ],
            Vec::new(),
        )
        .unwrap();

        let report = JoinReport::build(&geography, &dataset);
        assert_eq!(
            report.matched,
            vec![StateKey::from_name("New York"), StateKey::from_name("Texas")]
        );
        assert_eq!(report.features_without_record, vec![StateKey::from_name("Puerto Rico")]);
        assert_eq!(report.records_without_feature, vec![StateKey::from_name("Alaska")]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_duplicate_feature_rejected() {
        assert!(Geography::new(vec![feature("Ohio"), feature("Ohio")]).is_err());
    }
}
