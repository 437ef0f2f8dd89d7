//! The validated collection of state and city records.
//!
//! # Formats
//!
//! - **States CSV** (has headers): `state,count,male_count,population`
//! - **Cities CSV** (has headers): `key,city,state,lat,lng,count`
//! - **JSON**: `{ "states": [StateRecord...], "cities": [CityRecord...] }`,
//!   extra fields are ignored

use crate::city::CityRecord;
use crate::error::{DataError, Result};
use crate::state_key::StateKey;
use crate::state_record::StateRecord;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
struct RawDataset {
    states: Vec<StateRecord>,
    #[serde(default)]
    cities: Vec<CityRecord>,
}

/// State and city records with a key index over the states.
///
/// Views only ever read from a `Dataset`; a new one is built whenever the
/// underlying data changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    states: Vec<StateRecord>,
    cities: Vec<CityRecord>,
    index: HashMap<StateKey, usize>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate state keys.
    pub fn new(states: Vec<StateRecord>, cities: Vec<CityRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(states.len());
        for (i, record) in states.iter().enumerate() {
            if index.insert(record.state.clone(), i).is_some() {
                return Err(DataError::DuplicateState(record.state.to_string()));
            }
        }
        log::info!(
            "dataset: loaded {} states and {} cities",
            states.len(),
            cities.len()
        );
        Ok(Dataset {
            states,
            cities,
            index,
        })
    }

    /// Parse the states and cities CSV files.
    pub fn from_csv(states_csv: &str, cities_csv: &str) -> Result<Self> {
        let states = parse_csv::<StateRecord>(states_csv)?;
        let cities = parse_csv::<CityRecord>(cities_csv)?;
        Dataset::new(states, cities)
    }

    /// Parse a JSON document holding `states` and `cities` arrays.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Dataset::new(raw.states, raw.cities)
    }

    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn state(&self, key: &StateKey) -> Option<&StateRecord> {
        self.index.get(key).map(|&i| &self.states[i])
    }

    /// Rate per 100k for a state, 0 when the state has no record.
    pub fn rate_for(&self, key: &StateKey) -> f64 {
        self.state(key).map(StateRecord::rate_per_100k).unwrap_or(0.0)
    }

    /// Rates of every state record, in record order.
    pub fn rates(&self) -> Vec<f64> {
        self.states.iter().map(StateRecord::rate_per_100k).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

fn parse_csv<T>(csv_data: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES_CSV: &str = "\
state,count,male_count,population
New York,100,70,1000000
Texas,300,250,2000000
Vermont,10,9,0
";

    const CITIES_CSV: &str = "\
key,city,state,lat,lng,count
nyc,New York City,New York,40.71,-74.0,500
hou,Houston,,29.76,-95.36,120
";

    #[test]
    fn test_from_csv() {
        let data = Dataset::from_csv(STATES_CSV, CITIES_CSV).unwrap();
        assert_eq!(data.states().len(), 3);
        assert_eq!(data.cities().len(), 2);

        let ny = data.state(&StateKey::from_name("New York")).unwrap();
        assert_eq!(ny.state.as_str(), "New_York");
        assert_eq!(ny.female_count(), 30);

        assert_eq!(data.cities()[0].state.as_deref(), Some("New York"));
        assert_eq!(data.cities()[1].state, None);
    }

    #[test]
    fn test_rate_for_missing_state_is_zero() {
        let data = Dataset::from_csv(STATES_CSV, CITIES_CSV).unwrap();
        assert_eq!(data.rate_for(&StateKey::from_name("Ohio")), 0.0);
        assert_eq!(data.rate_for(&StateKey::from_name("Vermont")), 0.0);
        assert!((data.rate_for(&StateKey::from_name("Texas")) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_state_rejected() {
        let csv = "state,count,male_count,population\nOhio,1,1,10\nOhio,2,1,10\n";
        let err = Dataset::from_csv(csv, "key,city,state,lat,lng,count\n").unwrap_err();
        assert!(matches!(err, DataError::DuplicateState(ref s) if s == "Ohio"));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let json = r#"{
            "states": [
                {"state": "New_Jersey", "count": 40, "male_count": 30, "population": 900000, "abreviation": "NJ"}
            ],
            "cities": [
                {"key": "nwk", "city": "Newark", "lat": 40.73, "lng": -74.17, "count": 12}
            ]
        }"#;
        let data = Dataset::from_json(json).unwrap();
        assert_eq!(data.states()[0].state.display_name(), "New Jersey");
        assert_eq!(data.cities()[0].count, 12);
    }

    #[test]
    fn test_bad_csv_is_an_error() {
        let csv = "state,count,male_count,population\nOhio,many,1,10\n";
        assert!(matches!(
            Dataset::from_csv(csv, "key,city,state,lat,lng,count\n"),
            Err(DataError::CsvParse(_))
        ));
    }
}
