use crate::state_key::StateKey;
use serde::{Deserialize, Serialize};

/// Rates are expressed per this many residents.
pub const RATE_BASE: f64 = 100_000.0;

/// Gun death counts for one state.
///
/// Only the total and the male count are stored; the female count is
/// always derived so the two can never disagree with the total.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StateRecord {
    /// Canonical state identifier (e.g., "New_York")
    pub state: StateKey,
    /// Total gun deaths
    pub count: u64,
    /// Gun deaths among men
    pub male_count: u64,
    /// Resident population
    pub population: u64,
}

impl StateRecord {
    pub fn new(state: impl Into<StateKey>, count: u64, male_count: u64, population: u64) -> Self {
        StateRecord {
            state: state.into(),
            count,
            male_count,
            population,
        }
    }

    /// Deaths among women, `count - male_count`.
    ///
    /// Saturates at zero when the input reports more male deaths than total deaths.
    pub fn female_count(&self) -> u64 {
        self.count.saturating_sub(self.male_count)
    }

    /// Deaths per 100,000 residents, or 0 when the population is zero.
    pub fn rate_per_100k(&self) -> f64 {
        if self.population == 0 {
            return 0.0;
        }
        self.count as f64 / self.population as f64 * RATE_BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let record = StateRecord::new("Ohio", 100, 70, 1_000_000);
        assert_eq!(record.female_count(), 30);
        assert!((record.rate_per_100k() - 10.0).abs() < 1e-9);
        assert_eq!(record.male_count + record.female_count(), record.count);
    }

    #[test]
    fn test_zero_population_rate_is_zero() {
        let record = StateRecord::new("Nowhere", 12, 4, 0);
        assert_eq!(record.rate_per_100k(), 0.0);
    }

    #[test]
    fn test_female_count_saturates() {
        let record = StateRecord::new("Typo", 5, 9, 100);
        assert_eq!(record.female_count(), 0);
    }
}
