use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical identifier of a US state.
///
/// Built from a display name by replacing every run of whitespace with a
/// single underscore, so "New York" and "New_York" both become `New_York`.
/// Records and map features are joined on this key, and the key doubles as
/// a valid DOM id for the rendered shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    /// Normalize a display name (or an already normalized key).
    pub fn from_name(name: &str) -> Self {
        let key = name.split_whitespace().collect::<Vec<_>>().join("_");
        StateKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form, underscores back to spaces.
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateKey {
    fn from(name: &str) -> Self {
        StateKey::from_name(name)
    }
}

// Raw strings are normalized on the way in.
impl<'de> Deserialize<'de> for StateKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(StateKey::from_name(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(StateKey::from_name("New York").as_str(), "New_York");
        assert_eq!(
            StateKey::from_name("District of Columbia").as_str(),
            "District_of_Columbia"
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = StateKey::from_name("North  Carolina ");
        let twice = StateKey::from_name(once.as_str());
        assert_eq!(once, twice);
        assert_eq!(once.as_str(), "North_Carolina");
    }

    #[test]
    fn test_display_name_round_trip() {
        let key = StateKey::from_name("New Hampshire");
        assert_eq!(key.display_name(), "New Hampshire");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let key: StateKey = serde_json::from_str("\"West Virginia\"").unwrap();
        assert_eq!(key.as_str(), "West_Virginia");
    }
}
