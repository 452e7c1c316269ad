//! Detector configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HearstError, Result};
use crate::hearst::rules::HearstRule;

/// Configuration accepted by [`crate::hearst::HyponymDetector`].
///
/// `rules` are appended after the built-in rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    pub extended: bool,
    pub rules: Vec<HearstRule>,
}

impl DetectorConfig {
    pub fn new(extended: bool) -> Self {
        Self { extended, rules: Vec::new() }
    }

    /// Build from a pipe config map. `null` yields the defaults.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| HearstError::Config(e.to_string()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| HearstError::Config(e.to_string()))
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| HearstError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
            .map_err(|e| HearstError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Read a YAML list of extra rules
    pub fn rules_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<HearstRule>> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| HearstError::Config(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&yaml).map_err(|e| HearstError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_value() {
        assert_eq!(DetectorConfig::from_json_value(json!(null)).unwrap(), DetectorConfig::default());
        assert!(DetectorConfig::from_json_value(json!({"extended": true})).unwrap().extended);
        assert!(!DetectorConfig::from_json_value(json!({})).unwrap().extended);
    }

    #[test]
    fn test_rejects_bad_values() {
        for value in [json!({"extended": "yes"}), json!({"extended": 1}), json!({"extend": true})] {
            assert!(matches!(DetectorConfig::from_json_value(value), Err(HearstError::Config(_))));
        }
    }

    #[test]
    fn test_from_yaml() {
        let config = DetectorConfig::from_yaml_str(
            "extended: true\nrules:\n  - label: known_as\n    query: \"(?<hyponym> [pos=NOUN]) [lemma=know] [lemma=as] (?<hypernym> [pos=NOUN])\"\n",
        )
        .unwrap();
        assert!(config.extended);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].label, "known_as");
        assert!(!config.rules[0].extended);

        assert_eq!(DetectorConfig::from_yaml_str("").unwrap(), DetectorConfig::default());
        assert!(DetectorConfig::from_yaml_str("extended: maybe").is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detector.yaml");
        std::fs::write(&path, "extended: true\n").unwrap();
        assert!(DetectorConfig::from_yaml_file(&path).unwrap().extended);
        assert!(DetectorConfig::from_yaml_file(dir.path().join("missing.yaml")).is_err());
    }
}
