//! YAML loading for [`PlannerConfig`].

use std::path::Path;

use crate::error::PathError;
use crate::pathfinding::PlannerConfig;

use super::ConfigError;

impl PlannerConfig {
    /// Parse from YAML string; missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn check(&self) -> Result<(), PathError> {
        if self.min_segment_length < 1 {
            return Err(PathError::InvalidMinSegmentLength(self.min_segment_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::Algorithm;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_mapping() {
        let config = PlannerConfig::from_yaml("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
algorithm: zeta
min_segment_length: 6
"#;
        let config = PlannerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.algorithm, Algorithm::Zeta);
        assert_eq!(config.min_segment_length, 6);
        assert!(config.prevent_self_intersection);
        assert!(config.forbid_reversal);
    }

    #[test]
    fn test_rejects_zero_min_segment() {
        let err = PlannerConfig::from_yaml("min_segment_length: 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(PathError::InvalidMinSegmentLength(0))
        ));
    }

    #[test]
    fn test_unknown_algorithm_is_parse_error() {
        let err = PlannerConfig::from_yaml("algorithm: dijkstra").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let config = PlannerConfig::new(Algorithm::Constrained, 4).unguarded();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

        let loaded = PlannerConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlannerConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
