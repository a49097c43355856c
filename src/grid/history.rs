//! Named snapshots of obstacle layouts.
//!
//! Keeps layouts in memory only; where (or whether) the YAML form is stored
//! is up to the caller.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::GridCoord;

use super::ObstacleSet;

/// Obstacle layouts keyed by name, iterated in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutHistory {
    layouts: BTreeMap<String, Vec<GridCoord>>,
}

impl LayoutHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot of `obstacles` under `name`, replacing any previous
    /// layout with that name.
    pub fn record(&mut self, name: impl Into<String>, obstacles: &ObstacleSet) {
        self.layouts.insert(name.into(), obstacles.snapshot());
    }

    /// Store a snapshot under the current Unix time in milliseconds.
    ///
    /// Returns the generated name.
    pub fn record_now(&mut self, obstacles: &ObstacleSet) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut name = millis.to_string();
        // Two snapshots within the same millisecond must not overwrite each other
        let mut suffix = 1;
        while self.layouts.contains_key(&name) {
            name = format!("{millis}-{suffix}");
            suffix += 1;
        }
        self.record(name.clone(), obstacles);
        name
    }

    /// Drop a layout. Returns `true` if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.layouts.remove(name).is_some()
    }

    /// Rebuild the obstacle set stored under `name`.
    pub fn restore(&self, name: &str) -> Option<ObstacleSet> {
        self.layouts.get(name).map(|cells| {
            let mut set = ObstacleSet::new();
            set.replace_from(cells);
            set
        })
    }

    /// Layout names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }

    /// Number of stored layouts
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Check if no layout is stored
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Parse a history from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
