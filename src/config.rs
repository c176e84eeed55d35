//! Thresholds and cost constants used by the derivation layer.
//!
//! Every field has a default, so an empty file (or no file) yields the stock
//! policy. Example `buildlens.toml`:
//!
//! ```toml
//! large_dependency_kb = 250.0
//! outdated_major_below = 3
//!
//! [implementation_cost]
//! high = 50000.0
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BuildLensError, Result};
use crate::models::Effort;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Dependencies strictly above this size (KB) score a risk point.
    pub large_dependency_kb: f64,
    /// Major versions below this are flagged as potentially outdated.
    pub outdated_major_below: u64,
    /// Assumed version for dependencies that declare none.
    pub default_version: String,
    pub large_size_class_kb: f64,
    pub medium_size_class_kb: f64,
    pub builds_per_day: f64,
    pub cost_per_build_minute: f64,
    pub developer_wait_cost_per_minute: f64,
    pub quick_win_limit: usize,
    pub implementation_cost: ImplementationCost,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            large_dependency_kb: 300.0,
            outdated_major_below: 2,
            default_version: "1.0.0".to_string(),
            large_size_class_kb: 500.0,
            medium_size_class_kb: 200.0,
            builds_per_day: 15.0,
            cost_per_build_minute: 0.5,
            developer_wait_cost_per_minute: 2.0,
            quick_win_limit: 3,
            implementation_cost: ImplementationCost::default(),
        }
    }
}

/// Up-front cost of carrying out an opportunity, by effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationCost {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ImplementationCost {
    fn default() -> Self {
        Self {
            low: 5_000.0,
            medium: 15_000.0,
            high: 35_000.0,
        }
    }
}

impl ImplementationCost {
    pub fn for_effort(&self, effort: Effort) -> f64 {
        match effort {
            Effort::Low => self.low,
            Effort::Medium => self.medium,
            Effort::High => self.high,
        }
    }
}

impl Policy {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading policy from {}", path.display());

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let policy: Self = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Loads `path` when given, otherwise returns the default policy.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    fn validate(&self) -> Result<()> {
        let thresholds = [
            ("large_dependency_kb", self.large_dependency_kb),
            ("large_size_class_kb", self.large_size_class_kb),
            ("medium_size_class_kb", self.medium_size_class_kb),
            ("builds_per_day", self.builds_per_day),
            ("cost_per_build_minute", self.cost_per_build_minute),
            ("developer_wait_cost_per_minute", self.developer_wait_cost_per_minute),
        ];
        if let Some((name, value)) = thresholds
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(BuildLensError::ConfigError(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }

        if self.medium_size_class_kb > self.large_size_class_kb {
            return Err(BuildLensError::ConfigError(format!(
                "medium_size_class_kb ({}) exceeds large_size_class_kb ({})",
                self.medium_size_class_kb, self.large_size_class_kb
            )));
        }

        let costs = &self.implementation_cost;
        if [costs.low, costs.medium, costs.high]
            .iter()
            .any(|c| !c.is_finite() || *c <= 0.0)
        {
            return Err(BuildLensError::ConfigError(
                "implementation costs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
