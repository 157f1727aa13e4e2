//! Configuration types for the vacation points engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::calculation::MonthWeightTable;
use crate::models::DEFAULT_MAX_PERIOD_DAYS;

/// Metadata and input-boundary policy, from `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The human-readable name of the points policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// A short description of the policy.
    #[serde(default)]
    pub description: String,
    /// The longest vacation period accepted, in days.
    #[serde(default = "default_max_period_days")]
    pub max_period_days: i64,
}

fn default_max_period_days() -> i64 {
    DEFAULT_MAX_PERIOD_DAYS
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            name: "Seasonal vacation points".to_string(),
            version: "built-in".to_string(),
            description: String::new(),
            max_period_days: DEFAULT_MAX_PERIOD_DAYS,
        }
    }
}

/// Month weights file structure, from `month_weights.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthWeightsConfig {
    /// Map of month number (1-12) to points per vacation day.
    pub weights: BTreeMap<u32, u32>,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Policy metadata and limits.
    policy: PolicyConfig,
    /// The month weight table.
    weights: MonthWeightTable,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(policy: PolicyConfig, weights: MonthWeightTable) -> Self {
        Self { policy, weights }
    }

    /// Returns the policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the month weight table.
    pub fn weights(&self) -> &MonthWeightTable {
        &self.weights
    }
}
