//! Application configuration schema

use rigbench_core::{EvaluatorConfig, RetailerDef, RetailerTable};
use serde::{Deserialize, Serialize};

/// Settings read from the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Exact-host retailer table
    pub retailers: Vec<RetailerDef>,
    /// Compatibility tunables
    pub evaluator: EvaluatorConfig,
    /// Database file; the command line takes precedence
    pub database: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            retailers: RetailerTable::builtin(),
            evaluator: EvaluatorConfig::default(),
            database: None,
        }
    }
}

impl AppConfig {
    /// Lookup table built from the configured retailers
    pub fn retailer_table(&self) -> RetailerTable {
        RetailerTable::new(self.retailers.clone())
    }
}
