//! User settings.
//!
//! Every field has a default so a settings file only needs to list what it
//! changes. Category rules, tax slabs and risk levels live here as data so
//! they can be extended without touching the processing code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calculators::{default_slabs, TaxSlab};
use crate::categorizer::{default_rules, Categorizer, CategoryRule};
use crate::config::errors::ConfigError;
use crate::models::RiskLevel;
use crate::portfolio::{default_risk_levels, RiskTable};

/// What to do with an uploaded row whose date or amount cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImportPolicy {
    /// Log the row and continue with the rest of the file.
    #[default]
    Skip,
    /// Stop the import at the first malformed row.
    Abort
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix for currency amounts in reports
    pub currency_symbol: String,

    pub import_policy: ImportPolicy,

    /// Ordered keyword groups; the first match wins
    pub category_rules: Vec<CategoryRule>,

    /// Only let income keywords label positive amounts
    pub income_requires_positive_amount: bool,

    pub tax_slabs: Vec<TaxSlab>,

    /// Asset class name to risk level
    pub risk_levels: BTreeMap<String, RiskLevel>,

    /// Percentage above which an asset is flagged as concentrated
    pub concentration_threshold: Decimal,

    /// Number of expense categories listed in the summary report
    pub top_categories: usize
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            import_policy: ImportPolicy::default(),
            category_rules: default_rules(),
            income_requires_positive_amount: false,
            tax_slabs: default_slabs(),
            risk_levels: default_risk_levels()
                .into_iter()
                .map(|(name, level)| (name.to_string(), level))
                .collect(),
            concentration_threshold: Decimal::from(20),
            top_categories: 5
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        debug!("Loaded settings from {}", path.display());

        Ok(settings)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default())
        }
    }

    pub fn categorizer(&self) -> Categorizer {
        Categorizer::new(self.category_rules.clone(), self.income_requires_positive_amount)
    }

    pub fn risk_table(&self) -> RiskTable {
        RiskTable::from_entries(self.risk_levels.iter().map(|(name, level)| (name.as_str(), *level)))
    }
}
