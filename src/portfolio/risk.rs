use std::collections::HashMap;

use crate::models::RiskLevel;

/// Risk level per asset class, looked up by case-insensitive exact name.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskTable {
    levels: HashMap<String, RiskLevel>
}

impl Default for RiskTable {
    fn default() -> Self {
        Self::from_entries(default_risk_levels())
    }
}

impl RiskTable {
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, RiskLevel)>,
        K: AsRef<str>,
    {
        Self {
            levels: entries.into_iter()
                .map(|(name, level)| (normalize(name.as_ref()), level))
                .collect()
        }
    }

    pub fn lookup(&self, asset: &str) -> RiskLevel {
        self.levels.get(&normalize(asset)).copied().unwrap_or(RiskLevel::Unknown)
    }
}

pub fn default_risk_levels() -> Vec<(&'static str, RiskLevel)> {
    vec![
        ("stocks", RiskLevel::High),
        ("equity", RiskLevel::High),
        ("shares", RiskLevel::High),
        ("crypto", RiskLevel::VeryHigh),
        ("cryptocurrency", RiskLevel::VeryHigh),
        ("bitcoin", RiskLevel::VeryHigh),
        ("mutual funds", RiskLevel::Medium),
        ("etf", RiskLevel::Medium),
        ("etfs", RiskLevel::Medium),
        ("gold", RiskLevel::Medium),
        ("real estate", RiskLevel::Medium),
        ("bonds", RiskLevel::Low),
        ("cash", RiskLevel::Low),
        ("fixed deposit", RiskLevel::Low),
        ("savings", RiskLevel::Low),
    ]
}

fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
