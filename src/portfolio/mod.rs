mod allocation;
mod risk;

pub use allocation::{
    allocate, analyze, concentration_alerts, diversification_score, suggest_rebalance, validate_threshold,
    AnalysisRow, PortfolioAnalysis, RebalanceSuggestion
};
pub use risk::{default_risk_levels, RiskTable};
