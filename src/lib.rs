//! Personal finance toolkit: transaction import and categorization, cash-flow
//! analytics, portfolio diversification and a handful of one-shot calculators.

pub mod analytics;
pub mod calculators;
pub mod categorizer;
pub mod config;
pub mod engine;
pub mod models;
pub mod portfolio;
pub mod session;
pub mod types;
