mod classifier;
mod rules;

pub use classifier::{Categorizer, FIRST_DATA_LINE};
pub use rules::{default_rules, CategoryRule, OTHER_EXPENSE, OTHER_INCOME};
