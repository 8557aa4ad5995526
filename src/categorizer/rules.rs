use serde::{Deserialize, Serialize};

use crate::models::TransactionType;

/// Label given to negative amounts that no expense rule recognizes.
pub const OTHER_EXPENSE: &str = "Other";
/// Label given to non-negative amounts that no income rule recognizes.
pub const OTHER_INCOME: &str = "Other Income";

/// One keyword group: a description containing any of `keywords` is labeled
/// with `category` and `transaction_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub keywords: Vec<String>
}

impl CategoryRule {
    pub fn new(category: &str, transaction_type: TransactionType, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            transaction_type,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect()
        }
    }

    /// Expects an already lower-cased description.
    pub fn matches(&self, description: &str) -> bool {
        self.keywords.iter().any(|keyword| description.contains(keyword.as_str()))
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.keywords = self.keywords.into_iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        self
    }
}

/// The built-in rule list. Order is the tie-break: the first matching group wins.
pub fn default_rules() -> Vec<CategoryRule> {
    use TransactionType::{Expense, Income};

    vec![
        CategoryRule::new("Income", Income, &["salary", "paycheck", "wage", "income", "freelance"]),
        CategoryRule::new("Investment", Income, &["dividend", "investment", "interest"]),
        CategoryRule::new("Groceries", Expense, &["grocery", "food", "supermarket", "walmart", "costco"]),
        CategoryRule::new("Transportation", Expense, &["gas", "fuel", "uber", "taxi", "metro", "bus"]),
        CategoryRule::new("Restaurants", Expense, &["restaurant", "cafe", "pizza", "mcdonalds", "starbucks"]),
        CategoryRule::new("Utilities", Expense, &["electric", "water", "internet", "phone", "utility"]),
        CategoryRule::new("Entertainment", Expense, &["movie", "netflix", "spotify", "entertainment", "game"]),
        CategoryRule::new("Shopping", Expense, &["amazon", "shopping", "store", "mall"]),
        CategoryRule::new("Healthcare", Expense, &["doctor", "hospital", "pharmacy", "medical"]),
        CategoryRule::new("Insurance", Expense, &["insurance", "premium"]),
    ]
}
