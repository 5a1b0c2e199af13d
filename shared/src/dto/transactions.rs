use serde::{Deserialize, Serialize};

use super::{amount_value, de_amount};

/// Money flow relative to the signed-in user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    #[serde(other)]
    Other,
}

/// One activity feed entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub direction: Direction,
    pub currency: String,
    #[serde(deserialize_with = "de_amount")]
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Transaction {
    pub fn amount_value(&self) -> f64 {
        amount_value(&self.amount)
    }

    /// Amount with the sign implied by `direction`: only incoming money is positive.
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            Direction::In => self.amount_value(),
            _ => -self.amount_value(),
        }
    }
}

/// `GET /api/v1/transactions`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    #[serde(default)]
    pub items: Vec<Transaction>,
}

/// One slice of the monthly expenses breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub name: String,
    #[serde(deserialize_with = "de_amount")]
    pub amount: String,
}

impl ExpenseCategory {
    pub fn amount_value(&self) -> f64 {
        amount_value(&self.amount)
    }
}

/// `GET /api/v1/expenses`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesResponse {
    #[serde(default)]
    pub categories: Vec<ExpenseCategory>,
}

impl ExpensesResponse {
    pub fn total(&self) -> f64 {
        self.categories.iter().map(ExpenseCategory::amount_value).sum()
    }

    /// Share of `name` in the month's total, as a whole percentage.
    pub fn share_percent(&self, name: &str) -> u32 {
        let total = self.total();
        if total == 0.0 {
            return 0;
        }
        self.categories
            .iter()
            .filter(|c| c.name == name)
            .map(|c| ((c.amount_value() / total) * 100.0).round() as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transaction_feed_decodes_camel_case() {
        let feed: TransactionsResponse = serde_json::from_value(json!({
            "items": [
                {"direction": "in", "currency": "USD", "amount": "10.00",
                 "description": "Cash-back", "createdAt": "2024-05-01T10:00:00Z", "type": "cashback"},
                {"direction": "out", "currency": "USD", "amount": 4.5,
                 "createdAt": "2024-05-02T10:00:00Z"},
                {"direction": "pending", "currency": "EUR", "amount": "1",
                 "createdAt": "2024-05-03T10:00:00Z"}
            ]
        }))
        .unwrap();

        assert_eq!(feed.items.len(), 3);
        assert_eq!(feed.items[0].kind.as_deref(), Some("cashback"));
        assert_eq!(feed.items[1].signed_amount(), -4.5);
        assert_eq!(feed.items[0].signed_amount(), 10.0);
        assert_eq!(feed.items[2].direction, Direction::Other);
        assert_eq!(feed.items[2].signed_amount(), -1.0);
    }

    #[test]
    fn expenses_totals_and_shares() {
        let expenses: ExpensesResponse = serde_json::from_value(json!({
            "categories": [
                {"name": "Shopping", "amount": "75.00"},
                {"name": "Bills", "amount": "25.00"}
            ]
        }))
        .unwrap();

        assert_eq!(expenses.total(), 100.0);
        assert_eq!(expenses.share_percent("Shopping"), 75);
        assert_eq!(ExpensesResponse::default().share_percent("Bills"), 0);
    }
}
