//! Expense records as they arrive over the wire
//!
//! Amounts are major-unit decimals here and are converted to [`Money`]
//! exactly once, when a record becomes an [`Expense`].

use serde::{Deserialize, Serialize};

use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Expense, GroupId, MemberId, Money, Shares, Split};

/// One member's share of an expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRecord {
    pub user_id: String,
    pub amount: f64,
}

/// An expense as sent by clients
///
/// ```json
/// { "payerId": "alice", "amount": 30.0,
///   "splits": [{ "userId": "bob", "amount": 15.0 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub payer_id: String,
    pub amount: f64,
    #[serde(default)]
    pub splits: Vec<SplitRecord>,
}

impl ExpenseRecord {
    /// Convert to an in-memory expense
    ///
    /// A record without splits is divided equally over `roster`. Repeated
    /// entries for the same member are added together.
    pub fn to_expense(&self, group_id: GroupId, roster: &[MemberId]) -> GroupSplitResult<Expense> {
        let payer = MemberId::parse(&self.payer_id)?;
        let amount = to_money(self.amount, "amount")?;

        let split = if self.splits.is_empty() {
            Split::equal(roster.iter().cloned())
        } else {
            let mut shares = Shares::new();
            for record in &self.splits {
                let member = MemberId::parse(&record.user_id)?;
                let share = to_money(record.amount, &record.user_id)?;
                *shares.entry(member).or_default() += share;
            }
            Split::Custom { shares }
        };

        let description = self.description.clone().unwrap_or_default();
        Ok(Expense::new(group_id, description, payer, amount, split))
    }
}
