//! Balance and settlement models
//!
//! Balances and settlements are derived from a group's expenses on demand and
//! are never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::member::MemberId;
use super::money::Money;

/// Net balance per member
///
/// Positive means the group owes the member, negative means the member owes
/// the group.
pub type Balances = BTreeMap<MemberId, Money>;

/// A recommended payment from one member to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Member who pays
    pub from: MemberId,
    /// Member who receives
    pub to: MemberId,
    /// Amount to pay, always positive
    pub amount: Money,
}

impl Settlement {
    /// Create a new settlement
    pub fn new(from: MemberId, to: MemberId, amount: Money) -> Self {
        Self { from, to, amount }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, self.amount)
    }
}

/// Output of the settlement planner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Payments in the order they were matched
    pub settlements: Vec<Settlement>,
    /// Balances the planner could not match
    ///
    /// Only non-empty when the input balances did not sum to zero.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unresolved: Balances,
}

impl SettlementPlan {
    /// Check whether every balance was settled
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Total amount moved by all settlements
    pub fn total(&self) -> Money {
        self.settlements.iter().map(|s| s.amount).sum()
    }

    /// Apply every settlement to a copy of the balances
    ///
    /// The payer's balance goes up and the receiver's goes down.
    pub fn apply_to(&self, balances: &Balances) -> Balances {
        let mut result = balances.clone();
        for settlement in &self.settlements {
            *result.entry(settlement.from.clone()).or_default() += settlement.amount;
            *result.entry(settlement.to.clone()).or_default() -= settlement.amount;
        }
        result
    }
}
