//! Expense model
//!
//! An expense records who paid, how much, and how the cost is divided among
//! group members. Expenses are immutable once recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::{ExpenseId, GroupId};
use super::member::MemberId;
use super::money::Money;

/// Per-member amounts, keyed and iterated in member id order
pub type Shares = BTreeMap<MemberId, Money>;

/// How an expense is divided among members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Split {
    /// Divide the amount evenly over these members, in this order
    Equal { members: Vec<MemberId> },
    /// Caller-supplied amount owed by each member
    Custom { shares: Shares },
}

impl Split {
    /// Build an equal split over the given members
    pub fn equal(members: impl IntoIterator<Item = MemberId>) -> Self {
        Self::Equal {
            members: members.into_iter().collect(),
        }
    }

    /// Build a custom split from explicit shares
    pub fn custom(shares: impl IntoIterator<Item = (MemberId, Money)>) -> Self {
        Self::Custom {
            shares: shares.into_iter().collect(),
        }
    }

    /// Every member named by this split
    pub fn members(&self) -> Vec<&MemberId> {
        match self {
            Self::Equal { members } => members.iter().collect(),
            Self::Custom { shares } => shares.keys().collect(),
        }
    }

    /// Check if this is a custom split
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal { members } => write!(f, "Equal ({} members)", members.len()),
            Self::Custom { shares } => write!(f, "Custom ({} shares)", shares.len()),
        }
    }
}

/// A shared expense recorded in a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The group this expense belongs to
    pub group_id: GroupId,

    /// What the money was spent on
    #[serde(default)]
    pub description: String,

    /// Member who fronted the money
    pub payer: MemberId,

    /// Total amount paid
    pub amount: Money,

    /// How the amount is divided
    pub split: Split,

    /// Member who recorded the expense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<MemberId>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        group_id: GroupId,
        description: impl Into<String>,
        payer: MemberId,
        amount: Money,
        split: Split,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id,
            description: description.into(),
            payer,
            amount,
            split,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    /// Total of the custom shares, if the split is custom
    pub fn custom_shares_total(&self) -> Option<Money> {
        match &self.split {
            Split::Custom { shares } => Some(shares.values().copied().sum()),
            Split::Equal { .. } => None,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.split.members().is_empty() {
            return Err(ExpenseValidationError::NoParticipants);
        }

        if let Split::Custom { shares } = &self.split {
            if let Some((member, share)) = shares.iter().find(|(_, share)| share.is_negative()) {
                return Err(ExpenseValidationError::NegativeShare {
                    member: member.clone(),
                    amount: *share,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} paid by {}",
            self.description, self.amount, self.payer
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingDescription,
    NonPositiveAmount(Money),
    NoParticipants,
    NegativeShare { member: MemberId, amount: Money },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescription => write!(f, "Expense description is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::NoParticipants => write!(f, "Expense must be split among at least one member"),
            Self::NegativeShare { member, amount } => {
                write!(f, "Share for {} cannot be negative ({})", member, amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
