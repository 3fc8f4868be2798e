//! Split resolution
//!
//! Turns an expense's split policy into the exact amount each member owes.
//! Equal splits are divided in integer minor units, so the shares always add
//! up to the total.

use tracing::debug;

use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Expense, MemberId, Money, Shares, Split};

/// Divide `total` evenly over `members`
///
/// Every member gets `floor(total / n)`; the first `total mod n` members in
/// the given order get one extra minor unit. Shares differ by at most one
/// unit and always sum to `total`.
///
/// # Errors
///
/// - [`GroupSplitError::InvalidMemberCount`] if `members` is empty
/// - [`GroupSplitError::DuplicateMember`] if a member appears twice
///
/// # Examples
/// ```
/// use groupsplit::models::{MemberId, Money};
/// use groupsplit::services::split::resolve_equal_split;
///
/// let members: Vec<MemberId> = ["a", "b", "c"].into_iter().map(MemberId::from).collect();
/// let shares = resolve_equal_split(Money::from_cents(100), &members).unwrap();
/// assert_eq!(shares[&MemberId::from("a")].cents(), 34);
/// assert_eq!(shares[&MemberId::from("b")].cents(), 33);
/// ```
pub fn resolve_equal_split(total: Money, members: &[MemberId]) -> GroupSplitResult<Shares> {
    if members.is_empty() {
        return Err(GroupSplitError::InvalidMemberCount);
    }

    let count = members.len() as i64;
    let base = total.cents().div_euclid(count);
    let remainder = total.cents().rem_euclid(count);

    let mut shares = Shares::new();
    for (index, member) in members.iter().enumerate() {
        let extra = if (index as i64) < remainder { 1 } else { 0 };
        if shares
            .insert(member.clone(), Money::from_cents(base + extra))
            .is_some()
        {
            return Err(GroupSplitError::DuplicateMember(member.to_string()));
        }
    }

    debug!(total = total.cents(), members = count, base, remainder, "resolved equal split");
    Ok(shares)
}

/// Resolve the per-member shares of an expense
///
/// Custom shares are returned as recorded, without checking their sum.
pub fn resolve_shares(expense: &Expense) -> GroupSplitResult<Shares> {
    match &expense.split {
        Split::Equal { members } => resolve_equal_split(expense.amount, members),
        Split::Custom { shares } => Ok(shares.clone()),
    }
}

/// Check that custom shares add up to the expense amount
///
/// Equal splits always pass.
pub fn check_split_total(expense: &Expense) -> GroupSplitResult<()> {
    match expense.custom_shares_total() {
        Some(actual) if actual != expense.amount => Err(GroupSplitError::UnbalancedSplit {
            expected: expense.amount,
            actual,
        }),
        _ => Ok(()),
    }
}
