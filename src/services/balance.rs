//! Balance aggregation
//!
//! Folds a group's expenses into one signed net balance per member. Balances
//! are always recomputed from the full expense list.

use tracing::debug;

use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Balances, Expense, MemberId, Money, Shares};

use super::split::resolve_shares;

/// Compute every member's net balance from a list of expenses
///
/// The payer is credited the full amount and every member named in the
/// split is debited their share. A payer who also has a share ends up
/// credited only for what the others consumed. Members who neither paid nor
/// owe anything do not appear in the result.
///
/// The result does not depend on the order of `expenses`.
///
/// # Errors
///
/// Fails when an equal split cannot be resolved (see
/// [`resolve_equal_split`](super::split::resolve_equal_split)), or with
/// [`GroupSplitError::BalanceOverflow`] when a balance leaves the range of
/// [`Money`].
pub fn compute_balances(expenses: &[Expense]) -> GroupSplitResult<Balances> {
    let mut balances = Balances::new();

    for expense in expenses {
        let shares = resolve_shares(expense)?;
        apply_expense(&mut balances, &expense.payer, expense.amount, &shares)?;
    }

    debug!(
        expenses = expenses.len(),
        members = balances.len(),
        "computed balances"
    );
    Ok(balances)
}

/// Add one expense's effect to a running balance map
pub fn apply_expense(
    balances: &mut Balances,
    payer: &MemberId,
    amount: Money,
    shares: &Shares,
) -> GroupSplitResult<()> {
    adjust(balances, payer, amount, Money::checked_add)?;

    for (member, share) in shares {
        adjust(balances, member, *share, Money::checked_sub)?;
    }
    Ok(())
}

fn adjust(
    balances: &mut Balances,
    member: &MemberId,
    delta: Money,
    op: fn(Money, Money) -> Option<Money>,
) -> GroupSplitResult<()> {
    let balance = balances.entry(member.clone()).or_default();
    *balance = op(*balance, delta)
        .ok_or_else(|| GroupSplitError::BalanceOverflow(member.to_string()))?;
    Ok(())
}

/// Fill in a zero balance for every roster member missing from `balances`
pub fn with_roster<'a>(
    mut balances: Balances,
    roster: impl IntoIterator<Item = &'a MemberId>,
) -> Balances {
    for member in roster {
        balances.entry(member.clone()).or_default();
    }
    balances
}

/// Sum of all balances; zero for well-formed expenses
pub fn balances_total(balances: &Balances) -> Money {
    balances.values().copied().sum()
}
