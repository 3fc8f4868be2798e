//! Settlement planning
//!
//! Reduces net balances to a list of point-to-point payments. Debtors are
//! matched against creditors greedily, largest first. This keeps the number
//! of payments low but does not search for the global minimum.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::GroupSplitResult;
use crate::models::{Balances, GroupId, MemberId, Money, Settlement, SettlementPlan};
use crate::storage::LedgerReader;

use super::balance::compute_balances;

/// Plan the payments that settle `balances`
///
/// Members with a zero balance are skipped. Debtors are visited most
/// negative first and creditors most positive first; equal balances keep
/// their input order (member id order for a [`Balances`] map). Every
/// emitted settlement has a positive amount and distinct endpoints.
///
/// If the balances do not sum to zero, whatever the planner could not
/// match is returned in [`SettlementPlan::unresolved`] and a warning is
/// logged.
pub fn plan_settlements(balances: &Balances) -> SettlementPlan {
    let mut debtors: Vec<(MemberId, Money)> = balances
        .iter()
        .filter(|(_, balance)| balance.is_negative())
        .map(|(member, balance)| (member.clone(), *balance))
        .collect();
    let mut creditors: Vec<(MemberId, Money)> = balances
        .iter()
        .filter(|(_, balance)| balance.is_positive())
        .map(|(member, balance)| (member.clone(), *balance))
        .collect();

    // Both sorts are stable
    debtors.sort_by_key(|(_, balance)| *balance);
    creditors.sort_by_key(|(_, balance)| std::cmp::Reverse(*balance));

    let mut settlements = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let (debtor, owed) = &mut debtors[i];
        let (creditor, due) = &mut creditors[j];

        let amount = owed.abs().min(*due);
        if amount.is_positive() {
            settlements.push(Settlement::new(debtor.clone(), creditor.clone(), amount));
        }

        *owed += amount;
        *due -= amount;

        if owed.is_zero() {
            i += 1;
        }
        if due.is_zero() {
            j += 1;
        }
    }

    let unresolved: Balances = debtors[i..]
        .iter()
        .chain(creditors[j..].iter())
        .filter(|(_, balance)| !balance.is_zero())
        .cloned()
        .collect();

    if !unresolved.is_empty() {
        let leftover: Money = unresolved.values().copied().sum();
        warn!(
            members = unresolved.len(),
            leftover = leftover.cents(),
            "balances do not sum to zero; settlement plan is incomplete"
        );
    }

    debug!(settlements = settlements.len(), "planned settlements");
    SettlementPlan {
        settlements,
        unresolved,
    }
}

/// Balances and settlement plan for one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    pub group_id: GroupId,
    pub balances: Balances,
    pub plan: SettlementPlan,
}

/// Service computing settlement reports from a ledger
pub struct SettlementService<'a, R: LedgerReader + ?Sized> {
    ledger: &'a R,
}

impl<'a, R: LedgerReader + ?Sized> SettlementService<'a, R> {
    /// Create a new settlement service reading from `ledger`
    pub fn new(ledger: &'a R) -> Self {
        Self { ledger }
    }

    /// Compute the current balances of a group
    pub fn balances(&self, group_id: GroupId) -> GroupSplitResult<Balances> {
        let expenses = self.ledger.expenses_for_group(group_id)?;
        compute_balances(&expenses)
    }

    /// Compute balances and the settlement plan of a group
    pub fn report(&self, group_id: GroupId) -> GroupSplitResult<SettlementReport> {
        let balances = self.balances(group_id)?;
        let plan = plan_settlements(&balances);

        Ok(SettlementReport {
            group_id,
            balances,
            plan,
        })
    }
}
