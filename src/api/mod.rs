//! Wire-format boundary
//!
//! Clients exchange expenses and settlements with amounts as major-unit
//! decimals. Everything behind this module works in [`Money`] minor units;
//! conversion happens only here.
//!
//! [`Money`]: crate::models::Money

mod records;
mod response;

pub use records::{parse_records, ExpenseRecord, SplitRecord};
pub use response::{SettlementRecord, SettlementResponse};

use tracing::debug;

use crate::error::GroupSplitResult;
use crate::models::{Balances, GroupId, MemberId, SettlementPlan};
use crate::services::balance::{compute_balances, with_roster};
use crate::services::plan_settlements;

/// Compute balances and settlements for a batch of expense records
///
/// Records without splits are divided equally over `roster`. Every roster
/// member appears in the balances, with zero if untouched by the records.
///
/// # Examples
/// ```
/// use groupsplit::api::{parse_records, settle_records};
///
/// let records = parse_records(r#"[{"payerId": "A", "amount": 3.0,
///     "splits": [{"userId": "A", "amount": 1.0},
///                {"userId": "B", "amount": 1.0},
///                {"userId": "C", "amount": 1.0}]}]"#).unwrap();
/// let response = settle_records(&records, &[]).unwrap();
///
/// assert_eq!(response.balances["A"], 2.0);
/// assert_eq!(response.settlements.len(), 2);
/// assert_eq!(response.settlements[0].from, "B");
/// ```
pub fn settle_records(
    records: &[ExpenseRecord],
    roster: &[MemberId],
) -> GroupSplitResult<SettlementResponse> {
    let (balances, plan) = plan_records(records, roster)?;
    Ok(SettlementResponse::new(None, &balances, &plan))
}

/// Compute balances and the settlement plan for records, in minor units
pub fn plan_records(
    records: &[ExpenseRecord],
    roster: &[MemberId],
) -> GroupSplitResult<(Balances, SettlementPlan)> {
    // Records carry no group; the id never leaves this function
    let group_id = GroupId::new();
    let expenses = records
        .iter()
        .map(|record| record.to_expense(group_id, roster))
        .collect::<GroupSplitResult<Vec<_>>>()?;

    let balances = with_roster(compute_balances(&expenses)?, roster);
    let plan = plan_settlements(&balances);

    debug!(records = records.len(), settlements = plan.settlements.len(), "settled records");
    Ok((balances, plan))
}
