//! CSV Export functionality
//!
//! Exports settlements and expense shares to CSV.

use std::io::Write;

use crate::api::SettlementResponse;
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Expense, GroupId};
use crate::services::split::resolve_shares;
use crate::storage::Storage;

fn export_err(e: impl std::fmt::Display) -> GroupSplitError {
    GroupSplitError::Export(e.to_string())
}

/// Write the payments of a settlement as `From,To,Amount` rows
pub fn write_settlements_csv<W: Write>(
    response: &SettlementResponse,
    writer: &mut W,
) -> GroupSplitResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["From", "To", "Amount"]).map_err(export_err)?;

    for settlement in &response.settlements {
        let amount = format!("{:.2}", settlement.amount);
        out.write_record([settlement.from.as_str(), settlement.to.as_str(), amount.as_str()])
            .map_err(export_err)?;
    }

    out.flush().map_err(export_err)
}

/// Write one row per member share of each expense
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> GroupSplitResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["ID", "Date", "Description", "Payer", "Amount", "Member", "Share"])
        .map_err(export_err)?;

    for expense in expenses {
        let id = expense.id.as_uuid().to_string();
        let date = expense.created_at.format("%Y-%m-%d").to_string();
        let amount = format!("{:.2}", expense.amount.to_major());

        for (member, share) in resolve_shares(expense)? {
            let share = format!("{:.2}", share.to_major());
            out.write_record([
                id.as_str(),
                date.as_str(),
                expense.description.as_str(),
                expense.payer.as_str(),
                amount.as_str(),
                member.as_str(),
                share.as_str(),
            ])
            .map_err(export_err)?;
        }
    }

    out.flush().map_err(export_err)
}

/// Export a group's expenses to CSV
pub fn export_group_csv<W: Write>(
    storage: &Storage,
    group_id: GroupId,
    writer: &mut W,
) -> GroupSplitResult<()> {
    if storage.groups.get(group_id)?.is_none() {
        return Err(GroupSplitError::group_not_found(group_id.to_string()));
    }

    let expenses = storage.expenses.get_by_group(group_id)?;
    write_expenses_csv(&expenses, writer)
}
