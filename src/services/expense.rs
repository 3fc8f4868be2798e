//! Expense service
//!
//! Records and removes group expenses. Equal splits are resolved into exact
//! per-member shares when the expense is recorded, so the stored record
//! always carries the amounts the balances are computed from.

use crate::audit::EntityType;
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::{Expense, ExpenseId, Group, GroupId, MemberId, Money, Split};
use crate::storage::Storage;

use super::split::{check_split_total, resolve_equal_split};

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub payer: MemberId,
    pub amount: Money,
    /// `None` splits equally across every current group member
    pub split: Option<Split>,
    pub created_by: Option<MemberId>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    strict_custom_splits: bool,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            strict_custom_splits: false,
        }
    }

    /// Reject custom splits whose shares don't sum to the amount
    pub fn with_strict_custom_splits(mut self, strict: bool) -> Self {
        self.strict_custom_splits = strict;
        self
    }

    /// Record an expense in a group
    ///
    /// The payer and every member named by the split must belong to the
    /// group.
    pub fn add(&self, group_id: GroupId, input: NewExpense) -> GroupSplitResult<Expense> {
        let group = self
            .storage
            .groups
            .get(group_id)?
            .ok_or_else(|| GroupSplitError::group_not_found(group_id.to_string()))?;

        let split = match input.split {
            Some(split) => split,
            None => Split::equal(group.members.iter().cloned()),
        };

        let mut expense = Expense::new(
            group_id,
            input.description.trim(),
            input.payer,
            input.amount,
            split,
        );
        expense.created_by = input.created_by;

        expense
            .validate()
            .map_err(|e| GroupSplitError::Validation(e.to_string()))?;
        ensure_members(&group, &expense)?;

        if let Split::Equal { members } = &expense.split {
            let shares = resolve_equal_split(expense.amount, members)?;
            expense.split = Split::Custom { shares };
        } else if self.strict_custom_splits {
            check_split_total(&expense)?;
        }

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        tracing::info!(
            group = %group_id,
            expense = %expense.id,
            amount = expense.amount.cents(),
            "recorded expense"
        );
        Ok(expense)
    }

    /// List a group's expenses, oldest first
    pub fn list(&self, group_id: GroupId) -> GroupSplitResult<Vec<Expense>> {
        self.storage.expenses.get_by_group(group_id)
    }

    /// Find an expense of a group by full or prefixed ID
    pub fn find(&self, group_id: GroupId, identifier: &str) -> GroupSplitResult<Option<Expense>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return Ok(self
                .storage
                .expenses
                .get(id)?
                .filter(|e| e.group_id == group_id));
        }

        // Short display form, e.g. "exp-1a2b3c4d"
        let short = identifier.trim();
        Ok(self
            .list(group_id)?
            .into_iter()
            .find(|e| e.id.to_string() == short))
    }

    /// Delete an expense from a group
    pub fn delete(&self, group_id: GroupId, id: ExpenseId) -> GroupSplitResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .filter(|e| e.group_id == group_id)
            .ok_or_else(|| GroupSplitError::expense_not_found(id.to_string()))?;

        self.storage.expenses.delete(id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }
}

fn ensure_members(group: &Group, expense: &Expense) -> GroupSplitResult<()> {
    if !group.has_member(&expense.payer) {
        return Err(GroupSplitError::member_not_found(format!(
            "{} in group '{}'",
            expense.payer, group.name
        )));
    }

    for member in expense.split.members() {
        if !group.has_member(member) {
            return Err(GroupSplitError::member_not_found(format!(
                "{} in group '{}'",
                member, group.name
            )));
        }
    }

    Ok(())
}
