//! Ledger reader capability
//!
//! The settlement engine never reaches into storage itself. Callers hand it
//! a `LedgerReader`, which makes the backing store swappable (JSON files,
//! an in-memory map in tests, a remote document store).

use crate::error::GroupSplitResult;
use crate::models::{Expense, GroupId};

/// Read access to the recorded expenses of a group
pub trait LedgerReader {
    /// All expenses recorded for `group_id`, as one consistent snapshot
    ///
    /// An unknown group yields an empty list.
    fn expenses_for_group(&self, group_id: GroupId) -> GroupSplitResult<Vec<Expense>>;
}
