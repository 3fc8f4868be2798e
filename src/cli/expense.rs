//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list, format_shares};
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::export::write_expenses_csv;
use crate::models::{MemberId, Money, Shares, Split};
use crate::services::split::resolve_shares;
use crate::services::{ExpenseService, GroupService, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    ///
    /// Without --equal or --share the amount is split equally among all
    /// group members.
    Add {
        /// Group name or ID
        group: String,
        /// What the money was spent on
        description: String,
        /// Amount paid (e.g., "42.50")
        amount: String,
        /// Member who paid (defaults to the configured default member)
        #[arg(short, long)]
        payer: Option<String>,
        /// Split equally among these members only
        #[arg(long, value_delimiter = ',', conflicts_with = "shares")]
        equal: Vec<String>,
        /// Custom share as MEMBER=AMOUNT (repeatable)
        #[arg(long = "share", value_name = "MEMBER=AMOUNT")]
        shares: Vec<String>,
    },
    /// List a group's expenses
    List {
        /// Group name or ID
        group: String,
        /// Write CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Show an expense and its shares
    Show {
        /// Group name or ID
        group: String,
        /// Expense ID
        expense: String,
    },
    /// Delete an expense
    Delete {
        /// Group name or ID
        group: String,
        /// Expense ID
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> GroupSplitResult<()> {
    let groups = GroupService::new(storage);
    let service =
        ExpenseService::new(storage).with_strict_custom_splits(settings.strict_custom_splits);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            group,
            description,
            amount,
            payer,
            equal,
            shares,
        } => {
            let group = groups.require(&group)?;
            let amount = parse_amount(&amount)?;

            let payer = payer
                .or_else(|| settings.default_member.clone())
                .ok_or_else(|| {
                    GroupSplitError::Validation(
                        "No payer given. Use --payer or set a default member.".into(),
                    )
                })?;
            let payer = MemberId::parse(&payer)?;

            let split = if !shares.is_empty() {
                Some(Split::Custom {
                    shares: parse_shares(&shares)?,
                })
            } else if !equal.is_empty() {
                Some(Split::Equal {
                    members: equal
                        .iter()
                        .map(|m| MemberId::parse(m))
                        .collect::<GroupSplitResult<_>>()?,
                })
            } else {
                None
            };

            let expense = service.add(
                group.id,
                NewExpense {
                    description,
                    payer: payer.clone(),
                    amount,
                    split,
                    created_by: Some(payer),
                },
            )?;

            println!(
                "Recorded {} paid by {}: {}",
                expense.description,
                expense.payer,
                expense.amount.format_with_symbol(symbol)
            );
            if let Split::Custom { shares } = &expense.split {
                print!("{}", format_shares(shares, symbol));
                if let Some(total) = expense.custom_shares_total() {
                    if total != expense.amount {
                        println!(
                            "Warning: shares add up to {}, not {}",
                            total.format_with_symbol(symbol),
                            expense.amount.format_with_symbol(symbol)
                        );
                    }
                }
            }
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { group, csv } => {
            let group = groups.require(&group)?;
            let expenses = service.list(group.id)?;

            if csv {
                let stdout = std::io::stdout();
                write_expenses_csv(&expenses, &mut stdout.lock())?;
            } else {
                print!("{}", format_expense_list(&expenses, symbol));
            }
        }

        ExpenseCommands::Show { group, expense } => {
            let group = groups.require(&group)?;
            let found = service
                .find(group.id, &expense)?
                .ok_or_else(|| GroupSplitError::expense_not_found(&expense))?;

            let shares = resolve_shares(&found)?;
            print!("{}", format_expense_details(&found, &shares, symbol));
        }

        ExpenseCommands::Delete { group, expense } => {
            let group = groups.require(&group)?;
            let found = service
                .find(group.id, &expense)?
                .ok_or_else(|| GroupSplitError::expense_not_found(&expense))?;

            let deleted = service.delete(group.id, found.id)?;
            println!(
                "Deleted expense: {} ({})",
                deleted.description,
                deleted.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Parse a user-entered amount such as "42.50"
pub fn parse_amount(s: &str) -> GroupSplitResult<Money> {
    Money::parse(s).map_err(|e| {
        GroupSplitError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '42.50'. Error: {}",
            s, e
        ))
    })
}

/// Parse a `MEMBER=AMOUNT` share
pub fn parse_share(s: &str) -> GroupSplitResult<(MemberId, Money)> {
    let (member, amount) = s.split_once('=').ok_or_else(|| {
        GroupSplitError::Validation(format!("Invalid share '{}'. Use MEMBER=AMOUNT.", s))
    })?;

    Ok((MemberId::parse(member)?, parse_amount(amount.trim())?))
}

/// Parse repeated `--share` flags, adding up entries for the same member
pub fn parse_shares(inputs: &[String]) -> GroupSplitResult<Shares> {
    let mut shares = Shares::new();
    for input in inputs {
        let (member, amount) = parse_share(input)?;
        let total = shares.entry(member).or_default();
        *total = total.checked_add(amount).ok_or_else(|| {
            GroupSplitError::Validation(format!("Share total too large at '{}'", input))
        })?;
    }
    Ok(shares)
}
