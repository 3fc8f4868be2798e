//! Balance sheet formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Balances, Money};
use crate::services::balance::balances_total;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Describe a single balance in words
pub fn balance_status(balance: Money, symbol: &str) -> String {
    if balance.is_positive() {
        format!("Should receive {}", balance.format_with_symbol(symbol))
    } else if balance.is_negative() {
        format!("Owes {}", balance.abs().format_with_symbol(symbol))
    } else {
        "Settled up".to_string()
    }
}

/// Format a group's balances as a table
pub fn format_balances(balances: &Balances, symbol: &str) -> String {
    if balances.is_empty() {
        return "No balances yet.".to_string();
    }

    let rows = balances.iter().map(|(member, balance)| BalanceRow {
        member: member.to_string(),
        balance: balance.format_with_symbol(symbol),
        status: balance_status(*balance, symbol),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');

    let total = balances_total(balances);
    if !total.is_zero() {
        output.push_str(&format!(
            "\nWarning: balances are off by {}; check custom splits.\n",
            total.format_with_symbol(symbol)
        ));
    }

    output
}
