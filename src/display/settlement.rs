//! Settlement plan formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::SettlementPlan;

#[derive(Tabled)]
struct SettlementRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a settlement plan as a table of payments
pub fn format_settlement_plan(plan: &SettlementPlan, symbol: &str) -> String {
    let mut output = String::new();

    if plan.settlements.is_empty() {
        output.push_str("Everyone is settled up.\n");
    } else {
        let rows = plan.settlements.iter().map(|s| SettlementRow {
            from: s.from.to_string(),
            to: s.to.to_string(),
            amount: s.amount.format_with_symbol(symbol),
        });
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push('\n');
        output.push_str(&format!(
            "\n{} payment(s), {} in total\n",
            plan.settlements.len(),
            plan.total().format_with_symbol(symbol)
        ));
    }

    if !plan.is_complete() {
        output.push_str("\nCould not settle:\n");
        for (member, balance) in &plan.unresolved {
            output.push_str(&format!("  {}  {}\n", member, balance.format_with_symbol(symbol)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Balances, MemberId, Money, Settlement};

    #[test]
    fn test_format_empty_plan() {
        let output = format_settlement_plan(&SettlementPlan::default(), "$");
        assert!(output.contains("Everyone is settled up"));
        assert!(!output.contains("Could not settle"));
    }

    #[test]
    fn test_format_plan() {
        let plan = SettlementPlan {
            settlements: vec![
                Settlement::new(MemberId::from("bob"), MemberId::from("alice"), Money::from_cents(1000)),
                Settlement::new(MemberId::from("carol"), MemberId::from("alice"), Money::from_cents(1000)),
            ],
            unresolved: Balances::new(),
        };

        let output = format_settlement_plan(&plan, "$");
        assert!(output.contains("From"));
        assert!(output.contains("bob"));
        assert!(output.contains("$10.00"));
        assert!(output.contains("2 payment(s), $20.00 in total"));
    }

    #[test]
    fn test_format_unresolved() {
        let plan = SettlementPlan {
            settlements: Vec::new(),
            unresolved: [(MemberId::from("alice"), Money::from_cents(40))].into_iter().collect(),
        };

        let output = format_settlement_plan(&plan, "$");
        assert!(output.contains("Could not settle"));
        assert!(output.contains("alice  $0.40"));
    }
}
