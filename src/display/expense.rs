//! Expense display formatting

use crate::models::{Expense, Money, Shares, Split};

/// Format a group's expenses as a table
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.chars().count().min(40))
        .max()
        .unwrap_or(11)
        .max(11);
    let payer_width = expenses
        .iter()
        .map(|e| e.payer.as_str().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<desc_width$}  {:<payer_width$}  {:>12}  {}\n",
        "ID",
        "Date",
        "Description",
        "Payer",
        "Amount",
        "Split",
        desc_width = desc_width,
        payer_width = payer_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<desc_width$}  {:-<payer_width$}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
        payer_width = payer_width,
    ));

    for expense in expenses {
        let description: String = expense.description.chars().take(40).collect();
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<desc_width$}  {:<payer_width$}  {:>12}  {}\n",
            expense.id.to_string(),
            expense.created_at.format("%Y-%m-%d"),
            description,
            expense.payer,
            expense.amount.format_with_symbol(symbol),
            expense.split,
            desc_width = desc_width,
            payer_width = payer_width,
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{} expense(s), {} in total\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format one expense with its per-member shares
pub fn format_expense_details(expense: &Expense, shares: &Shares, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:     {}\n", expense.id.as_uuid()));
    output.push_str(&format!("  Payer:  {}\n", expense.payer));
    output.push_str(&format!("  Amount: {}\n", expense.amount.format_with_symbol(symbol)));
    if let Some(creator) = &expense.created_by {
        output.push_str(&format!("  Added by: {}\n", creator));
    }
    output.push('\n');
    output.push_str(&format_shares(shares, symbol));

    if let Split::Custom { .. } = expense.split {
        let total: Money = shares.values().copied().sum();
        if total != expense.amount {
            output.push_str(&format!(
                "\n  Shares total {}, expense is {}\n",
                total.format_with_symbol(symbol),
                expense.amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Format per-member shares, one per line
pub fn format_shares(shares: &Shares, symbol: &str) -> String {
    let width = shares.keys().map(|m| m.as_str().len()).max().unwrap_or(0);

    shares
        .iter()
        .map(|(member, share)| {
            format!(
                "  {:<width$}  {:>10}\n",
                member.as_str(),
                share.format_with_symbol(symbol),
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupId, MemberId};

    fn m(name: &str) -> MemberId {
        MemberId::from(name)
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_expense_list(&[], "$").contains("No expenses"));
    }

    #[test]
    fn test_format_expense_list() {
        let expense = Expense::new(
            GroupId::new(),
            "Groceries",
            m("alice"),
            Money::from_cents(4250),
            Split::equal([m("alice"), m("bob")]),
        );

        let output = format_expense_list(&[expense], "$");
        assert!(output.contains("Groceries"));
        assert!(output.contains("$42.50"));
        assert!(output.contains("Equal (2 members)"));
        assert!(output.contains("1 expense(s), $42.50 in total"));
    }

    #[test]
    fn test_format_shares() {
        let shares: Shares = [(m("a"), Money::from_cents(34)), (m("bob"), Money::from_cents(33))]
            .into_iter()
            .collect();

        let output = format_shares(&shares, "$");
        assert_eq!(output, "  a         $0.34\n  bob       $0.33\n");
    }

    #[test]
    fn test_details_flag_unbalanced_custom_split() {
        let expense = Expense::new(
            GroupId::new(),
            "Taxi",
            m("alice"),
            Money::from_cents(1000),
            Split::custom([(m("bob"), Money::from_cents(400))]),
        );
        let Split::Custom { shares } = &expense.split else {
            unreachable!()
        };

        let output = format_expense_details(&expense, shares, "$");
        assert!(output.contains("Shares total $4.00, expense is $10.00"));
    }
}
