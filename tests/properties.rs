use proptest::prelude::*;

use groupsplit::models::{Balances, Expense, GroupId, MemberId, Money, Split};
use groupsplit::services::balance::{balances_total, compute_balances};
use groupsplit::services::split::check_split_total;
use groupsplit::services::{plan_settlements, resolve_equal_split};
use groupsplit::GroupSplitError;

const NAMES: [&str; 6] = ["ana", "ben", "cat", "dan", "eve", "fay"];

fn member(idx: usize) -> MemberId {
    MemberId::from(NAMES[idx % NAMES.len()])
}

/// Expenses split equally over a non-empty, distinct subset of members
fn equal_expenses(
    member_count: usize,
    amounts: &[i64],
    payers: &[usize],
    masks: &[usize],
) -> Vec<Expense> {
    let group_id = GroupId::new();
    amounts
        .iter()
        .enumerate()
        .map(|(idx, amount)| {
            let payer = member(payers.get(idx).copied().unwrap_or(0) % member_count);
            let mask = masks.get(idx).copied().unwrap_or(1);
            let mut participants: Vec<MemberId> = (0..member_count)
                .filter(|bit| mask & (1usize << *bit) != 0)
                .map(member)
                .collect();
            if participants.is_empty() {
                participants.push(member(0));
            }
            Expense::new(
                group_id,
                "expense",
                payer,
                Money::from_cents(*amount),
                Split::equal(participants),
            )
        })
        .collect()
}

/// Expenses with custom shares cut from `amount` in proportion to `weights`
///
/// Rounding leftovers go to the first weighted member, so shares always add
/// up to the amount.
fn custom_expenses(
    member_count: usize,
    amounts: &[i64],
    payers: &[usize],
    weights: &[Vec<i64>],
) -> Vec<Expense> {
    let group_id = GroupId::new();
    amounts
        .iter()
        .enumerate()
        .map(|(idx, amount)| {
            let payer = member(payers.get(idx).copied().unwrap_or(0) % member_count);
            let weights: Vec<i64> = weights
                .get(idx)
                .map(|w| w.iter().copied().take(member_count).collect())
                .unwrap_or_default();
            let weight_total: i64 = weights.iter().sum();

            let mut shares: Vec<(MemberId, Money)> = Vec::new();
            if weight_total == 0 {
                shares.push((member(0), Money::from_cents(*amount)));
            } else {
                let mut left = *amount;
                for (m, weight) in weights.iter().enumerate().filter(|(_, w)| **w > 0) {
                    let share = amount * weight / weight_total;
                    left -= share;
                    shares.push((member(m), Money::from_cents(share)));
                }
                shares[0].1 += Money::from_cents(left);
            }

            Expense::new(
                group_id,
                "expense",
                payer,
                Money::from_cents(*amount),
                Split::custom(shares),
            )
        })
        .collect()
}

/// Arbitrary balances made zero-sum by an extra member absorbing the rest
fn zero_sum_balances(raw: &[i64]) -> Balances {
    let mut balances: Balances = raw
        .iter()
        .enumerate()
        .map(|(idx, cents)| (member(idx), Money::from_cents(*cents)))
        .collect();
    let rest: i64 = raw.iter().sum();
    *balances.entry(MemberId::from("zed")).or_default() -= Money::from_cents(rest);
    balances
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=30),
        payers in prop::collection::vec(0usize..=5, 0..=30),
        masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let expenses = equal_expenses(member_count, &amounts, &payers, &masks);
        let balances = compute_balances(&expenses).unwrap();
        prop_assert_eq!(balances_total(&balances), Money::zero());
    }

    #[test]
    fn balances_ignore_expense_order(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=20),
        payers in prop::collection::vec(0usize..=5, 0..=20),
        masks in prop::collection::vec(0usize..=63, 0..=20),
    ) {
        let expenses = equal_expenses(member_count, &amounts, &payers, &masks);
        let mut reversed = expenses.clone();
        reversed.reverse();

        prop_assert_eq!(
            compute_balances(&expenses).unwrap(),
            compute_balances(&reversed).unwrap()
        );
    }

    #[test]
    fn equal_split_is_exact(
        total in 0i64..=10_000_000,
        n in 1usize..=6,
    ) {
        let members: Vec<MemberId> = (0..n).map(member).collect();
        let shares = resolve_equal_split(Money::from_cents(total), &members).unwrap();

        let sum: Money = shares.values().copied().sum();
        prop_assert_eq!(sum.cents(), total);

        let min = shares.values().min().copied().unwrap();
        let max = shares.values().max().copied().unwrap();
        prop_assert!((max - min).cents() <= 1);

        // Remainder goes to the first members in the given order
        for pair in members.windows(2) {
            prop_assert!(shares[&pair[0]] >= shares[&pair[1]]);
        }
    }

    #[test]
    fn settlement_zeroes_every_balance(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=30),
        payers in prop::collection::vec(0usize..=5, 0..=30),
        masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let expenses = equal_expenses(member_count, &amounts, &payers, &masks);
        let balances = compute_balances(&expenses).unwrap();
        let plan = plan_settlements(&balances);

        prop_assert!(plan.is_complete());
        for (member, balance) in plan.apply_to(&balances) {
            prop_assert_eq!(balance, Money::zero(), "{} left with {}", member, balance);
        }
    }

    #[test]
    fn settlements_are_positive_between_distinct_members(
        raw in prop::collection::vec(-50_000i64..=50_000, 1..=6),
    ) {
        let balances = zero_sum_balances(&raw);
        let plan = plan_settlements(&balances);
        for settlement in &plan.settlements {
            prop_assert!(settlement.amount.is_positive());
            prop_assert_ne!(&settlement.from, &settlement.to);
        }
        prop_assert!(plan.settlements.len() < balances.len().max(1));
    }

    #[test]
    fn custom_split_balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=20),
        payers in prop::collection::vec(0usize..=5, 0..=20),
        weights in prop::collection::vec(prop::collection::vec(0i64..=10, 6), 0..=20),
    ) {
        let expenses = custom_expenses(member_count, &amounts, &payers, &weights);
        for expense in &expenses {
            prop_assert!(check_split_total(expense).is_ok());
        }

        let balances = compute_balances(&expenses).unwrap();
        prop_assert_eq!(balances_total(&balances), Money::zero());

        let plan = plan_settlements(&balances);
        prop_assert!(plan.is_complete());
        for (member, balance) in plan.apply_to(&balances) {
            prop_assert_eq!(balance, Money::zero(), "{} left with {}", member, balance);
        }
    }

    #[test]
    fn any_zero_sum_balances_settle_completely(
        raw in prop::collection::vec(-50_000i64..=50_000, 0..=6),
    ) {
        let balances = zero_sum_balances(&raw);
        let plan = plan_settlements(&balances);

        prop_assert!(plan.is_complete());
        let settled = plan.apply_to(&balances);
        prop_assert_eq!(settled.len(), balances.len());
        for (member, balance) in settled {
            prop_assert_eq!(balance, Money::zero(), "{} left with {}", member, balance);
        }
    }

    #[test]
    fn planning_is_deterministic(
        raw in prop::collection::vec(-50_000i64..=50_000, 0..=6),
    ) {
        let balances: Balances = raw
            .iter()
            .enumerate()
            .map(|(idx, cents)| (member(idx), Money::from_cents(*cents)))
            .collect();

        let first = plan_settlements(&balances);
        let second = plan_settlements(&balances);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn equal_split_over_nobody_fails() {
    let err = resolve_equal_split(Money::from_cents(100), &[]).unwrap_err();
    assert!(matches!(err, GroupSplitError::InvalidMemberCount));
}

#[test]
fn worked_example() {
    let expense = Expense::new(
        GroupId::new(),
        "Groceries",
        member(0),
        Money::from_cents(300),
        Split::custom([
            (member(0), Money::from_cents(100)),
            (member(1), Money::from_cents(100)),
            (member(2), Money::from_cents(100)),
        ]),
    );

    let balances = compute_balances(&[expense]).unwrap();
    assert_eq!(balances[&member(0)].cents(), 200);
    assert_eq!(balances[&member(1)].cents(), -100);
    assert_eq!(balances[&member(2)].cents(), -100);

    let plan = plan_settlements(&balances);
    let triples: Vec<(&str, &str, i64)> = plan
        .settlements
        .iter()
        .map(|s| (s.from.as_str(), s.to.as_str(), s.amount.cents()))
        .collect();
    assert_eq!(triples, vec![("ben", "ana", 100), ("cat", "ana", 100)]);
}
