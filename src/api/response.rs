//! Settlement responses in major units

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Balances, SettlementPlan};
use crate::services::SettlementReport;

/// A single payment in a settlement response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Balances and recommended payments, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub balances: BTreeMap<String, f64>,
    pub settlements: Vec<SettlementRecord>,
    /// Leftover balances when the input did not sum to zero
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unresolved: BTreeMap<String, f64>,
}

impl SettlementResponse {
    /// Build a response from balances and a plan
    pub fn new(group_id: Option<String>, balances: &Balances, plan: &SettlementPlan) -> Self {
        Self {
            group_id,
            balances: to_major_map(balances),
            settlements: plan
                .settlements
                .iter()
                .map(|s| SettlementRecord {
                    from: s.from.to_string(),
                    to: s.to.to_string(),
                    amount: s.amount.to_major(),
                })
                .collect(),
            unresolved: to_major_map(&plan.unresolved),
        }
    }
}

impl From<&SettlementReport> for SettlementResponse {
    fn from(report: &SettlementReport) -> Self {
        Self::new(
            Some(report.group_id.as_uuid().to_string()),
            &report.balances,
            &report.plan,
        )
    }
}

fn to_major_map(balances: &Balances) -> BTreeMap<String, f64> {
    balances
        .iter()
        .map(|(member, amount)| (member.to_string(), amount.to_major()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupId, MemberId, Money, Settlement};

    #[test]
    fn test_serializes_camel_case_major_units() {
        let balances: Balances = [
            (MemberId::from("A"), Money::from_cents(250)),
            (MemberId::from("B"), Money::from_cents(-250)),
        ]
        .into_iter()
        .collect();
        let plan = SettlementPlan {
            settlements: vec![Settlement::new(
                MemberId::from("B"),
                MemberId::from("A"),
                Money::from_cents(250),
            )],
            unresolved: Balances::new(),
        };

        let report = SettlementReport {
            group_id: GroupId::new(),
            balances,
            plan,
        };
        let json = serde_json::to_value(SettlementResponse::from(&report)).unwrap();

        assert_eq!(json["groupId"], report.group_id.as_uuid().to_string());
        assert_eq!(json["balances"]["A"], 2.5);
        assert_eq!(json["balances"]["B"], -2.5);
        assert_eq!(json["settlements"][0]["from"], "B");
        assert_eq!(json["settlements"][0]["amount"], 2.5);
        assert!(json.get("unresolved").is_none());
    }

    #[test]
    fn test_group_id_omitted_when_absent() {
        let response = SettlementResponse::new(None, &Balances::new(), &SettlementPlan::default());
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"balances":{},"settlements":[]}"#);
    }
}
