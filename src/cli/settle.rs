//! Balance and settlement CLI commands

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;

use crate::api::{parse_records, plan_records, SettlementResponse};
use crate::config::Settings;
use crate::display::{format_balances, format_settlement_plan, format_shares};
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::export::{write_settlement_json, write_settlement_yaml, write_settlements_csv};
use crate::models::MemberId;
use crate::services::balance::with_roster;
use crate::services::{resolve_equal_split, GroupService, SettlementService};
use crate::storage::Storage;

use super::expense::parse_amount;

/// Output format for settlement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// JSON response
    Json,
    /// YAML response
    Yaml,
    /// CSV of the payments only
    Csv,
}

/// Show the net balance of every member of a group
pub fn handle_balances(storage: &Storage, settings: &Settings, group: &str) -> GroupSplitResult<()> {
    let group = GroupService::new(storage).require(group)?;
    let balances = SettlementService::new(storage).balances(group.id)?;
    let balances = with_roster(balances, &group.members);

    println!("Balances for {}", group.name);
    println!();
    print!("{}", format_balances(&balances, &settings.currency_symbol));
    Ok(())
}

/// Show who should pay whom to settle a group
pub fn handle_settle(
    storage: &Storage,
    settings: &Settings,
    group: &str,
    format: OutputFormat,
) -> GroupSplitResult<()> {
    let group = GroupService::new(storage).require(group)?;
    let report = SettlementService::new(storage).report(group.id)?;
    let balances = with_roster(report.balances, &group.members);

    let response = SettlementResponse::new(
        Some(group.id.as_uuid().to_string()),
        &balances,
        &report.plan,
    );

    if format == OutputFormat::Table {
        println!("Settlement for {}", group.name);
        println!();
        print!("{}", format_balances(&balances, &settings.currency_symbol));
        println!();
        print!("{}", format_settlement_plan(&report.plan, &settings.currency_symbol));
        return Ok(());
    }

    write_response(&response, format)
}

/// Split an amount equally and print each member's share
pub fn handle_split(settings: &Settings, amount: &str, members: &[String]) -> GroupSplitResult<()> {
    let amount = parse_amount(amount)?;
    let members = members
        .iter()
        .map(|m| MemberId::parse(m))
        .collect::<GroupSplitResult<Vec<_>>>()?;

    let shares = resolve_equal_split(amount, &members)?;
    print!("{}", format_shares(&shares, &settings.currency_symbol));
    Ok(())
}

/// Settle a JSON file of expense records without touching storage
pub fn handle_settle_file(
    settings: &Settings,
    path: &Path,
    members: &[String],
    format: OutputFormat,
) -> GroupSplitResult<()> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        GroupSplitError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let records = parse_records(&contents)?;
    let roster = members
        .iter()
        .map(|m| MemberId::parse(m))
        .collect::<GroupSplitResult<Vec<_>>>()?;

    let (balances, plan) = plan_records(&records, &roster)?;

    if format == OutputFormat::Table {
        print!("{}", format_balances(&balances, &settings.currency_symbol));
        println!();
        print!("{}", format_settlement_plan(&plan, &settings.currency_symbol));
        return Ok(());
    }

    write_response(&SettlementResponse::new(None, &balances, &plan), format)
}

fn write_response(response: &SettlementResponse, format: OutputFormat) -> GroupSplitResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json | OutputFormat::Table => write_settlement_json(response, &mut out)?,
        OutputFormat::Yaml => write_settlement_yaml(response, &mut out)?,
        OutputFormat::Csv => write_settlements_csv(response, &mut out)?,
    }

    out.flush().map_err(GroupSplitError::from)
}
