//! plan-runner: headless bonus sequencing runner for churnplan.
//!
//! Usage:
//!   plan-runner --slots 2 --pay-frequency biweekly --paycheck 1000
//!   plan-runner --catalog data/bonus_catalog.json --history hist.json --today 2026-08-28 --json

use anyhow::Result;
use chrono::NaiveDate;
use churnplan_core::{
    catalog::Catalog,
    history,
    profile::{PayFrequency, UserParams},
    run_sequencer,
    scheduler::ScheduleEntry,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let slots = parse_arg(&args, "--slots", 2u32);
    let paycheck = parse_arg(&args, "--paycheck", 1000.0f64);
    let pay_frequency = parse_arg(&args, "--pay-frequency", PayFrequency::Biweekly);
    let json_mode = args.iter().any(|a| a == "--json");
    let catalog_path = args
        .windows(2)
        .find(|w| w[0] == "--catalog")
        .map(|w| w[1].as_str())
        .unwrap_or("./data/bonus_catalog.json");
    let history_path = args
        .windows(2)
        .find(|w| w[0] == "--history")
        .map(|w| w[1].as_str());

    // The single wall-clock read, taken once outside the engine.
    let today = args
        .windows(2)
        .find(|w| w[0] == "--today")
        .and_then(|w| NaiveDate::parse_from_str(&w[1], "%Y-%m-%d").ok())
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let catalog = Catalog::load(catalog_path)?;
    let records = match history_path {
        Some(path) => history::load(path)?,
        None => Vec::new(),
    };

    let params = UserParams {
        slots,
        pay_frequency,
        paycheck_amount: paycheck,
    };

    if !json_mode {
        println!("churnplan — plan-runner");
        println!("  catalog:   {catalog_path} ({} offers)", catalog.offers.len());
        println!("  history:   {} records", records.len());
        println!("  slots:     {slots}");
        println!("  paycheck:  ${paycheck:.0} ({pay_frequency:?})");
        println!("  today:     {today}");
        println!();
    }

    let result = run_sequencer(&catalog, &records, &params, today)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("=== BONUS PLAN ===");
    for (i, entries) in result.slots.iter().enumerate() {
        println!("  slot {}:", i + 1);
        if entries.is_empty() {
            println!("    (empty)");
        }
        for entry in entries {
            match entry {
                ScheduleEntry::Bonus(p) => println!(
                    "    wk {:>3}-{:<3} {:<24} ${:>6.0}  (payout wk {}, cycle {}, velocity {:.1}/wk)",
                    p.start_week,
                    p.end_week,
                    p.bank_name,
                    p.bonus_amount,
                    p.payout_week,
                    p.cycle,
                    p.velocity,
                ),
                ScheduleEntry::Placeholder(ph) => println!(
                    "    wk {:>3}-{:<3} waiting for {} (available wk {})",
                    ph.start_week, ph.end_week, ph.waiting_for, ph.available_week,
                ),
            }
        }
    }

    println!();
    println!("=== SUMMARY ===");
    println!("  total bonus:   ${:.0}", result.total_bonus);
    println!("  horizon:       {} weeks", result.horizon_weeks);
    println!("  skipped:       {}", result.skipped.len());
    for s in &result.skipped {
        println!("    {:<24} {}", s.bank_name, s.reason);
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
