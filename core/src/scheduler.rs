//! Slot scheduler — the greedy bonus sequencing engine.
//!
//! One pass over an input snapshot:
//!   1. Evaluate feasibility for every catalog offer.
//!   2. Map each feasible offer's churn state onto the simulated
//!      week axis (weeks are 1-indexed from the start of the run).
//!   3. Greedily fill the user's parallel slots, highest velocity
//!      first, until the horizon or the placement cap is reached.
//!
//! RULES:
//!   - No I/O, no randomness, no wall-clock reads; `today` is the one
//!     external time input and the caller takes it exactly once.
//!   - All working state is call-local. Concurrent runs share nothing.
//!   - Equal velocities resolve to the earlier catalog position.
//!   - Feasibility and churn state are assessed once, from the
//!     snapshot; they are never re-checked as simulated time advances.

use crate::catalog::Catalog;
use crate::churn::{churn_status, ChurnStatus};
use crate::error::PlanResult;
use crate::feasibility::{evaluate, Feasibility};
use crate::history::CompletionRecord;
use crate::profile::UserParams;
use crate::summary::{aggregate, SequencerResult, SkippedOffer};
use crate::types::{OfferId, Week};
use chrono::NaiveDate;
use serde::Serialize;

/// Simulation horizon. The run never schedules past this week.
pub const MAX_WEEKS: Week = 520;

/// Hard cap on total bonus placements across all slots.
pub const MAX_PLACEMENTS: usize = 200;

/// Next-available sentinel for offers that cannot recur this run.
const NEVER: Week = MAX_WEEKS + 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleEntry {
    Bonus(BonusPlacement),
    Placeholder(SlotPlaceholder),
}

/// One scheduled bonus run, with the offer's descriptive fields the
/// presentation layer needs to render it without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusPlacement {
    pub id: OfferId,
    pub bank_name: String,
    pub bonus_amount: f64,
    pub dd_count_required: Option<u32>,
    pub min_direct_deposit_per_deposit: Option<f64>,
    pub min_direct_deposit_total: Option<f64>,
    pub deposit_window_days: Option<u32>,
    pub bonus_posting_days_est: Option<u32>,
    pub must_remain_open_days: Option<u32>,
    pub monthly_fee: Option<f64>,
    pub chex_sensitive: Option<String>,
    pub hard_pull: Option<bool>,
    pub source_links: Vec<String>,
    pub cooldown_months: Option<u32>,
    pub weeks_to_complete: Week,
    pub velocity: f64,
    pub slot: usize,
    pub start_week: Week,
    pub end_week: Week,
    pub payout_week: Week,
    pub cycle: u32,
}

/// An idle span in a slot while no candidate is yet eligible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotPlaceholder {
    pub slot: usize,
    pub start_week: Week,
    pub end_week: Week,
    pub waiting_for: String,
    pub available_week: Week,
}

/// Scheduler-internal view of one feasible offer.
struct Candidate<'a> {
    offer: &'a crate::catalog::BonusOffer,
    weeks_to_complete: Week,
    velocity: f64,
    cooldown_weeks: Week,
    is_lifetime: bool,
    next_available: Week,
    cycle: u32,
}

/// Run one full sequencing pass over the snapshot and return the plan.
pub fn run_sequencer(
    catalog: &Catalog,
    history: &[CompletionRecord],
    params: &UserParams,
    today: NaiveDate,
) -> PlanResult<SequencerResult> {
    params.validate()?;

    let mut skipped: Vec<SkippedOffer> = Vec::new();
    let mut pool: Vec<Candidate> = Vec::new();

    // Step 1 — candidate pool, one feasibility pass over the catalog.
    for offer in &catalog.offers {
        match evaluate(&offer.requirements, params.pay_frequency, params.paycheck_amount) {
            Feasibility::Infeasible { reason } => {
                log::debug!("skip {}: {reason}", offer.bank_name);
                skipped.push(SkippedOffer {
                    bank_name: offer.bank_name.clone(),
                    reason,
                });
            }
            Feasibility::Feasible { weeks_to_complete } => {
                pool.push(Candidate {
                    offer,
                    weeks_to_complete,
                    velocity: offer.bonus_amount / weeks_to_complete as f64,
                    cooldown_weeks: offer
                        .cooldown_months
                        .map(|m| ((m as f64 * 30.4) / 7.0).ceil() as Week)
                        .unwrap_or(0),
                    is_lifetime: offer.cooldown_months.is_none(),
                    next_available: 1,
                    cycle: 1,
                });
            }
        }
    }

    // Stable sort: equal velocities keep catalog order, which is the
    // tie-break for every later comparison.
    pool.sort_by(|a, b| {
        b.velocity
            .partial_cmp(&a.velocity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Step 2 — initial eligibility from real-world churn state.
    for cand in pool.iter_mut() {
        if history.iter().any(|r| r.offer_id == cand.offer.id) {
            // Approximation: any prior record means at least one full
            // cycle behind us; exact cycle counts are not tracked.
            cand.cycle = 2;
        }
        match churn_status(&cand.offer.id, cand.offer.cooldown_months, history, today) {
            ChurnStatus::Available => {}
            // The real completion date of an open cycle is unknowable
            // from here; park the offer for the whole run.
            ChurnStatus::InProgress { .. } | ChurnStatus::LifetimeExhausted => {
                cand.next_available = NEVER;
            }
            ChurnStatus::InCooldown { days_remaining, .. } => {
                cand.next_available = (days_remaining as f64 / 7.0).ceil() as Week + 1;
            }
        }
    }

    log::info!(
        "sequencer: {} feasible candidates, {} skipped, {} slots",
        pool.len(),
        skipped.len(),
        params.slots
    );

    // Step 3 — greedy placement loop.
    let slot_count = params.slots as usize;
    let mut slot_free: Vec<Week> = vec![1; slot_count];
    let mut slots: Vec<Vec<ScheduleEntry>> = vec![Vec::new(); slot_count];
    let mut placements = 0usize;

    while placements < MAX_PLACEMENTS {
        // a. Slot that opens soonest; lowest index wins ties.
        let mut best_slot = 0;
        for s in 1..slot_count {
            if slot_free[s] < slot_free[best_slot] {
                best_slot = s;
            }
        }
        let free_week = slot_free[best_slot];
        if free_week > MAX_WEEKS {
            break;
        }

        // b. Best candidate already available to this slot. The pool
        // is velocity-sorted, so the first hit wins.
        let best = pool.iter().position(|c| c.next_available <= free_week);

        let Some(best) = best else {
            // c. Idle gap — wait for the soonest future candidate.
            let mut next_week = NEVER;
            let mut waiting_for = "";
            for cand in &pool {
                if cand.next_available > free_week && cand.next_available < next_week {
                    next_week = cand.next_available;
                    waiting_for = &cand.offer.bank_name;
                }
            }
            if next_week > MAX_WEEKS {
                // Nothing left inside the horizon; the run is done.
                break;
            }
            slots[best_slot].push(ScheduleEntry::Placeholder(SlotPlaceholder {
                slot: best_slot,
                start_week: free_week,
                end_week: next_week - 1,
                waiting_for: waiting_for.to_string(),
                available_week: next_week,
            }));
            slot_free[best_slot] = next_week;
            continue;
        };

        // d. Place the bonus.
        let cand = &mut pool[best];
        let offer = cand.offer;

        let start_week = free_week;
        let end_week = start_week + cand.weeks_to_complete - 1;
        let posting_weeks = offer
            .timeline
            .bonus_posting_days_est
            .filter(|d| *d > 0)
            .map(|d| (d as f64 / 7.0).ceil() as Week)
            .unwrap_or(cand.weeks_to_complete + 4);
        let payout_week = start_week + posting_weeks - 1;

        slots[best_slot].push(ScheduleEntry::Bonus(BonusPlacement {
            id: offer.id.clone(),
            bank_name: offer.bank_name.clone(),
            bonus_amount: offer.bonus_amount,
            dd_count_required: offer.requirements.dd_count_required,
            min_direct_deposit_per_deposit: offer.requirements.min_direct_deposit_per_deposit,
            min_direct_deposit_total: offer.requirements.min_direct_deposit_total,
            deposit_window_days: offer.requirements.deposit_window_days,
            bonus_posting_days_est: offer.timeline.bonus_posting_days_est,
            must_remain_open_days: offer.timeline.must_remain_open_days,
            monthly_fee: offer.fees.monthly_fee,
            chex_sensitive: offer.screening.chex_sensitive.clone(),
            hard_pull: offer.screening.hard_pull,
            source_links: offer.source_links.clone(),
            cooldown_months: offer.cooldown_months,
            weeks_to_complete: cand.weeks_to_complete,
            velocity: cand.velocity,
            slot: best_slot,
            start_week,
            end_week,
            payout_week,
            cycle: cand.cycle,
        }));

        slot_free[best_slot] = start_week + cand.weeks_to_complete;

        // The cooldown clock starts at the payout, not the close.
        if cand.is_lifetime {
            cand.next_available = NEVER;
        } else {
            cand.next_available = payout_week + cand.cooldown_weeks;
            cand.cycle += 1;
        }

        placements += 1;
    }

    log::info!("sequencer: {placements} placements made");

    Ok(aggregate(slots, skipped))
}
