//! Result aggregator — rolls a finished schedule up into totals.

use crate::scheduler::ScheduleEntry;
use crate::types::Week;
use serde::Serialize;

/// An offer excluded from the run, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedOffer {
    pub bank_name: String,
    pub reason: String,
}

/// The immutable outcome of one sequencing pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerResult {
    /// One entry sequence per slot, start-week ascending and contiguous.
    pub slots: Vec<Vec<ScheduleEntry>>,
    pub total_bonus: f64,
    /// Max payout week across all placements; 0 when nothing placed.
    pub horizon_weeks: Week,
    pub skipped: Vec<SkippedOffer>,
}

pub fn aggregate(slots: Vec<Vec<ScheduleEntry>>, skipped: Vec<SkippedOffer>) -> SequencerResult {
    let mut total_bonus = 0.0;
    let mut horizon_weeks: Week = 0;

    for entry in slots.iter().flatten() {
        if let ScheduleEntry::Bonus(placement) = entry {
            total_bonus += placement.bonus_amount;
            horizon_weeks = horizon_weeks.max(placement.payout_week);
        }
    }

    SequencerResult {
        slots,
        total_bonus,
        horizon_weeks,
        skipped,
    }
}
