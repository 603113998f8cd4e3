//! Churn state tracker — classifies an offer's real-world eligibility
//! from its completion history, as of one "today" snapshot.
//!
//! Exactly one state applies:
//!   - Available:         no records, or the cooldown has fully elapsed
//!   - InProgress:        an open cycle exists (takes precedence over all)
//!   - InCooldown:        churnable, latest close + cooldown months is future
//!   - LifetimeExhausted: non-churnable with a closed cycle — terminal
//!
//! Pure; called once per offer at scheduling setup. Hypothetical
//! future cycles are the scheduler's business, not this module's.

use crate::history::CompletionRecord;
use crate::types::RecordId;
use chrono::{Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChurnStatus {
    Available,
    InProgress {
        opened_date: NaiveDate,
        record_id: RecordId,
    },
    InCooldown {
        available_date: NaiveDate,
        /// Whole days until available; always >= 1.
        days_remaining: i64,
        closed_date: NaiveDate,
    },
    LifetimeExhausted,
}

pub fn churn_status(
    offer_id: &str,
    cooldown_months: Option<u32>,
    records: &[CompletionRecord],
    today: NaiveDate,
) -> ChurnStatus {
    let records: Vec<&CompletionRecord> =
        records.iter().filter(|r| r.offer_id == offer_id).collect();
    if records.is_empty() {
        return ChurnStatus::Available;
    }

    if let Some(open) = records.iter().find(|r| r.closed_date.is_none()) {
        return ChurnStatus::InProgress {
            opened_date: open.opened_date,
            record_id: open.id.clone(),
        };
    }

    let months = match cooldown_months {
        Some(m) => m,
        None => return ChurnStatus::LifetimeExhausted,
    };

    // Latest close wins, regardless of record order.
    let closed = match records.iter().filter_map(|r| r.closed_date).max() {
        Some(d) => d,
        None => return ChurnStatus::Available,
    };

    // Calendar-month offset; overflow past the date range means the
    // cooldown never ends within any horizon we care about.
    let available_date = closed
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX);

    if available_date <= today {
        return ChurnStatus::Available;
    }

    ChurnStatus::InCooldown {
        available_date,
        days_remaining: (available_date - today).num_days(),
        closed_date: closed,
    }
}
