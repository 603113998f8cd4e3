//! Completion history — a read-only snapshot of a user's past bonus
//! cycles, supplied fresh per run by the external store.
//!
//! Several records may exist per offer (successive cycles of a
//! churnable bonus). An open cycle has no `closed_date` yet.

use crate::types::{OfferId, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub id: RecordId,
    pub user_id: String,
    pub offer_id: OfferId,
    pub opened_date: NaiveDate,
    pub closed_date: Option<NaiveDate>,
    pub bonus_received: bool,
    #[serde(default)]
    pub actual_amount: Option<f64>,
}

/// Load a history snapshot from a JSON file holding a plain array of
/// records.
pub fn load(path: &str) -> anyhow::Result<Vec<CompletionRecord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
    let records: Vec<CompletionRecord> = serde_json::from_str(&content)?;
    Ok(records)
}
