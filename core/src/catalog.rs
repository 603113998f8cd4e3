//! Offer catalog — strongly-typed bank bonus offers.
//!
//! The catalog is loaded once from JSON and passed into the scheduler
//! by reference; nothing in this crate holds it as global state.
//! Optional fields grouped by concern (requirements, fees, screening,
//! eligibility, timeline). A missing numeric field means the offer
//! simply does not carry that constraint.

use crate::types::OfferId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusOffer {
    pub id: OfferId,
    pub bank_name: String,
    pub product_type: String,
    pub bonus_amount: f64,
    /// Months before a closed cycle can be reopened. None = once per lifetime.
    pub cooldown_months: Option<u32>,
    pub requirements: OfferRequirements,
    #[serde(default)]
    pub fees: OfferFees,
    #[serde(default)]
    pub screening: OfferScreening,
    #[serde(default)]
    pub eligibility: OfferEligibility,
    #[serde(default)]
    pub timeline: OfferTimeline,
    #[serde(default)]
    pub source_links: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferRequirements {
    #[serde(default)]
    pub direct_deposit_required: bool,
    pub min_direct_deposit_per_deposit: Option<f64>,
    pub min_direct_deposit_total: Option<f64>,
    pub dd_count_required: Option<u32>,
    pub deposit_window_days: Option<u32>,
    pub holding_period_days: Option<u32>,
    pub min_opening_deposit: Option<f64>,
    pub min_balance: Option<f64>,
    pub other_requirements_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferFees {
    pub monthly_fee: Option<f64>,
    pub monthly_fee_waiver_text: Option<String>,
    pub early_closure_fee: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferScreening {
    /// "low" | "medium" | "high" — ChexSystems sensitivity as reported.
    pub chex_sensitive: Option<String>,
    pub hard_pull: Option<bool>,
    pub soft_pull: Option<bool>,
    pub screening_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferEligibility {
    pub state_restricted: Option<bool>,
    #[serde(default)]
    pub states_allowed: Vec<String>,
    #[serde(default)]
    pub states_excluded: Vec<String>,
    pub lifetime_language: Option<bool>,
    pub eligibility_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferTimeline {
    pub bonus_posting_days_est: Option<u32>,
    pub must_remain_open_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    offers: Vec<BonusOffer>,
}

/// The full offer catalog, in source order. Source order matters: it is
/// the standing tie-break for equal-velocity candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub offers: Vec<BonusOffer>,
}

impl Catalog {
    pub fn new(offers: Vec<BonusOffer>) -> Self {
        Self { offers }
    }

    /// Load from a JSON file of shape `{ "offers": [...] }`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        Ok(Self { offers: file.offers })
    }

    /// Catalog with hardcoded offers for use in tests.
    pub fn default_test() -> Self {
        let psecu = BonusOffer {
            id: "psecu-300-checking".into(),
            bank_name: "PSECU".into(),
            product_type: "checking".into(),
            bonus_amount: 300.0,
            cooldown_months: None, // one per tax ID, ever
            requirements: OfferRequirements {
                direct_deposit_required: true,
                min_direct_deposit_per_deposit: Some(500.0),
                min_direct_deposit_total: Some(1000.0),
                dd_count_required: Some(2),
                deposit_window_days: Some(100),
                ..Default::default()
            },
            fees: OfferFees {
                monthly_fee: Some(0.0),
                ..Default::default()
            },
            screening: OfferScreening {
                chex_sensitive: Some("medium".into()),
                hard_pull: Some(false),
                soft_pull: Some(true),
                ..Default::default()
            },
            eligibility: OfferEligibility {
                lifetime_language: Some(true),
                ..Default::default()
            },
            timeline: OfferTimeline {
                bonus_posting_days_est: Some(145),
                must_remain_open_days: None,
            },
            source_links: vec!["https://refer.psecu.com/".into()],
        };

        let capital_one = BonusOffer {
            id: "capital-one-360-checking-300".into(),
            bank_name: "Capital One".into(),
            product_type: "checking".into(),
            bonus_amount: 300.0,
            cooldown_months: Some(36),
            requirements: OfferRequirements {
                direct_deposit_required: true,
                min_direct_deposit_per_deposit: Some(500.0),
                min_direct_deposit_total: Some(1000.0),
                dd_count_required: Some(2),
                deposit_window_days: Some(75),
                ..Default::default()
            },
            fees: OfferFees {
                monthly_fee: Some(0.0),
                ..Default::default()
            },
            screening: OfferScreening {
                chex_sensitive: Some("low".into()),
                hard_pull: Some(false),
                ..Default::default()
            },
            eligibility: OfferEligibility::default(),
            timeline: OfferTimeline {
                bonus_posting_days_est: Some(60),
                must_remain_open_days: Some(90),
            },
            source_links: vec![],
        };

        let hysa = BonusOffer {
            id: "brightvault-hysa-200".into(),
            bank_name: "BrightVault".into(),
            product_type: "savings".into(),
            bonus_amount: 200.0,
            cooldown_months: Some(12),
            requirements: OfferRequirements {
                // Balance-only bonus; the planner models DD-driven offers.
                direct_deposit_required: false,
                min_balance: Some(10_000.0),
                holding_period_days: Some(90),
                ..Default::default()
            },
            fees: OfferFees::default(),
            screening: OfferScreening::default(),
            eligibility: OfferEligibility::default(),
            timeline: OfferTimeline::default(),
            source_links: vec![],
        };

        Self {
            offers: vec![psecu, capital_one, hysa],
        }
    }
}
