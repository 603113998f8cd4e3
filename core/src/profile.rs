//! User planning parameters — slot count, pay cadence, paycheck size.

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    Semimonthly,
    Monthly,
}

impl PayFrequency {
    /// Approximate days between paychecks.
    pub fn days_per_pay(self) -> f64 {
        match self {
            PayFrequency::Weekly => 7.0,
            PayFrequency::Biweekly => 14.0,
            PayFrequency::Semimonthly => 15.2,
            PayFrequency::Monthly => 30.4,
        }
    }
}

impl FromStr for PayFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(PayFrequency::Weekly),
            "biweekly" => Ok(PayFrequency::Biweekly),
            "semimonthly" => Ok(PayFrequency::Semimonthly),
            "monthly" => Ok(PayFrequency::Monthly),
            other => Err(format!("unknown pay frequency: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserParams {
    /// Parallel account "lanes" run concurrently. Recommended 1-3.
    pub slots: u32,
    pub pay_frequency: PayFrequency,
    pub paycheck_amount: f64,
}

impl UserParams {
    /// Reject out-of-contract inputs before the scheduler runs.
    /// A zero paycheck is in-contract; it degrades to per-offer
    /// infeasibility instead.
    pub fn validate(&self) -> PlanResult<()> {
        if self.slots < 1 {
            return Err(PlanError::InvalidSlotCount(self.slots));
        }
        if self.paycheck_amount < 0.0 {
            return Err(PlanError::NegativePaycheck(self.paycheck_amount));
        }
        Ok(())
    }
}

impl Default for UserParams {
    fn default() -> Self {
        Self {
            slots: 2,
            pay_frequency: PayFrequency::Biweekly,
            paycheck_amount: 1000.0,
        }
    }
}
