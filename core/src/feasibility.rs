//! Feasibility evaluator — can this offer be completed on the user's
//! deposit cadence, and how fast?
//!
//! Pure and total: every negative outcome is returned as data with a
//! human-readable reason, never as an error. Offers that do not ask
//! for recurring direct deposits are out of scope for this planner
//! (it models deposit-velocity-driven bonuses only) and are reported
//! infeasible rather than guessed at.

use crate::catalog::OfferRequirements;
use crate::profile::PayFrequency;
use crate::types::Week;

#[derive(Debug, Clone, PartialEq)]
pub enum Feasibility {
    Feasible { weeks_to_complete: Week },
    Infeasible { reason: String },
}

pub fn evaluate(
    req: &OfferRequirements,
    pay_frequency: PayFrequency,
    paycheck_amount: f64,
) -> Feasibility {
    if paycheck_amount <= 0.0 {
        return Feasibility::Infeasible {
            reason: format!("Paycheck ${paycheck_amount:.0} cannot fund any deposit"),
        };
    }
    if !req.direct_deposit_required {
        return Feasibility::Infeasible {
            reason: "No DD required".into(),
        };
    }

    let days_per_pay = pay_frequency.days_per_pay();

    // A zero-valued optional carries no constraint.
    if let Some(per_deposit_min) = req.min_direct_deposit_per_deposit.filter(|m| *m > 0.0) {
        if paycheck_amount < per_deposit_min {
            return Feasibility::Infeasible {
                reason: format!(
                    "Paycheck ${paycheck_amount:.0} below ${per_deposit_min:.0}/deposit minimum"
                ),
            };
        }
    }

    let total_min = req.min_direct_deposit_total.filter(|m| *m > 0.0);
    let window_days = req.deposit_window_days.filter(|d| *d > 0);

    if let (Some(total), Some(window)) = (total_min, window_days) {
        let max_deposits = ((window as f64 / days_per_pay).ceil() as u32).max(1);
        let achievable = max_deposits as f64 * paycheck_amount;
        if achievable < total {
            return Feasibility::Infeasible {
                reason: format!(
                    "Can only deposit ~${achievable:.0} in {window}-day window, need ${total:.0}"
                ),
            };
        }
    }

    let dd_count = req
        .dd_count_required
        .filter(|c| *c > 0)
        .or_else(|| total_min.map(|t| (t / paycheck_amount).ceil() as u32))
        .unwrap_or(1);

    let weeks = ((dd_count as f64 * days_per_pay) / 7.0).ceil() as Week;

    Feasibility::Feasible {
        weeks_to_complete: weeks.max(1),
    }
}
