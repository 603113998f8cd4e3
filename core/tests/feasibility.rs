use churnplan_core::catalog::OfferRequirements;
use churnplan_core::feasibility::{evaluate, Feasibility};
use churnplan_core::profile::PayFrequency;

// ── Test helpers ────────────────────────────────────────────────────────────

/// The canonical two-deposit DD offer: $500+/deposit, $1000 total,
/// 2 deposits inside a 100-day window.
fn two_deposit_requirements() -> OfferRequirements {
    OfferRequirements {
        direct_deposit_required: true,
        min_direct_deposit_per_deposit: Some(500.0),
        min_direct_deposit_total: Some(1000.0),
        dd_count_required: Some(2),
        deposit_window_days: Some(100),
        ..Default::default()
    }
}

fn weeks(result: Feasibility) -> u32 {
    match result {
        Feasibility::Feasible { weeks_to_complete } => weeks_to_complete,
        Feasibility::Infeasible { reason } => panic!("expected feasible, got: {reason}"),
    }
}

fn reason(result: Feasibility) -> String {
    match result {
        Feasibility::Infeasible { reason } => reason,
        Feasibility::Feasible { weeks_to_complete } => {
            panic!("expected infeasible, got {weeks_to_complete} weeks")
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Biweekly $1000 against the two-deposit offer: 2 deposits × 14 days
/// per pay = 28 days, ceil(28/7) = 4 weeks.
#[test]
fn two_deposits_on_biweekly_pay_take_four_weeks() {
    let result = evaluate(&two_deposit_requirements(), PayFrequency::Biweekly, 1000.0);
    assert_eq!(weeks(result), 4);
}

/// A $400 paycheck cannot satisfy a $500-per-deposit minimum; the
/// reason names both figures.
#[test]
fn paycheck_below_per_deposit_minimum_is_infeasible() {
    let result = evaluate(&two_deposit_requirements(), PayFrequency::Biweekly, 400.0);
    let r = reason(result);
    assert!(r.contains("$400"), "reason should name the paycheck: {r}");
    assert!(r.contains("$500"), "reason should name the minimum: {r}");
}

/// $15,000 required inside a 90-day window on biweekly $1000:
/// max_deposits = ceil(90/14) = 7, achievable = $7000 < $15000.
#[test]
fn window_shortfall_is_infeasible_naming_both_figures() {
    let req = OfferRequirements {
        direct_deposit_required: true,
        min_direct_deposit_total: Some(15_000.0),
        deposit_window_days: Some(90),
        ..Default::default()
    };
    let r = reason(evaluate(&req, PayFrequency::Biweekly, 1000.0));
    assert!(r.contains("$7000"), "reason should name the achievable total: {r}");
    assert!(r.contains("$15000"), "reason should name the requirement: {r}");
}

/// Offers without a recurring direct-deposit requirement are outside
/// this planner's model and always report "No DD required".
#[test]
fn non_dd_offers_are_always_infeasible() {
    let req = OfferRequirements {
        direct_deposit_required: false,
        min_balance: Some(10_000.0),
        ..Default::default()
    };
    assert_eq!(reason(evaluate(&req, PayFrequency::Weekly, 5000.0)), "No DD required");
}

/// A paycheck of zero (or below) can never fund a deposit; no further
/// checks run.
#[test]
fn zero_or_negative_paycheck_is_infeasible() {
    let req = two_deposit_requirements();
    assert!(matches!(
        evaluate(&req, PayFrequency::Biweekly, 0.0),
        Feasibility::Infeasible { .. }
    ));
    assert!(matches!(
        evaluate(&req, PayFrequency::Biweekly, -50.0),
        Feasibility::Infeasible { .. }
    ));
}

/// Without an explicit deposit count, the count is derived from the
/// total: ceil(1000/300) = 4 deposits, 4 × 14 days = 56, ceil(56/7) = 8 weeks.
#[test]
fn deposit_count_derived_from_total_when_absent() {
    let req = OfferRequirements {
        direct_deposit_required: true,
        min_direct_deposit_total: Some(1000.0),
        ..Default::default()
    };
    assert_eq!(weeks(evaluate(&req, PayFrequency::Biweekly, 300.0)), 8);
}

/// With neither count nor total, a single deposit is assumed:
/// weekly = 1 week, monthly = ceil(30.4/7) = 5 weeks.
#[test]
fn deposit_count_defaults_to_one() {
    let req = OfferRequirements {
        direct_deposit_required: true,
        ..Default::default()
    };
    assert_eq!(weeks(evaluate(&req, PayFrequency::Weekly, 100.0)), 1);
    assert_eq!(weeks(evaluate(&req, PayFrequency::Monthly, 100.0)), 5);
}

/// Zero-valued optional constraints mean "unconstrained", not "must
/// deposit zero" — the offer is still feasible.
#[test]
fn zero_valued_optionals_carry_no_constraint() {
    let req = OfferRequirements {
        direct_deposit_required: true,
        min_direct_deposit_per_deposit: Some(0.0),
        min_direct_deposit_total: Some(0.0),
        dd_count_required: Some(0),
        deposit_window_days: Some(0),
        ..Default::default()
    };
    assert_eq!(weeks(evaluate(&req, PayFrequency::Biweekly, 100.0)), 2);
}

/// Every feasible outcome reports at least one week.
#[test]
fn weeks_to_complete_is_never_zero() {
    let req = OfferRequirements {
        direct_deposit_required: true,
        dd_count_required: Some(1),
        ..Default::default()
    };
    for freq in [
        PayFrequency::Weekly,
        PayFrequency::Biweekly,
        PayFrequency::Semimonthly,
        PayFrequency::Monthly,
    ] {
        assert!(weeks(evaluate(&req, freq, 2500.0)) >= 1);
    }
}
