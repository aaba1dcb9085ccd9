use roi_projection::projection::{apply_tax, round_to_cents, TaxSchedule};
use roi_projection::rates::{annual_to_monthly, monthly_to_annual};
use roi_projection::{project, ProjectionEngine, ProjectionParams, ScenarioRunner};
use proptest::prelude::*;

/// Non-negative amount in cents up to 1,000,000.00
fn arb_amount() -> impl Strategy<Value = f64> {
    (0u64..100_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Monthly fractional rate between -100% and +10%
fn arb_rate() -> impl Strategy<Value = f64> {
    -1.0f64..0.10
}

fn arb_periods() -> impl Strategy<Value = u32> {
    1u32..400
}

proptest! {
    // ===================================================================
    // Series shape: both series have period_count + 1 entries and start
    // at the initial amount.
    // ===================================================================
    #[test]
    fn series_length_and_seed(
        initial in arb_amount(),
        rate in arb_rate(),
        contribution in arb_amount(),
        periods in arb_periods(),
    ) {
        let (balance, after_tax) = project(initial, rate, contribution, periods).unwrap();
        prop_assert_eq!(balance.len(), periods as usize + 1);
        prop_assert_eq!(after_tax.len(), periods as usize + 1);
        prop_assert_eq!(balance[0], initial);
        prop_assert_eq!(after_tax[0], initial);
    }

    // ===================================================================
    // Non-negative growth plus at least a cent of contribution never
    // reduces the balance. (With neither, re-truncating a binary cents
    // value such as 0.29 can shed a cent.)
    // ===================================================================
    #[test]
    fn balance_is_monotonic_for_non_negative_growth(
        initial in arb_amount(),
        rate in 0.0f64..0.10,
        contribution in (1u64..100_000_000u64).prop_map(|cents| cents as f64 / 100.0),
        periods in 1u32..200,
    ) {
        let (balance, _) = project(initial, rate, contribution, periods).unwrap();
        for i in 1..balance.len() {
            prop_assert!(
                balance[i] >= balance[i - 1],
                "balance fell at period {}: {} -> {}", i, balance[i - 1], balance[i]
            );
        }
    }

    // ===================================================================
    // Monthly -> annual -> monthly returns the original rate.
    // ===================================================================
    #[test]
    fn rate_round_trip(r in -50.0f64..50.0) {
        let back = annual_to_monthly(monthly_to_annual(r)).unwrap();
        prop_assert!((back - r).abs() < 1e-9, "{} came back as {}", r, back);
    }

    // ===================================================================
    // Cent truncation never moves a value away from zero and always lands
    // within one cent of the input.
    // ===================================================================
    #[test]
    fn truncation_toward_zero(x in -1_000_000.0f64..1_000_000.0) {
        let truncated = round_to_cents(x);
        prop_assert!(truncated.abs() <= x.abs() + 1e-9);
        prop_assert!((x - truncated).abs() < 0.01 + 1e-9);
    }

    // ===================================================================
    // After-tax value differs from the balance by exactly the truncated
    // tier tax on the gain.
    // ===================================================================
    #[test]
    fn after_tax_matches_tier(
        balance in arb_amount(),
        invested in arb_amount(),
        period in 0u32..60,
    ) {
        let rate = TaxSchedule::standard().rate_for(period);
        let expected = balance - round_to_cents((balance - invested) * rate);
        prop_assert_eq!(apply_tax(balance, invested, period), expected);
    }

    // ===================================================================
    // Identical inputs give bit-identical output, serially or in a batch.
    // ===================================================================
    #[test]
    fn projection_is_deterministic(
        initial in arb_amount(),
        rate in arb_rate(),
        contribution in arb_amount(),
        periods in 1u32..120,
    ) {
        let params = ProjectionParams::new(initial, rate, contribution, periods).unwrap();
        let first = ProjectionEngine::default().project(&params).unwrap();
        let batch = ScenarioRunner::new().run_batch(&[params, params]);

        for result in batch {
            prop_assert_eq!(result.unwrap(), first.clone());
        }
    }
}

#[test]
fn tier_boundaries() {
    // gain of 100 at each boundary period
    assert_eq!(apply_tax(1100.0, 1000.0, 5), 1100.0 - 22.5);
    assert_eq!(apply_tax(1100.0, 1000.0, 6), 1100.0 - 20.0);
    assert_eq!(apply_tax(1100.0, 1000.0, 12), 1100.0 - 17.5);
    assert_eq!(apply_tax(1100.0, 1000.0, 24), 1100.0 - 15.0);
}

#[test]
fn reference_scenario() {
    let (balance, after_tax) = project(1000.0, 0.016, 100.0, 12).unwrap();
    assert_eq!(balance[1], 1116.00);
    assert!((balance[12] - 2521.22).abs() < 1e-9);
    assert!((after_tax[12] - 2465.01).abs() < 1e-9);
}
