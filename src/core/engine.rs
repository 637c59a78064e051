use log::debug;

use super::error::ProjectionError;
use super::types::{
    ProjectionInputs, ProjectionResult, Scenario, ScenarioParameters, ScenarioProjection,
    ValidationLimits, VarianceProjection, YearRecord,
};

const MONTHS_PER_YEAR: u32 = 12;

/// Year-by-year ledger for one rate scenario.
///
/// Interest compounds once a year on the starting balance. The twelve monthly
/// additions land after interest, so they earn nothing until the following
/// year. The monthly addition grows by the annual increase rate at each year
/// end. Parameters are taken as given; see [`calculate`] for the validated
/// entry point.
pub fn project(params: &ScenarioParameters) -> ProjectionResult {
    let rate = params.annual_rate_percent / 100.0;
    let growth = 1.0 + params.annual_addition_increase_percent / 100.0;

    let mut balance = params.principal;
    let mut monthly_addition = params.monthly_addition;
    let mut records = Vec::with_capacity(params.years as usize);

    for year in 1..=params.years {
        let starting_balance = balance;
        let interest_earned = balance * rate;
        balance += interest_earned;

        for _ in 0..MONTHS_PER_YEAR {
            balance += monthly_addition;
        }

        records.push(YearRecord {
            year,
            starting_balance,
            monthly_addition,
            interest_earned,
            ending_balance: balance,
        });

        monthly_addition *= growth;
    }

    ProjectionResult { records }
}

/// Runs the low, mid and high scenarios at `base rate -/+ rate_variance_percent`.
/// Each run starts from the same parameters; no contribution state is shared.
pub fn project_with_variance(
    base: &ScenarioParameters,
    rate_variance_percent: f64,
) -> VarianceProjection {
    let run = |scenario: Scenario| {
        let annual_rate_percent =
            base.annual_rate_percent + scenario.rate_offset_sign() * rate_variance_percent;
        let result = project(&base.with_rate(annual_rate_percent));
        debug!(
            "projected {:?} scenario at {annual_rate_percent}% over {} years: final balance {:?}",
            scenario,
            base.years,
            result.final_balance()
        );
        ScenarioProjection {
            scenario,
            annual_rate_percent,
            result,
        }
    };

    VarianceProjection {
        rate_variance_percent,
        low: run(Scenario::Low),
        mid: run(Scenario::Mid),
        high: run(Scenario::High),
    }
}

/// Validates every input against `limits` before running the three scenarios.
/// Any invalid field aborts the whole calculation.
pub fn calculate(
    inputs: &ProjectionInputs,
    limits: &ValidationLimits,
) -> Result<VarianceProjection, ProjectionError> {
    limits.validate(inputs)?;
    Ok(project_with_variance(
        &inputs.base_parameters(),
        inputs.rate_variance_percent,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_rel(actual: f64, expected: f64, rel: f64) {
        let tol = rel * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, relative tolerance {rel}"
        );
    }

    fn sample_params() -> ScenarioParameters {
        ScenarioParameters {
            principal: 1_000.0,
            annual_rate_percent: 7.0,
            years: 3,
            monthly_addition: 100.0,
            annual_addition_increase_percent: 0.0,
        }
    }

    fn sample_inputs() -> ProjectionInputs {
        ProjectionInputs {
            principal: 1_000.0,
            annual_rate_percent: 7.0,
            years: 3,
            monthly_addition: 100.0,
            annual_addition_increase_percent: 0.0,
            rate_variance_percent: 0.0,
        }
    }

    #[test]
    fn project_matches_hand_computed_ledger() {
        let result = project(&sample_params());
        assert_eq!(result.len(), 3);

        let y1 = result.records[0];
        assert_eq!(y1.year, 1);
        assert_approx(y1.starting_balance, 1_000.0);
        assert_approx(y1.monthly_addition, 100.0);
        assert_approx(y1.interest_earned, 70.0);
        assert_approx(y1.ending_balance, 2_270.0);

        let y2 = result.records[1];
        assert_eq!(y2.year, 2);
        assert_approx(y2.starting_balance, 2_270.0);
        assert_approx(y2.interest_earned, 158.9);
        assert_approx(y2.ending_balance, 3_628.9);

        let y3 = result.records[2];
        assert_eq!(y3.year, 3);
        assert_approx(y3.starting_balance, 3_628.9);
        assert_approx(y3.interest_earned, 254.023);
        assert_approx(y3.ending_balance, 5_082.923);

        assert_approx(result.final_balance().expect("non-empty"), 5_082.923);
    }

    #[test]
    fn project_chains_starting_balance_from_previous_ending_balance() {
        let mut params = sample_params();
        params.years = 12;
        params.annual_addition_increase_percent = 3.0;
        let result = project(&params);
        for pair in result.records.windows(2) {
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
        }
    }

    #[test]
    fn project_with_zero_years_is_empty() {
        let mut params = sample_params();
        params.years = 0;
        let result = project(&params);
        assert!(result.is_empty());
        assert_eq!(result.final_balance(), None);
    }

    #[test]
    fn contribution_increase_applies_from_second_year() {
        let mut params = sample_params();
        params.annual_addition_increase_percent = 10.0;
        let result = project(&params);

        assert_approx(result.records[0].monthly_addition, 100.0);
        assert_approx(result.records[1].monthly_addition, 110.0);
        assert_approx(result.records[2].monthly_addition, 121.0);
        // Year 2 adds 12 * 110 on top of interest on 2270.
        assert_approx(result.records[1].ending_balance, 2_270.0 + 158.9 + 1_320.0);
    }

    #[test]
    fn negative_rate_decays_balance() {
        let params = ScenarioParameters {
            principal: 1_000.0,
            annual_rate_percent: -10.0,
            years: 2,
            monthly_addition: 0.0,
            annual_addition_increase_percent: 0.0,
        };
        let result = project(&params);
        assert_approx(result.records[0].interest_earned, -100.0);
        assert_approx(result.records[0].ending_balance, 900.0);
        assert_approx(result.records[1].ending_balance, 810.0);
    }

    #[test]
    fn variance_offsets_rate_for_low_and_high() {
        let mut inputs = sample_inputs();
        inputs.rate_variance_percent = 2.0;
        let projection = calculate(&inputs, &ValidationLimits::default()).expect("valid inputs");

        assert_approx(projection.low.annual_rate_percent, 5.0);
        assert_approx(projection.mid.annual_rate_percent, 7.0);
        assert_approx(projection.high.annual_rate_percent, 9.0);

        assert_approx(projection.low.result.records[0].ending_balance, 2_250.0);
        assert_approx(projection.mid.result.records[0].ending_balance, 2_270.0);
        assert_approx(projection.high.result.records[0].ending_balance, 2_290.0);
        assert_approx(
            projection.mid.result.final_balance().expect("non-empty"),
            5_082.923,
        );
    }

    #[test]
    fn zero_variance_gives_three_identical_ledgers() {
        let projection =
            calculate(&sample_inputs(), &ValidationLimits::default()).expect("valid inputs");
        assert_eq!(projection.low.result, projection.mid.result);
        assert_eq!(projection.mid.result, projection.high.result);
    }

    #[test]
    fn scenarios_keep_independent_contribution_state() {
        let mut params = sample_params();
        params.annual_addition_increase_percent = 5.0;
        params.years = 4;
        let projection = project_with_variance(&params, 3.0);
        for scenario in projection.scenarios() {
            let additions: Vec<f64> = scenario
                .result
                .records
                .iter()
                .map(|r| r.monthly_addition)
                .collect();
            assert_approx(additions[0], 100.0);
            assert_approx(additions[3], 100.0 * 1.05_f64.powi(3));
        }
        assert_eq!(projection.get(Scenario::High).scenario, Scenario::High);
    }

    #[test]
    fn calculate_rejects_each_invalid_field() {
        let limits = ValidationLimits::default();
        let cases: [(&str, fn(&mut ProjectionInputs)); 8] = [
            ("principal", |i| i.principal = 0.0),
            ("principal", |i| i.principal = f64::NAN),
            ("years", |i| i.years = 0),
            ("years", |i| i.years = 501),
            ("monthly_addition", |i| i.monthly_addition = -1.0),
            ("annual_addition_increase_percent", |i| {
                i.annual_addition_increase_percent = -0.5
            }),
            ("rate_variance_percent", |i| i.rate_variance_percent = -1.0),
            ("rate_variance_percent", |i| i.rate_variance_percent = 100.5),
        ];
        for (field, mutate) in cases {
            let mut inputs = sample_inputs();
            mutate(&mut inputs);
            let err = calculate(&inputs, &limits).expect_err("must reject invalid input");
            assert_eq!(err.field(), field, "unexpected error {err}");
        }
    }

    #[test]
    fn calculate_honours_configured_variance_bound() {
        let limits = ValidationLimits {
            max_rate_variance_percent: 5.0,
            ..ValidationLimits::default()
        };
        let mut inputs = sample_inputs();
        inputs.rate_variance_percent = 5.0;
        assert!(calculate(&inputs, &limits).is_ok());
        inputs.rate_variance_percent = 6.0;
        let err = calculate(&inputs, &limits).expect_err("above configured bound");
        assert_eq!(
            err.to_string(),
            "invalid rate_variance_percent: must be between 0 and 5"
        );
    }

    #[test]
    fn calculate_allows_negative_effective_low_rate() {
        let mut inputs = sample_inputs();
        inputs.annual_rate_percent = 1.0;
        inputs.rate_variance_percent = 4.0;
        let projection = calculate(&inputs, &ValidationLimits::default()).expect("valid inputs");
        assert_approx(projection.low.annual_rate_percent, -3.0);
        assert_approx(projection.low.result.records[0].interest_earned, -30.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_zero_contribution_matches_closed_form(
            principal_cents in 1u32..100_000_000,
            rate_bp in -5_000i32..5_000,
            years in 1u32..80
        ) {
            let principal = principal_cents as f64 / 100.0;
            let rate = rate_bp as f64 / 100.0;
            let params = ScenarioParameters {
                principal,
                annual_rate_percent: rate,
                years,
                monthly_addition: 0.0,
                annual_addition_increase_percent: 0.0,
            };
            let result = project(&params);
            let expected = principal * (1.0 + rate / 100.0).powi(years as i32);
            assert_approx_rel(result.final_balance().unwrap_or(f64::NAN), expected, 1e-9);
        }

        #[test]
        fn prop_balances_non_decreasing_and_length_matches_years(
            principal in 1u32..1_000_000,
            rate_bp in 0u32..5_000,
            years in 1u32..60,
            monthly in 0u32..5_000,
            increase_bp in 0u32..2_000
        ) {
            let params = ScenarioParameters {
                principal: principal as f64,
                annual_rate_percent: rate_bp as f64 / 100.0,
                years,
                monthly_addition: monthly as f64,
                annual_addition_increase_percent: increase_bp as f64 / 100.0,
            };
            let result = project(&params);
            prop_assert!(result.len() == years as usize);
            for (idx, record) in result.records.iter().enumerate() {
                prop_assert!(record.year == idx as u32 + 1);
                prop_assert!(record.ending_balance >= record.starting_balance);
            }
            for pair in result.records.windows(2) {
                prop_assert!(pair[1].ending_balance >= pair[0].ending_balance);
            }
        }

        #[test]
        fn prop_monthly_addition_escalates_by_increase_rate(
            monthly in 0u32..10_000,
            increase_bp in 0u32..3_000,
            years in 2u32..40
        ) {
            let increase = increase_bp as f64 / 100.0;
            let mut params = sample_params();
            params.years = years;
            params.monthly_addition = monthly as f64;
            params.annual_addition_increase_percent = increase;
            let result = project(&params);
            for pair in result.records.windows(2) {
                let expected = pair[0].monthly_addition * (1.0 + increase / 100.0);
                prop_assert!((pair[1].monthly_addition - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }

        #[test]
        fn prop_scenarios_are_ordered_by_rate(
            principal in 1u32..1_000_000,
            rate_bp in 0u32..3_000,
            variance_bp in 1u32..3_000,
            years in 1u32..50,
            monthly in 0u32..5_000,
            increase_bp in 0u32..1_000
        ) {
            let inputs = ProjectionInputs {
                principal: principal as f64,
                annual_rate_percent: rate_bp as f64 / 100.0,
                years,
                monthly_addition: monthly as f64,
                annual_addition_increase_percent: increase_bp as f64 / 100.0,
                rate_variance_percent: variance_bp as f64 / 100.0,
            };
            let projection = calculate(&inputs, &ValidationLimits::default()).expect("valid inputs");
            for scenario in projection.scenarios() {
                prop_assert!(scenario.result.len() == years as usize);
            }
            let low = projection.low.result.final_balance().unwrap_or(f64::NAN);
            let mid = projection.mid.result.final_balance().unwrap_or(f64::NAN);
            let high = projection.high.result.final_balance().unwrap_or(f64::NAN);
            prop_assert!(low <= mid);
            prop_assert!(mid <= high);
        }
    }
}
