//! Integration tests for conduit-estimator
//!
//! Exercises the public API end to end: price source, input, estimate, report.

use conduit_estimator::{
    cli::Config,
    estimate,
    pricing::{FilePriceProvider, FnPriceProvider, StaticPriceProvider},
    report::{render, render_text, OutputFormat},
    validation::validate_input,
    ComplexityTier, ConduitType, EstimateInput, EstimatorError, InstallLocation, MaterialCounts,
    PriceProvider, PriceTable,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use std::num::NonZeroU32;

#[test]
fn test_reference_job_breakdown() {
    let input = EstimateInput {
        footage_feet: 200.0,
        conduit_type: ConduitType::Emt,
        location: InstallLocation::Indoor,
        trade_size_inches: 0.75,
        bend_count: 6,
        crew_size: NonZeroU32::new(2).unwrap(),
        labor_rate_per_hour: 65.0,
        complexity: ComplexityTier::Standard,
        prices: StaticPriceProvider::reference().latest_prices().unwrap(),
    };

    let result = estimate(&input);

    assert_eq!(
        result.materials,
        MaterialCounts {
            straps: 20,
            strap_packs: 2,
            pull_boxes: 4,
            connectors: 8,
            couplings: 19,
            elbows: 6,
            bushings: 8,
        }
    );
    assert_eq!(result.total_labor_hours, dec!(12.00));
    assert_eq!(result.labor_hours_per_person, dec!(6.00));
    assert_eq!(result.labor_cost, dec!(780.00));
    assert_eq!(result.material_cost, dec!(107.06));
    assert_eq!(result.total_cost, dec!(887.06));
}

#[test]
fn test_empty_job_costs_nothing() {
    let input = EstimateInput {
        footage_feet: 0.0,
        bend_count: 0,
        ..EstimateInput::default()
    };
    let result = estimate(&input);

    assert_eq!(result.materials, MaterialCounts::default());
    assert_eq!(result.total_labor_hours, Decimal::ZERO);
    assert_eq!(result.labor_hours_per_person, Decimal::ZERO);
    assert_eq!(result.labor_cost, Decimal::ZERO);
    assert_eq!(result.material_cost, Decimal::ZERO);
    assert_eq!(result.total_cost, Decimal::ZERO);
}

#[test]
fn test_outdoor_strap_spacing() {
    let outdoor = EstimateInput {
        footage_feet: 30.0,
        location: InstallLocation::Outdoor,
        ..EstimateInput::default()
    };
    let indoor = EstimateInput {
        location: InstallLocation::Indoor,
        ..outdoor.clone()
    };

    assert_eq!(estimate(&outdoor).materials.straps, 10);
    assert_eq!(estimate(&indoor).materials.straps, 3);
}

#[test]
fn test_complexity_tiers_scale_labor() {
    let hours = |complexity| {
        estimate(&EstimateInput {
            footage_feet: 100.0,
            complexity,
            ..EstimateInput::default()
        })
        .total_labor_hours
    };

    assert_eq!(hours(ComplexityTier::Complex), dec!(9.00));
    assert_eq!(hours(ComplexityTier::Light), dec!(4.50));
    assert_eq!(hours(ComplexityTier::Standard), dec!(6.00));
    assert_eq!(hours("unheard-of".parse().unwrap()), dec!(6.00));
}

#[test]
fn test_repeated_estimates_are_identical() {
    let input = EstimateInput {
        footage_feet: 437.25,
        bend_count: 13,
        location: InstallLocation::Underground,
        complexity: ComplexityTier::Complex,
        labor_rate_per_hour: 71.35,
        crew_size: NonZeroU32::new(3).unwrap(),
        ..EstimateInput::default()
    };
    let first = estimate(&input);
    let second = estimate(&input);
    assert_eq!(first, second);
    assert_eq!(first.total_cost, first.material_cost + first.labor_cost);
}

#[test]
fn test_price_sheet_file_to_report() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "strap = 1.00\nstrap_pack = 0.00\npull_box = 10.00\nconnector = 0.00\n\
         coupling = 0.00\nelbow = 2.00\nbushing = 0.00"
    )
    .unwrap();

    let provider = FilePriceProvider::new(file.path());
    let input = EstimateInput {
        prices: provider.latest_prices().unwrap(),
        ..EstimateInput::default()
    };
    validate_input(&input).unwrap();

    // 20 straps + 4 pull boxes + 6 elbows
    let result = estimate(&input);
    assert_eq!(result.material_cost, dec!(72.00));
    assert_eq!(result.total_cost, dec!(852.00));

    let text = render_text(&input, &result, false);
    assert!(text.contains("Material Cost: $72.00"));
    assert!(text.contains("Estimated Total Cost: $852.00"));
}

#[test]
fn test_closure_provider_feeds_estimate() {
    let provider = FnPriceProvider::new("flat", || {
        Ok(PriceTable {
            strap: 1.0,
            strap_pack: 1.0,
            pull_box: 1.0,
            connector: 1.0,
            coupling: 1.0,
            elbow: 1.0,
            bushing: 1.0,
        })
    });
    let input = EstimateInput {
        prices: provider.latest_prices().unwrap(),
        ..EstimateInput::default()
    };

    // 20 + 2 + 4 + 8 + 19 + 6 + 8 items at $1
    assert_eq!(estimate(&input).material_cost, dec!(67.00));
}

#[test]
fn test_failing_provider_surfaces_error() {
    let provider = FnPriceProvider::new("offline", || {
        Err(EstimatorError::PriceSourceError("supplier unreachable".to_string()))
    });
    let err = provider.latest_prices().unwrap_err();
    assert!(err.to_string().contains("supplier unreachable"));
}

#[test]
fn test_validation_guards_estimator() {
    let input = EstimateInput {
        footage_feet: f64::NAN,
        ..EstimateInput::default()
    };
    assert!(validate_input(&input).is_err());
}

#[test]
fn test_oversized_job_rejected_before_estimate() {
    let huge_footage = EstimateInput {
        footage_feet: 1e21,
        ..EstimateInput::default()
    };
    let huge_rate = EstimateInput {
        labor_rate_per_hour: 1e30,
        ..EstimateInput::default()
    };

    for input in [huge_footage, huge_rate] {
        assert!(matches!(
            validate_input(&input),
            Err(EstimatorError::InvalidInput { .. })
        ));
        // still total when called unchecked
        let result = estimate(&input);
        assert!(result.total_cost > Decimal::ZERO);
    }
}

#[test]
fn test_config_file_drives_estimate() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[job]
footage_feet = 30.0
location = "outdoor"
bend_count = 0
crew_size = 1

[output]
format = "json"
color_output = false
"#,
    )
    .unwrap();

    let config = Config::load(Some(path)).unwrap();
    let prices = config.price_provider(None).latest_prices().unwrap();
    let input = config.job.to_input(prices);
    let result = estimate(&input);
    assert_eq!(result.materials.straps, 10);
    assert_eq!(result.materials.strap_packs, 1);

    let json = render(&input, &result, config.output.format, config.output.color_output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["materials"]["straps"], 10);
    assert_eq!(value["input"]["location"], "outdoor");
}

#[test]
fn test_json_round_trips_result() {
    let input = EstimateInput::default();
    let result = estimate(&input);
    let json = render(&input, &result, OutputFormat::Json, false).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let parsed: conduit_estimator::EstimateResult =
        serde_json::from_value(value["result"].clone()).unwrap();
    assert_eq!(parsed, result);
}
