// ABOUTME: Integration tests for macro aggregation and tolerance checks
// ABOUTME: Covers two-decimal rounding, fiber handling, boundary tolerance and integrity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::food;
use nutriplan::models::{MacroField, Macros};
use nutriplan_engine::aggregator::{average_macros, normalize, round_macro, sum_food_macros};
use nutriplan_engine::tolerance::{
    check_macro_consistency, check_stored_total, deviation_percent, validate, validate_fields,
};
use nutriplan_engine::ToleranceOutcome;

fn calories(value: f64) -> Macros {
    Macros::new(value, 0.0, 0.0, 0.0)
}

#[test]
fn test_sum_of_two_foods() {
    let foods = vec![
        food("oats", "Oats", 40.0, Macros::new(100.0, 10.0, 5.0, 2.0)),
        food("milk", "Milk", 200.0, Macros::new(150.0, 5.0, 20.0, 3.0)),
    ];
    let total = sum_food_macros(&foods);
    assert_eq!(total, Macros::new(250.0, 15.0, 25.0, 5.0));
}

#[test]
fn test_sum_rounds_after_adding() {
    // Rounding each food first would give zero
    let pinch = Macros::new(0.004, 0.004, 0.0, 0.0);
    let foods: Vec<_> = (0..3)
        .map(|i| food(&format!("f{i}"), "Pinch", 1.0, pinch))
        .collect();
    let total = sum_food_macros(&foods);
    assert!((total.calories - 0.01).abs() < 1e-12);
}

#[test]
fn test_fiber_stays_unknown_unless_reported() {
    let without = vec![food("a", "A", 1.0, Macros::new(10.0, 1.0, 1.0, 0.0))];
    assert_eq!(sum_food_macros(&without).fiber, None);

    let with = vec![
        food("a", "A", 1.0, Macros::new(10.0, 1.0, 1.0, 0.0)),
        food("b", "B", 1.0, Macros::new(10.0, 1.0, 1.0, 0.0).with_fiber(2.5)),
    ];
    assert_eq!(sum_food_macros(&with).fiber, Some(2.5));
}

#[test]
fn test_normalize_is_idempotent() {
    for value in [0.0, 1.005, 2.675, 123.456_789, 99.994_999, 66.666_666] {
        let once = normalize(&Macros::new(value, value, value, value).with_fiber(value));
        assert_eq!(normalize(&once), once);
        assert_eq!(round_macro(round_macro(value)), round_macro(value));
    }
}

#[test]
fn test_average_of_no_days_is_zero() {
    assert_eq!(average_macros(&[]), Macros::default());
}

#[test]
fn test_average_fiber_uses_reporting_days_only() {
    let days = [
        Macros::new(2000.0, 150.0, 200.0, 70.0).with_fiber(30.0),
        Macros::new(2100.0, 160.0, 210.0, 72.0),
    ];
    let average = average_macros(&days);
    assert!((average.calories - 2050.0).abs() < 1e-9);
    assert_eq!(average.fiber, Some(30.0));
}

#[test]
fn test_deviation_percent_with_zero_expected() {
    assert!(deviation_percent(120.0, 0.0).abs() < f64::EPSILON);
    assert!((deviation_percent(90.0, 100.0) - 0.1).abs() < 1e-12);
}

#[test]
fn test_deviation_exactly_at_tolerance_passes() {
    let report = validate_fields(
        &calories(1020.0),
        &calories(1000.0),
        0.02,
        "Lunch",
        &[MacroField::Calories],
    );
    assert!(report.valid);
    assert_eq!(report.outcome, ToleranceOutcome::Pass);
    assert!(report.errors.is_empty());
    assert!((report.deviations.calories - 20.0).abs() < 1e-9);
}

#[test]
fn test_two_decimal_targets_at_exact_tolerance_pass() {
    for (expected, actual) in [(51.0, 52.02), (51.5, 52.53), (53.0, 54.06), (733.5, 748.17)] {
        let report = validate_fields(
            &calories(actual),
            &calories(expected),
            0.02,
            "Snack",
            &[MacroField::Calories],
        );
        assert!(report.valid, "{expected} -> {actual} flagged");
    }

    let mut flagged = Vec::new();
    for step in 100_u32..=4000 {
        let expected = f64::from(step) * 0.5;
        let at_boundary = round_macro(expected * 1.02);
        let beyond = round_macro(at_boundary + 0.01);

        let report = validate_fields(
            &calories(at_boundary),
            &calories(expected),
            0.02,
            "Meal",
            &[MacroField::Calories],
        );
        if !report.valid {
            flagged.push((expected, at_boundary));
        }

        let report = validate_fields(
            &calories(beyond),
            &calories(expected),
            0.02,
            "Meal",
            &[MacroField::Calories],
        );
        assert!(!report.valid, "{expected} -> {beyond} passed");
    }
    assert!(flagged.is_empty(), "flagged at exact tolerance: {flagged:?}");
}

#[test]
fn test_day_tolerance_boundary_on_every_core_field() {
    let expected = Macros::new(2013.4, 151.2, 203.6, 67.0);
    let actual = Macros::new(2114.07, 158.76, 213.78, 70.35);
    let report = validate(&actual, &expected, 0.05, "Day 4");
    assert!(report.valid, "{:?}", report.errors);
}

#[test]
fn test_deviation_just_over_tolerance_warns() {
    let report = validate_fields(
        &calories(1020.1),
        &calories(1000.0),
        0.02,
        "Lunch",
        &[MacroField::Calories],
    );
    assert!(!report.valid);
    assert_eq!(report.outcome, ToleranceOutcome::Warning);
    assert_eq!(report.violations, vec![MacroField::Calories]);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Lunch: calories"));
    assert!(report.errors[0].contains("over"));
}

#[test]
fn test_undershoot_is_reported_as_under() {
    let report = validate_fields(
        &calories(900.0),
        &calories(1000.0),
        0.05,
        "Day 3",
        &[MacroField::Calories],
    );
    assert!(!report.valid);
    assert!(report.errors[0].contains("under"));
    assert!((report.deviations.calories + 100.0).abs() < 1e-9);
}

#[test]
fn test_core_validation_flags_each_field() {
    let actual = Macros::new(2000.0, 120.0, 200.0, 80.0);
    let expected = Macros::new(2000.0, 150.0, 200.0, 66.67);
    let report = validate(&actual, &expected, 0.05, "Pattern A");

    assert_eq!(report.violations, vec![MacroField::Protein, MacroField::Fats]);
    assert_eq!(report.errors.len(), 2);
    assert!((report.deviations_percent.protein - 0.2).abs() < 1e-9);
}

#[test]
fn test_fiber_is_ignored_when_one_side_is_unknown() {
    let actual = Macros::new(2000.0, 150.0, 200.0, 66.67);
    let expected = Macros::new(2000.0, 150.0, 200.0, 66.67).with_fiber(30.0);
    let report = validate_fields(
        &actual,
        &expected,
        0.05,
        "Pattern A",
        &[MacroField::Calories, MacroField::Fiber],
    );
    assert!(report.valid);
    assert_eq!(report.deviations.fiber, None);
}

#[test]
fn test_macro_consistency_check() {
    let consistent = Macros::new(2000.0, 150.0, 200.0, 66.67);
    assert_eq!(check_macro_consistency(&consistent, 0.10, "Pattern A"), None);

    let inflated = Macros::new(2600.0, 150.0, 200.0, 66.67);
    let warning = check_macro_consistency(&inflated, 0.10, "Pattern B").unwrap();
    assert!(warning.starts_with("Pattern B: declared 2600.00 kcal"));
}

#[test]
fn test_stored_total_drift_check() {
    let recomputed = calories(600.0);
    assert_eq!(check_stored_total(&calories(603.0), &recomputed, 0.01, "Breakfast"), None);

    let warning = check_stored_total(&calories(650.0), &recomputed, 0.01, "Breakfast").unwrap();
    assert!(warning.contains("recomputed value used"));
}
