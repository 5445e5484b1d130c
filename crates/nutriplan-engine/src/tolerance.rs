// ABOUTME: Percentage-deviation validation of aggregated macros against targets
// ABOUTME: Produces structured pass/warning reports; violations never abort assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tolerance Validation
//!
//! A field violates when `|actual - expected| / |expected| > tolerance`. The
//! comparison is strict, so a deviation of exactly the tolerance passes. An
//! expected value of zero yields a deviation percentage of zero.
//!
//! Both the fraction and the tolerance are rounded to eight decimals before
//! comparing. Two-decimal macros at exactly the tolerance otherwise land a
//! few ulps above it.

use crate::aggregator::round_macro;
use nutriplan_core::constants::rounding::DEVIATION_DECIMAL_SCALE;
use nutriplan_core::models::{MacroField, Macros};
use serde::{Deserialize, Serialize};

/// Per-field figures for a comparison
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroDeviations {
    /// Calories
    pub calories: f64,
    /// Protein
    pub protein: f64,
    /// Carbohydrates
    pub carbs: f64,
    /// Fats
    pub fats: f64,
    /// Fiber, when both sides declare it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

impl MacroDeviations {
    /// Read one field
    #[must_use]
    pub const fn get(&self, field: MacroField) -> Option<f64> {
        match field {
            MacroField::Calories => Some(self.calories),
            MacroField::Protein => Some(self.protein),
            MacroField::Carbs => Some(self.carbs),
            MacroField::Fats => Some(self.fats),
            MacroField::Fiber => self.fiber,
        }
    }
}

/// Categorized result of a tolerance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceOutcome {
    /// Every checked field is within tolerance
    Pass,
    /// At least one field deviates; recorded, not fatal
    Warning,
}

/// Structured result of comparing actual macros with a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceReport {
    /// What was checked (pattern, meal, day)
    pub label: String,
    /// True when no checked field violates
    pub valid: bool,
    /// Pass or warning
    pub outcome: ToleranceOutcome,
    /// Tolerance applied, as a fraction
    pub tolerance_pct: f64,
    /// One message per violating field
    pub errors: Vec<String>,
    /// Violating fields
    pub violations: Vec<MacroField>,
    /// `actual - expected`, rounded to two decimals
    pub deviations: MacroDeviations,
    /// `|actual - expected| / |expected|`, as a fraction rounded to eight decimals
    pub deviations_percent: MacroDeviations,
}

fn round_fraction(value: f64) -> f64 {
    (value * DEVIATION_DECIMAL_SCALE).round() / DEVIATION_DECIMAL_SCALE
}

/// Deviation of `actual` from `expected` as a fraction of `expected`
#[must_use]
pub fn deviation_percent(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        0.0
    } else {
        round_fraction((actual - expected).abs() / expected.abs())
    }
}

/// True when a deviation fraction is strictly beyond the tolerance
#[must_use]
pub fn exceeds_tolerance(percent: f64, tolerance_pct: f64) -> bool {
    percent > round_fraction(tolerance_pct)
}

/// Compare calories, protein, carbs and fats
#[must_use]
pub fn validate(
    actual: &Macros,
    expected: &Macros,
    tolerance_pct: f64,
    label: &str,
) -> ToleranceReport {
    validate_fields(actual, expected, tolerance_pct, label, &MacroField::CORE)
}

/// Compare only `fields`; deviations are still reported for every field
#[must_use]
pub fn validate_fields(
    actual: &Macros,
    expected: &Macros,
    tolerance_pct: f64,
    label: &str,
    fields: &[MacroField],
) -> ToleranceReport {
    let fiber_pair = actual.fiber.zip(expected.fiber);
    let deviations = MacroDeviations {
        calories: round_macro(actual.calories - expected.calories),
        protein: round_macro(actual.protein - expected.protein),
        carbs: round_macro(actual.carbs - expected.carbs),
        fats: round_macro(actual.fats - expected.fats),
        fiber: fiber_pair.map(|(a, e)| round_macro(a - e)),
    };
    let deviations_percent = MacroDeviations {
        calories: deviation_percent(actual.calories, expected.calories),
        protein: deviation_percent(actual.protein, expected.protein),
        carbs: deviation_percent(actual.carbs, expected.carbs),
        fats: deviation_percent(actual.fats, expected.fats),
        fiber: fiber_pair.map(|(a, e)| deviation_percent(a, e)),
    };

    let mut errors = Vec::new();
    let mut violations = Vec::new();
    for field in fields {
        let Some(percent) = deviations_percent.get(*field) else {
            continue;
        };
        if exceeds_tolerance(percent, tolerance_pct) {
            let actual_value = field.get(actual).unwrap_or_default();
            let expected_value = field.get(expected).unwrap_or_default();
            let direction = if actual_value > expected_value {
                "over"
            } else {
                "under"
            };
            errors.push(format!(
                "{label}: {field} {actual_value:.2} {unit} vs target {expected_value:.2} {unit} \
                 ({pct:.2}% {direction}, tolerance {tol:.2}%)",
                unit = field.unit(),
                pct = percent * 100.0,
                tol = tolerance_pct * 100.0,
            ));
            violations.push(*field);
        }
    }

    let valid = violations.is_empty();
    ToleranceReport {
        label: label.to_owned(),
        valid,
        outcome: if valid {
            ToleranceOutcome::Pass
        } else {
            ToleranceOutcome::Warning
        },
        tolerance_pct,
        errors,
        violations,
        deviations,
        deviations_percent,
    }
}

/// Warn when declared calories stray from the 4/4/9 estimate of the macro grams
#[must_use]
pub fn check_macro_consistency(
    macros: &Macros,
    tolerance_pct: f64,
    label: &str,
) -> Option<String> {
    let estimated = macros.atwater_calories();
    let percent = deviation_percent(macros.calories, estimated);
    exceeds_tolerance(percent, tolerance_pct).then(|| {
        format!(
            "{label}: declared {declared:.2} kcal differs from {estimated:.2} kcal \
             implied by protein/carbs/fats ({pct:.2}%)",
            declared = macros.calories,
            pct = percent * 100.0,
        )
    })
}

/// Warn when an authored total disagrees with the sum recomputed from its parts
#[must_use]
pub fn check_stored_total(
    stored: &Macros,
    recomputed: &Macros,
    tolerance_pct: f64,
    label: &str,
) -> Option<String> {
    let percent = deviation_percent(stored.calories, recomputed.calories);
    exceeds_tolerance(percent, tolerance_pct).then(|| {
        format!(
            "{label}: stored total {stored_kcal:.2} kcal differs from recomputed \
             {recomputed_kcal:.2} kcal; recomputed value used",
            stored_kcal = stored.calories,
            recomputed_kcal = recomputed.calories,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calories(value: f64) -> Macros {
        Macros::new(value, 0.0, 0.0, 0.0)
    }

    #[test]
    fn test_exact_tolerance_is_not_a_violation() {
        let report = validate_fields(
            &calories(1020.0),
            &calories(1000.0),
            0.02,
            "Breakfast",
            &[MacroField::Calories],
        );
        assert!(report.valid);
        assert_eq!(report.outcome, ToleranceOutcome::Pass);
    }

    #[test]
    fn test_two_decimal_boundary_is_not_a_violation() {
        for (expected, actual) in [(51.0, 52.02), (51.5, 52.53), (53.0, 54.06), (1337.5, 1364.25)] {
            let report = validate_fields(
                &calories(actual),
                &calories(expected),
                0.02,
                "Snack",
                &[MacroField::Calories],
            );
            assert!(report.valid, "{expected} -> {actual} flagged");
            assert!((report.deviations_percent.calories - 0.02).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_negative_expected_still_measured() {
        assert!((deviation_percent(-90.0, -100.0) - 0.1).abs() < f64::EPSILON);
        assert!(exceeds_tolerance(deviation_percent(0.0, -100.0), 0.05));
    }

    #[test]
    fn test_just_over_tolerance_is_a_violation() {
        let report = validate_fields(
            &calories(1020.1),
            &calories(1000.0),
            0.02,
            "Breakfast",
            &[MacroField::Calories],
        );
        assert!(!report.valid);
        assert_eq!(report.violations, vec![MacroField::Calories]);
        assert!(report.errors[0].starts_with("Breakfast: calories"));
    }

    #[test]
    fn test_zero_expected_never_violates() {
        let actual = Macros::new(2000.0, 150.0, 10.0, 70.0);
        let expected = Macros::new(2000.0, 150.0, 0.0, 70.0);
        let report = validate(&actual, &expected, 0.05, "Day");
        assert!(report.valid);
        assert!(report.deviations_percent.carbs.abs() < f64::EPSILON);
        assert!((report.deviations.carbs - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_each_violating_field_reported() {
        let actual = Macros::new(2300.0, 120.0, 200.0, 70.0);
        let expected = Macros::new(2000.0, 150.0, 200.0, 70.0);
        let report = validate(&actual, &expected, 0.05, "Day 1");
        assert_eq!(
            report.violations,
            vec![MacroField::Calories, MacroField::Protein]
        );
        assert_eq!(report.errors.len(), 2);
        assert!((report.deviations.calories - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_consistency_signal() {
        let consistent = Macros::new(165.0, 10.0, 20.0, 5.0);
        assert!(check_macro_consistency(&consistent, 0.1, "A").is_none());
        let inconsistent = Macros::new(400.0, 10.0, 20.0, 5.0);
        assert!(check_macro_consistency(&inconsistent, 0.1, "A").is_some());
    }
}
