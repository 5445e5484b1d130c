// ABOUTME: Plan-level tolerance and authoring-integrity checks over patterns and assembled days
// ABOUTME: Collects recoverable warnings; structural problems surface as AssemblyError instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Validation
//!
//! Days are checked against the absolute daily target with the day tolerance.
//! Meals are checked on calories only, against their `caloriePercentage` share
//! of the daily target with the meal tolerance.
//!
//! Meals are matched to distribution slots by position when the meal count
//! equals the number of slots, otherwise by meal type in order of appearance.
//! A meal left without a slot is skipped with a warning.

use crate::aggregator::{sum_food_macros, sum_meal_macros};
use crate::config::ToleranceConfig;
use crate::tolerance::{
    check_macro_consistency, check_stored_total, validate, validate_fields, ToleranceReport,
};
use crate::week_assembler::WeekAssembler;
use nutriplan_core::constants::catalog::MIN_RECOMMENDED_PATTERNS;
use nutriplan_core::errors::AssemblyError;
use nutriplan_core::models::{
    AssembledWeek, CompleteMacros, DayPattern, MacroField, Macros, MealMacroDistribution,
    MealWithVariants, PatternCatalog, PatternCode, WeeklyRotation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tolerance results for one resolved day (a pattern, or a customized day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayValidation {
    /// "Pattern A" or "Day 9 (pattern A, customized)"
    pub label: String,
    /// Pattern the day resolves to
    pub pattern_code: PatternCode,
    /// Set for customized days only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
    /// Resolved day totals
    pub actual_macros: Macros,
    /// Day totals against the daily target
    pub day: ToleranceReport,
    /// One report per meal that matched a distribution slot
    pub meals: Vec<ToleranceReport>,
    /// Meals skipped because no distribution slot matched them
    pub unmatched_meals: Vec<String>,
}

impl DayValidation {
    /// True when the day and every checked meal are within tolerance
    #[must_use]
    pub fn is_within_tolerance(&self) -> bool {
        self.day.valid && self.meals.iter().all(|meal| meal.valid)
    }

    /// Warning lines for this day, day-level first
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.day.errors.clone();
        warnings.extend(
            self.meals
                .iter()
                .flat_map(|meal| meal.errors.iter().cloned()),
        );
        warnings.extend(self.unmatched_meals.iter().map(|meal| {
            format!(
                "{}: meal '{meal}' has no slot in the meal distribution; calorie share not checked",
                self.label
            )
        }));
        warnings
    }
}

/// Everything validation found, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Per-day tolerance results
    pub days: Vec<DayValidation>,
    /// Deduplicated warning lines
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Append a warning unless an identical line is already present
    pub fn push_warning(&mut self, warning: String) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    fn push_day(&mut self, day: DayValidation) {
        for warning in day.warnings() {
            self.push_warning(warning);
        }
        self.days.push(day);
    }

    /// Number of days or meals outside tolerance
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.days
            .iter()
            .map(|day| {
                usize::from(!day.day.valid) + day.meals.iter().filter(|meal| !meal.valid).count()
            })
            .sum()
    }

    /// True when nothing was flagged
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Checks resolved meals and days against plan targets
#[derive(Debug, Clone, Copy)]
pub struct PlanValidator<'a> {
    tolerance: &'a ToleranceConfig,
    target: &'a CompleteMacros,
    distribution: &'a [MealMacroDistribution],
}

impl<'a> PlanValidator<'a> {
    /// Bind thresholds, the daily target, and the per-meal distribution
    #[must_use]
    pub const fn new(
        tolerance: &'a ToleranceConfig,
        target: &'a CompleteMacros,
        distribution: &'a [MealMacroDistribution],
    ) -> Self {
        Self {
            tolerance,
            target,
            distribution,
        }
    }

    /// Check one resolved day's meals and totals
    #[must_use]
    pub fn check_day(
        &self,
        label: &str,
        pattern_code: PatternCode,
        day_number: Option<u32>,
        meals: &[MealWithVariants],
    ) -> DayValidation {
        let actual_macros = sum_meal_macros(meals);
        let day = validate(
            &actual_macros,
            &Macros::from(*self.target),
            self.tolerance.day_tolerance_pct,
            label,
        );

        let mut meal_reports = Vec::with_capacity(meals.len());
        let mut unmatched_meals = Vec::new();
        for (meal, slot) in meals.iter().zip(match_meal_targets(meals, self.distribution)) {
            let Some(slot) = slot else {
                unmatched_meals.push(meal.name.clone());
                continue;
            };
            meal_reports.push(validate_fields(
                &sum_food_macros(&meal.foods),
                &self.target.share(slot.calorie_percentage),
                self.tolerance.meal_tolerance_pct,
                &format!("{label} {}", meal.name),
                &[MacroField::Calories],
            ));
        }

        DayValidation {
            label: label.to_owned(),
            pattern_code,
            day_number,
            actual_macros,
            day,
            meals: meal_reports,
            unmatched_meals,
        }
    }

    /// Check each catalog pattern as authored, with no swaps applied
    #[must_use]
    pub fn check_patterns(&self, catalog: &PatternCatalog) -> ValidationReport {
        let mut report = ValidationReport::default();
        for pattern in catalog.iter() {
            report.push_day(self.check_day(
                &pattern_label(pattern.pattern_code),
                pattern.pattern_code,
                None,
                &pattern.meals,
            ));
        }
        report
    }

    /// Check every assembled day, once per uncustomized pattern and once per customized day
    ///
    /// # Errors
    ///
    /// Propagates day resolution errors
    pub fn check_weeks(
        &self,
        assembler: &WeekAssembler<'_>,
        weeks: &[AssembledWeek],
        report: &mut ValidationReport,
    ) -> Result<(), AssemblyError> {
        let mut checked_patterns = HashSet::new();
        for day in weeks.iter().flat_map(|week| week.days.iter()) {
            if day.is_customized {
                let label = format!(
                    "Day {} (pattern {}, customized)",
                    day.day_number, day.pattern_code
                );
                let meals = assembler.resolve_day(day)?;
                report.push_day(self.check_day(
                    &label,
                    day.pattern_code,
                    Some(day.day_number),
                    &meals,
                ));
            } else if checked_patterns.insert(day.pattern_code) {
                let meals = assembler.resolve_day(day)?;
                report.push_day(self.check_day(
                    &pattern_label(day.pattern_code),
                    day.pattern_code,
                    None,
                    &meals,
                ));
            }
        }
        Ok(())
    }

    /// Authoring-integrity warnings about the catalog and the daily target
    pub fn check_catalog(
        &self,
        catalog: &PatternCatalog,
        rotation: &WeeklyRotation,
        meals_per_day: u8,
        selected_food_ids: &[String],
        report: &mut ValidationReport,
    ) {
        if !Macros::from(*self.target).is_non_negative() {
            report.push_warning(
                "Daily target macros contain a negative or non-numeric value".to_owned(),
            );
        }

        if catalog.len() < MIN_RECOMMENDED_PATTERNS {
            report.push_warning(format!(
                "Only {} day pattern(s) authored; \
                 {MIN_RECOMMENDED_PATTERNS} or more keep the rotation varied",
                catalog.len()
            ));
        }

        let used = rotation.distinct_codes();
        for pattern in catalog.iter().filter(|pattern| !used.contains(&pattern.pattern_code)) {
            report.push_warning(format!(
                "{}: not used by weekly rotation {rotation}",
                pattern_label(pattern.pattern_code)
            ));
        }

        let selected: HashSet<&str> = selected_food_ids.iter().map(String::as_str).collect();
        for pattern in catalog.iter() {
            for warning in self.pattern_integrity(pattern, meals_per_day, &selected) {
                report.push_warning(warning);
            }
        }
    }

    fn pattern_integrity(
        &self,
        pattern: &DayPattern,
        meals_per_day: u8,
        selected: &HashSet<&str>,
    ) -> Vec<String> {
        let label = pattern_label(pattern.pattern_code);
        let mut warnings = Vec::new();

        if meals_per_day > 0 && pattern.meals.len() != usize::from(meals_per_day) {
            warnings.push(format!(
                "{label}: {} meals authored but the plan targets {meals_per_day} meals per day",
                pattern.meals.len()
            ));
        }

        let recomputed = sum_meal_macros(&pattern.meals);
        let drift = self.tolerance.stored_total_drift_pct;
        warnings.extend(check_stored_total(&pattern.total_macros, &recomputed, drift, &label));
        for meal in &pattern.meals {
            let meal_label = format!("{label} {}", meal.name);
            warnings.extend(check_stored_total(
                &meal.total_macros,
                &sum_food_macros(&meal.foods),
                drift,
                &meal_label,
            ));
            warnings.extend(food_macro_warnings(meal, &meal_label));
        }

        warnings.extend(check_macro_consistency(
            &recomputed,
            self.tolerance.macro_consistency_pct,
            &label,
        ));

        if !selected.is_empty() {
            let foods = pattern
                .meals
                .iter()
                .flat_map(|meal| meal.foods.iter())
                .filter_map(|food| {
                    food.food_item_id
                        .as_deref()
                        .map(|id| (id, food.name.as_str()))
                });
            let swaps = pattern
                .meals
                .iter()
                .flat_map(|meal| meal.variants.iter())
                .filter_map(|swap| {
                    swap.alternative_food_item_id
                        .as_deref()
                        .map(|id| (id, swap.alternative.as_str()))
                });
            for (id, name) in foods.chain(swaps) {
                if !selected.contains(id) {
                    warnings.push(format!(
                        "{label}: food '{name}' ({id}) is not among the selected foods"
                    ));
                }
            }
        }

        warnings
    }
}

fn food_macro_warnings(meal: &MealWithVariants, meal_label: &str) -> Vec<String> {
    let foods = meal
        .foods
        .iter()
        .filter(|food| !food.macros.is_non_negative())
        .map(|food| format!("{meal_label}: food '{}' has negative macros", food.name));
    let swaps = meal
        .variants
        .iter()
        .filter(|swap| {
            swap.alternative_macros
                .is_some_and(|macros| !macros.is_non_negative())
        })
        .map(|swap| {
            format!(
                "{meal_label}: swap to '{}' has negative macros",
                swap.alternative
            )
        });
    let estimated = meal
        .variants
        .iter()
        .filter(|swap| swap.alternative_macros.is_none())
        .map(|swap| {
            format!(
                "{meal_label}: swap to '{}' has no resolved macros; \
                 estimated from '{}' by quantity",
                swap.alternative, swap.original
            )
        });
    foods.chain(swaps).chain(estimated).collect()
}

/// Label used for an uncustomized pattern day
#[must_use]
pub fn pattern_label(code: PatternCode) -> String {
    format!("Pattern {code}")
}

/// Pair each meal with its distribution slot, if any
#[must_use]
pub fn match_meal_targets<'d>(
    meals: &[MealWithVariants],
    distribution: &'d [MealMacroDistribution],
) -> Vec<Option<&'d MealMacroDistribution>> {
    if meals.len() == distribution.len() {
        return distribution.iter().map(Some).collect();
    }

    let mut taken = vec![false; distribution.len()];
    meals
        .iter()
        .map(|meal| {
            let index = distribution
                .iter()
                .enumerate()
                .position(|(index, slot)| !taken[index] && slot.meal_type == meal.meal_type)?;
            taken[index] = true;
            Some(&distribution[index])
        })
        .collect()
}
