// ABOUTME: Post-assembly plan edits expressed through the week assembler and variant resolver
// ABOUTME: Customizes, resets and regenerates days and weeks, returning a new plan revision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Editing
//!
//! Every edit takes the current plan by reference and returns a new revision
//! with `version + 1` and a fresh `updatedAt`. Only the touched week is
//! rebuilt and its weekly average recomputed; the rest is cloned as-is.

use crate::week_assembler::WeekAssembler;
use chrono::Utc;
use nutriplan_core::constants::calendar::DAYS_PER_WEEK;
use nutriplan_core::errors::AssemblyError;
use nutriplan_core::models::{
    AppliedVariant, AssembledDay, AssembledWeek, PatternBasedNutritionPlan, PatternCode,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Requested change to a single day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCustomization {
    /// Use another catalog pattern for this day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_code: Option<PatternCode>,
    /// Swaps to apply, replacing any the day already had
    #[serde(default)]
    pub swaps: Vec<AppliedVariant>,
    /// Free-form note stored on the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Customize one 1-based day
///
/// # Errors
///
/// Returns `DayOutOfRange` for a day outside the plan, `UnknownPatternCode` for
/// a pattern override missing from the catalog, and the variant resolver's
/// errors for swaps that do not resolve against the chosen pattern
pub fn customize_day(
    plan: &PatternBasedNutritionPlan,
    day_number: u32,
    customization: &DayCustomization,
) -> Result<PatternBasedNutritionPlan, AssemblyError> {
    let assembler = WeekAssembler::new(&plan.day_patterns, plan.weekly_rotation)?;
    let current = plan_day(plan, day_number)?;

    let code = customization.pattern_code.unwrap_or(current.pattern_code);
    let mut day = assembler.day_with_pattern(day_index(day_number), code)?;
    day.applied_variants.clone_from(&customization.swaps);
    day.is_customized = true;
    day.notes.clone_from(&customization.notes);
    // Fail now rather than when the day is next resolved
    assembler.resolve_day(&day)?;

    let revised = replace_day(plan, &assembler, day)?;
    info!(
        plan.id = %plan.id,
        day = day_number,
        pattern = %code,
        swaps = customization.swaps.len(),
        "Customized plan day"
    );
    Ok(revised)
}

/// Return one 1-based day to its rotation default
///
/// # Errors
///
/// Returns `DayOutOfRange` for a day outside the plan
pub fn reset_day(
    plan: &PatternBasedNutritionPlan,
    day_number: u32,
) -> Result<PatternBasedNutritionPlan, AssemblyError> {
    let assembler = WeekAssembler::new(&plan.day_patterns, plan.weekly_rotation)?;
    plan_day(plan, day_number)?;

    let day = assembler.default_day(day_index(day_number))?;
    let revised = replace_day(plan, &assembler, day)?;
    info!(plan.id = %plan.id, day = day_number, "Reset plan day to rotation");
    Ok(revised)
}

/// Rebuild one 1-based week from the rotation, dropping its customizations
///
/// # Errors
///
/// Returns `WeekOutOfRange` for a week outside the plan
pub fn regenerate_week(
    plan: &PatternBasedNutritionPlan,
    week_number: u32,
) -> Result<PatternBasedNutritionPlan, AssemblyError> {
    let position = week_position(plan, week_number)?;
    let assembler = WeekAssembler::new(&plan.day_patterns, plan.weekly_rotation)?;

    let mut weeks = plan.weeks.clone();
    weeks[position] = assembler.assemble_week(week_number)?;
    info!(plan.id = %plan.id, week = week_number, "Regenerated plan week");
    Ok(revise(plan, weeks))
}

/// Append the next week of the rotation, up to `max_duration_weeks`
///
/// # Errors
///
/// Returns `InvalidDuration` when the plan already spans `max_duration_weeks`,
/// and propagates week assembly errors
pub fn add_week(
    plan: &PatternBasedNutritionPlan,
    max_duration_weeks: u32,
) -> Result<PatternBasedNutritionPlan, AssemblyError> {
    let week_number = plan.duration_weeks.saturating_add(1);
    if week_number > max_duration_weeks {
        return Err(AssemblyError::InvalidDuration {
            weeks: i64::from(week_number),
        });
    }
    let assembler = WeekAssembler::new(&plan.day_patterns, plan.weekly_rotation)?;

    let mut weeks = plan.weeks.clone();
    weeks.push(assembler.assemble_week(week_number)?);
    info!(plan.id = %plan.id, week = week_number, "Added plan week");
    Ok(revise(plan, weeks))
}

fn day_index(day_number: u32) -> usize {
    day_number as usize - 1
}

fn plan_day(
    plan: &PatternBasedNutritionPlan,
    day_number: u32,
) -> Result<&AssembledDay, AssemblyError> {
    plan.day(day_number).ok_or(AssemblyError::DayOutOfRange {
        day_number,
        total_days: plan.total_days(),
    })
}

fn week_position(
    plan: &PatternBasedNutritionPlan,
    week_number: u32,
) -> Result<usize, AssemblyError> {
    plan.weeks
        .iter()
        .position(|week| week.week_number == week_number)
        .ok_or(AssemblyError::WeekOutOfRange {
            week_number,
            total_weeks: plan.duration_weeks,
        })
}

fn replace_day(
    plan: &PatternBasedNutritionPlan,
    assembler: &WeekAssembler<'_>,
    day: AssembledDay,
) -> Result<PatternBasedNutritionPlan, AssemblyError> {
    let week_number = (day.day_number as usize - 1) / DAYS_PER_WEEK + 1;
    let position = week_position(plan, week_number as u32)?;

    let mut weeks = plan.weeks.clone();
    let week = &weeks[position];
    let days: Vec<AssembledDay> = week
        .days
        .iter()
        .map(|existing| {
            if existing.day_number == day.day_number {
                day.clone()
            } else {
                existing.clone()
            }
        })
        .collect();
    let rebuilt = AssembledWeek {
        notes: week.notes.clone(),
        ..assembler.build_week(week.week_number, days)?
    };
    weeks[position] = rebuilt;
    Ok(revise(plan, weeks))
}

fn revise(
    plan: &PatternBasedNutritionPlan,
    weeks: Vec<AssembledWeek>,
) -> PatternBasedNutritionPlan {
    PatternBasedNutritionPlan {
        duration_weeks: weeks.len() as u32,
        weeks,
        version: plan.version.saturating_add(1),
        updated_at: Utc::now().max(plan.updated_at),
        ..plan.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_assembler::{PlanAssembler, PlanAssemblyInput, PlanRequest};
    use nutriplan_core::models::{
        CompleteMacros, DayPattern, FoodSwap, FoodUnit, Macros, MealType, MealWithVariants,
        PatternFood,
    };
    use uuid::Uuid;
    use PatternCode::{A, B};

    fn pattern(code: PatternCode, calories: f64) -> DayPattern {
        let macros = Macros::new(calories, 100.0, 200.0, 50.0);
        DayPattern {
            id: format!("pattern-{code}"),
            name: format!("Day {code}"),
            pattern_code: code,
            meals: vec![MealWithVariants {
                id: "dinner".to_owned(),
                name: "Dinner".to_owned(),
                meal_type: MealType::Dinner,
                time: "19:00".to_owned(),
                foods: vec![PatternFood {
                    id: "f1".to_owned(),
                    food_item_id: None,
                    name: "Salmon".to_owned(),
                    quantity: 200.0,
                    unit: FoodUnit::Grams,
                    macros,
                }],
                total_macros: macros,
                variants: vec![FoodSwap {
                    original: "Salmon".to_owned(),
                    alternative: "Tofu".to_owned(),
                    alternative_food_item_id: None,
                    alternative_quantity: None,
                    alternative_macros: Some(Macros::new(calories - 200.0, 100.0, 200.0, 50.0)),
                    reason: None,
                }],
                prep_time: None,
                notes: None,
            }],
            total_macros: macros,
            water_intake: None,
            focus: None,
        }
    }

    fn plan() -> PatternBasedNutritionPlan {
        let input = PlanAssemblyInput {
            patterns: vec![pattern(A, 1750.0), pattern(B, 1820.0)],
            rotation: vec![A, B, A, B, A, B, A],
            target_macros: CompleteMacros {
                calories: 1800.0,
                protein: 100.0,
                carbs: 200.0,
                fats: 50.0,
                fiber: 25.0,
            },
            meal_distribution: Vec::new(),
            meals_per_day: 1,
            selected_food_ids: Vec::new(),
            foods_created: 0,
            rotation_notes: None,
            general_tips: Vec::new(),
            request: PlanRequest {
                user_id: Uuid::nil(),
                plan_id: None,
                name: "Edit me".to_owned(),
                description: None,
                goals: Vec::new(),
                duration_weeks: 2,
                usage: Vec::new(),
                upstream_time_ms: 0,
            },
        };
        PlanAssembler::default().assemble(input).unwrap().plan
    }

    #[test]
    fn test_customize_day_bumps_version_and_week_average() {
        let original = plan();
        let customization = DayCustomization {
            pattern_code: Some(B),
            swaps: vec![AppliedVariant::new("dinner", 0)],
            notes: Some("Dinner out".to_owned()),
        };
        let revised = customize_day(&original, 8, &customization).unwrap();

        assert_eq!(revised.version, original.version + 1);
        let day = revised.day(8).unwrap();
        assert!(day.is_customized);
        assert_eq!(day.pattern_code, B);
        // Week 1 untouched, week 2 average changed
        assert_eq!(revised.weeks[0], original.weeks[0]);
        assert_ne!(
            revised.weeks[1].weekly_average_macros,
            original.weeks[1].weekly_average_macros
        );
        // Source plan untouched
        assert!(!original.day(8).unwrap().is_customized);
    }

    #[test]
    fn test_customize_rejects_bad_swap() {
        let customization = DayCustomization {
            swaps: vec![AppliedVariant::new("dinner", 4)],
            ..DayCustomization::default()
        };
        let error = customize_day(&plan(), 3, &customization).unwrap_err();
        assert!(matches!(error, AssemblyError::InvalidSwapIndex { index: 4, .. }));
    }

    #[test]
    fn test_reset_day_restores_rotation() {
        let original = plan();
        let customization = DayCustomization {
            pattern_code: Some(B),
            ..DayCustomization::default()
        };
        let customized = customize_day(&original, 1, &customization).unwrap();
        let reset = reset_day(&customized, 1).unwrap();
        assert_eq!(reset.weeks, original.weeks);
        assert_eq!(reset.version, original.version + 2);
    }

    #[test]
    fn test_day_out_of_range() {
        let error = reset_day(&plan(), 15).unwrap_err();
        assert_eq!(
            error,
            AssemblyError::DayOutOfRange {
                day_number: 15,
                total_days: 14
            }
        );
    }

    #[test]
    fn test_add_and_regenerate_week() {
        let original = plan();
        let extended = add_week(&original, 52).unwrap();
        assert_eq!(extended.duration_weeks, 3);
        assert_eq!(extended.weeks[2].days[0].day_number, 15);
        assert_eq!(extended.weeks[2].days[0].pattern_code, A);

        let customized = customize_day(
            &extended,
            16,
            &DayCustomization {
                pattern_code: Some(A),
                ..DayCustomization::default()
            },
        )
        .unwrap();
        let regenerated = regenerate_week(&customized, 3).unwrap();
        assert_eq!(regenerated.weeks[2], extended.weeks[2]);
        assert!(matches!(
            regenerate_week(&original, 9),
            Err(AssemblyError::WeekOutOfRange { week_number: 9, .. })
        ));
    }

    #[test]
    fn test_add_week_stops_at_cap() {
        let original = plan();
        let extended = add_week(&original, 3).unwrap();
        assert_eq!(
            add_week(&extended, 3).unwrap_err(),
            AssemblyError::InvalidDuration { weeks: 4 }
        );
    }
}
