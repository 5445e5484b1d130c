// ABOUTME: Macro aggregation from foods to meals, days, and weekly averages
// ABOUTME: Pure summation functions with two-decimal normalization applied after summing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Aggregation
//!
//! Every figure is rounded to two decimals after summation, never before,
//! so drift does not accumulate across foods and meals. Fiber stays `None`
//! unless at least one contributing value declares it.

use nutriplan_core::constants::rounding::MACRO_DECIMAL_SCALE;
use nutriplan_core::models::{Macros, MealWithVariants, PatternFood};

/// Round a single figure to two decimals
#[must_use]
pub fn round_macro(value: f64) -> f64 {
    (value * MACRO_DECIMAL_SCALE).round() / MACRO_DECIMAL_SCALE
}

/// Round every field to two decimals. Idempotent.
#[must_use]
pub fn normalize(macros: &Macros) -> Macros {
    Macros {
        calories: round_macro(macros.calories),
        protein: round_macro(macros.protein),
        carbs: round_macro(macros.carbs),
        fats: round_macro(macros.fats),
        fiber: macros.fiber.map(round_macro),
    }
}

/// Field-wise sum of food macros
#[must_use]
pub fn sum_food_macros(foods: &[PatternFood]) -> Macros {
    normalize(&raw_food_sum(foods))
}

/// Field-wise sum of every food in every meal.
///
/// Sums the raw food figures rather than each meal's rounded total, so the
/// result equals summing recomputed meal totals without intermediate rounding.
#[must_use]
pub fn sum_meal_macros(meals: &[MealWithVariants]) -> Macros {
    let raw: Macros = meals.iter().map(|meal| raw_food_sum(&meal.foods)).sum();
    normalize(&raw)
}

/// Field-wise arithmetic mean of daily totals.
///
/// Fiber is averaged over the days that report it. An empty slice yields zeros.
#[must_use]
pub fn average_macros(days: &[Macros]) -> Macros {
    if days.is_empty() {
        return Macros::default();
    }

    let count = days.len() as f64;
    let total: Macros = days.iter().sum();
    let fiber_days: Vec<f64> = days.iter().filter_map(|day| day.fiber).collect();
    let fiber = if fiber_days.is_empty() {
        None
    } else {
        Some(fiber_days.iter().sum::<f64>() / fiber_days.len() as f64)
    };

    normalize(&Macros {
        calories: total.calories / count,
        protein: total.protein / count,
        carbs: total.carbs / count,
        fats: total.fats / count,
        fiber,
    })
}

/// Copy of `meal` whose `total_macros` is recomputed from its foods
#[must_use]
pub fn with_recomputed_totals(meal: &MealWithVariants) -> MealWithVariants {
    MealWithVariants {
        total_macros: sum_food_macros(&meal.foods),
        ..meal.clone()
    }
}

fn raw_food_sum(foods: &[PatternFood]) -> Macros {
    foods.iter().map(|food| food.macros).sum()
}
