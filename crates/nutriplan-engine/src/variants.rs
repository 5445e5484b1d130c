// ABOUTME: Deterministic food swap resolution on top of immutable pattern meals
// ABOUTME: Applies indexed variants and resolves a day's meals from its applied-variant overlay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Variant Resolution
//!
//! A swap is selected by index, never by content match, and always produces
//! a new meal value. The same `(meal, swap_index)` pair resolves to the same
//! meal every time, which lets assembled days store only the indices.

use crate::aggregator::{sum_food_macros, with_recomputed_totals};
use nutriplan_core::errors::AssemblyError;
use nutriplan_core::models::{AppliedVariant, DayPattern, MealWithVariants, PatternFood};
use tracing::debug;

/// Apply the swap at `swap_index` to a copy of `meal`.
///
/// The replaced food takes the swap's name, catalog reference and quantity
/// (the original quantity when none is given). Its macros come from the swap
/// when the food selection step resolved them, otherwise the original food's
/// macros are rescaled by the quantity ratio. The returned meal's totals are
/// recomputed.
///
/// # Errors
///
/// Returns `InvalidSwapIndex` when the index is outside the meal's variants and
/// `SwapTargetNotFound` when the swapped food is not in the meal
pub fn apply_swap(
    meal: &MealWithVariants,
    swap_index: usize,
) -> Result<MealWithVariants, AssemblyError> {
    let swap = meal
        .variants
        .get(swap_index)
        .ok_or_else(|| AssemblyError::InvalidSwapIndex {
            meal_id: meal.id.clone(),
            index: swap_index,
            available: meal.variants.len(),
        })?;

    let position = meal.position_of_food(&swap.original).ok_or_else(|| {
        AssemblyError::SwapTargetNotFound {
            meal_id: meal.id.clone(),
            index: swap_index,
            original: swap.original.clone(),
        }
    })?;

    let original = &meal.foods[position];
    let quantity = swap.alternative_quantity.unwrap_or(original.quantity);
    let macros = swap.alternative_macros.unwrap_or_else(|| {
        if original.quantity > 0.0 {
            original.macros.scaled(quantity / original.quantity)
        } else {
            original.macros
        }
    });

    let replacement = PatternFood {
        id: format!("{}-swap{swap_index}", original.id),
        food_item_id: swap.alternative_food_item_id.clone(),
        name: swap.alternative.clone(),
        quantity,
        unit: original.unit,
        macros,
    };

    debug!(
        meal.id = %meal.id,
        swap.index = swap_index,
        swap.original = %swap.original,
        swap.alternative = %swap.alternative,
        swap.estimated = swap.alternative_macros.is_none(),
        "Applied food swap"
    );

    let mut foods = meal.foods.clone();
    foods[position] = replacement;
    let total_macros = sum_food_macros(&foods);

    Ok(MealWithVariants {
        foods,
        total_macros,
        ..meal.clone()
    })
}

/// Apply several swaps to `meal`, in order
///
/// # Errors
///
/// Propagates the first failing [`apply_swap`]
pub fn apply_swaps(
    meal: &MealWithVariants,
    swap_indices: &[usize],
) -> Result<MealWithVariants, AssemblyError> {
    swap_indices
        .iter()
        .try_fold(with_recomputed_totals(meal), |resolved, index| {
            apply_swap(&resolved, *index)
        })
}

/// Resolve a pattern's meals with an applied-variant overlay.
///
/// Meals keep pattern order; every returned meal has recomputed totals.
///
/// # Errors
///
/// Returns `UnknownMeal` when an overlay entry names a meal the pattern lacks,
/// and propagates swap errors
pub fn resolve_meals(
    pattern: &DayPattern,
    applied: &[AppliedVariant],
) -> Result<Vec<MealWithVariants>, AssemblyError> {
    if let Some(stray) = applied
        .iter()
        .find(|variant| pattern.meal(&variant.meal_id).is_none())
    {
        return Err(AssemblyError::UnknownMeal {
            pattern_code: pattern.pattern_code,
            meal_id: stray.meal_id.clone(),
        });
    }

    pattern
        .meals
        .iter()
        .map(|meal| {
            let indices: Vec<usize> = applied
                .iter()
                .filter(|variant| variant.meal_id == meal.id)
                .map(|variant| variant.swap_index)
                .collect();
            apply_swaps(meal, &indices)
        })
        .collect()
}
