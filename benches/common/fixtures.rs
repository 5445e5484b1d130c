// ABOUTME: Benchmark fixtures generating realistic day pattern catalogs
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic day pattern catalogs.
//!
//! Every value is derived from loop indices so runs are reproducible.

use nutriplan::models::{
    CompleteMacros, DayPattern, FoodSwap, FoodUnit, Macros, MealMacroDistribution, MealType,
    MealWithVariants, NutritionGoal, PatternCode, PatternFood,
};
use nutriplan::{PlanAssemblyInput, PlanRequest};
use nutriplan_engine::aggregator::{sum_food_macros, sum_meal_macros};
use uuid::Uuid;

/// Meal sizes used by the benchmarks
#[derive(Debug, Clone, Copy)]
pub enum MealSize {
    /// Three foods per meal, one swap
    Simple,
    /// Eight foods per meal, four swaps
    Elaborate,
}

impl MealSize {
    const fn foods(self) -> usize {
        match self {
            Self::Simple => 3,
            Self::Elaborate => 8,
        }
    }

    const fn swaps(self) -> usize {
        match self {
            Self::Simple => 1,
            Self::Elaborate => 4,
        }
    }
}

const MEAL_SLOTS: [(MealType, f64); 4] = [
    (MealType::Breakfast, 25.0),
    (MealType::Lunch, 35.0),
    (MealType::Snack, 10.0),
    (MealType::Dinner, 30.0),
];

#[allow(clippy::cast_precision_loss)]
fn generate_meal(code: PatternCode, slot: usize, size: MealSize) -> MealWithVariants {
    let (meal_type, share) = MEAL_SLOTS[slot];
    let per_food = 2000.0 * share / 100.0 / size.foods() as f64;
    let foods: Vec<PatternFood> = (0..size.foods())
        .map(|index| {
            let wobble = ((index * 7 + code.index() * 3) % 5) as f64;
            PatternFood {
                id: format!("{code}-{slot}-{index}"),
                food_item_id: Some(format!("food-{}", (slot * 13 + index) % 40)),
                name: format!("Food {slot}-{index}"),
                quantity: 50.0 + wobble * 10.0,
                unit: FoodUnit::Grams,
                macros: Macros::new(
                    per_food + wobble,
                    per_food * 0.075,
                    per_food * 0.1,
                    per_food * 0.033,
                )
                .with_fiber(wobble),
            }
        })
        .collect();
    let variants = (0..size.swaps())
        .map(|index| FoodSwap {
            original: format!("Food {slot}-{index}"),
            alternative: format!("Alternative {slot}-{index}"),
            alternative_food_item_id: None,
            alternative_quantity: Some(60.0),
            alternative_macros: (index % 2 == 0)
                .then(|| Macros::new(per_food, per_food * 0.08, per_food * 0.09, per_food * 0.035)),
            reason: None,
        })
        .collect();

    MealWithVariants {
        id: format!("meal-{slot}"),
        name: format!("{meal_type:?}"),
        meal_type,
        time: format!("{:02}:00", 8 + slot * 4),
        total_macros: sum_food_macros(&foods),
        foods,
        variants,
        prep_time: Some(15),
        notes: None,
    }
}

/// One day pattern with four meals of the given size
#[must_use]
pub fn generate_pattern(code: PatternCode, size: MealSize) -> DayPattern {
    let meals: Vec<MealWithVariants> = (0..MEAL_SLOTS.len())
        .map(|slot| generate_meal(code, slot, size))
        .collect();
    DayPattern {
        id: format!("pattern-{code}"),
        name: format!("Day {code}"),
        pattern_code: code,
        total_macros: sum_meal_macros(&meals),
        meals,
        water_intake: Some(2.5),
        focus: None,
    }
}

/// Assembler input with a three-pattern catalog
#[must_use]
pub fn generate_plan_input(duration_weeks: u32, size: MealSize) -> PlanAssemblyInput {
    use PatternCode::{A, B, C};
    PlanAssemblyInput {
        patterns: PatternCode::ALL
            .iter()
            .map(|code| generate_pattern(*code, size))
            .collect(),
        rotation: vec![A, B, C, A, B, C, A],
        target_macros: CompleteMacros {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fats: 66.0,
            fiber: 30.0,
        },
        meal_distribution: MEAL_SLOTS
            .iter()
            .map(|(meal_type, calorie_percentage)| MealMacroDistribution {
                meal_type: *meal_type,
                name: None,
                calorie_percentage: *calorie_percentage,
                target_macros: None,
            })
            .collect(),
        meals_per_day: 4,
        selected_food_ids: (0..40).map(|id| format!("food-{id}")).collect(),
        foods_created: 0,
        rotation_notes: None,
        general_tips: Vec::new(),
        request: PlanRequest {
            user_id: Uuid::nil(),
            plan_id: Some(Uuid::nil()),
            name: "Benchmark plan".to_owned(),
            description: None,
            goals: vec![NutritionGoal::Maintenance],
            duration_weeks,
            usage: Vec::new(),
            upstream_time_ms: 0,
        },
    }
}
