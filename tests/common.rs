// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and a balanced three-meal pattern catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::similar_names
)]
//! Shared test utilities for `nutriplan`
//!
//! The fixture catalog is built so that pattern A hits a 2000 kcal /
//! 150 g protein / 200 g carbs / 66.67 g fats target exactly, with meals at
//! 30/40/30 percent of calories. Patterns B and C add a calorie offset to
//! the first breakfast food so tests can land inside or outside tolerance.

use nutriplan::models::{
    AgentUsage, CompleteMacros, DayPattern, FoodReference, FoodSelectionOutput, FoodSwap,
    FoodUnit, MacroCalculations, MacroDistributionOutput, Macros, MealMacroDistribution,
    MealPatternOutput, MealType, MealWithVariants, NutritionGoal, PatternCode, PatternFood,
};
use nutriplan::{PlanAssemblyInput, PlanRequest};
use nutriplan_engine::aggregator::{sum_food_macros, sum_meal_macros};
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Every catalog food id used by the fixtures
pub const SELECTED_FOOD_IDS: [&str; 7] = [
    "food-oats",
    "food-yogurt",
    "food-chicken",
    "food-rice",
    "food-salmon",
    "food-potato",
    "food-muesli",
];

pub fn food(id: &str, name: &str, quantity: f64, macros: Macros) -> PatternFood {
    PatternFood {
        id: id.to_owned(),
        food_item_id: Some(format!("food-{id}")),
        name: name.to_owned(),
        quantity,
        unit: FoodUnit::Grams,
        macros,
    }
}

pub fn meal(
    id: &str,
    name: &str,
    meal_type: MealType,
    foods: Vec<PatternFood>,
    variants: Vec<FoodSwap>,
) -> MealWithVariants {
    MealWithVariants {
        id: id.to_owned(),
        name: name.to_owned(),
        meal_type,
        time: "12:00".to_owned(),
        total_macros: sum_food_macros(&foods),
        foods,
        variants,
        prep_time: Some(15),
        notes: None,
    }
}

/// Breakfast swaps; Skyr carries the macros a quantity rescale of the yogurt gives
pub fn breakfast_swaps() -> Vec<FoodSwap> {
    vec![
        FoodSwap {
            original: "Oats".to_owned(),
            alternative: "Muesli".to_owned(),
            alternative_food_item_id: Some("food-muesli".to_owned()),
            alternative_quantity: Some(75.0),
            alternative_macros: Some(Macros::new(300.0, 14.0, 46.0, 6.0)),
            reason: Some("variety".to_owned()),
        },
        FoodSwap {
            original: "Greek yogurt".to_owned(),
            alternative: "Skyr".to_owned(),
            alternative_food_item_id: None,
            alternative_quantity: Some(125.0),
            alternative_macros: Some(Macros::new(150.0, 15.0, 7.5, 7.0)),
            reason: None,
        },
    ]
}

/// A three-meal pattern; `breakfast_offset` kcal are added to the oats
pub fn pattern(code: PatternCode, breakfast_offset: f64) -> DayPattern {
    let meals = vec![
        meal(
            "breakfast",
            "Breakfast",
            MealType::Breakfast,
            vec![
                food("oats", "Oats", 80.0, Macros::new(300.0 + breakfast_offset, 15.0, 45.0, 6.0)),
                food("yogurt", "Greek yogurt", 250.0, Macros::new(300.0, 30.0, 15.0, 14.0)),
            ],
            breakfast_swaps(),
        ),
        meal(
            "lunch",
            "Lunch",
            MealType::Lunch,
            vec![
                food("chicken", "Chicken breast", 200.0, Macros::new(330.0, 50.0, 0.0, 14.0)),
                food("rice", "Rice", 300.0, Macros::new(470.0, 10.0, 80.0, 12.67)),
            ],
            Vec::new(),
        ),
        meal(
            "dinner",
            "Dinner",
            MealType::Dinner,
            vec![
                food("salmon", "Salmon", 150.0, Macros::new(300.0, 30.0, 0.0, 19.0)),
                food("potato", "Potatoes", 350.0, Macros::new(300.0, 15.0, 60.0, 1.0)),
            ],
            Vec::new(),
        ),
    ];

    DayPattern {
        id: format!("pattern-{}", code.as_str().to_lowercase()),
        name: format!("Day {code}"),
        pattern_code: code,
        total_macros: sum_meal_macros(&meals),
        meals,
        water_intake: Some(2.5),
        focus: None,
    }
}

pub fn target_macros() -> CompleteMacros {
    CompleteMacros {
        calories: 2000.0,
        protein: 150.0,
        carbs: 200.0,
        fats: 66.67,
        fiber: 30.0,
    }
}

pub fn meal_distribution() -> Vec<MealMacroDistribution> {
    [
        (MealType::Breakfast, 30.0),
        (MealType::Lunch, 40.0),
        (MealType::Dinner, 30.0),
    ]
    .into_iter()
    .map(|(meal_type, calorie_percentage)| MealMacroDistribution {
        meal_type,
        name: None,
        calorie_percentage,
        target_macros: None,
    })
    .collect()
}

pub fn plan_request(duration_weeks: u32) -> PlanRequest {
    PlanRequest {
        user_id: Uuid::new_v4(),
        plan_id: None,
        name: "Maintenance block".to_owned(),
        description: None,
        goals: vec![NutritionGoal::Maintenance],
        duration_weeks,
        usage: Vec::new(),
        upstream_time_ms: 0,
    }
}

pub fn plan_input(
    patterns: Vec<DayPattern>,
    rotation: Vec<PatternCode>,
    duration_weeks: u32,
) -> PlanAssemblyInput {
    PlanAssemblyInput {
        patterns,
        rotation,
        target_macros: target_macros(),
        meal_distribution: meal_distribution(),
        meals_per_day: 3,
        selected_food_ids: SELECTED_FOOD_IDS.iter().map(|id| (*id).to_owned()).collect(),
        foods_created: 0,
        rotation_notes: None,
        general_tips: Vec::new(),
        request: plan_request(duration_weeks),
    }
}

/// Patterns A and B, both inside tolerance, alternating through the week
pub fn balanced_input(duration_weeks: u32) -> PlanAssemblyInput {
    use PatternCode::{A, B};
    plan_input(
        vec![pattern(A, 0.0), pattern(B, 10.0)],
        vec![A, B, A, B, A, B, A],
        duration_weeks,
    )
}

pub fn macro_distribution_output() -> MacroDistributionOutput {
    MacroDistributionOutput {
        calculations: MacroCalculations {
            bmr: 1700.0,
            tdee: 2350.0,
            target_calories: 2000.0,
        },
        daily_target_macros: target_macros(),
        meal_distribution: meal_distribution(),
        meals_per_day: 3,
    }
}

pub fn food_selection_output() -> FoodSelectionOutput {
    FoodSelectionOutput {
        existing_foods: SELECTED_FOOD_IDS
            .iter()
            .map(|id| FoodReference {
                id: (*id).to_owned(),
                name: id.trim_start_matches("food-").to_owned(),
            })
            .collect(),
        new_foods: Vec::new(),
        stats: None,
    }
}

pub fn meal_pattern_output() -> MealPatternOutput {
    use PatternCode::{A, B};
    MealPatternOutput {
        patterns: vec![pattern(A, 0.0), pattern(B, 10.0)],
        weekly_rotation: vec![A, B, A, B, A, B, A],
        rotation_notes: Some("Alternate breakfasts".to_owned()),
        general_tips: vec!["Drink water with every meal".to_owned()],
    }
}

pub fn agent_usage() -> Vec<AgentUsage> {
    vec![
        AgentUsage {
            agent: "macro_distribution".to_owned(),
            tokens_used: 1200,
            cost_usd: 0.01,
        },
        AgentUsage {
            agent: "meal_patterns".to_owned(),
            tokens_used: 5400,
            cost_usd: 0.05,
        },
    ]
}
