// ABOUTME: Wire contracts exchanged with the authoring agents and the persistence layer
// ABOUTME: Macro distribution, food selection, and meal pattern outputs plus the generation output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::macros::{CompleteMacros, Macros};
use super::pattern::{DayPattern, FoodUnit, MealType, PatternCode};
use super::plan::PatternBasedNutritionPlan;
use serde::{Deserialize, Serialize};

/// Energy figures the macro agent derived its targets from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroCalculations {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Calories after applying the goal adjustment
    pub target_calories: f64,
}

/// Share of the daily target assigned to one meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMacroDistribution {
    /// Meal slot
    pub meal_type: MealType,
    /// Display name of the slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Percent (0-100) of daily calories for this slot
    pub calorie_percentage: f64,
    /// Explicit macro targets for the slot, when the agent produced them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_macros: Option<Macros>,
}

/// Output of the macro distribution agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroDistributionOutput {
    /// Energy calculations
    pub calculations: MacroCalculations,
    /// Daily targets
    pub daily_target_macros: CompleteMacros,
    /// Per-meal shares, in meal order
    pub meal_distribution: Vec<MealMacroDistribution>,
    /// Meals per day the distribution was built for
    pub meals_per_day: u8,
}

/// Reference to a food already present in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodReference {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
}

/// Food proposed by the selection agent that is not yet in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFoodItem {
    /// Id assigned once the food is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// Macros per 100 g or 100 ml
    pub macros_per_100g: Macros,
    /// Unit the food is measured in
    #[serde(default)]
    pub unit: FoodUnit,
    /// Food category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Counters reported by the food selection agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSelectionStats {
    /// Foods selected overall
    pub total_selected: usize,
    /// Foods reused from the catalog
    pub existing_count: usize,
    /// Foods created for this plan
    pub new_count: usize,
}

/// Output of the food selection agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSelectionOutput {
    /// Catalog foods reused
    pub existing_foods: Vec<FoodReference>,
    /// Foods to be created
    #[serde(default)]
    pub new_foods: Vec<AiFoodItem>,
    /// Agent-reported counters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<FoodSelectionStats>,
}

impl FoodSelectionOutput {
    /// Ids usable by the plan: existing foods plus new foods that already carry an id
    #[must_use]
    pub fn selected_food_ids(&self) -> Vec<String> {
        self.existing_foods
            .iter()
            .map(|food| food.id.clone())
            .chain(self.new_foods.iter().filter_map(|food| food.id.clone()))
            .collect()
    }
}

/// Output of the meal pattern agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPatternOutput {
    /// Authored day patterns
    pub patterns: Vec<DayPattern>,
    /// Rotation as authored; length is validated during assembly
    pub weekly_rotation: Vec<PatternCode>,
    /// Why the rotation was chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_notes: Option<String>,
    /// General advice for the user
    #[serde(default)]
    pub general_tips: Vec<String>,
}

/// Token and cost accounting for one agent call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentUsage {
    /// Agent name
    pub agent: String,
    /// Tokens consumed
    pub tokens_used: u64,
    /// Cost in US dollars
    #[serde(rename = "costUSD")]
    pub cost_usd: f64,
}

/// Counters attached to a generation output
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Patterns in the catalog
    pub patterns_generated: usize,
    /// Foods usable by the plan
    pub foods_selected: usize,
    /// Foods created for the plan
    pub foods_created: usize,
    /// Swaps authored across all pattern meals
    pub variants_generated: usize,
    /// Tokens spent by all agents
    pub total_tokens_used: u64,
    /// Cost of all agents in US dollars
    #[serde(rename = "totalCostUSD")]
    pub total_cost_usd: f64,
    /// Wall time spent assembling
    pub generation_time_ms: u64,
}

/// Everything handed to the persistence collaborator after assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternNutritionGenerationOutput {
    /// The assembled plan
    pub plan: PatternBasedNutritionPlan,
    /// One-paragraph description of the plan
    pub summary: String,
    /// Tolerance and authoring warnings
    pub warnings: Vec<String>,
    /// Suggestions for the reviewer
    pub recommendations: Vec<String>,
    /// Counters
    pub generation_stats: GenerationStats,
}
