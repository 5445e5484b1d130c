// ABOUTME: Day pattern models authored upstream and read by the assembly engine
// ABOUTME: PatternCode, PatternFood, FoodSwap, MealWithVariants, and DayPattern definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::macros::Macros;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a day pattern within a plan's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternCode {
    /// First pattern
    A,
    /// Second pattern
    B,
    /// Third pattern
    C,
}

impl PatternCode {
    /// Every code, in catalog order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Position of this code in [`PatternCode::ALL`]
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    /// Single-letter label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for PatternCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit a pattern food quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodUnit {
    /// Grams
    #[default]
    #[serde(rename = "g")]
    Grams,
    /// Milliliters
    #[serde(rename = "ml")]
    Milliliters,
}

/// Type of meal within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Meal eaten before training
    PreWorkout,
    /// Meal eaten after training
    PostWorkout,
}

/// A food inside a meal, with macros already resolved for its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFood {
    /// Identifier unique within the meal
    pub id: String,
    /// Reference into the selected food catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_item_id: Option<String>,
    /// Display name; swaps match on it
    pub name: String,
    /// Amount of food
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: FoodUnit,
    /// Macros for `quantity`
    pub macros: Macros,
}

/// A pre-authored substitution attached to a meal, not yet applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSwap {
    /// Name of the food being replaced
    pub original: String,
    /// Name of the replacement food
    pub alternative: String,
    /// Catalog reference of the replacement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_food_item_id: Option<String>,
    /// Quantity of the replacement; the original quantity is kept when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_quantity: Option<f64>,
    /// Macros of the replacement at its quantity, resolved by food selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_macros: Option<Macros>,
    /// Why the swap is offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A meal with its foods and the swaps authored for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealWithVariants {
    /// Identifier unique within the pattern
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Scheduled time (HH:MM)
    pub time: String,
    /// Foods, in serving order
    pub foods: Vec<PatternFood>,
    /// Totals as stored by the author; assembly recomputes them
    pub total_macros: Macros,
    /// Swaps, addressed by index
    #[serde(default)]
    pub variants: Vec<FoodSwap>,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MealWithVariants {
    /// Find a food by name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn position_of_food(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.foods
            .iter()
            .position(|food| food.name.trim().eq_ignore_ascii_case(wanted))
    }
}

/// A reusable template for one day's meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPattern {
    /// Identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog code
    pub pattern_code: PatternCode,
    /// Meals, in time order
    pub meals: Vec<MealWithVariants>,
    /// Totals as stored by the author; assembly recomputes them
    pub total_macros: Macros,
    /// Recommended water intake (liters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<f64>,
    /// What the day emphasizes (training day, rest day, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl DayPattern {
    /// Look up a meal by id
    #[must_use]
    pub fn meal(&self, meal_id: &str) -> Option<&MealWithVariants> {
        self.meals.iter().find(|meal| meal.id == meal_id)
    }

    /// Number of swaps authored across all meals
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.meals.iter().map(|meal| meal.variants.len()).sum()
    }
}
