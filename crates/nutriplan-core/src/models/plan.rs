// ABOUTME: Assembled plan models referencing the immutable pattern catalog
// ABOUTME: AssembledDay, AssembledWeek, GenerationMetadata, and PatternBasedNutritionPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::{PatternCatalog, WeeklyRotation};
use super::macros::{CompleteMacros, Macros};
use super::pattern::PatternCode;
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A swap applied to one meal of an assembled day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedVariant {
    /// Meal the swap applies to
    pub meal_id: String,
    /// Index into that meal's `variants`
    pub swap_index: usize,
}

impl AppliedVariant {
    /// Create an applied variant record
    pub fn new(meal_id: impl Into<String>, swap_index: usize) -> Self {
        Self {
            meal_id: meal_id.into(),
            swap_index,
        }
    }
}

/// One calendar day of a plan: a pattern reference plus a sparse swap overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledDay {
    /// Stable identifier derived from week and day numbers
    pub id: String,
    /// 1-based absolute day number
    pub day_number: u32,
    /// Weekday label
    pub day_name: String,
    /// Pattern used for the day
    pub pattern_code: PatternCode,
    /// Id of that pattern in the catalog
    pub pattern_id: String,
    /// Swaps applied on top of the pattern, in application order
    #[serde(default)]
    pub applied_variants: Vec<AppliedVariant>,
    /// Whether the day departs from the rotation default
    pub is_customized: bool,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Seven consecutive assembled days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledWeek {
    /// Stable identifier derived from the week number
    pub id: String,
    /// 1-based week number
    pub week_number: u32,
    /// Days of the week, Monday first
    pub days: Vec<AssembledDay>,
    /// Field-wise mean of the days' resolved macros
    pub weekly_average_macros: Macros,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Provenance record attached to a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    /// Always `pattern_based` for this engine
    pub method: String,
    /// Patterns in the catalog
    pub patterns_count: usize,
    /// Foods usable by the plan
    pub selected_foods_count: usize,
    /// Swaps authored across all pattern meals
    pub total_variants: usize,
    /// When the plan was assembled
    pub generated_at: DateTime<Utc>,
    /// Tokens spent by the authoring agents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    /// Cost of the authoring agents
    #[serde(default, rename = "costUSD", skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
}

/// Lifecycle state of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Freshly assembled, not yet started
    #[default]
    Draft,
    /// Being followed
    Active,
    /// Finished
    Completed,
    /// Retired
    Archived,
}

/// Nutrition goal declared for a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    MuscleGain,
    /// Fuel for training
    Performance,
    /// General wellbeing
    GeneralHealth,
}

impl NutritionGoal {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
            Self::Performance => "performance",
            Self::GeneralHealth => "general_health",
        }
    }
}

impl FromStr for NutritionGoal {
    type Err = AppError;

    /// Accepts the wire name, case-insensitive, with `-` or `_` separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        [
            Self::WeightLoss,
            Self::Maintenance,
            Self::MuscleGain,
            Self::Performance,
            Self::GeneralHealth,
        ]
        .into_iter()
        .find(|goal| goal.as_str() == normalized)
        .ok_or_else(|| AppError::invalid_input(format!("Unknown nutrition goal: {s}")))
    }
}

/// Root aggregate handed to the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternBasedNutritionPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared goals
    pub goals: Vec<NutritionGoal>,
    /// Whole weeks covered by `weeks`
    pub duration_weeks: u32,
    /// Daily macro targets
    pub target_macros: CompleteMacros,
    /// Meals the macro distribution was computed for
    pub meals_per_day: u8,
    /// Catalog foods the plan may use
    pub selected_food_ids: Vec<String>,
    /// Immutable pattern catalog
    pub day_patterns: PatternCatalog,
    /// Rotation applied to every week
    pub weekly_rotation: WeeklyRotation,
    /// Assembled weeks
    pub weeks: Vec<AssembledWeek>,
    /// Lifecycle state
    pub status: PlanStatus,
    /// Incremented on every edit
    pub version: u32,
    /// Provenance
    pub generation_metadata: GenerationMetadata,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last edit time
    pub updated_at: DateTime<Utc>,
}

impl PatternBasedNutritionPlan {
    /// Number of days covered by the plan
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.weeks.iter().map(|week| week.days.len() as u32).sum()
    }

    /// Find a day by its 1-based number
    #[must_use]
    pub fn day(&self, day_number: u32) -> Option<&AssembledDay> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .find(|day| day.day_number == day_number)
    }

    /// Find a week by its 1-based number
    #[must_use]
    pub fn week(&self, week_number: u32) -> Option<&AssembledWeek> {
        self.weeks
            .iter()
            .find(|week| week.week_number == week_number)
    }
}
