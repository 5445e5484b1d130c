// ABOUTME: Core data models for pattern-based nutrition plans
// ABOUTME: Re-exports macro, pattern, catalog, plan, and agent wire types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plans are stored as an immutable pattern catalog plus thin assembled
//! days that reference it:
//!
//! - `DayPattern`: a template day (code A/B/C) with meals, foods and swaps
//! - `PatternCatalog`: the 1-3 patterns of one plan, addressed by code or id
//! - `WeeklyRotation`: seven pattern codes repeated every week
//! - `AssembledDay` / `AssembledWeek`: pattern references plus applied swaps
//! - `PatternBasedNutritionPlan`: the root aggregate handed to persistence

// Domain modules
mod agents;
mod catalog;
mod macros;
mod pattern;
mod plan;

// Macro figures
pub use macros::{CompleteMacros, MacroField, Macros};

// Authoring-time pattern domain
pub use pattern::{
    DayPattern, FoodSwap, FoodUnit, MealType, MealWithVariants, PatternCode, PatternFood,
};

// Catalog and rotation
pub use catalog::{PatternCatalog, WeeklyRotation};

// Assembled plan domain
pub use plan::{
    AppliedVariant, AssembledDay, AssembledWeek, GenerationMetadata, NutritionGoal,
    PatternBasedNutritionPlan, PlanStatus,
};

// Upstream agent outputs and the downstream generation output
pub use agents::{
    AgentUsage, AiFoodItem, FoodReference, FoodSelectionOutput, FoodSelectionStats,
    GenerationStats, MacroCalculations, MacroDistributionOutput, MealMacroDistribution,
    MealPatternOutput, PatternNutritionGenerationOutput,
};
