// ABOUTME: Top-level orchestration turning upstream agent outputs into a pattern-based plan
// ABOUTME: Validates structure, assembles weeks, collects tolerance warnings, and fills metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Assembly
//!
//! Order of work: structural validation (rotation length, catalog shape,
//! duration, rotation codes), week assembly, tolerance and integrity checks,
//! then metadata, summary and recommendations. Structural problems fail the
//! whole call before any week exists; tolerance violations only add warnings.

use crate::aggregator::average_macros;
use crate::config::ToleranceConfig;
use crate::validation::{PlanValidator, ValidationReport};
use crate::week_assembler::WeekAssembler;
use chrono::Utc;
use nutriplan_core::constants::calendar::DEFAULT_MAX_DURATION_WEEKS;
use nutriplan_core::constants::catalog::MIN_RECOMMENDED_PATTERNS;
use nutriplan_core::constants::generation::{INITIAL_PLAN_VERSION, PATTERN_BASED_METHOD};
use nutriplan_core::errors::AssemblyError;
use nutriplan_core::models::{
    AgentUsage, AssembledWeek, CompleteMacros, DayPattern, FoodSelectionOutput, GenerationMetadata,
    GenerationStats, MacroDistributionOutput, MealMacroDistribution, MealPatternOutput,
    NutritionGoal, PatternBasedNutritionPlan, PatternCatalog, PatternCode,
    PatternNutritionGenerationOutput, PlanStatus, WeeklyRotation,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Identity and intent of the plan being assembled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Owner of the plan
    pub user_id: Uuid,
    /// Fixed plan id; a random one is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Goals the plan serves
    #[serde(default)]
    pub goals: Vec<NutritionGoal>,
    /// Number of weeks to assemble
    pub duration_weeks: u32,
    /// Token/cost usage reported by each authoring agent
    #[serde(default)]
    pub usage: Vec<AgentUsage>,
    /// Time the authoring agents spent before assembly
    #[serde(default)]
    pub upstream_time_ms: u64,
}

/// Everything the assembler needs, already structurally parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAssemblyInput {
    /// Day pattern catalog as authored
    pub patterns: Vec<DayPattern>,
    /// Weekly rotation as authored; must hold exactly seven codes
    pub rotation: Vec<PatternCode>,
    /// Daily macro targets
    pub target_macros: CompleteMacros,
    /// Per-meal calorie shares
    #[serde(default)]
    pub meal_distribution: Vec<MealMacroDistribution>,
    /// Meals the plan targets per day
    pub meals_per_day: u8,
    /// Catalog foods usable by the plan
    #[serde(default)]
    pub selected_food_ids: Vec<String>,
    /// Foods the selection step had to create
    #[serde(default)]
    pub foods_created: usize,
    /// Rotation rationale from the pattern author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_notes: Option<String>,
    /// General advice from the pattern author
    #[serde(default)]
    pub general_tips: Vec<String>,
    /// Identity and intent
    #[serde(flatten)]
    pub request: PlanRequest,
}

impl PlanAssemblyInput {
    /// Combine the three authoring agents' outputs with the plan request
    #[must_use]
    pub fn from_agent_outputs(
        request: PlanRequest,
        macros: MacroDistributionOutput,
        foods: &FoodSelectionOutput,
        patterns: MealPatternOutput,
    ) -> Self {
        Self {
            patterns: patterns.patterns,
            rotation: patterns.weekly_rotation,
            target_macros: macros.daily_target_macros,
            meal_distribution: macros.meal_distribution,
            meals_per_day: macros.meals_per_day,
            selected_food_ids: foods.selected_food_ids(),
            foods_created: foods.new_foods.len(),
            rotation_notes: patterns.rotation_notes,
            general_tips: patterns.general_tips,
            request,
        }
    }
}

/// Stateless plan orchestrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanAssembler {
    tolerance: ToleranceConfig,
    max_duration_weeks: u32,
}

impl Default for PlanAssembler {
    fn default() -> Self {
        Self::new(ToleranceConfig::default(), DEFAULT_MAX_DURATION_WEEKS)
    }
}

impl PlanAssembler {
    /// Create an assembler with explicit thresholds and a duration cap
    #[must_use]
    pub const fn new(tolerance: ToleranceConfig, max_duration_weeks: u32) -> Self {
        Self {
            tolerance,
            max_duration_weeks,
        }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn tolerance(&self) -> &ToleranceConfig {
        &self.tolerance
    }

    /// Longest plan this assembler accepts
    #[must_use]
    pub const fn max_duration_weeks(&self) -> u32 {
        self.max_duration_weeks
    }

    /// Assemble a complete plan with its summary, warnings and statistics
    ///
    /// # Errors
    ///
    /// Returns an `AssemblyError` for any structural problem: a rotation that is
    /// not seven codes long, an empty/duplicate/oversized catalog, a duration of
    /// zero or above the cap, or a rotation code missing from the catalog
    pub fn assemble(
        &self,
        input: PlanAssemblyInput,
    ) -> Result<PatternNutritionGenerationOutput, AssemblyError> {
        let started = Instant::now();
        let now = Utc::now();

        let rotation = WeeklyRotation::try_from(input.rotation.as_slice())?;
        let catalog = PatternCatalog::new(input.patterns)?;
        self.check_duration(input.request.duration_weeks)?;
        let assembler = WeekAssembler::new(&catalog, rotation)?;

        let weeks = assembler.assemble(input.request.duration_weeks)?;

        let validator = PlanValidator::new(
            &self.tolerance,
            &input.target_macros,
            &input.meal_distribution,
        );
        let mut report = ValidationReport::default();
        validator.check_catalog(
            &catalog,
            &rotation,
            input.meals_per_day,
            &input.selected_food_ids,
            &mut report,
        );
        validator.check_weeks(&assembler, &weeks, &mut report)?;

        let usage = &input.request.usage;
        let total_tokens_used: u64 = usage.iter().map(|entry| entry.tokens_used).sum();
        let total_cost_usd: f64 = usage.iter().map(|entry| entry.cost_usd).sum();
        let has_usage = !usage.is_empty();

        let generation_metadata = GenerationMetadata {
            method: PATTERN_BASED_METHOD.to_owned(),
            patterns_count: catalog.len(),
            selected_foods_count: input.selected_food_ids.len(),
            total_variants: catalog.total_variants(),
            generated_at: now,
            tokens_used: has_usage.then_some(total_tokens_used),
            cost_usd: has_usage.then_some(total_cost_usd),
        };

        let summary = summarize(&weeks, &catalog, &rotation, &input.target_macros);
        let recommendations = recommend(&report, &catalog, &input.general_tips);

        let plan = PatternBasedNutritionPlan {
            id: input.request.plan_id.unwrap_or_else(Uuid::new_v4),
            user_id: input.request.user_id,
            name: input.request.name,
            description: input.request.description.or(input.rotation_notes),
            goals: input.request.goals,
            duration_weeks: input.request.duration_weeks,
            target_macros: input.target_macros,
            meals_per_day: input.meals_per_day,
            selected_food_ids: input.selected_food_ids,
            day_patterns: catalog,
            weekly_rotation: rotation,
            weeks,
            status: PlanStatus::Draft,
            version: INITIAL_PLAN_VERSION,
            generation_metadata,
            created_at: now,
            updated_at: now,
        };

        let generation_stats = GenerationStats {
            patterns_generated: plan.day_patterns.len(),
            foods_selected: plan.selected_food_ids.len(),
            foods_created: input.foods_created,
            variants_generated: plan.generation_metadata.total_variants,
            total_tokens_used,
            total_cost_usd,
            generation_time_ms: input.request.upstream_time_ms + elapsed_ms(started),
        };

        if !report.warnings.is_empty() {
            warn!(
                plan.id = %plan.id,
                warnings = report.warnings.len(),
                violations = report.violation_count(),
                "Plan assembled with warnings"
            );
        }
        info!(
            plan.id = %plan.id,
            user.id = %plan.user_id,
            weeks = plan.weeks.len(),
            patterns = plan.day_patterns.len(),
            rotation = %plan.weekly_rotation,
            "Assembled pattern-based nutrition plan"
        );

        Ok(PatternNutritionGenerationOutput {
            plan,
            summary,
            warnings: report.warnings,
            recommendations,
            generation_stats,
        })
    }

    /// Tolerance report for the authored patterns alone, without assembling weeks
    ///
    /// # Errors
    ///
    /// Returns catalog and rotation structural errors
    pub fn validate_patterns(
        &self,
        input: &PlanAssemblyInput,
    ) -> Result<ValidationReport, AssemblyError> {
        let rotation = WeeklyRotation::try_from(input.rotation.as_slice())?;
        let catalog = PatternCatalog::new(input.patterns.clone())?;
        rotation.validate_against(&catalog)?;

        let validator = PlanValidator::new(
            &self.tolerance,
            &input.target_macros,
            &input.meal_distribution,
        );
        let mut report = validator.check_patterns(&catalog);
        validator.check_catalog(
            &catalog,
            &rotation,
            input.meals_per_day,
            &input.selected_food_ids,
            &mut report,
        );
        Ok(report)
    }

    /// Tolerance report for an already assembled plan, customized days included
    ///
    /// # Errors
    ///
    /// Propagates day resolution errors
    pub fn validate_plan(
        &self,
        plan: &PatternBasedNutritionPlan,
        meal_distribution: &[MealMacroDistribution],
    ) -> Result<ValidationReport, AssemblyError> {
        let assembler = WeekAssembler::new(&plan.day_patterns, plan.weekly_rotation)?;
        let validator = PlanValidator::new(&self.tolerance, &plan.target_macros, meal_distribution);
        let mut report = ValidationReport::default();
        validator.check_weeks(&assembler, &plan.weeks, &mut report)?;
        Ok(report)
    }

    /// Reject zero-length and over-long plans
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration`
    pub fn check_duration(&self, duration_weeks: u32) -> Result<(), AssemblyError> {
        if duration_weeks == 0 || duration_weeks > self.max_duration_weeks {
            return Err(AssemblyError::InvalidDuration {
                weeks: i64::from(duration_weeks),
            });
        }
        Ok(())
    }
}

/// One-paragraph description of an assembled plan
#[must_use]
pub fn summarize(
    weeks: &[AssembledWeek],
    catalog: &PatternCatalog,
    rotation: &WeeklyRotation,
    target: &CompleteMacros,
) -> String {
    let weekly: Vec<_> = weeks.iter().map(|week| week.weekly_average_macros).collect();
    let average = average_macros(&weekly);
    format!(
        "{weeks}-week plan built from {patterns} day pattern(s) rotating {rotation}, \
         with {variants} food swap(s). \
         Average daily intake {average:.0} kcal against a {target:.0} kcal target.",
        weeks = weeks.len(),
        patterns = catalog.len(),
        variants = catalog.total_variants(),
        average = average.calories,
        target = target.calories,
    )
}

fn recommend(report: &ValidationReport, catalog: &PatternCatalog, tips: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();
    if report.violation_count() > 0 {
        recommendations.push(
            "Review flagged meals and days; regenerate patterns outside tolerance".to_owned(),
        );
    }
    if catalog.len() < MIN_RECOMMENDED_PATTERNS {
        recommendations
            .push("Add a second day pattern to reduce monotony across the week".to_owned());
    }
    if catalog.total_variants() == 0 {
        recommendations
            .push("Add food swaps so meals can vary without regenerating patterns".to_owned());
    }
    recommendations.extend(tips.iter().cloned());
    recommendations
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
