// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides the assemble and validate commands plus shared input resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod assemble;
pub mod validate;

use crate::{RequestArgs, SourceArgs};
use nutriplan::input::{load_agent_outputs, load_plan_input};
use nutriplan::models::NutritionGoal;
use nutriplan::{AppError, AppResult, PlanAssemblyInput, PlanRequest};
use uuid::Uuid;

/// Load assembler input from either a complete document or the three agent outputs
pub fn resolve_input(source: &SourceArgs, request: PlanRequest) -> AppResult<PlanAssemblyInput> {
    if let Some(path) = &source.input {
        return load_plan_input(path);
    }

    match (&source.macros, &source.foods, &source.patterns) {
        (Some(macros), Some(foods), Some(patterns)) => {
            Ok(load_agent_outputs(macros, foods, patterns)?.into_plan_input(request))
        }
        _ => Err(AppError::invalid_input(
            "Provide --input, or all of --macros, --foods and --patterns",
        )),
    }
}

/// Build the plan request from command-line arguments
pub fn build_request(args: &RequestArgs) -> AppResult<PlanRequest> {
    let goals = args
        .goals
        .iter()
        .map(|goal| goal.parse::<NutritionGoal>())
        .collect::<AppResult<Vec<_>>>()?;

    Ok(PlanRequest {
        user_id: args.user_id.unwrap_or_else(Uuid::new_v4),
        plan_id: None,
        name: args.name.clone(),
        description: args.description.clone(),
        goals,
        duration_weeks: args.weeks,
        usage: Vec::new(),
        upstream_time_ms: 0,
    })
}
