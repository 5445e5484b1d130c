// ABOUTME: JSON loading of upstream agent outputs and complete plan assembly inputs
// ABOUTME: Maps IO and parse failures onto AppError with the offending path in the details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
use nutriplan_core::models::{FoodSelectionOutput, MacroDistributionOutput, MealPatternOutput};
use nutriplan_engine::{PlanAssemblyInput, PlanRequest};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// The three upstream documents a plan is assembled from
#[derive(Debug, Clone, PartialEq)]
pub struct AgentOutputs {
    /// Macro targets and per-meal distribution
    pub macros: MacroDistributionOutput,
    /// Selected and newly created foods
    pub foods: FoodSelectionOutput,
    /// Day patterns and the weekly rotation
    pub patterns: MealPatternOutput,
}

impl AgentOutputs {
    /// Combine with a plan request into assembler input
    #[must_use]
    pub fn into_plan_input(self, request: PlanRequest) -> PlanAssemblyInput {
        PlanAssemblyInput::from_agent_outputs(request, self.macros, &self.foods, self.patterns)
    }
}

/// Read and deserialize one JSON document
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist, `InternalError` for
/// other IO failures, and `InvalidFormat` when the content does not match `T`
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> AppResult<T> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|e| {
        let error = if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Input file {display}"))
        } else {
            AppError::internal(format!("Failed to read {display}: {e}"))
        };
        error.with_details(json!({ "path": display }))
    })?;

    let value = serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Malformed JSON in {display}: {e}"),
        )
        .with_details(json!({ "path": display, "line": e.line(), "column": e.column() }))
    })?;

    debug!(path = %path.display(), bytes = raw.len(), "Loaded JSON input");
    Ok(value)
}

/// Load the three upstream documents
///
/// # Errors
///
/// Propagates the first [`load_json`] failure
pub fn load_agent_outputs(
    macros: impl AsRef<Path>,
    foods: impl AsRef<Path>,
    patterns: impl AsRef<Path>,
) -> AppResult<AgentOutputs> {
    Ok(AgentOutputs {
        macros: load_json(macros)?,
        foods: load_json(foods)?,
        patterns: load_json(patterns)?,
    })
}

/// Load a complete assembler input document
///
/// # Errors
///
/// Propagates [`load_json`] failures
pub fn load_plan_input(path: impl AsRef<Path>) -> AppResult<PlanAssemblyInput> {
    load_json(path)
}
