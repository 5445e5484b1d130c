// ABOUTME: Validate command for nutriplan-cli
// ABOUTME: Prints per-pattern tolerance results without assembling any week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::config::EngineConfig;
use nutriplan::logging::PlanLogger;
use nutriplan::{AppError, AppResult, PlanRequest};
use uuid::Uuid;

use super::resolve_input;
use crate::helpers::display::{emit_json, print_validation};
use crate::SourceArgs;

/// Validate the authored patterns
pub fn run(source: &SourceArgs, strict: bool) -> AppResult<()> {
    let request = PlanRequest {
        user_id: Uuid::nil(),
        plan_id: None,
        name: "validation".to_owned(),
        description: None,
        goals: Vec::new(),
        duration_weeks: 1,
        usage: Vec::new(),
        upstream_time_ms: 0,
    };
    let input = resolve_input(source, request)?;

    let report = EngineConfig::global()
        .assembler()
        .validate_patterns(&input)
        .inspect_err(|e| PlanLogger::log_failure("validate", e))?;
    PlanLogger::log_validation("patterns", &report);
    print_validation(&report);
    emit_json(&report, None)?;

    if strict && !report.is_clean() {
        return Err(AppError::out_of_range(format!(
            "{} warning(s) found in strict mode",
            report.warnings.len()
        )));
    }
    Ok(())
}
