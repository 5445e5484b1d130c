// ABOUTME: Assemble command for nutriplan-cli
// ABOUTME: Runs full plan assembly and writes the generation output as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use nutriplan::config::EngineConfig;
use nutriplan::logging::PlanLogger;
use nutriplan::AppResult;
use tracing::info;

use super::{build_request, resolve_input};
use crate::helpers::display::{emit_json, print_warnings};
use crate::{RequestArgs, SourceArgs};

/// Assemble a plan and emit it
pub fn run(
    source: &SourceArgs,
    request: &RequestArgs,
    output: Option<&Path>,
    plan_only: bool,
) -> AppResult<()> {
    let request = build_request(request)?;
    let input = resolve_input(source, request)?;
    let config = EngineConfig::global();

    info!(
        patterns = input.patterns.len(),
        weeks = input.request.duration_weeks,
        "Assembling plan"
    );
    let generated = config.assembler().assemble(input).inspect_err(|e| {
        PlanLogger::log_failure("assemble", e);
    })?;
    PlanLogger::log_generation(&generated);
    print_warnings(&generated.warnings);

    if plan_only {
        emit_json(&generated.plan, output)
    } else {
        emit_json(&generated, output)
    }
}
