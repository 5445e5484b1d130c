// ABOUTME: Caller-side parallel helpers for batch plan regeneration jobs
// ABOUTME: Uses rayon to assemble independent plans and independent weeks concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Batch Assembly
//!
//! Plans share no state with each other, and week `k` of a plan depends only
//! on the catalog, the rotation and `k`. Both levels can therefore be spread
//! over the rayon pool without changing any result.

use crate::plan_assembler::{PlanAssembler, PlanAssemblyInput};
use crate::week_assembler::WeekAssembler;
use nutriplan_core::errors::AssemblyError;
use nutriplan_core::models::{AssembledWeek, PatternNutritionGenerationOutput};
use rayon::prelude::*;
use tracing::info;

/// Assemble many plans in parallel; results keep input order
#[must_use]
pub fn assemble_batch(
    assembler: &PlanAssembler,
    inputs: Vec<PlanAssemblyInput>,
) -> Vec<Result<PatternNutritionGenerationOutput, AssemblyError>> {
    let count = inputs.len();
    let results: Vec<_> = inputs
        .into_par_iter()
        .map(|input| assembler.assemble(input))
        .collect();

    let failed = results.iter().filter(|result| result.is_err()).count();
    info!(plans = count, failed, "Assembled plan batch");
    results
}

/// Assemble weeks `1..=duration_weeks` in parallel.
///
/// Produces exactly what [`WeekAssembler::assemble`] produces.
///
/// # Errors
///
/// Returns `InvalidDuration` for zero weeks and the first week error otherwise
pub fn assemble_weeks_parallel(
    assembler: &WeekAssembler<'_>,
    duration_weeks: u32,
) -> Result<Vec<AssembledWeek>, AssemblyError> {
    if duration_weeks == 0 {
        return Err(AssemblyError::InvalidDuration { weeks: 0 });
    }

    (1..=duration_weeks)
        .into_par_iter()
        .map(|week_number| assembler.assemble_week(week_number))
        .collect()
}
