// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: JSON emission to stdout or file, and human-readable warning summaries on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use nutriplan::{AppError, AppResult, ValidationReport};
use serde::Serialize;

/// Pretty-print `value` as JSON to `output`, or stdout when absent
pub fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => fs::write(path, json).map_err(|e| {
            AppError::internal(format!("Failed to write {}: {e}", path.display()))
        }),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// List warnings on stderr
pub fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        eprintln!("No warnings.");
        return;
    }
    eprintln!("{} warning(s):", warnings.len());
    for warning in warnings {
        eprintln!("  - {warning}");
    }
}

/// Per-day table of a validation report on stderr
pub fn print_validation(report: &ValidationReport) {
    eprintln!("{}", "=".repeat(60));
    for day in &report.days {
        let status = if day.is_within_tolerance() { "OK" } else { "WARN" };
        let direction = day.day.deviations.calories.signum();
        eprintln!(
            "{status:<5} {label:<32} {kcal:>9.2} kcal  ({dev:+.2}%)",
            label = day.label,
            kcal = day.actual_macros.calories,
            dev = day.day.deviations_percent.calories * 100.0 * direction,
        );
    }
    eprintln!("{}", "=".repeat(60));
    print_warnings(&report.warnings);
}
