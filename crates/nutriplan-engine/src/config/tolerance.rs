// ABOUTME: Tolerance thresholds for meal, day, and authoring-consistency checks
// ABOUTME: Explicit configuration struct with policy defaults and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tolerance Configuration
//!
//! All thresholds are fractions (`0.02` means 2%). The assembler receives this
//! struct explicitly; nothing in the engine reads ambient configuration.

use super::error::ConfigError;
use nutriplan_core::constants::tolerance::{
    DAY_TOLERANCE_PCT, MACRO_CONSISTENCY_PCT, MEAL_TOLERANCE_PCT, STORED_TOTAL_DRIFT_PCT,
};
use serde::{Deserialize, Serialize};

/// Percentage-deviation thresholds used during plan assembly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceConfig {
    /// Per-meal calorie tolerance against the meal's share of the daily target
    pub meal_tolerance_pct: f64,
    /// Per-day tolerance on calories/protein/carbs/fats against the daily target
    pub day_tolerance_pct: f64,
    /// Allowed gap between declared calories and the 4/4/9 estimate
    pub macro_consistency_pct: f64,
    /// Allowed calorie drift between stored and recomputed totals
    pub stored_total_drift_pct: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            meal_tolerance_pct: MEAL_TOLERANCE_PCT,
            day_tolerance_pct: DAY_TOLERANCE_PCT,
            macro_consistency_pct: MACRO_CONSISTENCY_PCT,
            stored_total_drift_pct: STORED_TOTAL_DRIFT_PCT,
        }
    }
}

impl ToleranceConfig {
    /// Validate that every threshold lies in `(0, 1)` and meal tolerance is the tighter one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a threshold outside `(0, 1)` and
    /// `ConfigError::InvalidRange` when meal tolerance exceeds day tolerance
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            (self.meal_tolerance_pct, "meal_tolerance_pct must be in (0, 1)"),
            (self.day_tolerance_pct, "day_tolerance_pct must be in (0, 1)"),
            (
                self.macro_consistency_pct,
                "macro_consistency_pct must be in (0, 1)",
            ),
            (
                self.stored_total_drift_pct,
                "stored_total_drift_pct must be in (0, 1)",
            ),
        ];

        for (value, message) in thresholds {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        if self.meal_tolerance_pct > self.day_tolerance_pct {
            return Err(ConfigError::InvalidRange(
                "meal_tolerance_pct must be <= day_tolerance_pct",
            ));
        }

        Ok(())
    }
}
