// ABOUTME: Structural error types raised while assembling a pattern-based plan
// ABOUTME: Every variant is fatal and aborts assembly without producing a partial plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::PatternCode;
use thiserror::Error;

/// Contract violations by an upstream collaborator.
///
/// These are never repaired silently. Macro tolerance violations are not
/// errors; they travel as warnings on the generation output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// Rotation does not have exactly one code per weekday
    #[error("Invalid weekly rotation: {reason}")]
    InvalidRotation {
        /// Why the rotation was rejected
        reason: String,
    },

    /// Rotation references a pattern code missing from the catalog
    #[error("Rotation position {position} references unknown pattern code {code}")]
    UnknownPatternCode {
        /// The missing code
        code: PatternCode,
        /// Zero-based index into the rotation (or absolute day index)
        position: usize,
    },

    /// Plan duration is not a positive number of weeks, or exceeds the limit
    #[error("Invalid plan duration: {weeks} weeks")]
    InvalidDuration {
        /// Requested duration
        weeks: i64,
    },

    /// Swap index is outside the meal's variant list
    #[error("Swap index {index} out of range for meal '{meal_id}' with {available} variants")]
    InvalidSwapIndex {
        /// Meal the swap was requested on
        meal_id: String,
        /// Requested index
        index: usize,
        /// Number of variants the meal declares
        available: usize,
    },

    /// The food a swap replaces is not present in the meal
    #[error("Swap {index} on meal '{meal_id}' replaces '{original}', which is not in the meal")]
    SwapTargetNotFound {
        /// Meal the swap was requested on
        meal_id: String,
        /// Requested index
        index: usize,
        /// Food name the swap expected to find
        original: String,
    },

    /// An applied variant points at a meal that the pattern does not contain
    #[error("Pattern {pattern_code} has no meal '{meal_id}'")]
    UnknownMeal {
        /// Pattern that was searched
        pattern_code: PatternCode,
        /// Missing meal id
        meal_id: String,
    },

    /// Two catalog entries share a pattern code
    #[error("Pattern code {code} appears more than once in the catalog")]
    DuplicatePatternCode {
        /// Repeated code
        code: PatternCode,
    },

    /// Catalog has no patterns at all
    #[error("Pattern catalog is empty")]
    EmptyCatalog,

    /// Catalog has more patterns than there are codes
    #[error("Pattern catalog holds {count} patterns, at most {max} are allowed")]
    TooManyPatterns {
        /// Number of patterns supplied
        count: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Day number outside the plan
    #[error("Day {day_number} is outside the plan ({total_days} days)")]
    DayOutOfRange {
        /// Requested 1-based day
        day_number: u32,
        /// Days in the plan
        total_days: u32,
    },

    /// Week number outside the plan
    #[error("Week {week_number} is outside the plan ({total_weeks} weeks)")]
    WeekOutOfRange {
        /// Requested 1-based week
        week_number: u32,
        /// Weeks in the plan
        total_weeks: u32,
    },
}

impl AssemblyError {
    /// Create an invalid rotation error
    #[must_use]
    pub fn invalid_rotation(reason: impl Into<String>) -> Self {
        Self::InvalidRotation {
            reason: reason.into(),
        }
    }
}
