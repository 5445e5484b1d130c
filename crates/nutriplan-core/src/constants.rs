// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tolerance policy, calendar labels, energy factors, and catalog limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Macro tolerance policy applied system-wide
pub mod tolerance {
    /// Maximum calorie deviation of a single meal from its share of the daily target
    pub const MEAL_TOLERANCE_PCT: f64 = 0.02;
    /// Maximum deviation of a day's calories/protein/carbs/fats from the daily target
    pub const DAY_TOLERANCE_PCT: f64 = 0.05;
    /// Maximum deviation of declared calories from the Atwater estimate
    pub const MACRO_CONSISTENCY_PCT: f64 = 0.10;
    /// Maximum calorie drift between a stored total and its recomputed sum
    pub const STORED_TOTAL_DRIFT_PCT: f64 = 0.01;
}

/// Calendar layout of an assembled plan
pub mod calendar {
    /// Days in one rotation cycle and in one assembled week
    pub const DAYS_PER_WEEK: usize = 7;
    /// Weekday labels indexed by `day_index % 7`
    pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    /// Default upper bound on plan length
    pub const DEFAULT_MAX_DURATION_WEEKS: u32 = 52;
}

/// Pattern catalog limits
pub mod catalog {
    /// Fewest patterns the authoring contract asks for
    pub const MIN_RECOMMENDED_PATTERNS: usize = 2;
    /// Most patterns a catalog can hold (one per code)
    pub const MAX_PATTERNS: usize = 3;
}

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Rounding applied to every aggregated macro figure
pub mod rounding {
    /// Scale for two-decimal rounding
    pub const MACRO_DECIMAL_SCALE: f64 = 100.0;
    /// Scale for deviation fractions; tolerance comparisons happen at eight decimals
    pub const DEVIATION_DECIMAL_SCALE: f64 = 100_000_000.0;
}

/// Identifiers stamped on generated plans
pub mod generation {
    /// Value of `GenerationMetadata.method`
    pub const PATTERN_BASED_METHOD: &str = "pattern_based";
    /// Version assigned to freshly assembled plans
    pub const INITIAL_PLAN_VERSION: u32 = 1;
}
