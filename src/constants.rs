// ABOUTME: Application-level constants for service identity and environment variable names
// ABOUTME: Keeps configuration keys in one place for the loader, the CLI, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const NUTRIPLAN: &str = "nutriplan";
    /// Tracing target of this crate
    pub const LOG_TARGET: &str = "nutriplan";
    /// Tracing target of the engine crate
    pub const ENGINE_LOG_TARGET: &str = "nutriplan_engine";
}

/// Recognized configuration environment variables
pub mod env_config {
    /// Per-meal calorie tolerance, as a fraction
    pub const MEAL_TOLERANCE_PCT: &str = "NUTRIPLAN_MEAL_TOLERANCE_PCT";
    /// Per-day macro tolerance, as a fraction
    pub const DAY_TOLERANCE_PCT: &str = "NUTRIPLAN_DAY_TOLERANCE_PCT";
    /// Declared-vs-estimated calorie tolerance, as a fraction
    pub const MACRO_CONSISTENCY_PCT: &str = "NUTRIPLAN_MACRO_CONSISTENCY_PCT";
    /// Stored-vs-recomputed total drift tolerance, as a fraction
    pub const STORED_TOTAL_DRIFT_PCT: &str = "NUTRIPLAN_STORED_TOTAL_DRIFT_PCT";
    /// Longest plan the assembler accepts
    pub const MAX_DURATION_WEEKS: &str = "NUTRIPLAN_MAX_DURATION_WEEKS";

    /// Every recognized key
    pub const ALL: [&str; 5] = [
        MEAL_TOLERANCE_PCT,
        DAY_TOLERANCE_PCT,
        MACRO_CONSISTENCY_PCT,
        STORED_TOTAL_DRIFT_PCT,
        MAX_DURATION_WEEKS,
    ];
}
