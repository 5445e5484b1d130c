// ABOUTME: Pattern-based nutrition plan assembly engine
// ABOUTME: Rotation expansion, swap resolution, macro sums, tolerance checks and plan editing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Engine
//!
//! Synchronous, CPU-only assembly of pattern-based nutrition plans. A small
//! catalog of day patterns (A/B/C) is expanded over a seven-day rotation into
//! weeks of thin day references; each day stores only its pattern id and an
//! overlay of applied food swaps.
//!
//! ## Modules
//!
//! - **aggregator**: Food/meal/day macro sums with two-decimal normalization
//! - **tolerance**: Percentage-deviation checks producing warning reports
//! - **variants**: Index-selected food swaps that never mutate the catalog
//! - **`week_assembler`**: Rotation cycling and weekly averages
//! - **validation**: Plan-level tolerance and authoring-integrity warnings
//! - **`plan_assembler`**: Orchestration into the final plan and output bundle
//! - **`plan_editor`**: Day customization and week regeneration revisions
//! - **batch**: Parallel helpers for batch regeneration callers
//! - **config**: Explicit tolerance thresholds

/// Macro aggregation
pub mod aggregator;
/// Parallel batch helpers
pub mod batch;
/// Engine configuration
pub mod config;
/// Top-level plan orchestration
pub mod plan_assembler;
/// Post-assembly plan edits
pub mod plan_editor;
/// Tolerance validation
pub mod tolerance;
/// Plan-level validation
pub mod validation;
/// Variant resolution
pub mod variants;
/// Week assembly
pub mod week_assembler;

pub use config::{ConfigError, ToleranceConfig};
pub use plan_assembler::{PlanAssembler, PlanAssemblyInput, PlanRequest};
pub use plan_editor::DayCustomization;
pub use tolerance::{ToleranceOutcome, ToleranceReport};
pub use validation::{DayValidation, ValidationReport};
pub use week_assembler::WeekAssembler;
