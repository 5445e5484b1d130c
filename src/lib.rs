// ABOUTME: Main library entry point for the nutriplan pattern-based plan assembler
// ABOUTME: Re-exports the core model and engine, plus configuration, logging, and input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Assembles multi-week nutrition plans from a small catalog of day patterns
//! (A/B/C) and a seven-day rotation, the output of upstream authoring agents.
//!
//! ## Features
//!
//! - **Rotation expansion**: `durationWeeks x 7` days cycling the rotation, with
//!   days stored as pattern references plus a food-swap overlay
//! - **Food swaps**: pre-authored variants selected by index, never mutating
//!   the catalog
//! - **Macro tolerance**: 2% per meal and 5% per day checks reported as warnings
//! - **Plan editing**: day customization and week regeneration as new revisions
//!
//! ## Architecture
//!
//! - **`nutriplan_core`**: Errors, policy constants, and the plan data model
//! - **`nutriplan_engine`**: Aggregation, tolerance, variants, week and plan assembly
//! - **config**: Environment-driven engine configuration
//! - **logging**: Structured `tracing` setup
//! - **input**: JSON loading of upstream agent outputs
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::EngineConfig;
//! use nutriplan::input::load_plan_input;
//! use nutriplan_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let input = load_plan_input("plan-input.json")?;
//!     let output = EngineConfig::global().assembler().assemble(input)?;
//!     println!("{}", output.summary);
//!     Ok(())
//! }
//! ```

/// Environment-driven engine configuration
pub mod config;

/// Application constants
pub mod constants;

/// JSON loading of upstream agent outputs
pub mod input;

/// Structured logging setup
pub mod logging;

pub use nutriplan_core::errors::{AppError, AppResult, AssemblyError, ErrorCode};
pub use nutriplan_core::models;
pub use nutriplan_engine::{
    DayCustomization, PlanAssembler, PlanAssemblyInput, PlanRequest, ToleranceConfig,
    ValidationReport, WeekAssembler,
};
