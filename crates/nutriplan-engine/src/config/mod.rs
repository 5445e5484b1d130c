// ABOUTME: Configuration module for the nutriplan-engine crate
// ABOUTME: Re-exports tolerance policy configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Tolerance thresholds passed explicitly to the assembler
pub mod tolerance;

pub use error::ConfigError;
pub use tolerance::ToleranceConfig;
