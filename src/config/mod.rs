// ABOUTME: Configuration module for the nutriplan application layer
// ABOUTME: Loads engine thresholds from the environment and exposes a validated global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration loaded from environment variables
pub mod engine;

pub use engine::EngineConfig;
pub use nutriplan_engine::config::{ConfigError, ToleranceConfig};
