// ABOUTME: Environment-driven configuration for plan assembly thresholds and limits
// ABOUTME: Defaults, NUTRIPLAN_* overrides, validation, and a lazily loaded global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! The engine itself never reads the environment; this layer does, once, and
//! hands an explicit [`ToleranceConfig`] to the assembler it builds.

use crate::constants::env_config;
use nutriplan_core::constants::calendar::DEFAULT_MAX_DURATION_WEEKS;
use nutriplan_engine::config::{ConfigError, ToleranceConfig};
use nutriplan_engine::PlanAssembler;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Application-level engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Tolerance thresholds handed to the assembler
    pub tolerance: ToleranceConfig,
    /// Longest plan the assembler accepts
    pub max_duration_weeks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: ToleranceConfig::default(),
            max_duration_weeks: DEFAULT_MAX_DURATION_WEEKS,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable does not parse or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate thresholds and limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for thresholds outside `(0, 1)`, a meal tolerance
    /// looser than the day tolerance, or a zero duration cap
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tolerance.validate()?;
        if self.max_duration_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_duration_weeks must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build a plan assembler from this configuration
    #[must_use]
    pub const fn assembler(&self) -> PlanAssembler {
        PlanAssembler::new(self.tolerance, self.max_duration_weeks)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::MEAL_TOLERANCE_PCT,
            &mut self.tolerance.meal_tolerance_pct,
        )?;
        Self::apply_env_var(
            env_config::DAY_TOLERANCE_PCT,
            &mut self.tolerance.day_tolerance_pct,
        )?;
        Self::apply_env_var(
            env_config::MACRO_CONSISTENCY_PCT,
            &mut self.tolerance.macro_consistency_pct,
        )?;
        Self::apply_env_var(
            env_config::STORED_TOTAL_DRIFT_PCT,
            &mut self.tolerance.stored_total_drift_pct,
        )?;
        Self::apply_env_var(
            env_config::MAX_DURATION_WEEKS,
            &mut self.max_duration_weeks,
        )?;
        Ok(self)
    }
}
