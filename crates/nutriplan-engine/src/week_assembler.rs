// ABOUTME: Rotation-driven expansion of a pattern catalog into assembled weeks
// ABOUTME: Builds thin day references, resolves them back to meals, and averages weekly macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Week Assembly
//!
//! Absolute day `d` (0-based) uses `rotation[d % 7]`, so a given weekday uses
//! the same pattern in every week. Week `k` depends only on the catalog, the
//! rotation and `k`; weeks can be assembled independently and in any order.

use crate::aggregator::{average_macros, sum_meal_macros};
use crate::variants::resolve_meals;
use nutriplan_core::constants::calendar::{DAYS_PER_WEEK, DAY_NAMES};
use nutriplan_core::errors::AssemblyError;
use nutriplan_core::models::{
    AssembledDay, AssembledWeek, DayPattern, Macros, MealWithVariants, PatternCatalog,
    PatternCode, WeeklyRotation,
};
use tracing::debug;

/// Expands a rotation over a catalog
#[derive(Debug, Clone, Copy)]
pub struct WeekAssembler<'a> {
    catalog: &'a PatternCatalog,
    rotation: WeeklyRotation,
}

impl<'a> WeekAssembler<'a> {
    /// Bind a rotation to a catalog, checking every code resolves
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternCode` for the first rotation position whose code is
    /// missing from the catalog
    pub fn new(
        catalog: &'a PatternCatalog,
        rotation: WeeklyRotation,
    ) -> Result<Self, AssemblyError> {
        rotation.validate_against(catalog)?;
        Ok(Self { catalog, rotation })
    }

    /// The bound catalog
    #[must_use]
    pub const fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    /// The bound rotation
    #[must_use]
    pub const fn rotation(&self) -> WeeklyRotation {
        self.rotation
    }

    /// Assemble weeks `1..=duration_weeks` with no customizations
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` when `duration_weeks` is zero
    pub fn assemble(&self, duration_weeks: u32) -> Result<Vec<AssembledWeek>, AssemblyError> {
        if duration_weeks == 0 {
            return Err(AssemblyError::InvalidDuration {
                weeks: i64::from(duration_weeks),
            });
        }

        (1..=duration_weeks)
            .map(|week_number| self.assemble_week(week_number))
            .collect()
    }

    /// Assemble a single 1-based week from the rotation alone
    ///
    /// # Errors
    ///
    /// Returns `WeekOutOfRange` for week zero
    pub fn assemble_week(&self, week_number: u32) -> Result<AssembledWeek, AssemblyError> {
        if week_number == 0 {
            return Err(AssemblyError::WeekOutOfRange {
                week_number,
                total_weeks: 0,
            });
        }

        let first_day = (week_number as usize - 1) * DAYS_PER_WEEK;
        let days = (first_day..first_day + DAYS_PER_WEEK)
            .map(|day_index| self.default_day(day_index))
            .collect::<Result<Vec<_>, _>>()?;

        let week = self.build_week(week_number, days)?;
        debug!(
            week.number = week_number,
            week.average_calories = week.weekly_average_macros.calories,
            "Assembled week"
        );
        Ok(week)
    }

    /// Wrap seven days into a week, computing the weekly average
    ///
    /// # Errors
    ///
    /// Propagates day resolution errors
    pub fn build_week(
        &self,
        week_number: u32,
        days: Vec<AssembledDay>,
    ) -> Result<AssembledWeek, AssemblyError> {
        let weekly_average_macros = self.weekly_average(&days)?;
        Ok(AssembledWeek {
            id: week_id(week_number),
            week_number,
            days,
            weekly_average_macros,
            notes: None,
        })
    }

    /// The rotation's day for absolute 0-based `day_index`
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternCode` if the rotation code has no pattern
    pub fn default_day(&self, day_index: usize) -> Result<AssembledDay, AssemblyError> {
        let code = self.rotation.code_for_day(day_index);
        self.day_with_pattern(day_index, code)
    }

    /// A day at absolute 0-based `day_index` using pattern `code`
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternCode` if `code` has no pattern
    pub fn day_with_pattern(
        &self,
        day_index: usize,
        code: PatternCode,
    ) -> Result<AssembledDay, AssemblyError> {
        let pattern = self
            .catalog
            .get(code)
            .ok_or(AssemblyError::UnknownPatternCode {
                code,
                position: day_index,
            })?;
        let week_number = day_index / DAYS_PER_WEEK + 1;
        let day_number = day_index + 1;

        Ok(AssembledDay {
            id: format!("week-{week_number}-day-{day_number}"),
            day_number: day_number as u32,
            day_name: DAY_NAMES[day_index % DAYS_PER_WEEK].to_owned(),
            pattern_code: code,
            pattern_id: pattern.id.clone(),
            applied_variants: Vec::new(),
            is_customized: false,
            notes: None,
        })
    }

    /// Catalog pattern an assembled day refers to
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternCode` when neither the id nor the code resolves
    pub fn pattern_for(&self, day: &AssembledDay) -> Result<&'a DayPattern, AssemblyError> {
        self.catalog
            .get_by_id(&day.pattern_id)
            .filter(|pattern| pattern.pattern_code == day.pattern_code)
            .or_else(|| self.catalog.get(day.pattern_code))
            .ok_or(AssemblyError::UnknownPatternCode {
                code: day.pattern_code,
                position: day.day_number.saturating_sub(1) as usize,
            })
    }

    /// Meals of an assembled day after applying its variant overlay
    ///
    /// # Errors
    ///
    /// Propagates pattern lookup and swap errors
    pub fn resolve_day(&self, day: &AssembledDay) -> Result<Vec<MealWithVariants>, AssemblyError> {
        resolve_meals(self.pattern_for(day)?, &day.applied_variants)
    }

    /// Macro totals of an assembled day after applying its variant overlay
    ///
    /// # Errors
    ///
    /// Propagates pattern lookup and swap errors
    pub fn day_macros(&self, day: &AssembledDay) -> Result<Macros, AssemblyError> {
        Ok(sum_meal_macros(&self.resolve_day(day)?))
    }

    /// Field-wise mean of the days' resolved totals
    ///
    /// # Errors
    ///
    /// Propagates day resolution errors
    pub fn weekly_average(&self, days: &[AssembledDay]) -> Result<Macros, AssemblyError> {
        let totals = days
            .iter()
            .map(|day| self.day_macros(day))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(average_macros(&totals))
    }
}

/// Stable identifier of a week
#[must_use]
pub fn week_id(week_number: u32) -> String {
    format!("week-{week_number}")
}
