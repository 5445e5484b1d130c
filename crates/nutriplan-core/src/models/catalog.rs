// ABOUTME: Immutable pattern catalog and the seven-code weekly rotation
// ABOUTME: Validates catalog uniqueness and rotation length at construction and deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::pattern::{DayPattern, PatternCode};
use crate::constants::calendar::DAYS_PER_WEEK;
use crate::constants::catalog::MAX_PATTERNS;
use crate::errors::AssemblyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The day patterns of one plan, addressed by code or id.
///
/// Assembled days hold indices into this arena, never copies of its meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayPattern>", into = "Vec<DayPattern>")]
pub struct PatternCatalog {
    patterns: Vec<DayPattern>,
    by_code: [Option<usize>; 3],
}

impl PatternCatalog {
    /// Build a catalog, rejecting empty input, more than three patterns, or repeated codes
    ///
    /// # Errors
    ///
    /// Returns `EmptyCatalog`, `TooManyPatterns`, or `DuplicatePatternCode`
    pub fn new(patterns: Vec<DayPattern>) -> Result<Self, AssemblyError> {
        if patterns.is_empty() {
            return Err(AssemblyError::EmptyCatalog);
        }
        if patterns.len() > MAX_PATTERNS {
            return Err(AssemblyError::TooManyPatterns {
                count: patterns.len(),
                max: MAX_PATTERNS,
            });
        }

        let mut by_code = [None; 3];
        for (index, pattern) in patterns.iter().enumerate() {
            let slot = &mut by_code[pattern.pattern_code.index()];
            if slot.is_some() {
                return Err(AssemblyError::DuplicatePatternCode {
                    code: pattern.pattern_code,
                });
            }
            *slot = Some(index);
        }

        Ok(Self { patterns, by_code })
    }

    /// Pattern registered under `code`
    #[must_use]
    pub fn get(&self, code: PatternCode) -> Option<&DayPattern> {
        self.by_code[code.index()].map(|index| &self.patterns[index])
    }

    /// Pattern with the given id
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&DayPattern> {
        self.patterns.iter().find(|pattern| pattern.id == id)
    }

    /// Whether `code` resolves to a pattern
    #[must_use]
    pub const fn contains(&self, code: PatternCode) -> bool {
        self.by_code[code.index()].is_some()
    }

    /// Patterns in authoring order
    #[must_use]
    pub fn patterns(&self) -> &[DayPattern] {
        &self.patterns
    }

    /// Iterate patterns in authoring order
    pub fn iter(&self) -> impl Iterator<Item = &DayPattern> {
        self.patterns.iter()
    }

    /// Number of patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false for a constructed catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Total swaps authored across every pattern meal
    #[must_use]
    pub fn total_variants(&self) -> usize {
        self.patterns.iter().map(DayPattern::variant_count).sum()
    }
}

impl TryFrom<Vec<DayPattern>> for PatternCatalog {
    type Error = AssemblyError;

    fn try_from(patterns: Vec<DayPattern>) -> Result<Self, Self::Error> {
        Self::new(patterns)
    }
}

impl From<PatternCatalog> for Vec<DayPattern> {
    fn from(catalog: PatternCatalog) -> Self {
        catalog.patterns
    }
}

/// Seven pattern codes, one per weekday, repeated for every week of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PatternCode>", into = "Vec<PatternCode>")]
pub struct WeeklyRotation([PatternCode; DAYS_PER_WEEK]);

impl WeeklyRotation {
    /// Wrap a fixed-length rotation
    #[must_use]
    pub const fn new(codes: [PatternCode; DAYS_PER_WEEK]) -> Self {
        Self(codes)
    }

    /// Code used on absolute day index `day_index` (0-based, any week)
    #[must_use]
    pub const fn code_for_day(&self, day_index: usize) -> PatternCode {
        self.0[day_index % DAYS_PER_WEEK]
    }

    /// The seven codes
    #[must_use]
    pub const fn codes(&self) -> &[PatternCode; DAYS_PER_WEEK] {
        &self.0
    }

    /// Distinct codes, in first-use order
    #[must_use]
    pub fn distinct_codes(&self) -> Vec<PatternCode> {
        let mut seen = Vec::with_capacity(3);
        for code in self.0 {
            if !seen.contains(&code) {
                seen.push(code);
            }
        }
        seen
    }

    /// Verify every code resolves in `catalog`
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternCode` for the first unresolved position
    pub fn validate_against(&self, catalog: &PatternCatalog) -> Result<(), AssemblyError> {
        match self
            .0
            .iter()
            .enumerate()
            .find(|(_, code)| !catalog.contains(**code))
        {
            Some((position, code)) => Err(AssemblyError::UnknownPatternCode {
                code: *code,
                position,
            }),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<PatternCode>> for WeeklyRotation {
    type Error = AssemblyError;

    fn try_from(codes: Vec<PatternCode>) -> Result<Self, Self::Error> {
        let len = codes.len();
        <[PatternCode; DAYS_PER_WEEK]>::try_from(codes)
            .map(Self)
            .map_err(|_| {
                AssemblyError::invalid_rotation(format!(
                    "expected {DAYS_PER_WEEK} pattern codes, got {len}"
                ))
            })
    }
}

impl TryFrom<&[PatternCode]> for WeeklyRotation {
    type Error = AssemblyError;

    fn try_from(codes: &[PatternCode]) -> Result<Self, Self::Error> {
        Self::try_from(codes.to_vec())
    }
}

impl From<WeeklyRotation> for Vec<PatternCode> {
    fn from(rotation: WeeklyRotation) -> Self {
        rotation.0.to_vec()
    }
}

impl fmt::Display for WeeklyRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, code) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("-")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;
    use PatternCode::{A, B, C};

    fn pattern(code: PatternCode) -> DayPattern {
        DayPattern {
            id: format!("pattern-{code}"),
            name: format!("Pattern {code}"),
            pattern_code: code,
            meals: Vec::new(),
            total_macros: Macros::default(),
            water_intake: None,
            focus: None,
        }
    }

    #[test]
    fn test_catalog_lookup_by_code_and_id() {
        let catalog = PatternCatalog::new(vec![pattern(B), pattern(A)]).unwrap();
        assert_eq!(catalog.get(A).map(|p| p.id.as_str()), Some("pattern-A"));
        assert_eq!(
            catalog.get_by_id("pattern-B").map(|p| p.pattern_code),
            Some(B)
        );
        assert!(!catalog.contains(C));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = PatternCatalog::new(vec![pattern(A), pattern(A)]);
        assert_eq!(
            result.unwrap_err(),
            AssemblyError::DuplicatePatternCode { code: A }
        );
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert_eq!(
            PatternCatalog::new(Vec::new()).unwrap_err(),
            AssemblyError::EmptyCatalog
        );
    }

    #[test]
    fn test_rotation_requires_seven_codes() {
        let error = WeeklyRotation::try_from(vec![A, B, A]).unwrap_err();
        assert!(matches!(error, AssemblyError::InvalidRotation { .. }));
    }

    #[test]
    fn test_rotation_cycles() {
        let rotation = WeeklyRotation::new([A, B, C, A, B, C, A]);
        assert_eq!(rotation.code_for_day(0), A);
        assert_eq!(rotation.code_for_day(8), B);
        assert_eq!(rotation.to_string(), "A-B-C-A-B-C-A");
        assert_eq!(rotation.distinct_codes(), vec![A, B, C]);
    }

    #[test]
    fn test_rotation_serde_roundtrip_rejects_short_arrays() {
        let parsed: Result<WeeklyRotation, _> = serde_json::from_str(r#"["A","B"]"#);
        assert!(parsed.is_err());
        let parsed: WeeklyRotation =
            serde_json::from_str(r#"["A","B","A","B","A","B","A"]"#).unwrap();
        assert_eq!(parsed.code_for_day(1), B);
    }
}
