// ABOUTME: Macro nutrient figures used at food, meal, day and week granularity
// ABOUTME: Macros (optional fiber), CompleteMacros (mandatory fiber), and MacroField
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Macro nutrient totals.
///
/// `fiber` is `None` when no contributing food declared it, which is not the
/// same thing as a declared zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fats (g)
    pub fats: f64,
    /// Fiber (g), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

impl Macros {
    /// Create macros without fiber information
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
            fiber: None,
        }
    }

    /// Attach a fiber value
    #[must_use]
    pub const fn with_fiber(mut self, fiber: f64) -> Self {
        self.fiber = Some(fiber);
        self
    }

    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
            fiber: self.fiber.map(|fiber| fiber * factor),
        }
    }

    /// Calories implied by the macro grams (4/4/9 kcal per gram)
    #[must_use]
    pub fn atwater_calories(&self) -> f64 {
        self.fats.mul_add(
            KCAL_PER_G_FAT,
            self.protein
                .mul_add(KCAL_PER_G_PROTEIN, self.carbs * KCAL_PER_G_CARBS),
        )
    }

    /// True when no field is negative or NaN
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .into_iter()
            .chain(self.fiber)
            .all(|value| value >= 0.0)
    }
}

impl Add for Macros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let fiber = match (self.fiber, rhs.fiber) {
            (None, None) => None,
            (left, right) => Some(left.unwrap_or(0.0) + right.unwrap_or(0.0)),
        };
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
            fiber,
        }
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for Macros {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Plan-level macro targets; fiber is mandatory
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteMacros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fats (g)
    pub fats: f64,
    /// Fiber (g)
    pub fiber: f64,
}

impl CompleteMacros {
    /// Share of these targets for a meal worth `calorie_percentage` percent of the day
    #[must_use]
    pub fn share(&self, calorie_percentage: f64) -> Macros {
        Macros::from(*self).scaled(calorie_percentage / 100.0)
    }
}

impl From<CompleteMacros> for Macros {
    fn from(complete: CompleteMacros) -> Self {
        Self {
            calories: complete.calories,
            protein: complete.protein,
            carbs: complete.carbs,
            fats: complete.fats,
            fiber: Some(complete.fiber),
        }
    }
}

/// Individually addressable macro field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MacroField {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fats (g)
    Fats,
    /// Fiber (g)
    Fiber,
}

impl MacroField {
    /// The four fields every macro figure carries
    pub const CORE: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fats];

    /// Read this field from a macro value
    #[must_use]
    pub const fn get(&self, macros: &Macros) -> Option<f64> {
        match self {
            Self::Calories => Some(macros.calories),
            Self::Protein => Some(macros.protein),
            Self::Carbs => Some(macros.carbs),
            Self::Fats => Some(macros.fats),
            Self::Fiber => macros.fiber,
        }
    }

    /// Field name as it appears on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fats => "fats",
            Self::Fiber => "fiber",
        }
    }

    /// Unit the field is expressed in
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fats | Self::Fiber => "g",
        }
    }
}

impl fmt::Display for MacroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
