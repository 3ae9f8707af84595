// ABOUTME: Body metrics input model for BMR/TDEE and related calculators
// ABOUTME: BodyMetrics, Sex, and ActivityLevel with its TDEE multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Biological sex, selecting the Harris-Benedict coefficient set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficient set
    Male,
    /// Female coefficient set
    Female,
}

/// Self-reported activity level scaling BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days per week
    Light,
    /// Moderate exercise 3-5 days per week
    Moderate,
    /// Hard exercise 6-7 days per week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to the rounded BMR
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Parse an activity level from free text
    ///
    /// Unknown text falls back to [`Self::Sedentary`], matching the
    /// calculator contract of a 1.2 default multiplier.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "light" | "lightly_active" => Self::Light,
            "moderate" | "moderately_active" => Self::Moderate,
            "active" => Self::Active,
            "very_active" | "veryactive" => Self::VeryActive,
            "sedentary" => Self::Sedentary,
            other => {
                debug!("unrecognized activity level '{other}', defaulting to sedentary");
                Self::Sedentary
            }
        }
    }
}

/// Body metrics input for the energy-expenditure calculators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body weight in kilograms, must be positive
    pub weight_kg: f64,
    /// Height in centimeters, must be positive
    pub height_cm: f64,
    /// Age in whole years, must be positive
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
}

impl BodyMetrics {
    /// Validate the numeric fields against their domains
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidField`] when weight, height, or age is
    /// not positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.weight_kg <= 0.0 {
            return Err(CoreError::InvalidField {
                field: "weight_kg",
                reason: "must be positive",
            });
        }
        if self.height_cm <= 0.0 {
            return Err(CoreError::InvalidField {
                field: "height_cm",
                reason: "must be positive",
            });
        }
        if self.age_years == 0 {
            return Err(CoreError::InvalidField {
                field: "age_years",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}
