// ABOUTME: Exercise description consumed by the exercise-calorie estimator
// ABOUTME: ExerciseDescription with duration and a three-level Intensity enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Exercise intensity, selecting a column of the per-minute rate table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy effort, conversation pace
    Low,
    /// Steady effort
    Medium,
    /// Hard effort
    High,
}

impl Intensity {
    /// Parse an intensity from free text, defaulting to [`Self::Medium`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" | "easy" => Self::Low,
            "high" | "hard" => Self::High,
            "medium" | "moderate" => Self::Medium,
            other => {
                debug!("unrecognized intensity '{other}', defaulting to medium");
                Self::Medium
            }
        }
    }
}

/// User-entered description of an exercise session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDescription {
    /// Activity name as free text, e.g. "Morning Running"
    pub name: String,
    /// Session length in whole minutes, must be positive
    pub duration_minutes: u32,
    /// Reported intensity
    pub intensity: Intensity,
}

impl ExerciseDescription {
    /// Validate the duration against its domain
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidField`] when the duration is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.duration_minutes == 0 {
            return Err(CoreError::InvalidField {
                field: "duration_minutes",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}
