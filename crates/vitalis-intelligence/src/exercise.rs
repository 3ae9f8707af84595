// ABOUTME: Exercise-calorie estimator over free-text activity descriptions
// ABOUTME: First-match lookup against a static per-minute rate table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Exercise-calorie estimation
//!
//! The first table key found as a substring of the lowercased activity
//! name selects the per-minute rate for the given intensity; table order
//! is part of the contract. Unmatched names degrade to a default rate.

use crate::config::IntelligenceConfig;
use tracing::debug;
use vitalis_core::models::{ExerciseDescription, Intensity};

/// Calories per minute at {low, medium, high} intensity, keyed by the
/// distinctive stem of the activity name. Evaluated first match wins.
const ACTIVITY_RATES: &[(&str, [f64; 3])] = &[
    ("running", [8.0, 11.0, 15.0]),
    ("walking", [3.0, 4.0, 5.0]),
    ("swimming", [7.0, 10.0, 13.0]),
    ("yoga", [2.0, 3.0, 4.0]),
    ("cycling", [6.0, 9.0, 12.0]),
    ("weightlifting", [3.0, 5.0, 7.0]),
    ("jump", [10.0, 12.0, 15.0]),
    ("stretching", [2.0, 2.0, 3.0]),
    ("jogging", [7.0, 9.0, 11.0]),
    ("gym", [5.0, 7.0, 9.0]),
    ("aerobics", [6.0, 8.0, 10.0]),
    ("dancing", [4.0, 6.0, 8.0]),
    ("basketball", [6.0, 8.0, 10.0]),
    ("soccer", [7.0, 9.0, 12.0]),
    ("tennis", [5.0, 7.0, 9.0]),
    ("hiking", [5.0, 6.0, 8.0]),
    ("rowing", [6.0, 8.0, 11.0]),
    ("boxing", [8.0, 10.0, 13.0]),
    ("martial", [7.0, 9.0, 12.0]),
    ("climbing", [8.0, 10.0, 12.0]),
    ("elliptical", [6.0, 8.0, 10.0]),
    ("stairs", [7.0, 9.0, 11.0]),
    ("pilates", [3.0, 4.0, 5.0]),
];

// Name-based multipliers, compounding in this order when several match
const INTENSE_MULTIPLIER: f64 = 1.3;
const LIGHT_MULTIPLIER: f64 = 0.8;
const CARDIO_MULTIPLIER: f64 = 1.1;

const fn intensity_index(intensity: Intensity) -> usize {
    match intensity {
        Intensity::Low => 0,
        Intensity::Medium => 1,
        Intensity::High => 2,
    }
}

/// Estimate kilocalories burned for a named activity
///
/// Deterministic for identical input. Unmatched activity names fall back
/// to the configured default rate regardless of intensity.
#[must_use]
pub fn estimate_exercise_calories(name: &str, duration_minutes: u32, intensity: Intensity) -> u32 {
    let text = name.to_lowercase();

    let mut rate = ACTIVITY_RATES
        .iter()
        .find(|(key, _)| text.contains(key))
        .map_or_else(
            || {
                let fallback = IntelligenceConfig::global().estimators.fallback_exercise_rate;
                debug!(fallback, "no activity table match for exercise name");
                fallback
            },
            |(_, rates)| rates[intensity_index(intensity)],
        );

    if text.contains("intense") || text.contains("hiit") {
        rate *= INTENSE_MULTIPLIER;
    }
    if text.contains("light") || text.contains("easy") {
        rate *= LIGHT_MULTIPLIER;
    }
    if text.contains("cardio") {
        rate *= CARDIO_MULTIPLIER;
    }

    (rate * f64::from(duration_minutes)).round() as u32
}

/// Estimate kilocalories burned for a typed exercise description
#[must_use]
pub fn estimate_session(session: &ExerciseDescription) -> u32 {
    estimate_exercise_calories(&session.name, session.duration_minutes, session.intensity)
}
