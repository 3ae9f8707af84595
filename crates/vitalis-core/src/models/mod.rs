// ABOUTME: Domain value types consumed and produced by the Vitalis calculators
// ABOUTME: Re-exports the body, meal, exercise, reminder, insight, and analysis models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Domain models
//!
//! Every type here is an immutable value: created fresh from
//! caller-supplied data, consumed by one calculator invocation, and
//! discarded. Nothing carries identity or lifecycle beyond a single call.

/// Body metrics input for the body-metric calculator
pub mod body;

/// Free-text meal description for the food-calorie estimator
pub mod meal;

/// Exercise description for the exercise-calorie estimator
pub mod exercise;

/// Reminder snapshot consumed by the portfolio analyzer
pub mod reminder;

/// Insight records produced by the rule engine
pub mod insight;

/// Analysis result types produced by the portfolio analyzer
pub mod analysis;

pub use analysis::{AnalysisResult, CategoryCoverage, PriorityDistribution, TimingAnalysis};
pub use body::{ActivityLevel, BodyMetrics, Sex};
pub use exercise::{ExerciseDescription, Intensity};
pub use insight::{Insight, InsightPriority};
pub use meal::MealDescription;
pub use reminder::{Frequency, Reminder, ReminderCategory, ReminderPriority};
