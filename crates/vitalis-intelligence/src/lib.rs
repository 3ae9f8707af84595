// ABOUTME: Health intelligence engine: deterministic calculators and analyzers
// ABOUTME: Body metrics, calorie estimation, reminder analysis, and insight rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

#![deny(unsafe_code)]

//! # Vitalis Intelligence
//!
//! The deterministic calculator core of the Vitalis health platform. Every
//! entry point is a synchronous, side-effect-free function of its typed
//! input: identical input yields bit-identical output, and no call can
//! block, retry, or fail with an exception. Missing input degrades to
//! `None` or a documented fallback value, never a panic.
//!
//! ## Modules
//!
//! - **`body_metrics`**: BMI, BMR/TDEE (Harris-Benedict revised), hydration
//!   target, and static metric advisories
//! - **`nutrition`**: free-text meal description to estimated kilocalories
//! - **`exercise`**: free-text activity description to estimated
//!   kilocalories burned
//! - **`reminders`**: reminder-portfolio coverage, timing, priority, and
//!   adherence analysis
//! - **`insights`**: rule evaluation over health metrics producing ranked
//!   insight records
//! - **`config`**: engine configuration with environment overrides

/// Body-metric calculators (BMI, BMR/TDEE, hydration, advisories)
pub mod body_metrics;

/// Engine configuration with environment-variable overrides
pub mod config;

/// Exercise-calorie estimation from free-text activity descriptions
pub mod exercise;

/// Personalized-insight rule engine over typed health metrics
pub mod insights;

/// Food-calorie estimation from free-text meal descriptions
pub mod nutrition;

/// Reminder-portfolio analysis and adherence scoring
pub mod reminders;

pub use body_metrics::{bmi, bmr_tdee, hydration, metric_recommendation};
pub use config::IntelligenceConfig;
pub use exercise::estimate_exercise_calories;
pub use insights::{HealthSnapshot, InsightEngine};
pub use nutrition::estimate_meal_calories;
pub use reminders::ReminderAnalyzer;
