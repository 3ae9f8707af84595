// ABOUTME: Result types produced by the reminder-portfolio analyzer
// ABOUTME: AnalysisResult with coverage, timing, priority, insight, and score sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

use crate::models::reminder::ReminderCategory;
use serde::{Deserialize, Serialize};

/// Per-category coverage entry
///
/// The analyzer emits one entry per category in canonical enumeration
/// order, including categories with a zero count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCoverage {
    /// Category this entry describes
    pub category: ReminderCategory,
    /// Number of reminders in the category
    pub count: usize,
    /// Tiered recommendation text for this coverage level
    pub recommendation: String,
}

/// Reminder counts per part of day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingAnalysis {
    /// Reminders scheduled in [05:00, 12:00)
    pub morning: usize,
    /// Reminders scheduled in [12:00, 17:00)
    pub afternoon: usize,
    /// Reminders scheduled in [17:00, 21:00)
    pub evening: usize,
    /// Reminders scheduled in [21:00, 05:00), including unparseable times
    pub night: usize,
    /// Distribution recommendation text
    pub recommendation: String,
}

/// Reminder counts per priority
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriorityDistribution {
    /// Critical-priority reminders
    pub critical: usize,
    /// High-priority reminders
    pub high: usize,
    /// Medium-priority reminders
    pub medium: usize,
    /// Low-priority reminders
    pub low: usize,
}

/// Full output of the reminder-portfolio analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Heuristic engagement proxy in [0, 95]; not a clinical measure
    pub adherence_score: u8,
    /// One entry per category, canonical order, zero counts included
    pub coverage_analysis: Vec<CategoryCoverage>,
    /// Day-part distribution of reminder times
    pub timing_analysis: TimingAnalysis,
    /// Counts per priority level
    pub priority_distribution: PriorityDistribution,
    /// Ordered observations about the portfolio
    pub insights: Vec<String>,
    /// Ordered suggestions; every matching rule contributes one entry
    pub recommendations: Vec<String>,
}
