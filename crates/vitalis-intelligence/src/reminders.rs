// ABOUTME: Reminder-portfolio analyzer: coverage, timing, priority, adherence
// ABOUTME: Pure function of a read-only reminder batch; empty input is valid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Reminder-portfolio analysis
//!
//! Turns a reminder collection into coverage, timing, and priority
//! statistics plus a composite adherence score and natural-language
//! recommendations. All ratio checks use integer arithmetic, so a zero
//! denominator yields a non-firing rule rather than NaN.

use chrono::Timelike;
use std::collections::HashMap;
use tracing::debug;
use vitalis_core::constants::{adherence, day_parts};
use vitalis_core::models::{
    AnalysisResult, CategoryCoverage, PriorityDistribution, Reminder, ReminderCategory,
    ReminderPriority, TimingAnalysis,
};

/// Analyzer over a read-only batch of reminders
#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderAnalyzer;

impl ReminderAnalyzer {
    /// Create a new analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a reminder portfolio
    ///
    /// Pure function of the input batch; the empty list is a valid input
    /// and produces zero counts throughout.
    #[must_use]
    pub fn analyze(&self, reminders: &[Reminder]) -> AnalysisResult {
        let counts = category_counts(reminders);
        let coverage_analysis = coverage(&counts);
        let timing_analysis = timing(reminders);
        let priority_distribution = priorities(reminders);
        let insights = portfolio_insights(reminders, &counts, &priority_distribution);
        let recommendations =
            portfolio_recommendations(reminders, &counts, &timing_analysis, &priority_distribution);
        let adherence_score = adherence_score(reminders.len(), &counts);

        debug!(
            total = reminders.len(),
            adherence_score, "analyzed reminder portfolio"
        );

        AnalysisResult {
            adherence_score,
            coverage_analysis,
            timing_analysis,
            priority_distribution,
            insights,
            recommendations,
        }
    }
}

fn category_counts(reminders: &[Reminder]) -> HashMap<ReminderCategory, usize> {
    let mut counts: HashMap<ReminderCategory, usize> = ReminderCategory::ALL
        .iter()
        .map(|category| (*category, 0))
        .collect();
    for reminder in reminders {
        if let Some(count) = counts.get_mut(&reminder.category) {
            *count += 1;
        }
    }
    counts
}

fn count_of(counts: &HashMap<ReminderCategory, usize>, category: ReminderCategory) -> usize {
    counts.get(&category).copied().unwrap_or(0)
}

fn coverage(counts: &HashMap<ReminderCategory, usize>) -> Vec<CategoryCoverage> {
    ReminderCategory::ALL
        .iter()
        .map(|&category| {
            let count = count_of(counts, category);
            let name = category.display_name();
            let recommendation = match count {
                0 => format!("Consider adding {name} reminders to round out your routine"),
                1 => format!("Good start with {name}, add more to build the habit"),
                2 | 3 => format!("Your {name} reminders are well balanced"),
                _ => format!("Excellent {name} tracking"),
            };
            CategoryCoverage {
                category,
                count,
                recommendation,
            }
        })
        .collect()
}

fn hour_of(reminder: &Reminder) -> Option<u32> {
    reminder.parsed_time().ok().map(|t| t.hour())
}

fn timing(reminders: &[Reminder]) -> TimingAnalysis {
    let mut morning = 0;
    let mut afternoon = 0;
    let mut evening = 0;
    let mut night = 0;

    for reminder in reminders {
        // Unparseable times land in the night bucket
        match hour_of(reminder) {
            Some(h) if (day_parts::MORNING_START_HOUR..day_parts::AFTERNOON_START_HOUR)
                .contains(&h) =>
            {
                morning += 1;
            }
            Some(h) if (day_parts::AFTERNOON_START_HOUR..day_parts::EVENING_START_HOUR)
                .contains(&h) =>
            {
                afternoon += 1;
            }
            Some(h) if (day_parts::EVENING_START_HOUR..day_parts::NIGHT_START_HOUR)
                .contains(&h) =>
            {
                evening += 1;
            }
            _ => night += 1,
        }
    }

    let recommendation = if morning == 0 {
        "Consider adding morning reminders to start your day on track".to_owned()
    } else if evening == 0 {
        "Consider adding evening reminders to close out your day".to_owned()
    } else {
        "Your reminders are well distributed across the day".to_owned()
    };

    TimingAnalysis {
        morning,
        afternoon,
        evening,
        night,
        recommendation,
    }
}

fn priorities(reminders: &[Reminder]) -> PriorityDistribution {
    let mut distribution = PriorityDistribution::default();
    for reminder in reminders {
        match reminder.priority {
            ReminderPriority::Critical => distribution.critical += 1,
            ReminderPriority::High => distribution.high += 1,
            ReminderPriority::Medium => distribution.medium += 1,
            ReminderPriority::Low => distribution.low += 1,
        }
    }
    distribution
}

fn portfolio_insights(
    reminders: &[Reminder],
    counts: &HashMap<ReminderCategory, usize>,
    distribution: &PriorityDistribution,
) -> Vec<String> {
    let total = reminders.len();
    let active = reminders.iter().filter(|r| r.is_active).count();
    let ai_generated = reminders.iter().filter(|r| r.ai_generated).count();
    let custom = total - ai_generated;

    let mut insights = vec![
        format!("You have {total} reminders, {active} of them active"),
        format!("{ai_generated} AI-generated and {custom} custom reminders"),
    ];

    if distribution.critical > 0 {
        insights.push(format!(
            "{} critical reminders need close attention",
            distribution.critical
        ));
    }

    // Ties break on canonical category order: only a strictly greater
    // count displaces an earlier category
    let mut top: Option<(ReminderCategory, usize)> = None;
    for &category in &ReminderCategory::ALL {
        let count = count_of(counts, category);
        if top.is_none_or(|(_, best)| count > best) {
            top = Some((category, count));
        }
    }
    if let Some((category, count)) = top {
        if count > 0 {
            insights.push(format!(
                "Your strongest focus is {} with {count} reminders",
                category.display_name()
            ));
        }
    }

    insights
}

fn portfolio_recommendations(
    reminders: &[Reminder],
    counts: &HashMap<ReminderCategory, usize>,
    timing: &TimingAnalysis,
    distribution: &PriorityDistribution,
) -> Vec<String> {
    let total = reminders.len();
    let mut recommendations = Vec::new();

    if count_of(counts, ReminderCategory::Medication) == 0 {
        recommendations
            .push("Add medication reminders if you take any medications regularly".to_owned());
    }
    if count_of(counts, ReminderCategory::Exercise) < 2 {
        recommendations
            .push("Increase exercise reminders to stay active throughout the week".to_owned());
    }
    if count_of(counts, ReminderCategory::Nutrition) < 2 {
        recommendations
            .push("Add nutrition reminders to keep meals and hydration on schedule".to_owned());
    }
    if timing.morning < 2 {
        recommendations
            .push("Schedule more morning reminders to build a consistent routine".to_owned());
    }
    // Integer form of (high + critical) > 0.7 * total; a zero total never fires
    if (distribution.high + distribution.critical) * 10 > total * 7 {
        recommendations
            .push("Rebalance priorities so fewer reminders compete for urgent attention".to_owned());
    }
    if total < 5 {
        recommendations.push("Add more reminders to cover your daily health routine".to_owned());
    }

    recommendations
}

fn adherence_score(total: usize, counts: &HashMap<ReminderCategory, usize>) -> u8 {
    let count_points = (total as u32 * adherence::POINTS_PER_REMINDER).min(adherence::MAX_COUNT_POINTS);
    let covered = ReminderCategory::ALL
        .iter()
        .filter(|&&category| count_of(counts, category) > 0)
        .count() as u32;
    let score = adherence::BASE_SCORE + count_points + covered * adherence::POINTS_PER_COVERED_CATEGORY;
    score.min(adherence::MAX_SCORE) as u8
}
