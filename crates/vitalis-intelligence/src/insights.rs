// ABOUTME: Personalized-insight rule engine over typed health metrics
// ABOUTME: Fixed rule order, capped output, generic fallback when nothing fires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Insight generation from health metric snapshots
//!
//! Five independent rules evaluate in fixed order; the first fired are
//! kept up to the configured cap. A snapshot firing no rule yields exactly
//! one generic maintenance insight, so the engine always returns at least
//! one record.

use crate::config::{InsightEngineConfig, IntelligenceConfig};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use vitalis_core::constants::vitals;
use vitalis_core::models::{Insight, InsightPriority};

/// A snapshot of optionally-present health metrics
///
/// Blood pressure counts as present only when both components are given;
/// the upstream sources record it as a paired reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Systolic blood pressure in mmHg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    /// Diastolic blood pressure in mmHg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<f64>,
    /// Resting heart rate in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Blood glucose in mg/dL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_glucose: Option<f64>,
    /// Body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Daily step count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
}

/// Rule engine producing ranked insights from a health snapshot
pub struct InsightEngine {
    config: InsightEngineConfig,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().insights.clone(),
        }
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub const fn with_config(config: InsightEngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate all rules against a snapshot
    ///
    /// Returns at most the configured cap of insights in rule order; a
    /// snapshot firing no rule yields the single generic fallback insight.
    #[must_use]
    pub fn generate(&self, snapshot: &HealthSnapshot) -> Vec<Insight> {
        let mut insights = Vec::new();

        insights.extend(Self::blood_pressure_rule(snapshot));
        insights.extend(Self::heart_rate_rule(snapshot));
        insights.extend(Self::glucose_rule(snapshot));
        insights.extend(Self::bmi_rule(snapshot));
        insights.extend(Self::steps_rule(snapshot));

        debug!(fired = insights.len(), "evaluated insight rules");
        insights.truncate(self.config.max_insights);

        if insights.is_empty() {
            insights.push(Self::fallback_insight());
        }
        insights
    }

    fn blood_pressure_rule(snapshot: &HealthSnapshot) -> Option<Insight> {
        let systolic = snapshot.blood_pressure_systolic?;
        let diastolic = snapshot.blood_pressure_diastolic?;
        if systolic > vitals::SYSTOLIC_ALERT_THRESHOLD
            || diastolic > vitals::DIASTOLIC_ALERT_THRESHOLD
        {
            return Some(Insight {
                title: "Blood Pressure Attention Needed".to_owned(),
                description: format!(
                    "Your blood pressure reading of {systolic:.0}/{diastolic:.0} mmHg is above \
                     the optimal range. Consider monitoring it regularly and discussing it with \
                     your doctor."
                ),
                priority: InsightPriority::High,
                category: "wellness".to_owned(),
                data: Some(json!({ "systolic": systolic, "diastolic": diastolic })),
            });
        }
        None
    }

    fn heart_rate_rule(snapshot: &HealthSnapshot) -> Option<Insight> {
        let heart_rate = snapshot.heart_rate?;
        if heart_rate > vitals::HEART_RATE_ELEVATED_THRESHOLD {
            Some(Insight {
                title: "Elevated Resting Heart Rate".to_owned(),
                description: format!(
                    "Your resting heart rate of {heart_rate:.0} bpm is on the high side. Regular \
                     aerobic exercise can help bring it down over time."
                ),
                priority: InsightPriority::Medium,
                category: "exercise".to_owned(),
                data: Some(json!({ "heart_rate": heart_rate })),
            })
        } else if heart_rate > vitals::HEART_RATE_ATHLETIC_LOWER
            && heart_rate < vitals::HEART_RATE_ATHLETIC_UPPER
        {
            Some(Insight {
                title: "Strong Cardiovascular Fitness".to_owned(),
                description: format!(
                    "Your resting heart rate of {heart_rate:.0} bpm suggests excellent \
                     cardiovascular conditioning. Keep up your current activity level."
                ),
                priority: InsightPriority::Low,
                category: "exercise".to_owned(),
                data: Some(json!({ "heart_rate": heart_rate })),
            })
        } else {
            None
        }
    }

    fn glucose_rule(snapshot: &HealthSnapshot) -> Option<Insight> {
        let glucose = snapshot.blood_glucose?;
        if glucose > vitals::GLUCOSE_ALERT_THRESHOLD {
            return Some(Insight {
                title: "Blood Glucose Above Target".to_owned(),
                description: format!(
                    "Your blood glucose of {glucose:.0} mg/dL is above the normal fasting range. \
                     Favor balanced meals and limit added sugars."
                ),
                priority: InsightPriority::High,
                category: "nutrition".to_owned(),
                data: Some(json!({ "blood_glucose": glucose })),
            });
        }
        None
    }

    fn bmi_rule(snapshot: &HealthSnapshot) -> Option<Insight> {
        let weight = snapshot.weight_kg?;
        let height = snapshot.height_cm?;
        if weight <= 0.0 || height <= 0.0 {
            return None;
        }
        let height_m = height / 100.0;
        let bmi = ((weight / (height_m * height_m)) * 10.0).round() / 10.0;
        if bmi > vitals::BMI_ALERT_THRESHOLD {
            return Some(Insight {
                title: "Weight Management Opportunity".to_owned(),
                description: format!(
                    "Your BMI of {bmi:.1} is above the normal range. Small, steady changes to \
                     meals and activity make a difference."
                ),
                priority: InsightPriority::Medium,
                category: "wellness".to_owned(),
                data: Some(json!({ "bmi": bmi })),
            });
        }
        None
    }

    fn steps_rule(snapshot: &HealthSnapshot) -> Option<Insight> {
        let steps = snapshot.steps?;
        if steps < vitals::STEPS_LOW_THRESHOLD {
            Some(Insight {
                title: "Room to Move More".to_owned(),
                description: format!(
                    "You logged {steps} steps today, below the recommended daily target. Short \
                     walks through the day add up quickly."
                ),
                priority: InsightPriority::Medium,
                category: "exercise".to_owned(),
                data: Some(json!({ "steps": steps })),
            })
        } else if steps > vitals::STEPS_PRAISE_THRESHOLD {
            Some(Insight {
                title: "Outstanding Daily Activity".to_owned(),
                description: format!(
                    "You logged {steps} steps today, beating the recommended daily target. \
                     Excellent consistency."
                ),
                priority: InsightPriority::Low,
                category: "exercise".to_owned(),
                data: Some(json!({ "steps": steps })),
            })
        } else {
            None
        }
    }

    fn fallback_insight() -> Insight {
        Insight {
            title: "Keep Up the Good Work".to_owned(),
            description: "Your health metrics look stable. Maintain healthy habits with regular \
                          exercise, balanced meals, and good sleep."
                .to_owned(),
            priority: InsightPriority::Low,
            category: "wellness".to_owned(),
            data: None,
        }
    }
}
