// ABOUTME: Tests for domain model serialization, lossy parsing, and validation
// ABOUTME: Locks the snake_case wire format and the permissive-parse defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitalis_core::models::{
    ActivityLevel, BodyMetrics, Frequency, Intensity, Reminder, ReminderCategory,
    ReminderPriority, Sex,
};
use vitalis_core::CoreError;

fn sample_reminder() -> Reminder {
    Reminder {
        id: "rem_1".to_owned(),
        title: "Morning medication".to_owned(),
        description: "Take with water".to_owned(),
        time: "08:30".to_owned(),
        frequency: Frequency::Daily,
        category: ReminderCategory::Medication,
        is_active: true,
        ai_generated: false,
        priority: ReminderPriority::High,
        created_at: None,
    }
}

#[test]
fn enums_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
        "\"very_active\""
    );
    assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
    assert_eq!(
        serde_json::to_string(&ReminderCategory::Medication).unwrap(),
        "\"medication\""
    );
    assert_eq!(
        serde_json::to_string(&ReminderPriority::Critical).unwrap(),
        "\"critical\""
    );
}

#[test]
fn reminder_round_trips_through_json() {
    let reminder = sample_reminder();
    let json = serde_json::to_string(&reminder).unwrap();
    let back: Reminder = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, reminder.id);
    assert_eq!(back.time, reminder.time);
    assert_eq!(back.category, reminder.category);
    assert_eq!(back.priority, reminder.priority);
}

#[test]
fn reminder_serialization_omits_missing_created_at() {
    let json = serde_json::to_string(&sample_reminder()).unwrap();
    assert!(!json.contains("created_at"));
}

#[test]
fn activity_level_parses_common_variants() {
    assert_eq!(
        ActivityLevel::from_str_lossy("Very Active"),
        ActivityLevel::VeryActive
    );
    assert_eq!(
        ActivityLevel::from_str_lossy("moderately-active"),
        ActivityLevel::Moderate
    );
    assert_eq!(ActivityLevel::from_str_lossy("light"), ActivityLevel::Light);
}

#[test]
fn unknown_activity_level_defaults_to_sedentary() {
    assert_eq!(
        ActivityLevel::from_str_lossy("couch potato"),
        ActivityLevel::Sedentary
    );
}

#[test]
fn activity_multipliers_match_contract() {
    assert!((ActivityLevel::Sedentary.multiplier() - 1.2).abs() < f64::EPSILON);
    assert!((ActivityLevel::Light.multiplier() - 1.375).abs() < f64::EPSILON);
    assert!((ActivityLevel::Moderate.multiplier() - 1.55).abs() < f64::EPSILON);
    assert!((ActivityLevel::Active.multiplier() - 1.725).abs() < f64::EPSILON);
    assert!((ActivityLevel::VeryActive.multiplier() - 1.9).abs() < f64::EPSILON);
}

#[test]
fn intensity_defaults_to_medium() {
    assert_eq!(Intensity::from_str_lossy("brutal"), Intensity::Medium);
    assert_eq!(Intensity::from_str_lossy("easy"), Intensity::Low);
    assert_eq!(Intensity::from_str_lossy("hard"), Intensity::High);
}

#[test]
fn unknown_category_defaults_to_wellness() {
    assert_eq!(
        ReminderCategory::from_str_lossy("mystery"),
        ReminderCategory::Wellness
    );
}

#[test]
fn category_enumeration_order_is_canonical() {
    assert_eq!(
        ReminderCategory::ALL,
        [
            ReminderCategory::Medication,
            ReminderCategory::Exercise,
            ReminderCategory::Checkup,
            ReminderCategory::Wellness,
            ReminderCategory::Nutrition,
        ]
    );
}

#[test]
fn body_metrics_validation_rejects_non_positive_fields() {
    let metrics = BodyMetrics {
        weight_kg: 0.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Sedentary,
    };
    assert!(matches!(
        metrics.validate(),
        Err(CoreError::InvalidField {
            field: "weight_kg",
            ..
        })
    ));
}

#[test]
fn reminder_time_parses_24_hour_strings() {
    let mut reminder = sample_reminder();
    assert!(reminder.parsed_time().is_ok());

    reminder.time = "25:99".to_owned();
    assert!(matches!(
        reminder.parsed_time(),
        Err(CoreError::InvalidTime { .. })
    ));
}
