// ABOUTME: Tests for the personalized-insight rule engine
// ABOUTME: Covers rule order, thresholds, the cap, and the generic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitalis_core::models::InsightPriority;
use vitalis_intelligence::config::InsightEngineConfig;
use vitalis_intelligence::{HealthSnapshot, InsightEngine};

#[test]
fn empty_snapshot_yields_exactly_the_generic_fallback() {
    let insights = InsightEngine::new().generate(&HealthSnapshot::default());

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].title, "Keep Up the Good Work");
    assert_eq!(insights[0].priority, InsightPriority::Low);
    assert_eq!(insights[0].category, "wellness");
    assert!(insights[0].data.is_none());
}

#[test]
fn elevated_blood_pressure_fires_a_high_priority_wellness_insight() {
    let snapshot = HealthSnapshot {
        blood_pressure_systolic: Some(140.0),
        blood_pressure_diastolic: Some(85.0),
        ..HealthSnapshot::default()
    };
    let insights = InsightEngine::new().generate(&snapshot);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].priority, InsightPriority::High);
    assert_eq!(insights[0].category, "wellness");
    assert!(insights[0].description.contains("140/85"));
}

#[test]
fn diastolic_alone_can_trigger_the_pressure_rule() {
    let snapshot = HealthSnapshot {
        blood_pressure_systolic: Some(118.0),
        blood_pressure_diastolic: Some(88.0),
        ..HealthSnapshot::default()
    };
    let insights = InsightEngine::new().generate(&snapshot);
    assert!(insights[0].description.contains("118/88"));
}

#[test]
fn normal_blood_pressure_fires_nothing() {
    let snapshot = HealthSnapshot {
        blood_pressure_systolic: Some(118.0),
        blood_pressure_diastolic: Some(76.0),
        ..HealthSnapshot::default()
    };
    let insights = InsightEngine::new().generate(&snapshot);
    assert_eq!(insights[0].title, "Keep Up the Good Work");
}

#[test]
fn heart_rate_bands_produce_alert_praise_or_nothing() {
    let elevated = InsightEngine::new().generate(&HealthSnapshot {
        heart_rate: Some(105.0),
        ..HealthSnapshot::default()
    });
    assert_eq!(elevated[0].priority, InsightPriority::Medium);
    assert_eq!(elevated[0].category, "exercise");
    assert!(elevated[0].description.contains("105"));

    let athletic = InsightEngine::new().generate(&HealthSnapshot {
        heart_rate: Some(55.0),
        ..HealthSnapshot::default()
    });
    assert_eq!(athletic[0].priority, InsightPriority::Low);
    assert!(athletic[0].description.contains("55"));

    // [60, 100] produces nothing from this rule
    let quiet = InsightEngine::new().generate(&HealthSnapshot {
        heart_rate: Some(72.0),
        ..HealthSnapshot::default()
    });
    assert_eq!(quiet[0].title, "Keep Up the Good Work");
}

#[test]
fn elevated_glucose_fires_a_nutrition_insight() {
    let insights = InsightEngine::new().generate(&HealthSnapshot {
        blood_glucose: Some(120.0),
        ..HealthSnapshot::default()
    });
    assert_eq!(insights[0].priority, InsightPriority::High);
    assert_eq!(insights[0].category, "nutrition");
    assert!(insights[0].description.contains("120"));
}

#[test]
fn derived_bmi_above_threshold_fires_a_wellness_insight() {
    let insights = InsightEngine::new().generate(&HealthSnapshot {
        weight_kg: Some(90.0),
        height_cm: Some(175.0),
        ..HealthSnapshot::default()
    });
    assert_eq!(insights[0].priority, InsightPriority::Medium);
    assert_eq!(insights[0].category, "wellness");
    // 90 / 1.75^2 = 29.39, rounded to one decimal
    assert!(insights[0].description.contains("29.4"));
}

#[test]
fn step_count_bands_produce_alert_or_praise() {
    let low = InsightEngine::new().generate(&HealthSnapshot {
        steps: Some(3000),
        ..HealthSnapshot::default()
    });
    assert_eq!(low[0].priority, InsightPriority::Medium);
    assert!(low[0].description.contains("3000"));

    let high = InsightEngine::new().generate(&HealthSnapshot {
        steps: Some(12000),
        ..HealthSnapshot::default()
    });
    assert_eq!(high[0].priority, InsightPriority::Low);
    assert!(high[0].description.contains("12000"));

    let mid = InsightEngine::new().generate(&HealthSnapshot {
        steps: Some(7500),
        ..HealthSnapshot::default()
    });
    assert_eq!(mid[0].title, "Keep Up the Good Work");
}

#[test]
fn output_is_capped_in_rule_order() {
    let snapshot = HealthSnapshot {
        blood_pressure_systolic: Some(150.0),
        blood_pressure_diastolic: Some(95.0),
        heart_rate: Some(110.0),
        blood_glucose: Some(130.0),
        weight_kg: Some(95.0),
        height_cm: Some(170.0),
        steps: Some(2000),
    };
    let insights = InsightEngine::new().generate(&snapshot);

    assert_eq!(insights.len(), 3);
    assert_eq!(insights[0].category, "wellness");
    assert_eq!(insights[1].category, "exercise");
    assert_eq!(insights[2].category, "nutrition");
}

#[test]
fn custom_config_raises_the_cap() {
    let snapshot = HealthSnapshot {
        blood_pressure_systolic: Some(150.0),
        blood_pressure_diastolic: Some(95.0),
        heart_rate: Some(110.0),
        blood_glucose: Some(130.0),
        weight_kg: Some(95.0),
        height_cm: Some(170.0),
        steps: Some(2000),
    };
    let engine = InsightEngine::with_config(InsightEngineConfig { max_insights: 5 });
    let insights = engine.generate(&snapshot);
    assert_eq!(insights.len(), 5);
}
