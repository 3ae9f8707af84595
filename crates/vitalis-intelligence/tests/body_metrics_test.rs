// ABOUTME: Tests for the body-metric calculators through their public contracts
// ABOUTME: Covers BMI brackets, Harris-Benedict rounding order, and hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitalis_core::models::{ActivityLevel, BodyMetrics, Sex};
use vitalis_intelligence::body_metrics::{
    bmi, bmr_tdee, hydration, metric_recommendation, BmiCategory,
};

fn male_metrics(activity_level: ActivityLevel) -> BodyMetrics {
    BodyMetrics {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level,
    }
}

#[test]
fn bmi_classifies_normal_weight() {
    let reading = bmi(70.0, 175.0).unwrap();
    assert!((reading.bmi - 22.9).abs() < f64::EPSILON);
    assert_eq!(reading.category, BmiCategory::Normal);
}

#[test]
fn bmi_boundaries_belong_to_the_upper_bracket() {
    // A 1 m reference height makes BMI equal the weight
    assert_eq!(bmi(18.5, 100.0).unwrap().category, BmiCategory::Normal);
    assert_eq!(bmi(25.0, 100.0).unwrap().category, BmiCategory::Overweight);
    assert_eq!(bmi(30.0, 100.0).unwrap().category, BmiCategory::Obese);
    assert_eq!(bmi(18.4, 100.0).unwrap().category, BmiCategory::Underweight);
}

#[test]
fn bmi_rejects_non_positive_input() {
    assert!(bmi(0.0, 175.0).is_none());
    assert!(bmi(70.0, 0.0).is_none());
    assert!(bmi(-5.0, -5.0).is_none());
}

#[test]
fn bmr_tdee_matches_harris_benedict_for_sedentary_male() {
    let estimate = bmr_tdee(&male_metrics(ActivityLevel::Sedentary)).unwrap();
    // 88.362 + 13.397*70 + 4.799*175 - 5.677*30 = 1695.667, rounded first
    assert_eq!(estimate.bmr, 1696);
    // TDEE derives from the already-rounded BMR
    assert_eq!(estimate.tdee, (1696.0_f64 * 1.2).round() as u32);
    assert!(estimate.recommendation.contains(&estimate.tdee.to_string()));
}

#[test]
fn bmr_tdee_uses_female_coefficients() {
    let metrics = BodyMetrics {
        sex: Sex::Female,
        ..male_metrics(ActivityLevel::Sedentary)
    };
    let estimate = bmr_tdee(&metrics).unwrap();
    // 447.593 + 9.247*70 + 3.098*175 - 4.330*30 = 1507.133
    assert_eq!(estimate.bmr, 1507);
    assert_eq!(estimate.tdee, (1507.0_f64 * 1.2).round() as u32);
}

#[test]
fn bmr_tdee_applies_activity_multipliers() {
    let sedentary = bmr_tdee(&male_metrics(ActivityLevel::Sedentary)).unwrap();
    let very_active = bmr_tdee(&male_metrics(ActivityLevel::VeryActive)).unwrap();
    assert_eq!(sedentary.bmr, very_active.bmr);
    assert_eq!(very_active.tdee, (f64::from(very_active.bmr) * 1.9).round() as u32);
}

#[test]
fn bmr_tdee_rejects_missing_input() {
    let mut metrics = male_metrics(ActivityLevel::Sedentary);
    metrics.age_years = 0;
    assert!(bmr_tdee(&metrics).is_none());
}

#[test]
fn hydration_rounds_liters_before_deriving_glasses() {
    let target = hydration(70.0).unwrap();
    // 70 * 0.033 = 2.31, rounded to 2.3 liters BEFORE the glasses multiply
    assert!((target.daily_water_liters - 2.3).abs() < f64::EPSILON);
    assert_eq!(target.glasses, 9);
}

#[test]
fn hydration_rejects_non_positive_weight() {
    assert!(hydration(0.0).is_none());
    assert!(hydration(-1.0).is_none());
}

#[test]
fn metric_advisories_are_static() {
    assert_eq!(metric_recommendation("steps"), Some("10,000 steps"));
    assert_eq!(metric_recommendation("Sleep"), Some("7-9 hours"));
    assert_eq!(metric_recommendation("mood"), None);
}

#[test]
fn calculators_are_idempotent() {
    let first = bmi(82.5, 169.0).unwrap();
    let second = bmi(82.5, 169.0).unwrap();
    assert!((first.bmi - second.bmi).abs() < f64::EPSILON);
    assert_eq!(first.category, second.category);

    let a = bmr_tdee(&male_metrics(ActivityLevel::Moderate)).unwrap();
    let b = bmr_tdee(&male_metrics(ActivityLevel::Moderate)).unwrap();
    assert_eq!(a.bmr, b.bmr);
    assert_eq!(a.tdee, b.tdee);
}
