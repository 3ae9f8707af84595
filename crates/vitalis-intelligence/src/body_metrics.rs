// ABOUTME: Body-metric calculators: BMI, BMR/TDEE, hydration target, advisories
// ABOUTME: Pure functions; non-positive required input yields None, never a panic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Body-metric calculators
//!
//! Each function is independent of the others and referentially
//! transparent. Rounding is part of the observable contract: BMI rounds to
//! one decimal before categorization, BMR rounds before the TDEE
//! multiplication, and hydration liters round before the glasses
//! multiplication.

use serde::{Deserialize, Serialize};
use vitalis_core::constants::{advisories, bmi as bmi_bounds, harris_benedict, hydration as hydration_factors};
use vitalis_core::models::{BodyMetrics, Sex};

/// BMI classification bracket
///
/// Boundary values belong to the upper bracket: exactly 18.5 is normal,
/// exactly 25.0 is overweight, exactly 30.0 is obese.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Display name used in caller-facing text
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    fn from_value(value: f64) -> Self {
        if value < bmi_bounds::UNDERWEIGHT_UPPER_BOUND {
            Self::Underweight
        } else if value < bmi_bounds::NORMAL_UPPER_BOUND {
            Self::Normal
        } else if value < bmi_bounds::OVERWEIGHT_UPPER_BOUND {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// A computed BMI value and its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiReading {
    /// Body mass index, rounded to one decimal
    pub bmi: f64,
    /// Classification of the rounded value
    pub category: BmiCategory,
}

/// Basal metabolic rate and total daily energy expenditure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal metabolic rate in kcal/day, rounded to the nearest integer
    pub bmr: u32,
    /// Total daily energy expenditure in kcal/day, rounded
    pub tdee: u32,
    /// Caller-facing recommendation text reporting the rounded TDEE
    pub recommendation: String,
}

/// Daily hydration target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationTarget {
    /// Daily water intake in liters, rounded to one decimal
    pub daily_water_liters: f64,
    /// Equivalent 250 mL glasses, derived from the rounded liters value
    pub glasses: u32,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute BMI and its classification
///
/// Returns `None` when either input is not positive. The value is rounded
/// to one decimal and the rounded value is categorized.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<BmiReading> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let value = round_to_tenth(weight_kg / (height_m * height_m));
    Some(BmiReading {
        bmi: value,
        category: BmiCategory::from_value(value),
    })
}

/// Compute BMR and TDEE using the Harris-Benedict revised equation
///
/// BMR is rounded to the nearest integer first; TDEE is the rounded BMR
/// scaled by the activity multiplier and rounded again. Returns `None`
/// when weight, height, or age is not positive.
#[must_use]
pub fn bmr_tdee(metrics: &BodyMetrics) -> Option<EnergyEstimate> {
    metrics.validate().ok()?;

    let raw_bmr = match metrics.sex {
        Sex::Male => {
            harris_benedict::MALE_BASE
                + harris_benedict::MALE_WEIGHT_COEFF * metrics.weight_kg
                + harris_benedict::MALE_HEIGHT_COEFF * metrics.height_cm
                - harris_benedict::MALE_AGE_COEFF * f64::from(metrics.age_years)
        }
        Sex::Female => {
            harris_benedict::FEMALE_BASE
                + harris_benedict::FEMALE_WEIGHT_COEFF * metrics.weight_kg
                + harris_benedict::FEMALE_HEIGHT_COEFF * metrics.height_cm
                - harris_benedict::FEMALE_AGE_COEFF * f64::from(metrics.age_years)
        }
    };

    let bmr = raw_bmr.round();
    let tdee = (bmr * metrics.activity_level.multiplier()).round();
    let tdee_int = tdee as u32;

    Some(EnergyEstimate {
        bmr: bmr as u32,
        tdee: tdee_int,
        recommendation: format!(
            "To maintain your current weight, aim for about {tdee_int} kcal per day."
        ),
    })
}

/// Compute the daily hydration target from body weight
///
/// Liters are rounded to one decimal first; the glasses count derives from
/// the rounded liters value. Returns `None` when the weight is not
/// positive.
#[must_use]
pub fn hydration(weight_kg: f64) -> Option<HydrationTarget> {
    if weight_kg <= 0.0 {
        return None;
    }
    let liters = round_to_tenth(weight_kg * hydration_factors::LITERS_PER_KG);
    let glasses = (liters * hydration_factors::GLASSES_PER_LITER).round() as u32;
    Some(HydrationTarget {
        daily_water_liters: liters,
        glasses,
    })
}

/// Static advisory text keyed by metric name, case-insensitive
///
/// Known metrics: `steps` and `sleep`. Unknown names yield `None`.
#[must_use]
pub fn metric_recommendation(metric: &str) -> Option<&'static str> {
    match metric.to_lowercase().as_str() {
        "steps" => Some(advisories::STEPS_TARGET),
        "sleep" => Some(advisories::SLEEP_TARGET),
        _ => None,
    }
}
