// ABOUTME: Domain constants for the Vitalis calculators, organized by concern
// ABOUTME: Pure data constants; no logic, no configuration, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Constants module
//!
//! Groups the numeric contract values of the calculator suite by domain.
//! Everything here is part of the observable, deterministic contract of the
//! platform: these are data, not tunables.

/// BMI classification brackets
pub mod bmi {
    /// Below this value a reading classifies as underweight
    pub const UNDERWEIGHT_UPPER_BOUND: f64 = 18.5;

    /// Below this value (and at or above the underweight bound) a reading
    /// classifies as normal; exactly this value classifies as overweight
    pub const NORMAL_UPPER_BOUND: f64 = 25.0;

    /// Below this value (and at or above the normal bound) a reading
    /// classifies as overweight; exactly this value classifies as obese
    pub const OVERWEIGHT_UPPER_BOUND: f64 = 30.0;
}

/// Harris-Benedict revised equation coefficients
pub mod harris_benedict {
    /// Male base term (kcal/day)
    pub const MALE_BASE: f64 = 88.362;
    /// Male weight coefficient (kcal/day per kg)
    pub const MALE_WEIGHT_COEFF: f64 = 13.397;
    /// Male height coefficient (kcal/day per cm)
    pub const MALE_HEIGHT_COEFF: f64 = 4.799;
    /// Male age coefficient (kcal/day per year, subtracted)
    pub const MALE_AGE_COEFF: f64 = 5.677;

    /// Female base term (kcal/day)
    pub const FEMALE_BASE: f64 = 447.593;
    /// Female weight coefficient (kcal/day per kg)
    pub const FEMALE_WEIGHT_COEFF: f64 = 9.247;
    /// Female height coefficient (kcal/day per cm)
    pub const FEMALE_HEIGHT_COEFF: f64 = 3.098;
    /// Female age coefficient (kcal/day per year, subtracted)
    pub const FEMALE_AGE_COEFF: f64 = 4.330;
}

/// Hydration target factors
pub mod hydration {
    /// Daily water intake in liters per kilogram of body weight
    pub const LITERS_PER_KG: f64 = 0.033;

    /// Glasses per liter, approximating a 250 mL glass
    pub const GLASSES_PER_LITER: f64 = 4.0;
}

/// Adherence score weights for the reminder portfolio analyzer
pub mod adherence {
    /// Every portfolio starts from this baseline
    pub const BASE_SCORE: u32 = 50;

    /// Points granted per reminder in the portfolio
    pub const POINTS_PER_REMINDER: u32 = 5;

    /// Cap on the reminder-count contribution
    pub const MAX_COUNT_POINTS: u32 = 25;

    /// Points granted per distinct category with at least one reminder
    pub const POINTS_PER_COVERED_CATEGORY: u32 = 5;

    /// Hard ceiling on the final score
    pub const MAX_SCORE: u32 = 95;
}

/// Day-part boundaries for reminder timing analysis (24-hour clock)
pub mod day_parts {
    /// First hour of the morning bucket (inclusive)
    pub const MORNING_START_HOUR: u32 = 5;
    /// First hour of the afternoon bucket (inclusive)
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// First hour of the evening bucket (inclusive)
    pub const EVENING_START_HOUR: u32 = 17;
    /// First hour of the night bucket (inclusive); night wraps past midnight
    pub const NIGHT_START_HOUR: u32 = 21;
}

/// Vitals thresholds for the personalized-insight rule engine
pub mod vitals {
    /// Systolic blood pressure (mmHg) above which the pressure rule fires
    pub const SYSTOLIC_ALERT_THRESHOLD: f64 = 130.0;
    /// Diastolic blood pressure (mmHg) above which the pressure rule fires
    pub const DIASTOLIC_ALERT_THRESHOLD: f64 = 80.0;

    /// Resting heart rate (bpm) above which the elevated-rate rule fires
    pub const HEART_RATE_ELEVATED_THRESHOLD: f64 = 100.0;
    /// Exclusive lower bound of the athletic resting-rate praise band (bpm)
    pub const HEART_RATE_ATHLETIC_LOWER: f64 = 40.0;
    /// Exclusive upper bound of the athletic resting-rate praise band (bpm)
    pub const HEART_RATE_ATHLETIC_UPPER: f64 = 60.0;

    /// Blood glucose (mg/dL) above which the glucose rule fires
    pub const GLUCOSE_ALERT_THRESHOLD: f64 = 100.0;

    /// Derived BMI above which the weight-management rule fires
    pub const BMI_ALERT_THRESHOLD: f64 = 25.0;

    /// Daily steps below which the low-activity rule fires
    pub const STEPS_LOW_THRESHOLD: u32 = 5000;
    /// Daily steps above which the activity praise rule fires
    pub const STEPS_PRAISE_THRESHOLD: u32 = 10_000;
}

/// Static advisory text keyed by metric name
pub mod advisories {
    /// Daily step target
    pub const STEPS_TARGET: &str = "10,000 steps";
    /// Nightly sleep target
    pub const SLEEP_TARGET: &str = "7-9 hours";
}
