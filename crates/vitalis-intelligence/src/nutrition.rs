// ABOUTME: Food-calorie estimator over free-text meal descriptions
// ABOUTME: Substring lookup against a static per-100g table with portion scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Food-calorie estimation
//!
//! A heuristic estimator, not nutritional truth: the contract is the same
//! deterministic number for the same input. The estimator never fails;
//! text matching nothing degrades to a meal-type fallback value.

use crate::config::IntelligenceConfig;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use vitalis_core::models::MealDescription;

/// Calories per 100 g keyed by food-name substring.
///
/// Every entry whose key appears in the search text contributes to the
/// estimate; the table is compiled into the binary and safe for concurrent
/// reads.
const FOOD_CALORIES_PER_100G: &[(&str, f64)] = &[
    // Proteins
    ("chicken", 165.0),
    ("beef", 250.0),
    ("pork", 242.0),
    ("fish", 206.0),
    ("salmon", 208.0),
    ("tuna", 132.0),
    ("egg", 155.0),
    ("tofu", 76.0),
    ("shrimp", 99.0),
    // Carbohydrates
    ("rice", 130.0),
    ("pasta", 131.0),
    ("bread", 265.0),
    ("potato", 77.0),
    ("quinoa", 120.0),
    ("oats", 389.0),
    ("noodles", 138.0),
    ("tortilla", 218.0),
    // Vegetables
    ("broccoli", 34.0),
    ("spinach", 23.0),
    ("carrot", 41.0),
    ("tomato", 18.0),
    ("lettuce", 15.0),
    ("cucumber", 16.0),
    ("pepper", 31.0),
    ("onion", 40.0),
    ("mushroom", 22.0),
    // Fruits
    ("apple", 52.0),
    ("banana", 89.0),
    ("orange", 47.0),
    ("strawberry", 32.0),
    ("grape", 69.0),
    ("watermelon", 30.0),
    ("mango", 60.0),
    ("pineapple", 50.0),
    // Dairy and fats
    ("milk", 42.0),
    ("cheese", 402.0),
    ("yogurt", 59.0),
    ("butter", 717.0),
    ("cream", 345.0),
    ("oil", 884.0),
    ("sugar", 387.0),
    ("honey", 304.0),
    ("nuts", 607.0),
    ("avocado", 160.0),
    // Compound dishes
    ("salad", 50.0),
    ("soup", 80.0),
    ("sandwich", 250.0),
    ("burger", 540.0),
    ("pizza", 266.0),
];

// Meal-type fallbacks when no table entry matches
const BREAKFAST_FALLBACK: f64 = 350.0;
const LUNCH_FALLBACK: f64 = 550.0;
const DINNER_FALLBACK: f64 = 650.0;
const SNACK_FALLBACK: f64 = 150.0;

// Qualitative portion multipliers
const SMALL_PORTION_MULTIPLIER: f64 = 0.7;
const LARGE_PORTION_MULTIPLIER: f64 = 1.5;

// Explicit-weight conversions to units of 100 g
const GRAMS_PER_UNIT: f64 = 100.0;
const UNITS_PER_KG: f64 = 10.0;
const UNITS_PER_OZ: f64 = 0.28;
const UNITS_PER_LB: f64 = 4.54;

// Post-adjustments applied after the table or fallback total
const SALAD_BONUS_CALORIES: f64 = 100.0;
const FRIED_MULTIPLIER: f64 = 1.3;
const GRILLED_MULTIPLIER: f64 = 0.9;

static WEIGHT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 200g, 2 kg, 8oz, 1 lb
    Regex::new(r"(\d+)\s*(g|kg|oz|lb)").ok()
});

/// Estimate meal kilocalories from free-text name, ingredients, and portion
///
/// Deterministic for identical input. Never fails: text matching no food
/// degrades to a meal-type keyword fallback scaled by the portion
/// multiplier.
#[must_use]
pub fn estimate_meal_calories(name: &str, ingredients: &str, portion: &str) -> u32 {
    let text = format!("{name} {ingredients}").to_lowercase();
    let multiplier = portion_multiplier(portion);

    let mut total = 0.0;
    let mut matched = 0usize;
    for (key, per_100g) in FOOD_CALORIES_PER_100G {
        if text.contains(key) {
            total += per_100g * multiplier;
            matched += 1;
        }
    }

    if matched == 0 {
        total = meal_type_fallback(&text) * multiplier;
        debug!(fallback = total, "no food table match for meal text");
    } else {
        debug!(matched, total, "food table matches for meal text");
    }

    if text.contains("salad") {
        total += SALAD_BONUS_CALORIES;
    }
    if text.contains("fried") || text.contains("deep") {
        total *= FRIED_MULTIPLIER;
    }
    if text.contains("grilled") || text.contains("baked") {
        total *= GRILLED_MULTIPLIER;
    }

    total.round().max(0.0) as u32
}

/// Estimate kilocalories for a typed meal description
#[must_use]
pub fn estimate_meal(meal: &MealDescription) -> u32 {
    estimate_meal_calories(&meal.name, &meal.ingredients, &meal.portion)
}

/// Portion multiplier from free text
///
/// An explicit quantity-with-unit (`200g`, `2kg`, `8oz`, `1lb`) takes
/// precedence over the qualitative small/medium/large sizes.
fn portion_multiplier(portion: &str) -> f64 {
    let text = portion.to_lowercase();

    if let Some(weight) = explicit_weight_multiplier(&text) {
        return weight;
    }

    if text.contains("small") {
        SMALL_PORTION_MULTIPLIER
    } else if text.contains("large") {
        LARGE_PORTION_MULTIPLIER
    } else {
        // "medium" and anything unrecognized
        1.0
    }
}

fn explicit_weight_multiplier(text: &str) -> Option<f64> {
    let captures = WEIGHT_PATTERN.as_ref()?.captures(text)?;
    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let multiplier = match captures.get(2)?.as_str() {
        "g" => amount / GRAMS_PER_UNIT,
        "kg" => amount * UNITS_PER_KG,
        "oz" => amount * UNITS_PER_OZ,
        "lb" => amount * UNITS_PER_LB,
        _ => return None,
    };
    Some(multiplier)
}

fn meal_type_fallback(text: &str) -> f64 {
    if text.contains("breakfast") {
        BREAKFAST_FALLBACK
    } else if text.contains("lunch") {
        LUNCH_FALLBACK
    } else if text.contains("dinner") {
        DINNER_FALLBACK
    } else if text.contains("snack") {
        SNACK_FALLBACK
    } else {
        IntelligenceConfig::global().estimators.fallback_meal_calories
    }
}
