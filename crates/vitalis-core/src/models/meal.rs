// ABOUTME: Free-text meal description consumed by the food-calorie estimator
// ABOUTME: Name and portion together form the search corpus; nothing is parsed here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

use serde::{Deserialize, Serialize};

/// User-entered description of a meal
///
/// No numeric parsing is guaranteed to succeed on any field; the estimator
/// degrades to documented fallbacks for text it cannot interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDescription {
    /// Meal name, e.g. "Grilled Chicken Salad"
    pub name: String,
    /// Ingredient list as free text, may be empty
    #[serde(default)]
    pub ingredients: String,
    /// Portion as free text, e.g. "1 plate", "200g", "large"
    #[serde(default)]
    pub portion: String,
}

impl MealDescription {
    /// Build a meal description from its three free-text parts
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        portion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            portion: portion.into(),
        }
    }

    /// Lowercased search corpus: name and ingredients joined by a space
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.ingredients).to_lowercase()
    }
}
