// ABOUTME: Intelligence engine configuration with environment overrides
// ABOUTME: Global once-initialized config carrying caps and estimator fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! Intelligence engine configuration
//!
//! The literal lookup tables and thresholds of the calculators are part of
//! their deterministic contract and are NOT configurable. Configuration
//! covers only the insight cap and the two estimator fallback values, with
//! defaults equal to the contract literals. Environment overrides:
//!
//! - `VITALIS_MAX_INSIGHTS`
//! - `VITALIS_FALLBACK_MEAL_CALORIES`
//! - `VITALIS_FALLBACK_EXERCISE_RATE`

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use tracing::warn;

mod error;

pub use error::ConfigError;

static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Top-level configuration for the intelligence engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Insight rule engine settings
    pub insights: InsightEngineConfig,
    /// Calorie estimator fallback settings
    pub estimators: EstimatorConfig,
}

/// Settings for the personalized-insight rule engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightEngineConfig {
    /// Maximum number of insights returned per evaluation
    pub max_insights: usize,
}

impl Default for InsightEngineConfig {
    fn default() -> Self {
        Self { max_insights: 3 }
    }
}

/// Fallback values for the free-text calorie estimators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Kilocalories assumed for a meal matching no food and no meal-type keyword
    pub fallback_meal_calories: f64,
    /// Calories per minute assumed for an activity matching no table key
    pub fallback_exercise_rate: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            fallback_meal_calories: 400.0,
            fallback_exercise_rate: 5.0,
        }
    }
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid
    /// value or the final configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("VITALIS_MAX_INSIGHTS")? {
            self.insights.max_insights = value
                .parse()
                .map_err(|_| ConfigError::Parse(format!("VITALIS_MAX_INSIGHTS: `{value}`")))?;
        }
        if let Some(value) = read_env("VITALIS_FALLBACK_MEAL_CALORIES")? {
            self.estimators.fallback_meal_calories = value.parse().map_err(|_| {
                ConfigError::Parse(format!("VITALIS_FALLBACK_MEAL_CALORIES: `{value}`"))
            })?;
        }
        if let Some(value) = read_env("VITALIS_FALLBACK_EXERCISE_RATE")? {
            self.estimators.fallback_exercise_rate = value.parse().map_err(|_| {
                ConfigError::Parse(format!("VITALIS_FALLBACK_EXERCISE_RATE: `{value}`"))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.insights.max_insights == 0 {
            return Err(ConfigError::InvalidRange("max_insights must be at least 1"));
        }
        if self.estimators.fallback_meal_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_meal_calories must be positive",
            ));
        }
        if self.estimators.fallback_exercise_rate <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_exercise_rate must be positive",
            ));
        }
        Ok(())
    }
}

fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
