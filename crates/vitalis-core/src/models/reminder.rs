// ABOUTME: Reminder snapshot model consumed by the portfolio analyzer
// ABOUTME: Reminder plus its Frequency, ReminderCategory, and ReminderPriority enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

use crate::errors::CoreError;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How often a reminder repeats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
    /// Caller-defined schedule
    Custom,
}

/// Health category a reminder belongs to
///
/// The declaration order is the canonical enumeration order used for
/// coverage output and tie-breaking in the analyzer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReminderCategory {
    /// Medication intake
    Medication,
    /// Physical activity
    Exercise,
    /// Medical checkups and appointments
    Checkup,
    /// General wellness habits
    Wellness,
    /// Meals and hydration
    Nutrition,
}

impl ReminderCategory {
    /// All categories in canonical enumeration order
    pub const ALL: [Self; 5] = [
        Self::Medication,
        Self::Exercise,
        Self::Checkup,
        Self::Wellness,
        Self::Nutrition,
    ];

    /// Lowercase display name used verbatim in analyzer messages
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Exercise => "exercise",
            Self::Checkup => "checkup",
            Self::Wellness => "wellness",
            Self::Nutrition => "nutrition",
        }
    }

    /// Parse a category from free text, defaulting to [`Self::Wellness`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "medication" => Self::Medication,
            "exercise" => Self::Exercise,
            "checkup" => Self::Checkup,
            "nutrition" => Self::Nutrition,
            "wellness" => Self::Wellness,
            other => {
                debug!("unrecognized reminder category '{other}', defaulting to wellness");
                Self::Wellness
            }
        }
    }
}

/// Urgency of a reminder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPriority {
    /// Nice to have
    Low,
    /// Routine
    Medium,
    /// Important
    High,
    /// Must not be missed
    Critical,
}

/// A point-in-time snapshot of one reminder
///
/// The analyzer treats a reminder collection as one read-only batch and
/// never mutates an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    /// Opaque caller-supplied identifier
    pub id: String,
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Time of day as a 24-hour `"HH:MM"` string
    pub time: String,
    /// Repeat schedule
    pub frequency: Frequency,
    /// Health category
    pub category: ReminderCategory,
    /// Whether the reminder is currently active
    pub is_active: bool,
    /// Whether the reminder was AI-generated rather than user-created
    pub ai_generated: bool,
    /// Urgency
    pub priority: ReminderPriority,
    /// Creation timestamp, when the upstream store provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reminder {
    /// Parse the `time` field as a 24-hour `HH:MM` time of day
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTime`] when the string does not parse.
    /// The analyzer treats unparseable times as belonging to the night
    /// bucket rather than failing.
    pub fn parsed_time(&self) -> Result<NaiveTime, CoreError> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").map_err(|_| CoreError::InvalidTime {
            value: self.time.clone(),
        })
    }
}
