// ABOUTME: Insight record produced by the personalized-insight rule engine
// ABOUTME: Short advisory with title, description, priority, category, and data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

use serde::{Deserialize, Serialize};

/// Priority of a generated insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Informational, often praise
    Low,
    /// Worth acting on
    Medium,
    /// Should be addressed promptly
    High,
}

/// A short advisory record generated by rule evaluation over health metrics
///
/// Insights are produced, never persisted by the core; a caller may choose
/// to turn one into a reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Headline
    pub title: String,
    /// Human-readable advisory text
    pub description: String,
    /// Urgency of the advisory
    pub priority: InsightPriority,
    /// Health category the advisory belongs to, e.g. "wellness"
    pub category: String,
    /// Supporting data for the insight (literal metric values)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
