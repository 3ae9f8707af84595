// ABOUTME: Core types and constants for the Vitalis health intelligence platform
// ABOUTME: Foundation crate with domain models, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

#![deny(unsafe_code)]

//! # Vitalis Core
//!
//! Foundation crate providing shared types and constants for the Vitalis
//! health intelligence platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Shared error handling with `CoreError`
//! - **constants**: Domain constants organized by concern (body metrics,
//!   hydration, adherence scoring, vitals thresholds)
//! - **models**: Domain value types consumed and produced by the calculators

/// Shared error types for input validation and parsing
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Domain value types (body metrics, meals, exercises, reminders, insights)
pub mod models;

pub use errors::CoreError;
