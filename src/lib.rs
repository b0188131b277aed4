// ABOUTME: Main library entry point for the BMR advisor
// ABOUTME: Metabolic calculator plus builders for text-completion advice requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

#![deny(unsafe_code)]

//! # BMR Advisor
//!
//! Two independent halves:
//!
//! - **Calculator** ([`intelligence`]): basal metabolic rate, total daily
//!   energy expenditure, goal-adjusted calorie target and macronutrient
//!   grams. Pure and synchronous.
//! - **Advice** ([`advice`]): builds single-turn prompts for diet plans,
//!   food analysis, nutrition questions and BMR insights, submits each to
//!   one hosted text-completion endpoint, and builds food image URLs.
//!
//! ## Example Usage
//!
//! ```rust
//! use bmr_advisor::intelligence::{
//!     compute_bmr_default, ActivityLevel, Gender, GoalType, UserBiometrics,
//! };
//!
//! # fn main() -> bmr_advisor::errors::AppResult<()> {
//! let result = compute_bmr_default(&UserBiometrics {
//!     age: 30,
//!     gender: Gender::Male,
//!     height_cm: 180.0,
//!     weight_kg: 80.0,
//!     activity_level: ActivityLevel::Moderate,
//!     goal_type: GoalType::Maintain,
//!     goal_rate_kg_per_week: 0.0,
//! })?;
//! assert!((result.bmr - 1780.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

/// Advice request builders, submission and image URLs
pub mod advice;

/// Configuration for the calculator and the advice transport
pub mod config;

/// Shared constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Metabolic calculations
pub mod intelligence;

/// Text-completion provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;
