// ABOUTME: Configuration module for calculator constants and advice settings
// ABOUTME: Nutrition coefficients, advice temperatures and environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! Configuration module
//!
//! - **nutrition**: BMR coefficients, activity multipliers, goal constants, macro split
//! - **advice**: Sampling temperatures per advice kind
//! - **environment**: Endpoint, model, timeouts and image host from env vars

/// Advice sampling temperatures
pub mod advice;
/// Environment-based advisor configuration
pub mod environment;
/// Nutrition calculation configuration
pub mod nutrition;

pub use advice::AdviceTemperatures;
pub use environment::AdvisorConfig;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalConfig, HarrisBenedictCoefficients, MacroSplit,
    NutritionConfig,
};
