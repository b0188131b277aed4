// ABOUTME: Intelligence module hosting the metabolic calculator
// ABOUTME: Re-exports BMR/TDEE/macro types and functions for path-based access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! # Intelligence Module
//!
//! Pure metabolic computation. Nothing in here performs I/O.

/// BMR, TDEE, goal calories and macro targets
pub mod nutrition_calculator;

pub use nutrition_calculator::{
    activity_multiplier, calculate_harris_benedict, calculate_macros, calculate_mifflin_st_jeor,
    calculate_target_calories, calculate_tdee, compute_bmr, compute_bmr_default,
    validate_biometrics, ActivityLevel, BmrFormula, BmrResult, CalculationOptions, CalorieTarget,
    Gender, GoalType, MacroGrams, UserBiometrics,
};
