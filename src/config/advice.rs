// ABOUTME: Sampling temperatures for each kind of advice request
// ABOUTME: Tunable defaults validated into the accepted 0.0-3.0 range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

use bmr_core::constants::advice::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use bmr_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Sampling temperature per advice kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdviceTemperatures {
    /// Diet plan generation: 0.8
    pub diet_plan: f32,
    /// Food analysis: 0.7
    pub food_analysis: f32,
    /// Free-form nutrition advice: 1.0
    pub nutrition_advice: f32,
    /// BMR analysis: 0.9
    pub bmr_analysis: f32,
}

impl Default for AdviceTemperatures {
    fn default() -> Self {
        Self {
            diet_plan: 0.8,
            food_analysis: 0.7,
            nutrition_advice: 1.0,
            bmr_analysis: 0.9,
        }
    }
}

impl AdviceTemperatures {
    /// Check every temperature lies in `[0.0, 3.0]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first out-of-range temperature
    pub fn validate(&self) -> AppResult<()> {
        let temperatures = [
            ("diet_plan", self.diet_plan),
            ("food_analysis", self.food_analysis),
            ("nutrition_advice", self.nutrition_advice),
            ("bmr_analysis", self.bmr_analysis),
        ];

        for (name, value) in temperatures {
            if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
                return Err(AppError::config(format!(
                    "{name} temperature must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE}, got {value}"
                )));
            }
        }

        Ok(())
    }
}
