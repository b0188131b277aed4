// ABOUTME: Nutrition configuration for BMR, activity multipliers, goals and macro split
// ABOUTME: Holds formula coefficients and the caloric constants the calculator reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - Mifflin-St Jeor: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Harris-Benedict (revised): Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use bmr_core::constants::energy;
use bmr_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Tolerance allowed when checking that a macro split sums to 100%
const MACRO_SUM_TOLERANCE_PCT: f64 = 0.5;

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-driven calorie adjustment settings
    pub goals: GoalConfig,
}

/// BMR (Basal Metabolic Rate) formula coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Harris-Benedict male coefficients: constant, weight, height, age
    pub hb_male: HarrisBenedictCoefficients,
    /// Harris-Benedict female coefficients: constant, weight, height, age
    pub hb_female: HarrisBenedictCoefficients,
}

/// One sex-specific row of the revised Harris-Benedict equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HarrisBenedictCoefficients {
    /// Intercept (kcal/day)
    pub constant: f64,
    /// Weight coefficient (kcal per kg)
    pub weight_coef: f64,
    /// Height coefficient (kcal per cm)
    pub height_coef: f64,
    /// Age coefficient (kcal per year, negative)
    pub age_coef: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light exercise (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate exercise (3-5 days/week): 1.55
    pub moderate: f64,
    /// Hard exercise (6-7 days/week): 1.725
    pub active: f64,
    /// Very hard exercise or physical job: 1.9
    pub very_active: f64,
}

/// Goal-driven calorie adjustment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Energy in one kilogram of body mass: 7700 kcal
    pub kcal_per_kg: f64,
    /// Days the weekly rate is spread over: 7
    pub days_per_week: f64,
    /// Daily calorie floor: 1200 kcal
    pub calorie_floor: f64,
}

/// Share of target calories assigned to each macronutrient
///
/// Percentages must sum to 100 (within half a percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein percentage (0-100)
    pub protein_pct: f64,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: f64,
    /// Fat percentage (0-100)
    pub fat_pct: f64,
}

impl MacroSplit {
    /// Create a new macro split
    #[must_use]
    pub const fn new(protein_pct: f64, carbs_pct: f64, fat_pct: f64) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Check that each share is a finite non-negative percentage and that they sum to 100
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending share, or `macro_split` when the sum is off
    pub fn validate(&self) -> AppResult<()> {
        let shares = [
            ("protein_pct", self.protein_pct),
            ("carbs_pct", self.carbs_pct),
            ("fat_pct", self.fat_pct),
        ];

        for (name, value) in shares {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(AppError::invalid_field(
                    name,
                    format!("{name} must be between 0 and 100, got {value}"),
                ));
            }
        }

        let sum = self.protein_pct + self.carbs_pct + self.fat_pct;
        if (sum - 100.0).abs() > MACRO_SUM_TOLERANCE_PCT {
            return Err(AppError::invalid_field(
                "macro_split",
                format!("Macro percentages must sum to 100, got {sum}"),
            ));
        }

        Ok(())
    }
}

impl Default for MacroSplit {
    /// 30% protein / 40% carbs / 30% fat
    fn default() -> Self {
        Self::new(30.0, 40.0, 30.0)
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            hb_male: HarrisBenedictCoefficients {
                constant: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: -5.677,
            },
            hb_female: HarrisBenedictCoefficients {
                constant: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: -4.330,
            },
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: energy::KCAL_PER_KG_BODY_MASS,
            days_per_week: energy::DAYS_PER_WEEK,
            calorie_floor: energy::MIN_TARGET_CALORIES,
        }
    }
}

impl NutritionConfig {
    /// Validate that multipliers and goal constants are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when an activity multiplier is below 1.0 or a
    /// goal constant is not strictly positive
    pub fn validate(&self) -> AppResult<()> {
        let factors = [
            ("sedentary", self.activity_factors.sedentary),
            ("light", self.activity_factors.light),
            ("moderate", self.activity_factors.moderate),
            ("active", self.activity_factors.active),
            ("very_active", self.activity_factors.very_active),
        ];

        // TDEE never drops below BMR
        for (name, value) in factors {
            if !value.is_finite() || value < 1.0 {
                return Err(AppError::config(format!(
                    "{name} activity multiplier must be at least 1.0, got {value}"
                )));
            }
        }

        let goal_constants = [
            ("kcal_per_kg", self.goals.kcal_per_kg),
            ("days_per_week", self.goals.days_per_week),
            ("calorie_floor", self.goals.calorie_floor),
        ];

        for (name, value) in goal_constants {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
