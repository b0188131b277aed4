// ABOUTME: Metabolic calculator turning a biometric profile into BMR, TDEE and macro targets
// ABOUTME: Mifflin-St Jeor / Harris-Benedict BMR, activity multipliers, goal calories, macro grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! Metabolic Calculator
//!
//! Pure, synchronous functions: no I/O, no shared state, safe to call from
//! any thread. The single entry point [`compute_bmr`] chains the steps
//!
//! 1. BMR from the selected formula
//! 2. TDEE = BMR x activity multiplier
//! 3. Target calories = TDEE adjusted by the weekly goal rate, floored at 1200 kcal
//! 4. Macro grams from the target and a percentage split
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use std::fmt;

use bmr_core::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use bmr_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalConfig, MacroSplit, NutritionConfig,
};

/// Sex used by the BMR formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

/// Body-weight goal driving the calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

/// BMR equation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (1990)
    #[default]
    MifflinStJeor,
    /// Harris-Benedict, revised by Roza & Shizgal (1984)
    HarrisBenedict,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sedentary => "sedentary (little or no exercise)",
            Self::Light => "lightly active (1-3 days/week)",
            Self::Moderate => "moderately active (3-5 days/week)",
            Self::Active => "active (6-7 days/week)",
            Self::VeryActive => "very active (physical job or twice-daily training)",
        })
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lose => "lose weight",
            Self::Maintain => "maintain weight",
            Self::Gain => "gain weight",
        })
    }
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MifflinStJeor => "Mifflin-St Jeor",
            Self::HarrisBenedict => "Harris-Benedict",
        })
    }
}

/// Biometric profile for one calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserBiometrics {
    /// Age in years
    pub age: u32,
    /// Sex used by the formulas
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal_type: GoalType,
    /// Desired change in kg per week; the goal type decides the direction
    pub goal_rate_kg_per_week: f64,
}

/// Knobs for [`compute_bmr`]
#[derive(Debug, Clone, Default)]
pub struct CalculationOptions {
    /// BMR equation to use
    pub formula: BmrFormula,
    /// Macro percentage split
    pub macro_split: MacroSplit,
    /// Formula coefficients, activity multipliers and goal constants
    pub config: NutritionConfig,
}

impl CalculationOptions {
    /// Use a different BMR formula
    #[must_use]
    pub const fn with_formula(mut self, formula: BmrFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Use a different macro split
    #[must_use]
    pub const fn with_macro_split(mut self, macro_split: MacroSplit) -> Self {
        self.macro_split = macro_split;
        self
    }
}

/// Goal-adjusted daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// Target calories (kcal/day)
    pub calories: f64,
    /// Set when the goal adjustment was clamped up to the calorie floor
    pub below_floor: bool,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl MacroGrams {
    /// Energy represented by these grams (kcal)
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        self.fat_g.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein_g
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs_g * KCAL_PER_GRAM_CARBS),
        )
    }
}

/// Result of one metabolic calculation
///
/// Created fresh per call and never mutated. `tdee == bmr * activity_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// Formula used for the BMR
    pub formula: BmrFormula,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Multiplier applied to the BMR
    pub activity_multiplier: f64,
    /// Goal-adjusted calorie target (kcal/day)
    pub target_calories: f64,
    /// Daily protein (g)
    pub protein_g: f64,
    /// Daily carbohydrates (g)
    pub carbs_g: f64,
    /// Daily fat (g)
    pub fat_g: f64,
    /// Warning: the goal would have pushed the target below the calorie floor
    pub below_calorie_floor: bool,
}

impl BmrResult {
    /// Macro targets as a group
    #[must_use]
    pub const fn macros(&self) -> MacroGrams {
        MacroGrams {
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_field(
            field,
            format!("{field} must be a positive number, got {value}"),
        ))
    }
}

/// Check calculator preconditions
///
/// # Errors
///
/// Returns `InvalidInput` naming the first violated field
pub fn validate_biometrics(biometrics: &UserBiometrics) -> AppResult<()> {
    require_positive("height_cm", biometrics.height_cm)?;
    require_positive("weight_kg", biometrics.weight_kg)?;
    if !biometrics.goal_rate_kg_per_week.is_finite() {
        return Err(AppError::invalid_field(
            "goal_rate_kg_per_week",
            "goal_rate_kg_per_week must be a finite number",
        ));
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not strictly positive
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    require_positive("weight_kg", weight_kg)?;
    require_positive("height_cm", height_cm)?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Men: 88.362 + 13.397w + 4.799h - 5.677a
/// - Women: 447.593 + 9.247w + 3.098h - 4.330a
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not strictly positive
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    require_positive("weight_kg", weight_kg)?;
    require_positive("height_cm", height_cm)?;

    let coefficients = match gender {
        Gender::Male => config.hb_male,
        Gender::Female => config.hb_female,
    };

    Ok(coefficients.age_coef.mul_add(
        f64::from(age),
        coefficients.height_coef.mul_add(
            height_cm,
            coefficients
                .weight_coef
                .mul_add(weight_kg, coefficients.constant),
        ),
    ))
}

/// Multiplier for an activity level
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    require_positive("bmr", bmr)?;
    Ok(bmr * activity_multiplier(activity_level, config))
}

/// Adjust TDEE for the weight goal
///
/// Maintain keeps TDEE. Lose subtracts and gain adds `|rate| x 7700 / 7` kcal.
/// A result below the calorie floor is clamped to the floor and flagged.
///
/// # Errors
///
/// Returns `InvalidInput` if TDEE is not positive or the rate is not finite
pub fn calculate_target_calories(
    tdee: f64,
    goal_type: GoalType,
    goal_rate_kg_per_week: f64,
    config: &GoalConfig,
) -> AppResult<CalorieTarget> {
    require_positive("tdee", tdee)?;
    if !goal_rate_kg_per_week.is_finite() {
        return Err(AppError::invalid_field(
            "goal_rate_kg_per_week",
            "goal_rate_kg_per_week must be a finite number",
        ));
    }

    let daily_adjustment = goal_rate_kg_per_week.abs() * config.kcal_per_kg / config.days_per_week;
    let adjusted = match goal_type {
        GoalType::Maintain => tdee,
        GoalType::Lose => tdee - daily_adjustment,
        GoalType::Gain => tdee + daily_adjustment,
    };

    if adjusted < config.calorie_floor {
        warn!(
            requested = adjusted,
            floor = config.calorie_floor,
            "Calorie target clamped to floor"
        );
        return Ok(CalorieTarget {
            calories: config.calorie_floor,
            below_floor: true,
        });
    }

    Ok(CalorieTarget {
        calories: adjusted,
        below_floor: false,
    })
}

/// Split target calories into macro grams
///
/// grams = calories x pct / 100 / kcal-per-gram (4 protein, 4 carbs, 9 fat)
///
/// # Errors
///
/// Returns `InvalidInput` if the split is invalid or the target is not positive
pub fn calculate_macros(target_calories: f64, split: &MacroSplit) -> AppResult<MacroGrams> {
    require_positive("target_calories", target_calories)?;
    split.validate()?;

    Ok(MacroGrams {
        protein_g: target_calories * split.protein_pct / 100.0 / KCAL_PER_GRAM_PROTEIN,
        carbs_g: target_calories * split.carbs_pct / 100.0 / KCAL_PER_GRAM_CARBS,
        fat_g: target_calories * split.fat_pct / 100.0 / KCAL_PER_GRAM_FAT,
    })
}

/// Calculate BMR, TDEE, target calories and macros for a profile
///
/// This is the main entry point. All preconditions are checked before any
/// arithmetic, so a failure never leaves a partial result.
///
/// # Errors
///
/// Returns `InvalidInput` naming the violated field: `height_cm`, `weight_kg`,
/// `goal_rate_kg_per_week`, one of the macro shares, or `bmr` when the
/// profile yields a non-positive BMR. Returns `ConfigInvalid` when the
/// numeric configuration is unusable.
pub fn compute_bmr(
    biometrics: &UserBiometrics,
    options: &CalculationOptions,
) -> AppResult<BmrResult> {
    validate_biometrics(biometrics)?;
    options.macro_split.validate()?;
    options.config.validate()?;

    let bmr = match options.formula {
        BmrFormula::MifflinStJeor => calculate_mifflin_st_jeor(
            biometrics.weight_kg,
            biometrics.height_cm,
            biometrics.age,
            biometrics.gender,
            &options.config.bmr,
        )?,
        BmrFormula::HarrisBenedict => calculate_harris_benedict(
            biometrics.weight_kg,
            biometrics.height_cm,
            biometrics.age,
            biometrics.gender,
            &options.config.bmr,
        )?,
    };
    if bmr <= 0.0 {
        return Err(AppError::invalid_field(
            "bmr",
            format!("Biometrics yield a non-positive BMR ({bmr:.1} kcal/day)"),
        ));
    }

    let multiplier = activity_multiplier(biometrics.activity_level, &options.config.activity_factors);
    let tdee = bmr * multiplier;

    let target = calculate_target_calories(
        tdee,
        biometrics.goal_type,
        biometrics.goal_rate_kg_per_week,
        &options.config.goals,
    )?;
    let macros = calculate_macros(target.calories, &options.macro_split)?;

    debug!(
        formula = %options.formula,
        bmr,
        tdee,
        target_calories = target.calories,
        below_floor = target.below_floor,
        "Computed metabolic targets"
    );

    Ok(BmrResult {
        formula: options.formula,
        bmr,
        tdee,
        activity_multiplier: multiplier,
        target_calories: target.calories,
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
        below_calorie_floor: target.below_floor,
    })
}

/// [`compute_bmr`] with Mifflin-St Jeor, a 30/40/30 split and default constants
///
/// # Errors
///
/// Same as [`compute_bmr`]
pub fn compute_bmr_default(biometrics: &UserBiometrics) -> AppResult<BmrResult> {
    compute_bmr(biometrics, &CalculationOptions::default())
}
