// ABOUTME: Integration tests for the metabolic calculator
// ABOUTME: Covers BMR formulas, TDEE multipliers, goal adjustment, calorie floor and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bmr_advisor::config::{
    ActivityFactorsConfig, BmrConfig, GoalConfig, MacroSplit, NutritionConfig,
};
use bmr_advisor::errors::ErrorCode;
use bmr_advisor::intelligence::{
    activity_multiplier, calculate_harris_benedict, calculate_macros, calculate_mifflin_st_jeor,
    calculate_target_calories, calculate_tdee, compute_bmr, compute_bmr_default, ActivityLevel,
    BmrFormula, CalculationOptions, Gender, GoalType, UserBiometrics,
};
use common::{female_reference, male_reference};

const EPSILON: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// BMR Formula Tests
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male() {
    let bmr = calculate_mifflin_st_jeor(80.0, 180.0, 30, Gender::Male, &BmrConfig::default())
        .unwrap();

    // 10*80 + 6.25*180 - 5*30 + 5
    assert_close(bmr, 1780.0);
}

#[test]
fn test_mifflin_st_jeor_female() {
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 30, Gender::Female, &BmrConfig::default())
        .unwrap();

    // 10*60 + 6.25*165 - 5*30 - 161
    assert_close(bmr, 1320.25);
}

#[test]
fn test_mifflin_st_jeor_sex_offset_is_166() {
    let config = BmrConfig::default();
    let male = calculate_mifflin_st_jeor(70.0, 175.0, 40, Gender::Male, &config).unwrap();
    let female = calculate_mifflin_st_jeor(70.0, 175.0, 40, Gender::Female, &config).unwrap();

    assert_close(male - female, 166.0);
}

#[test]
fn test_harris_benedict_male() {
    let bmr =
        calculate_harris_benedict(80.0, 180.0, 30, Gender::Male, &BmrConfig::default()).unwrap();

    // 88.362 + 13.397*80 + 4.799*180 - 5.677*30
    assert_close(bmr, 1853.632);
}

#[test]
fn test_harris_benedict_female() {
    let bmr = calculate_harris_benedict(60.0, 165.0, 30, Gender::Female, &BmrConfig::default())
        .unwrap();

    // 447.593 + 9.247*60 + 3.098*165 - 4.330*30
    assert_close(bmr, 1383.683);
}

#[test]
fn test_formulas_reject_non_positive_measurements() {
    let config = BmrConfig::default();

    let err = calculate_mifflin_st_jeor(0.0, 180.0, 30, Gender::Male, &config).unwrap_err();
    assert_eq!(err.field(), Some("weight_kg"));

    let err = calculate_harris_benedict(80.0, -1.0, 30, Gender::Male, &config).unwrap_err();
    assert_eq!(err.field(), Some("height_cm"));
}

// ============================================================================
// TDEE Tests
// ============================================================================

#[test]
fn test_activity_multipliers() {
    let factors = ActivityFactorsConfig::default();

    assert_close(activity_multiplier(ActivityLevel::Sedentary, &factors), 1.2);
    assert_close(activity_multiplier(ActivityLevel::Light, &factors), 1.375);
    assert_close(activity_multiplier(ActivityLevel::Moderate, &factors), 1.55);
    assert_close(activity_multiplier(ActivityLevel::Active, &factors), 1.725);
    assert_close(activity_multiplier(ActivityLevel::VeryActive, &factors), 1.9);
}

#[test]
fn test_tdee_is_bmr_times_multiplier() {
    let factors = ActivityFactorsConfig::default();
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    for level in levels {
        let tdee = calculate_tdee(1500.0, level, &factors).unwrap();
        assert_close(tdee, 1500.0 * activity_multiplier(level, &factors));
    }
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    let err = calculate_tdee(0.0, ActivityLevel::Moderate, &ActivityFactorsConfig::default())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.field(), Some("bmr"));
}

// ============================================================================
// Goal Adjustment Tests
// ============================================================================

#[test]
fn test_maintain_keeps_tdee() {
    let target =
        calculate_target_calories(2500.0, GoalType::Maintain, 0.5, &GoalConfig::default())
            .unwrap();

    assert_close(target.calories, 2500.0);
    assert!(!target.below_floor);
}

#[test]
fn test_lose_half_kg_per_week_subtracts_550() {
    let target =
        calculate_target_calories(2759.0, GoalType::Lose, 0.5, &GoalConfig::default()).unwrap();

    assert_close(target.calories, 2209.0);
    assert!(!target.below_floor);
}

#[test]
fn test_gain_quarter_kg_per_week_adds_275() {
    let target =
        calculate_target_calories(2759.0, GoalType::Gain, 0.25, &GoalConfig::default()).unwrap();

    assert_close(target.calories, 3034.0);
}

#[test]
fn test_goal_direction_comes_from_goal_type() {
    let config = GoalConfig::default();
    let positive = calculate_target_calories(2500.0, GoalType::Lose, 0.5, &config).unwrap();
    let negative = calculate_target_calories(2500.0, GoalType::Lose, -0.5, &config).unwrap();

    assert_close(positive.calories, negative.calories);
}

#[test]
fn test_target_clamped_to_floor() {
    let target =
        calculate_target_calories(1584.3, GoalType::Lose, 1.0, &GoalConfig::default()).unwrap();

    assert_close(target.calories, 1200.0);
    assert!(target.below_floor);
}

#[test]
fn test_target_exactly_at_floor_is_not_flagged() {
    let target =
        calculate_target_calories(1750.0, GoalType::Lose, 0.5, &GoalConfig::default()).unwrap();

    assert_close(target.calories, 1200.0);
    assert!(!target.below_floor);
}

#[test]
fn test_target_rejects_non_finite_rate() {
    let err = calculate_target_calories(2000.0, GoalType::Gain, f64::NAN, &GoalConfig::default())
        .unwrap_err();

    assert_eq!(err.field(), Some("goal_rate_kg_per_week"));
}

// ============================================================================
// Macro Tests
// ============================================================================

#[test]
fn test_default_macro_split_grams() {
    let macros = calculate_macros(2000.0, &MacroSplit::default()).unwrap();

    assert_close(macros.protein_g, 150.0);
    assert_close(macros.carbs_g, 200.0);
    assert_close(macros.fat_g, 2000.0 * 0.3 / 9.0);
}

#[test]
fn test_macro_energy_matches_target() {
    let split = MacroSplit::new(25.0, 50.0, 25.0);
    let macros = calculate_macros(2350.0, &split).unwrap();

    let relative_error = (macros.total_kcal() - 2350.0).abs() / 2350.0;
    assert!(relative_error < 0.01, "relative error {relative_error}");
}

#[test]
fn test_macro_split_must_sum_to_100() {
    let err = calculate_macros(2000.0, &MacroSplit::new(50.0, 50.0, 50.0)).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.field(), Some("macro_split"));
}

#[test]
fn test_macro_split_rejects_negative_share() {
    let err = MacroSplit::new(-10.0, 80.0, 30.0).validate().unwrap_err();

    assert_eq!(err.field(), Some("protein_pct"));
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

#[test]
fn test_compute_bmr_reference_male() {
    let result = compute_bmr_default(&male_reference()).unwrap();

    assert_eq!(result.formula, BmrFormula::MifflinStJeor);
    assert_close(result.bmr, 1780.0);
    assert_close(result.activity_multiplier, 1.55);
    assert_close(result.tdee, 1780.0 * 1.55);
    assert_close(result.target_calories, result.tdee);
    assert!(!result.below_calorie_floor);

    assert_close(result.protein_g, result.target_calories * 0.30 / 4.0);
    assert_close(result.carbs_g, result.target_calories * 0.40 / 4.0);
    assert_close(result.fat_g, result.target_calories * 0.30 / 9.0);
}

#[test]
fn test_compute_bmr_reference_male_losing() {
    let biometrics = UserBiometrics {
        goal_type: GoalType::Lose,
        goal_rate_kg_per_week: 0.5,
        ..male_reference()
    };
    let result = compute_bmr_default(&biometrics).unwrap();

    assert_close(result.target_calories, result.tdee - 550.0);
    let relative_error =
        (result.macros().total_kcal() - result.target_calories).abs() / result.target_calories;
    assert!(relative_error < 0.01);
}

#[test]
fn test_compute_bmr_floor_flagged() {
    let biometrics = UserBiometrics {
        goal_type: GoalType::Lose,
        goal_rate_kg_per_week: 1.0,
        ..female_reference()
    };
    let result = compute_bmr_default(&biometrics).unwrap();

    assert_close(result.bmr, 1320.25);
    assert_close(result.tdee, 1320.25 * 1.2);
    assert_close(result.target_calories, 1200.0);
    assert!(result.below_calorie_floor);
}

#[test]
fn test_compute_bmr_harris_benedict_option() {
    let options = CalculationOptions::default().with_formula(BmrFormula::HarrisBenedict);
    let result = compute_bmr(&male_reference(), &options).unwrap();

    assert_eq!(result.formula, BmrFormula::HarrisBenedict);
    assert_close(result.bmr, 1853.632);
}

#[test]
fn test_compute_bmr_custom_split() {
    let options = CalculationOptions::default().with_macro_split(MacroSplit::new(40.0, 30.0, 30.0));
    let result = compute_bmr(&male_reference(), &options).unwrap();

    assert_close(result.protein_g, result.target_calories * 0.40 / 4.0);
    assert_close(result.carbs_g, result.target_calories * 0.30 / 4.0);
}

#[test]
fn test_compute_bmr_zero_height_names_field() {
    let biometrics = UserBiometrics {
        height_cm: 0.0,
        ..male_reference()
    };
    let err = compute_bmr_default(&biometrics).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.field(), Some("height_cm"));
}

#[test]
fn test_compute_bmr_negative_weight_names_field() {
    let biometrics = UserBiometrics {
        weight_kg: -70.0,
        ..male_reference()
    };
    let err = compute_bmr_default(&biometrics).unwrap_err();

    assert_eq!(err.field(), Some("weight_kg"));
}

#[test]
fn test_compute_bmr_non_positive_bmr_rejected() {
    let biometrics = UserBiometrics {
        age: 200,
        height_cm: 1.0,
        weight_kg: 1.0,
        ..male_reference()
    };
    let err = compute_bmr_default(&biometrics).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.field(), Some("bmr"));
}

#[test]
fn test_compute_bmr_invalid_split_rejected_before_arithmetic() {
    let options = CalculationOptions::default().with_macro_split(MacroSplit::new(10.0, 10.0, 10.0));
    let err = compute_bmr(&male_reference(), &options).unwrap_err();

    assert_eq!(err.field(), Some("macro_split"));
}

#[test]
fn test_compute_bmr_rejects_multiplier_below_one() {
    let options = CalculationOptions {
        config: NutritionConfig {
            activity_factors: ActivityFactorsConfig {
                moderate: 0.5,
                ..ActivityFactorsConfig::default()
            },
            ..NutritionConfig::default()
        },
        ..CalculationOptions::default()
    };
    let err = compute_bmr(&male_reference(), &options).unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("moderate"));
}

#[test]
fn test_compute_bmr_rejects_zero_days_per_week() {
    let biometrics = UserBiometrics {
        goal_type: GoalType::Lose,
        goal_rate_kg_per_week: 0.5,
        ..male_reference()
    };
    let options = CalculationOptions {
        config: NutritionConfig {
            goals: GoalConfig {
                days_per_week: 0.0,
                ..GoalConfig::default()
            },
            ..NutritionConfig::default()
        },
        ..CalculationOptions::default()
    };
    let err = compute_bmr(&biometrics, &options).unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("days_per_week"));
}

#[test]
fn test_compute_bmr_is_deterministic() {
    let first = compute_bmr_default(&male_reference()).unwrap();
    let second = compute_bmr_default(&male_reference()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_bmr_result_serializes_all_fields() {
    let result = compute_bmr_default(&male_reference()).unwrap();
    let json = serde_json::to_value(result).unwrap();

    for key in [
        "formula",
        "bmr",
        "tdee",
        "activity_multiplier",
        "target_calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "below_calorie_floor",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["formula"], "mifflin-st-jeor");
}

#[test]
fn test_biometrics_deserialize_from_json() {
    let biometrics: UserBiometrics = serde_json::from_value(serde_json::json!({
        "age": 30,
        "gender": "male",
        "height_cm": 180.0,
        "weight_kg": 80.0,
        "activity_level": "very-active",
        "goal_type": "gain",
        "goal_rate_kg_per_week": 0.25
    }))
    .unwrap();

    assert_eq!(biometrics.activity_level, ActivityLevel::VeryActive);
    assert_eq!(biometrics.goal_type, GoalType::Gain);
}
