// ABOUTME: Prompt construction for diet plans, food analysis, nutrition Q&A and BMR insights
// ABOUTME: Pure functions pairing a fixed persona with a templated user message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

use bmr_core::constants::advice::MAX_OUTPUT_TOKENS;

use super::{AdviceKind, AdviceRequest};
use crate::config::advice::AdviceTemperatures;
use crate::errors::AppResult;
use crate::intelligence::{ActivityLevel, BmrResult, Gender};
use crate::llm::prompts::{
    persona, FITNESS_EXPERT_PROMPT, NUTRITIONIST_PROMPT, NUTRITION_ASSISTANT_PROMPT,
    NUTRITION_EXPERT_PROMPT,
};

/// Builds advice requests with a given set of temperatures
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceBuilder {
    temperatures: AdviceTemperatures,
}

impl AdviceBuilder {
    /// Builder using the given temperatures
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a temperature is outside `[0.0, 3.0]`
    pub fn new(temperatures: AdviceTemperatures) -> AppResult<Self> {
        temperatures.validate()?;
        Ok(Self { temperatures })
    }

    /// Temperatures in use
    #[must_use]
    pub const fn temperatures(&self) -> &AdviceTemperatures {
        &self.temperatures
    }

    fn request(
        kind: AdviceKind,
        system_prompt: &'static str,
        user_content: String,
        temperature: f32,
    ) -> AdviceRequest {
        AdviceRequest {
            kind,
            system_prompt: Some(persona(system_prompt).to_owned()),
            user_content,
            temperature,
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Request a personalized diet plan
    #[must_use]
    pub fn diet_plan(&self, bmr_result: &BmrResult, goal: &str, diet_type: &str) -> AdviceRequest {
        let bmr = bmr_result.bmr;
        let user_content = format!(
            "Create a personalized daily diet plan for me.\n\
             \n\
             My details:\n\
             - BMR: {bmr:.0} kcal/day\n\
             - Goal: {goal}\n\
             - Diet type: {diet_type}\n\
             \n\
             Please include:\n\
             1. Daily calorie target\n\
             2. Macro breakdown (protein, carbs, fat)\n\
             3. Sample meal plan (breakfast, lunch, dinner, snacks)\n\
             4. Hydration recommendations\n\
             5. Tips for success"
        );

        Self::request(
            AdviceKind::DietPlan,
            NUTRITIONIST_PROMPT,
            user_content,
            self.temperatures.diet_plan,
        )
    }

    /// Request a nutritional breakdown of a food, quoted verbatim
    #[must_use]
    pub fn food_analysis(&self, food_description: &str) -> AdviceRequest {
        let user_content = format!(
            "Analyze the nutritional content of this food: \"{food_description}\"\n\
             \n\
             Provide estimated calories, protein, carbs and fat, notable vitamins and minerals, \
             and whether it fits a balanced diet."
        );

        Self::request(
            AdviceKind::FoodAnalysis,
            NUTRITION_EXPERT_PROMPT,
            user_content,
            self.temperatures.food_analysis,
        )
    }

    /// Ask a free-form nutrition question, optionally with context
    #[must_use]
    pub fn nutrition_advice(&self, question: &str, context: Option<&str>) -> AdviceRequest {
        let user_content = context.map_or_else(
            || question.to_owned(),
            |context| format!("Context: {context}\n\nQuestion: {question}"),
        );

        Self::request(
            AdviceKind::NutritionAdvice,
            NUTRITION_ASSISTANT_PROMPT,
            user_content,
            self.temperatures.nutrition_advice,
        )
    }

    /// Request insights on a BMR value
    #[must_use]
    pub fn bmr_analysis(
        &self,
        bmr: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> AdviceRequest {
        let user_content = format!(
            "Analyze my BMR results and give me personalized insights.\n\
             \n\
             - BMR: {bmr:.0} kcal/day\n\
             - Age: {age}\n\
             - Sex: {gender}\n\
             - Activity level: {activity_level}\n\
             \n\
             Please include:\n\
             1. What my BMR means\n\
             2. Daily calorie needs for my activity level\n\
             3. Recommendations for weight management\n\
             4. Tips to support a healthy metabolism\n\
             5. Suggested next steps"
        );

        Self::request(
            AdviceKind::BmrAnalysis,
            FITNESS_EXPERT_PROMPT,
            user_content,
            self.temperatures.bmr_analysis,
        )
    }
}

/// Diet plan request with the default temperature (0.8)
#[must_use]
pub fn build_diet_plan_request(bmr_result: &BmrResult, goal: &str, diet_type: &str) -> AdviceRequest {
    AdviceBuilder::default().diet_plan(bmr_result, goal, diet_type)
}

/// Food analysis request with the default temperature (0.7)
#[must_use]
pub fn build_food_analysis_request(food_description: &str) -> AdviceRequest {
    AdviceBuilder::default().food_analysis(food_description)
}

/// Nutrition advice request with the default temperature (1.0)
#[must_use]
pub fn build_nutrition_advice_request(question: &str, context: Option<&str>) -> AdviceRequest {
    AdviceBuilder::default().nutrition_advice(question, context)
}

/// BMR analysis request with the default temperature (0.9)
#[must_use]
pub fn build_bmr_analysis_request(
    bmr: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
) -> AdviceRequest {
    AdviceBuilder::default().bmr_analysis(bmr, age, gender, activity_level)
}
