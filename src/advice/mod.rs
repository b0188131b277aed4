// ABOUTME: Advice request model, single-call submission and the advice service facade
// ABOUTME: Turns structured inputs into one completion call and returns text or a classified error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! # Advice Request Builder
//!
//! Each builder produces one [`AdviceRequest`]: an optional system
//! instruction, one user message, a temperature and the 1000-token ceiling.
//! There is no multi-turn history.
//!
//! [`submit`] hands a request to an [`LlmProvider`] for exactly one network
//! round-trip. It never retries and never logs failures on the caller's
//! behalf; the error comes back classified as `ExternalNetworkFailure`,
//! `ExternalServiceError` or `ExternalResponseMalformed`.
//!
//! ```rust,no_run
//! use bmr_advisor::advice::{build_nutrition_advice_request, submit};
//! use bmr_advisor::llm::{TextCompletionConfig, TextCompletionProvider};
//!
//! # async fn run() -> bmr_advisor::errors::AppResult<()> {
//! let provider = TextCompletionProvider::new(TextCompletionConfig::default())?;
//! let request = build_nutrition_advice_request("How much fiber do I need?", None);
//! let reply = submit(&provider, &request).await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

mod builders;
mod image;

pub use builders::{
    build_bmr_analysis_request, build_diet_plan_request, build_food_analysis_request,
    build_nutrition_advice_request, AdviceBuilder,
};
pub use image::{build_food_image_url, FoodImageUrlBuilder};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use bmr_core::constants::advice::{MAX_TEMPERATURE, MIN_TEMPERATURE};

use crate::config::advice::AdviceTemperatures;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{ActivityLevel, BmrResult, Gender};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Kind of advice being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    /// Personalized diet plan
    DietPlan,
    /// Nutritional breakdown of a food
    FoodAnalysis,
    /// Free-form nutrition question
    NutritionAdvice,
    /// Insights on a BMR value
    BmrAnalysis,
}

/// One ephemeral advice request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// What the request asks for
    pub kind: AdviceKind,
    /// System instruction, sent first when present
    pub system_prompt: Option<String>,
    /// The single user message
    pub user_content: String,
    /// Sampling temperature in `[0.0, 3.0]`
    pub temperature: f32,
    /// Output token ceiling
    pub max_tokens: u32,
}

impl AdviceRequest {
    /// Check the temperature lies in `[0.0, 3.0]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming `temperature`
    pub fn validate(&self) -> AppResult<()> {
        if (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            Ok(())
        } else {
            Err(AppError::invalid_field(
                "temperature",
                format!(
                    "temperature must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE}, got {}",
                    self.temperature
                ),
            ))
        }
    }

    /// Message list: optional system message, then the user message
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.system_prompt
            .iter()
            .map(ChatMessage::system)
            .chain(std::iter::once(ChatMessage::user(self.user_content.as_str())))
            .collect()
    }

    /// Equivalent chat request for an [`LlmProvider`]
    #[must_use]
    pub fn to_chat_request(&self) -> ChatRequest {
        ChatRequest::new(self.messages())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

/// Raw reply text, or a classified failure
pub type AdviceResult = AppResult<String>;

/// Submit one advice request and return the first choice's text
///
/// # Errors
///
/// - `InvalidInput` when the temperature is out of range; nothing is sent
/// - `ExternalNetworkFailure` on connection errors and timeouts
/// - `ExternalServiceError` (with status) on non-success responses
/// - `ExternalResponseMalformed` when the reply text is missing
#[instrument(skip(provider, request), fields(kind = ?request.kind, provider = provider.name()))]
pub async fn submit<P>(provider: &P, request: &AdviceRequest) -> AdviceResult
where
    P: LlmProvider + ?Sized,
{
    request.validate()?;
    let response = provider.complete(&request.to_chat_request()).await?;
    debug!(reply_len = response.content.len(), "Advice reply received");
    Ok(response.content)
}

/// Couples a shared provider with the request builders
///
/// Cheap to clone; clones share the provider.
#[derive(Clone)]
pub struct AdviceService {
    provider: Arc<dyn LlmProvider>,
    builder: AdviceBuilder,
}

impl AdviceService {
    /// Service with default temperatures
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            builder: AdviceBuilder::default(),
        }
    }

    /// Service with custom temperatures
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a temperature is outside `[0.0, 3.0]`
    pub fn with_temperatures(
        provider: Arc<dyn LlmProvider>,
        temperatures: AdviceTemperatures,
    ) -> Result<Self, AppError> {
        Ok(Self {
            provider,
            builder: AdviceBuilder::new(temperatures)?,
        })
    }

    /// Request builder used by this service
    #[must_use]
    pub const fn builder(&self) -> &AdviceBuilder {
        &self.builder
    }

    /// Generate a diet plan
    ///
    /// # Errors
    ///
    /// See [`submit`]
    pub async fn diet_plan(&self, bmr_result: &BmrResult, goal: &str, diet_type: &str) -> AdviceResult {
        let request = self.builder.diet_plan(bmr_result, goal, diet_type);
        submit(self.provider.as_ref(), &request).await
    }

    /// Analyze a food description
    ///
    /// # Errors
    ///
    /// See [`submit`]
    pub async fn analyze_food(&self, food_description: &str) -> AdviceResult {
        let request = self.builder.food_analysis(food_description);
        submit(self.provider.as_ref(), &request).await
    }

    /// Answer a nutrition question
    ///
    /// # Errors
    ///
    /// See [`submit`]
    pub async fn nutrition_advice(&self, question: &str, context: Option<&str>) -> AdviceResult {
        let request = self.builder.nutrition_advice(question, context);
        submit(self.provider.as_ref(), &request).await
    }

    /// Explain a BMR value
    ///
    /// # Errors
    ///
    /// See [`submit`]
    pub async fn bmr_analysis(
        &self,
        bmr: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> AdviceResult {
        let request = self.builder.bmr_analysis(bmr, age, gender, activity_level);
        submit(self.provider.as_ref(), &request).await
    }
}
