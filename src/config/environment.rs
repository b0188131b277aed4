// ABOUTME: Environment-based configuration for the advice transport and image host
// ABOUTME: Reads endpoint, model, per-phase timeouts and temperatures from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! Environment-only configuration
//!
//! | Variable                               | Default                         |
//! |----------------------------------------|---------------------------------|
//! | `BMR_ADVISOR_TEXT_BASE_URL`            | `https://text.pollinations.ai`  |
//! | `BMR_ADVISOR_MODEL`                    | `openai`                        |
//! | `BMR_ADVISOR_IMAGE_HOST`               | `image.pollinations.ai`         |
//! | `BMR_ADVISOR_CONNECT_TIMEOUT_SECS`     | `60`                            |
//! | `BMR_ADVISOR_READ_TIMEOUT_SECS`        | `60`                            |
//! | `BMR_ADVISOR_WRITE_TIMEOUT_SECS`       | `60`                            |
//! | `BMR_ADVISOR_TEMP_DIET_PLAN`           | `0.8`                           |
//! | `BMR_ADVISOR_TEMP_FOOD_ANALYSIS`       | `0.7`                           |
//! | `BMR_ADVISOR_TEMP_NUTRITION_ADVICE`    | `1.0`                           |
//! | `BMR_ADVISOR_TEMP_BMR_ANALYSIS`        | `0.9`                           |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use bmr_core::constants::advice::{DEFAULT_MODEL, DEFAULT_TEXT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use bmr_core::constants::image::DEFAULT_IMAGE_HOST;
use bmr_core::errors::{AppError, AppResult};
use tracing::info;
use url::Url;

use super::advice::AdviceTemperatures;
use crate::llm::TextCompletionConfig;

/// Top-level configuration of the advice side
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Completion endpoint, model and timeouts
    pub completion: TextCompletionConfig,
    /// Host of the image-generation service
    pub image_host: String,
    /// Sampling temperature per advice kind
    pub temperatures: AdviceTemperatures,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            completion: TextCompletionConfig::default(),
            image_host: DEFAULT_IMAGE_HOST.to_owned(),
            temperatures: AdviceTemperatures::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        let completion = TextCompletionConfig {
            base_url: env_var_or("BMR_ADVISOR_TEXT_BASE_URL", DEFAULT_TEXT_BASE_URL),
            model: env_var_or("BMR_ADVISOR_MODEL", DEFAULT_MODEL),
            connect_timeout: Duration::from_secs(parse_env(
                "BMR_ADVISOR_CONNECT_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            read_timeout: Duration::from_secs(parse_env(
                "BMR_ADVISOR_READ_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            write_timeout: Duration::from_secs(parse_env(
                "BMR_ADVISOR_WRITE_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        };

        let defaults = AdviceTemperatures::default();
        let temperatures = AdviceTemperatures {
            diet_plan: parse_env("BMR_ADVISOR_TEMP_DIET_PLAN", defaults.diet_plan)?,
            food_analysis: parse_env("BMR_ADVISOR_TEMP_FOOD_ANALYSIS", defaults.food_analysis)?,
            nutrition_advice: parse_env(
                "BMR_ADVISOR_TEMP_NUTRITION_ADVICE",
                defaults.nutrition_advice,
            )?,
            bmr_analysis: parse_env("BMR_ADVISOR_TEMP_BMR_ANALYSIS", defaults.bmr_analysis)?,
        };

        let config = Self {
            completion,
            image_host: env_var_or("BMR_ADVISOR_IMAGE_HOST", DEFAULT_IMAGE_HOST),
            temperatures,
        };
        config.validate()?;

        info!(
            base_url = %config.completion.base_url,
            model = %config.completion.model,
            image_host = %config.image_host,
            "Advisor configuration loaded"
        );

        Ok(config)
    }

    /// Validate URLs, timeouts (1 to 3600 seconds) and temperatures
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first problem found
    pub fn validate(&self) -> AppResult<()> {
        Url::parse(&self.completion.base_url).map_err(|e| {
            AppError::config(format!(
                "Invalid completion base URL '{}': {e}",
                self.completion.base_url
            ))
        })?;

        self.completion.validate()?;

        if self.image_host.trim().is_empty() || self.image_host.contains("://") {
            return Err(AppError::config(format!(
                "Image host must be a bare host name, got '{}'",
                self.image_host
            )));
        }

        self.temperatures.validate()
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{key}: cannot parse '{raw}': {e}"))),
        _ => Ok(default),
    }
}
