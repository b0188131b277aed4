// ABOUTME: Deterministic image-generation URL for a food name
// ABOUTME: Percent-encodes a fixed photography prompt; performs no network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

use bmr_core::constants::image::{DEFAULT_IMAGE_HOST, HEIGHT, MODEL, WIDTH};
use bmr_core::errors::{AppError, AppResult};
use url::Url;

/// Builds image URLs against one image-generation host
#[derive(Debug, Clone)]
pub struct FoodImageUrlBuilder {
    host: String,
}

impl Default for FoodImageUrlBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_IMAGE_HOST.to_owned(),
        }
    }
}

impl FoodImageUrlBuilder {
    /// Builder for another host, given without scheme (e.g. `images.example.com`)
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Image URL for `food_name`
    ///
    /// `https://<host>/prompt/<encoded prompt>?width=512&height=512&model=flux`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the configured host does not form a valid URL
    pub fn build(&self, food_name: &str) -> AppResult<Url> {
        let prompt =
            format!("professional food photography of {food_name}, high quality, appetizing");
        let encoded = urlencoding::encode(&prompt);

        Url::parse(&format!(
            "https://{}/prompt/{encoded}?width={WIDTH}&height={HEIGHT}&model={MODEL}",
            self.host
        ))
        .map_err(|e| {
            AppError::config(format!("Invalid image host '{}': {e}", self.host)).with_source(e)
        })
    }
}

/// Image URL for `food_name` on the default image host
///
/// # Errors
///
/// Never fails for the default host; see [`FoodImageUrlBuilder::build`]
pub fn build_food_image_url(food_name: &str) -> AppResult<Url> {
    FoodImageUrlBuilder::default().build(food_name)
}
