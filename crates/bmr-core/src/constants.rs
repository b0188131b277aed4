// ABOUTME: Fixed constants for energy conversion and the advice wire format
// ABOUTME: Caloric densities, body-mass energy, calorie floor, endpoints and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! # Constants Module

/// Energy conversion factors
pub mod energy {
    /// Protein energy density (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density (kcal/g)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat energy density (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Energy stored in one kilogram of body mass (kcal)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Days over which a weekly goal rate is spread
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Lowest daily calorie target ever recommended (kcal/day)
    pub const MIN_TARGET_CALORIES: f64 = 1200.0;
}

/// Advice request and wire-format defaults
pub mod advice {
    /// Output token ceiling sent with every completion request
    pub const MAX_OUTPUT_TOKENS: u32 = 1000;
    /// Lowest accepted sampling temperature
    pub const MIN_TEMPERATURE: f32 = 0.0;
    /// Highest accepted sampling temperature
    pub const MAX_TEMPERATURE: f32 = 3.0;
    /// Model identifier sent to the completion endpoint
    pub const DEFAULT_MODEL: &str = "openai";
    /// Base URL of the text-completion service
    pub const DEFAULT_TEXT_BASE_URL: &str = "https://text.pollinations.ai";
    /// Path appended to the base URL for completions
    pub const COMPLETION_PATH: &str = "openai";
    /// Per-phase (connect/read/write) timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Largest accepted per-phase timeout in seconds
    pub const MAX_TIMEOUT_SECS: u64 = 3600;
}

/// Food image URL defaults
pub mod image {
    /// Host of the image-generation service
    pub const DEFAULT_IMAGE_HOST: &str = "image.pollinations.ai";
    /// Requested image width in pixels
    pub const WIDTH: u32 = 512;
    /// Requested image height in pixels
    pub const HEIGHT: u32 = 512;
    /// Image model identifier
    pub const MODEL: &str = "flux";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Service name
    pub const BMR_ADVISOR: &str = "bmr-advisor";
}
