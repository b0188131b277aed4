// ABOUTME: System prompts for advice requests loaded at compile time
// ABOUTME: Nutritionist, nutrition-expert, assistant and fitness-expert personas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Persona for diet plan requests
pub const NUTRITIONIST_PROMPT: &str = include_str!("nutritionist.md");

/// Persona for food analysis requests
pub const NUTRITION_EXPERT_PROMPT: &str = include_str!("nutrition_expert.md");

/// Persona for free-form nutrition questions
///
/// Carries five directives: conversational tone, practical tips, cite facts,
/// encourage habits, defer medical questions to professionals.
pub const NUTRITION_ASSISTANT_PROMPT: &str = include_str!("nutrition_assistant.md");

/// Persona for BMR analysis requests
pub const FITNESS_EXPERT_PROMPT: &str = include_str!("fitness_expert.md");

/// Persona text with the trailing newline of the source file removed
#[must_use]
pub fn persona(prompt: &'static str) -> &'static str {
    prompt.trim_end()
}
