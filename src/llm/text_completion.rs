// ABOUTME: HTTP provider for the hosted OpenAI-style text-completion endpoint
// ABOUTME: One POST per call with bounded timeouts and classified failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! # Text-Completion Provider
//!
//! Talks to a single endpoint, `POST {base_url}/openai`, with the body
//!
//! ```json
//! {
//!   "model": "openai",
//!   "messages": [{"role": "system", "content": "..."}, {"role": "user", "content": "..."}],
//!   "temperature": 0.8,
//!   "max_tokens": 1000
//! }
//! ```
//!
//! and reads the reply from `choices[0].message.content`.
//!
//! Failures map onto the error taxonomy:
//! - connection error or connect/read timeout: `ExternalNetworkFailure`
//! - non-2xx status: `ExternalServiceError` carrying the status
//! - 2xx with an unexpected body: `ExternalResponseMalformed`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use crate::constants::advice::{
    COMPLETION_PATH, DEFAULT_MODEL, DEFAULT_TEXT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_OUTPUT_TOKENS,
    MAX_TIMEOUT_SECS,
};
use crate::errors::AppError;

/// Longest slice of an error body copied into an error message
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for CompletionMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the text-completion provider
#[derive(Debug, Clone)]
pub struct TextCompletionConfig {
    /// Base URL of the service; `/openai` is appended
    pub base_url: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Time allowed to establish the connection
    pub connect_timeout: Duration,
    /// Time allowed between reads of the response
    pub read_timeout: Duration,
    /// Time allowed to send the request
    pub write_timeout: Duration,
}

impl TextCompletionConfig {
    /// Configuration pointing at another base URL, everything else default
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Upper bound for a whole call: the sum of the three phase timeouts
    ///
    /// reqwest has no write-phase timeout, so the write phase is bounded by this ceiling.
    /// Saturates at `Duration::MAX`.
    #[must_use]
    pub const fn request_ceiling(&self) -> Duration {
        self.connect_timeout
            .saturating_add(self.read_timeout)
            .saturating_add(self.write_timeout)
    }

    /// Check every phase timeout is non-zero and at most one hour
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first out-of-range phase
    pub fn validate(&self) -> Result<(), AppError> {
        let max = Duration::from_secs(MAX_TIMEOUT_SECS);
        let timeouts = [
            ("connect", self.connect_timeout),
            ("read", self.read_timeout),
            ("write", self.write_timeout),
        ];
        for (phase, timeout) in timeouts {
            if timeout.is_zero() || timeout > max {
                return Err(AppError::config(format!(
                    "{phase} timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds, got {}s",
                    timeout.as_secs()
                )));
            }
        }
        Ok(())
    }
}

impl Default for TextCompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TEXT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Text-completion provider backed by one shared `reqwest::Client`
///
/// Construct once and pass by reference; the client's connection pool is
/// shared read-only across concurrent calls.
pub struct TextCompletionProvider {
    client: Client,
    config: TextCompletionConfig,
}

impl TextCompletionProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for out-of-range timeouts, or an error if the
    /// HTTP client cannot be created.
    pub fn new(config: TextCompletionConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.request_ceiling())
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to create HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self { client, config })
    }

    /// Configuration this provider was built with
    #[must_use]
    pub const fn config(&self) -> &TextCompletionConfig {
        &self.config
    }

    /// Completion endpoint URL
    #[must_use]
    pub fn completion_url(&self) -> String {
        format!(
            "{}/{COMPLETION_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn classify_transport_error(error: reqwest::Error) -> AppError {
        let message = if error.is_timeout() {
            format!("Request to completion endpoint timed out: {error}")
        } else if error.is_connect() {
            format!("Cannot connect to completion endpoint: {error}")
        } else {
            format!("Transport error talking to completion endpoint: {error}")
        };
        AppError::network_failure(message).with_source(error)
    }

    fn status_error(status: StatusCode, body: &str) -> AppError {
        let preview: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
        AppError::remote_status(
            status.as_u16(),
            format!("Completion endpoint returned {status}: {preview}"),
        )
    }

    fn parse_reply(body: &str) -> Result<ChatResponse, AppError> {
        let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| {
            AppError::malformed_response(format!("Completion body is not the expected JSON: {e}"))
                .with_source(e)
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::malformed_response("Completion returned no choices"))?;

        let content = choice.message.content.ok_or_else(|| {
            AppError::malformed_response("First choice has no message content")
        })?;

        Ok(ChatResponse {
            content,
            model: parsed.model,
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl LlmProvider for TextCompletionProvider {
    fn name(&self) -> &'static str {
        "text-completion"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let body = CompletionRequest {
            model: request.model.as_deref().unwrap_or(&self.config.model),
            messages: request.messages.iter().map(CompletionMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens.unwrap_or(MAX_OUTPUT_TOKENS),
        };

        for (i, msg) in body.messages.iter().enumerate() {
            debug!("Message[{i}] role={}, content_len={}", msg.role, msg.content.len());
        }

        let response = self
            .client
            .post(self.completion_url())
            .json(&body)
            .send()
            .await
            .map_err(Self::classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body));
        }

        let text = response
            .text()
            .await
            .map_err(Self::classify_transport_error)?;

        let reply = Self::parse_reply(&text)?;
        debug!(
            "Received completion: {} chars, finish_reason: {:?}",
            reply.content.len(),
            reply.finish_reason
        );
        Ok(reply)
    }
}
