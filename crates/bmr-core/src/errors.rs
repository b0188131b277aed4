// ABOUTME: Unified error type and error codes for calculator and advice failures
// ABOUTME: Classifies invalid input, network failures, remote errors and malformed replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! # Unified Error Handling System
//!
//! Every failure in this workspace is an [`AppError`] tagged with an
//! [`ErrorCode`]. The codes form a small taxonomy:
//!
//! | Code                        | Raised by            | Retryable |
//! |-----------------------------|----------------------|-----------|
//! | `InvalidInput`              | metabolic calculator | no        |
//! | `ExternalNetworkFailure`    | advice submission    | yes       |
//! | `ExternalServiceError`      | advice submission    | caller    |
//! | `ExternalResponseMalformed` | advice submission    | no        |
//!
//! `ConfigInvalid` and `InternalError` cover environment configuration and
//! client construction.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A calculator precondition was violated
    InvalidInput = 3000,

    // External Services (5000-5999)
    /// The remote service answered with a non-success status
    ExternalServiceError = 5000,
    /// Connect/read/write timeout or connection error
    ExternalNetworkFailure = 5001,
    /// Success status but the body lacks the expected reply text
    ExternalResponseMalformed = 5004,

    // Configuration (6000-6999)
    /// Configuration value is present but unusable
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
}

impl ErrorCode {
    /// HTTP status a service embedding this core should answer with
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ExternalServiceError | Self::ExternalResponseMalformed => 502,
            Self::ExternalNetworkFailure => 504,
            Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ExternalServiceError => "The advice service returned an error status",
            Self::ExternalNetworkFailure => "The advice service could not be reached in time",
            Self::ExternalResponseMalformed => "The advice service reply was not understood",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether every error of this code is worth retrying
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::ExternalNetworkFailure)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the offending input field, for `InvalidInput`
    pub field: Option<String>,
    /// HTTP status returned by the remote service, for `ExternalServiceError`
    pub status: Option<u16>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Name of the input field that caused an `InvalidInput` error
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.context.field.as_deref()
    }

    /// Remote HTTP status carried by an `ExternalServiceError`
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.context.status
    }

    /// Whether retrying the failed call could succeed
    ///
    /// Remote status errors are retryable only for 408, 429 and 5xx.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self.code {
            ErrorCode::ExternalServiceError => self
                .context
                .status
                .is_some_and(|s| s == 408 || s == 429 || s >= 500),
            code => code.is_transient(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope, used by the CLI for machine-readable output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Remote status, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Whether the caller may retry
    pub retryable: bool,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let retryable = error.is_retryable();
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                field: error.context.field,
                status: error.context.status,
                retryable,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input naming the violated field
    #[must_use]
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorCode::InvalidInput, message);
        error.context.field = Some(field.to_owned());
        error
    }

    /// Connection error or connect/read/write timeout
    #[must_use]
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalNetworkFailure, message)
    }

    /// Non-success status from the remote service
    #[must_use]
    pub fn remote_status(status: u16, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorCode::ExternalServiceError, message);
        error.context.status = Some(status);
        error
    }

    /// Success status with a body that lacks the expected fields
    #[must_use]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalResponseMalformed, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
