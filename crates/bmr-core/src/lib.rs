// ABOUTME: Core error taxonomy and constants for the BMR advisor
// ABOUTME: Foundation crate shared by the calculator, the advice builders and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

#![deny(unsafe_code)]

//! # BMR Core
//!
//! Foundation crate providing the error taxonomy and the fixed constants used
//! by the metabolic calculator and the advice request builder.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the serializable `ErrorResponse`
//! - **constants**: energy conversion factors and advice wire-format defaults

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
