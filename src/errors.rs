// ABOUTME: Re-exports the shared error taxonomy from bmr-core
// ABOUTME: Keeps `crate::errors` paths stable for the rest of the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

//! Unified error handling
//!
//! All fallible operations return [`AppResult`]; see [`ErrorCode`] for the categories.

pub use bmr_core::errors::*;
