// ABOUTME: Re-exports calculator and advice constants from bmr-core
// ABOUTME: Energy densities, calorie floor, endpoint defaults and image parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors

pub use bmr_core::constants::*;
