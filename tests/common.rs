// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a stub completion server, reference profiles and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMR Advisor Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `bmr_advisor`

use std::sync::{Arc, Once};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use bmr_advisor::intelligence::{ActivityLevel, Gender, GoalType, UserBiometrics};
use bmr_advisor::llm::{TextCompletionConfig, TextCompletionProvider};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Reference profiles
// ============================================================================

/// 30-year-old male, 180 cm, 80 kg, moderately active, maintaining
pub const fn male_reference() -> UserBiometrics {
    UserBiometrics {
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal_type: GoalType::Maintain,
        goal_rate_kg_per_week: 0.0,
    }
}

/// 30-year-old female, 165 cm, 60 kg, sedentary, maintaining
pub const fn female_reference() -> UserBiometrics {
    UserBiometrics {
        age: 30,
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 60.0,
        activity_level: ActivityLevel::Sedentary,
        goal_type: GoalType::Maintain,
        goal_rate_kg_per_week: 0.0,
    }
}

// ============================================================================
// Stub completion server
// ============================================================================

/// What the stub answers to every `POST /openai`
#[derive(Debug, Clone)]
pub enum StubReply {
    /// 200 with a well-formed completion carrying this text
    Completion(String),
    /// The given status with the given body
    Status(u16, String),
    /// 200 with this raw body
    Raw(String),
    /// Wait this long before answering with a well-formed completion
    Delayed(Duration, String),
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    captured: Arc<Mutex<Vec<Value>>>,
}

/// Local HTTP server standing in for the text-completion service
pub struct StubServer {
    /// Base URL to configure the provider with
    pub base_url: String,
    captured: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Start a stub on an ephemeral port
    pub async fn start(reply: StubReply) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            captured: Arc::clone(&captured),
        };
        let app = Router::new()
            .route("/openai", post(handle_completion))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            captured,
            handle,
        }
    }

    /// Request bodies received so far
    pub async fn requests(&self) -> Vec<Value> {
        self.captured.lock().await.clone()
    }

    /// Provider pointed at this stub with short timeouts
    pub fn provider(&self) -> TextCompletionProvider {
        TextCompletionProvider::new(self.config()).unwrap()
    }

    /// Provider configuration pointed at this stub with short timeouts
    pub fn config(&self) -> TextCompletionConfig {
        TextCompletionConfig {
            connect_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(2),
            write_timeout: Duration::from_secs(2),
            ..TextCompletionConfig::with_base_url(&self.base_url)
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A well-formed completion body with one choice
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "stub-1",
        "object": "chat.completion",
        "model": "openai",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

async fn handle_completion(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.captured.lock().await.push(body);

    match state.reply {
        StubReply::Completion(content) => Json(completion_body(&content)).into_response(),
        StubReply::Status(code, body) => (
            StatusCode::from_u16(code).unwrap(),
            [(header::CONTENT_TYPE, "text/plain")],
            body,
        )
            .into_response(),
        StubReply::Raw(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        StubReply::Delayed(delay, content) => {
            tokio::time::sleep(delay).await;
            Json(completion_body(&content)).into_response()
        }
    }
}

/// Base URL on which nothing is listening
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
