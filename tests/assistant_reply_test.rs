// ABOUTME: Unit tests for the campus assistant reply service
// ABOUTME: Verifies the total-function contract and the sentinel mapping for every outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use uniconnect_assistant::assistant::{
    CampusAssistant, ReplyOutcome, EMPTY_PAYLOAD_REPLY, NOT_CONFIGURED_REPLY, SERVER_BUSY_REPLY,
};
use uniconnect_assistant::errors::AppError;
use uniconnect_assistant::llm::{
    campus_persona, ChatRequest, ChatResponse, LlmProvider, MessageRole,
};
use uniconnect_assistant::models::{TranscriptMessage, TranscriptRole, GREETING};

// ============================================================================
// Mock Provider
// ============================================================================

enum MockBehavior {
    /// Resolve with the given text
    Succeed(&'static str),
    /// Fail with a transport-style error
    Fail(&'static str),
}

/// Fake provider counting invocations and capturing the last request
struct MockProvider {
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<ChatRequest>>>,
}

impl MockProvider {
    fn new(behavior: MockBehavior) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Option<ChatRequest>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_request = Arc::new(Mutex::new(None));
        let provider = Self {
            behavior,
            calls: Arc::clone(&calls),
            last_request: Arc::clone(&last_request),
        };
        (provider, calls, last_request)
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["mock-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match self.behavior {
            MockBehavior::Succeed(text) => Ok(ChatResponse {
                content: text.to_owned(),
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            MockBehavior::Fail(message) => Err(AppError::external_service(message)),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

fn assistant_with(behavior: MockBehavior) -> (CampusAssistant, Arc<AtomicUsize>) {
    let (provider, calls, _) = MockProvider::new(behavior);
    (CampusAssistant::new(Box::new(provider)), calls)
}

// ============================================================================
// Unconfigured State
// ============================================================================

#[tokio::test]
async fn test_unconfigured_returns_sentinel_without_network() {
    let assistant = CampusAssistant::unconfigured();
    assert!(!assistant.is_configured());
    assert_eq!(assistant.provider_name(), None);

    let reply = assistant.reply("cari kos murah").await;
    assert_eq!(reply, NOT_CONFIGURED_REPLY);
}

#[tokio::test]
async fn test_unconfigured_sentinel_is_stable_across_calls() {
    let assistant = CampusAssistant::unconfigured();
    let first = assistant.reply("cari kos murah").await;
    let second = assistant.reply("tips hemat uang saku").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unconfigured_classifies_without_invoking_provider() {
    let assistant = CampusAssistant::unconfigured();
    assert_eq!(
        assistant.classify("apapun").await,
        ReplyOutcome::Unconfigured
    );
}

// ============================================================================
// Failure Absorption
// ============================================================================

#[tokio::test]
async fn test_transport_failure_resolves_to_busy_sentinel() {
    let (assistant, calls) = assistant_with(MockBehavior::Fail("request timed out"));

    let reply = assistant.reply("rekomendasi makan").await;
    assert_eq!(reply, SERVER_BUSY_REPLY);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_payload_resolves_to_unable_sentinel() {
    let (assistant, _) = assistant_with(MockBehavior::Succeed(""));
    assert_eq!(assistant.reply("halo").await, EMPTY_PAYLOAD_REPLY);
}

#[tokio::test]
async fn test_blank_payload_counts_as_empty() {
    let (assistant, _) = assistant_with(MockBehavior::Succeed("   \n  "));
    assert_eq!(assistant.reply("halo").await, EMPTY_PAYLOAD_REPLY);
}

// ============================================================================
// Pass-Through
// ============================================================================

#[tokio::test]
async fn test_success_passes_text_through_verbatim() {
    let (assistant, calls) = assistant_with(MockBehavior::Succeed("Halo!"));

    let reply = assistant.reply("sapa aku dong").await;
    assert_eq!(reply, "Halo!");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_each_reply_makes_exactly_one_provider_call() {
    let (assistant, calls) = assistant_with(MockBehavior::Succeed("Oke kak!"));

    assistant.reply("satu").await;
    assistant.reply("dua").await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Total-Function Contract
// ============================================================================

#[tokio::test]
async fn test_reply_is_always_non_empty() {
    for behavior in [
        MockBehavior::Succeed("Jawaban."),
        MockBehavior::Succeed(""),
        MockBehavior::Fail("boom"),
    ] {
        let (assistant, _) = assistant_with(behavior);
        assert!(!assistant.reply("pertanyaan").await.is_empty());
    }

    let unconfigured = CampusAssistant::unconfigured();
    assert!(!unconfigured.reply("pertanyaan").await.is_empty());
}

// ============================================================================
// Request Composition
// ============================================================================

#[tokio::test]
async fn test_request_carries_persona_and_single_prompt() {
    let (provider, _, last_request) = MockProvider::new(MockBehavior::Succeed("Siap!"));
    let assistant = CampusAssistant::new(Box::new(provider));

    assistant.reply("cari kos dekat kampus").await;

    let request = last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert_eq!(request.messages[0].content, campus_persona());
    assert_eq!(request.messages[1].role, MessageRole::User);
    assert_eq!(request.messages[1].content, "cari kos dekat kampus");
}

#[tokio::test]
async fn test_no_history_is_carried_between_calls() {
    let (provider, _, last_request) = MockProvider::new(MockBehavior::Succeed("Oke."));
    let assistant = CampusAssistant::new(Box::new(provider));

    assistant.reply("pertama").await;
    assistant.reply("kedua").await;

    let request = last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[1].content, "kedua");
}

// ============================================================================
// Outcome Mapping
// ============================================================================

#[test]
fn test_outcome_mapping_is_exhaustive() {
    assert_eq!(ReplyOutcome::Unconfigured.into_text(), NOT_CONFIGURED_REPLY);
    assert_eq!(ReplyOutcome::TransportFailure.into_text(), SERVER_BUSY_REPLY);
    assert_eq!(ReplyOutcome::EmptyPayload.into_text(), EMPTY_PAYLOAD_REPLY);
    assert_eq!(
        ReplyOutcome::Success("Halo kak!".to_owned()).into_text(),
        "Halo kak!"
    );
}

#[test]
fn test_sentinels_are_distinct_and_non_empty() {
    let sentinels = [NOT_CONFIGURED_REPLY, EMPTY_PAYLOAD_REPLY, SERVER_BUSY_REPLY];
    for sentinel in sentinels {
        assert!(!sentinel.is_empty());
    }
    assert_ne!(NOT_CONFIGURED_REPLY, EMPTY_PAYLOAD_REPLY);
    assert_ne!(NOT_CONFIGURED_REPLY, SERVER_BUSY_REPLY);
    assert_ne!(EMPTY_PAYLOAD_REPLY, SERVER_BUSY_REPLY);
}

// ============================================================================
// Transcript Models
// ============================================================================

#[test]
fn test_transcript_message_constructors() {
    let user = TranscriptMessage::user("cari kos murah");
    assert_eq!(user.role, TranscriptRole::User);
    assert_eq!(user.text, "cari kos murah");
    assert!(user.timestamp > 0);

    let model = TranscriptMessage::model(GREETING);
    assert_eq!(model.role, TranscriptRole::Model);
    assert_eq!(model.text, GREETING);
}

#[test]
fn test_transcript_role_serialization() {
    let json = serde_json::to_string(&TranscriptRole::Model).unwrap();
    assert_eq!(json, "\"model\"");

    let round_trip: TranscriptRole = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(round_trip, TranscriptRole::User);
}
