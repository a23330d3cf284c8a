// ABOUTME: Campus assistant reply service mapping one user prompt to one display string
// ABOUTME: Absorbs every failure mode into fixed fallback messages, never erroring outward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! # Campus Assistant Reply Service
//!
//! The one contract-bearing component of UniConnect: given a user
//! utterance, produce a display-ready reply string via the configured LLM
//! provider, or one of three fixed fallback messages. The function is
//! total: no error ever crosses this boundary, because the consumer is a
//! chat transcript with no error-rendering affordance.
//!
//! The provider is an explicit dependency injected at construction rather
//! than ambient state, so tests substitute a fake and no teardown logic is
//! needed. A missing credential is a supported state, not an error: the
//! assistant is simply constructed unconfigured and short-circuits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uniconnect_assistant::assistant::CampusAssistant;
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = CampusAssistant::from_env();
//!     println!("{}", assistant.reply("cari kos murah dong").await);
//! }
//! ```

use tracing::{debug, error};

use crate::config::AssistantConfig;
use crate::llm::{campus_persona, ChatMessage, ChatRequest, GeminiProvider, LlmProvider};

/// Reply when no API credential is configured (expected demo state)
pub const NOT_CONFIGURED_REPLY: &str =
    "Maaf, kunci API belum dikonfigurasi. Hubungi administrator.";

/// Reply when the model answered successfully but with no usable text
pub const EMPTY_PAYLOAD_REPLY: &str = "Maaf, saya sedang tidak bisa berpikir sekarang.";

/// Reply when the remote call failed in any way
pub const SERVER_BUSY_REPLY: &str =
    "Terjadi kesalahan saat menghubungi server AI. Coba lagi nanti ya!";

// ============================================================================
// Outcome Taxonomy
// ============================================================================

/// Closed set of outcomes a reply attempt can have
///
/// The error-to-string collapsing is deliberate demo-grade UX; modeling it
/// as variants keeps the mapping explicit and independently testable
/// instead of buried in nested conditionals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// No credential configured; no network attempt was made
    Unconfigured,
    /// The remote call failed (network, non-2xx, malformed response)
    TransportFailure,
    /// The remote call succeeded but carried no usable text
    EmptyPayload,
    /// The model produced text, passed through verbatim
    Success(String),
}

impl ReplyOutcome {
    /// Resolve the outcome to its display string
    ///
    /// Every variant yields a non-empty, conversational message.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Unconfigured => NOT_CONFIGURED_REPLY.to_owned(),
            Self::TransportFailure => SERVER_BUSY_REPLY.to_owned(),
            Self::EmptyPayload => EMPTY_PAYLOAD_REPLY.to_owned(),
            Self::Success(text) => text,
        }
    }
}

// ============================================================================
// Reply Service
// ============================================================================

/// The UniConnect campus assistant
///
/// Stateless across calls: each reply is independent and no conversation
/// history is sent to the remote model beyond the current prompt.
pub struct CampusAssistant {
    provider: Option<Box<dyn LlmProvider>>,
}

impl CampusAssistant {
    /// Create an assistant backed by the given provider
    #[must_use]
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Create an assistant with no credential configured
    ///
    /// Every reply short-circuits to the not-configured message.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Build an assistant from environment configuration
    ///
    /// Never fails: a missing `GEMINI_API_KEY` yields an unconfigured
    /// assistant rather than an error.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&AssistantConfig::from_env())
    }

    /// Build an assistant from an already-loaded configuration
    #[must_use]
    pub fn from_config(config: &AssistantConfig) -> Self {
        config.gemini_api_key.as_ref().map_or_else(
            || {
                debug!("No Gemini API key configured, assistant replies with fallback only");
                Self::unconfigured()
            },
            |api_key| {
                Self::new(Box::new(
                    GeminiProvider::new(api_key)
                        .with_default_model(config.model.default_model.clone()),
                ))
            },
        )
    }

    /// Whether a provider credential is configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the backing provider, if configured
    #[must_use]
    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_deref().map(LlmProvider::name)
    }

    /// Classify one reply attempt into its outcome
    ///
    /// Single attempt per invocation: no retries, no backoff, no circuit
    /// breaking. Whatever timeout the transport enforces is inherited.
    pub async fn classify(&self, prompt: &str) -> ReplyOutcome {
        let Some(provider) = self.provider.as_deref() else {
            return ReplyOutcome::Unconfigured;
        };

        let request = ChatRequest::new(vec![
            ChatMessage::system(campus_persona()),
            ChatMessage::user(prompt),
        ]);

        match provider.complete(&request).await {
            Ok(response) if response.content.trim().is_empty() => ReplyOutcome::EmptyPayload,
            Ok(response) => ReplyOutcome::Success(response.content),
            Err(e) => {
                error!(error = %e, provider = provider.name(), "Assistant reply failed");
                ReplyOutcome::TransportFailure
            }
        }
    }

    /// Map one free-text prompt to one display-ready reply string
    ///
    /// Total function: always resolves to a non-empty string, never errors.
    pub async fn reply(&self, prompt: &str) -> String {
        self.classify(prompt).await.into_text()
    }
}

impl std::fmt::Debug for CampusAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusAssistant")
            .field("configured", &self.is_configured())
            .field("provider", &self.provider_name())
            .finish()
    }
}
