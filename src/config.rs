// ABOUTME: Environment-derived startup configuration for the assistant
// ABOUTME: Read once at process start; a missing API credential is a supported state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! # Configuration
//!
//! Environment-only configuration, read once at startup and immutable
//! thereafter. The Gemini credential is optional by design: the demo runs
//! without one, with the assistant degrading to its fallback replies.

use std::env;

use crate::llm::{DEFAULT_MODEL, GEMINI_API_KEY_ENV};
use crate::logging::LoggingConfig;

/// Environment variable overriding the default Gemini model
pub const LLM_MODEL_ENV: &str = "UNICONNECT_LLM_MODEL";

/// Model selection for the LLM provider
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Model identifier sent to the provider
    pub default_model: String,
}

impl Default for LlmModelConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }
}

impl LlmModelConfig {
    /// Read the model override from the environment, falling back to the
    /// fixed default
    #[must_use]
    pub fn from_env() -> Self {
        env::var(LLM_MODEL_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .map_or_else(Self::default, |default_model| Self { default_model })
    }
}

/// Immutable startup configuration for the assistant
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Gemini API credential; `None` means "not configured", which is a
    /// valid state rather than an error
    pub gemini_api_key: Option<String>,
    /// Model selection
    pub model: LlmModelConfig,
    /// Logging setup for the process
    pub logging: LoggingConfig,
}

impl AssistantConfig {
    /// Load configuration from the process environment
    ///
    /// Never fails: every value has a default and the credential is
    /// optional. An empty credential string counts as absent.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var(GEMINI_API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: LlmModelConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// Whether a Gemini credential is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
