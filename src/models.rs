// ABOUTME: Chat transcript message types owned by the presentation layer
// ABOUTME: The reply service itself is stateless and never stores these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! # Transcript Models
//!
//! Message types for the chat transcript the caller maintains. The reply
//! service only produces the `text` payload of a model-authored message;
//! building and keeping the transcript is the presentation layer's job.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Greeting shown as the first transcript entry when a chat opens
pub const GREETING: &str =
    "Halo! Aku UniConnect AI. Ada yang bisa aku bantu seputar kampus hari ini?";

/// Author of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    /// The student typing into the chat
    User,
    /// The assistant model
    Model,
}

/// One entry in a chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// Author of the message
    pub role: TranscriptRole,
    /// Display text
    pub text: String,
    /// Creation time as epoch milliseconds
    pub timestamp: i64,
}

impl TranscriptMessage {
    /// Create a message stamped with the current time
    #[must_use]
    pub fn new(role: TranscriptRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Create a user-authored message
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TranscriptRole::User, text)
    }

    /// Create a model-authored message
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(TranscriptRole::Model, text)
    }
}
