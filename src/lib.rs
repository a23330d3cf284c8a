// ABOUTME: Main library entry point for the UniConnect campus assistant
// ABOUTME: Provides the Gemini-backed reply service and the static demo catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

#![deny(unsafe_code)]

//! # UniConnect Campus Assistant
//!
//! Library backing the UniConnect demo application: a chat reply service
//! for students backed by Google's Generative Language API, plus the static
//! catalog data (service partners, payment simulators, dormitory listings)
//! the demo dashboard presents.
//!
//! The reply service is a total function: every prompt yields a
//! display-ready string. Missing credentials and remote failures degrade to
//! fixed fallback messages instead of surfacing errors to the caller.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use uniconnect_assistant::assistant::CampusAssistant;
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = CampusAssistant::from_env();
//!     let reply = assistant.reply("cari kos murah dong").await;
//!     println!("{reply}");
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration
// tests (tests/).

/// Campus assistant reply service and its outcome taxonomy
pub mod assistant;

/// Static demo catalog: partner directories, payment simulators, dorms
pub mod catalog;

/// Environment-derived startup configuration
pub mod config;

/// Unified error handling system
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Logging configuration and structured logging setup
pub mod logging;

/// Chat transcript message types
pub mod models;
