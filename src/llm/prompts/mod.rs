// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the UniConnect campus assistant persona sent with every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! # System Prompts
//!
//! This module provides system prompts for LLM interactions.
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance and are constant for the process lifetime.

/// UniConnect campus assistant persona
///
/// Defines the assistant's tone (casual, Indonesian-student-facing) and
/// its topic scope: dorm hunting, saving money, study tips, and food
/// recommendations around campus. Includes knowledge of the featured
/// dormitory listings shown in the app.
pub const CAMPUS_PERSONA: &str = include_str!("campus_persona.md");

/// Get the persona/system prompt for the campus assistant
///
/// Sent alongside every user prompt; not user-editable.
#[must_use]
pub const fn campus_persona() -> &'static str {
    CAMPUS_PERSONA
}
