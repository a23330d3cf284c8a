// ABOUTME: UniConnect assistant CLI - terminal surface for the campus reply service
// ABOUTME: Interactive chat, one-shot questions, and the static demo catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! UniConnect assistant command-line tool
//!
//! Usage:
//! ```bash
//! # Interactive chat with the campus assistant
//! uniconnect-assistant chat
//!
//! # One-shot question
//! uniconnect-assistant ask "cari kos murah dong"
//!
//! # Nearby partner directories
//! uniconnect-assistant partners --category laundry
//!
//! # Featured dormitory listings as JSON
//! uniconnect-assistant dorms --json
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use uniconnect_assistant::assistant::CampusAssistant;
use uniconnect_assistant::catalog::{
    service_directory, ServiceCategory, ServiceDirectory, DORM_LISTINGS, PAYMENT_SIMULATIONS,
    SERVICE_DIRECTORIES,
};
use uniconnect_assistant::config::AssistantConfig;
use uniconnect_assistant::logging::init_logging;
use uniconnect_assistant::models::{TranscriptMessage, GREETING};

#[derive(Parser)]
#[command(
    name = "uniconnect-assistant",
    about = "UniConnect campus assistant CLI",
    long_about = "Terminal surface for the UniConnect demo: chat with the campus assistant \
                  and browse the static partner, payment, and dormitory catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Interactive chat with the campus assistant
    Chat,

    /// Ask the assistant a single question
    Ask {
        /// The question to ask
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// Show nearby service partner directories
    Partners {
        /// Restrict to one category (laundry, print, ojek)
        #[arg(long)]
        category: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the payment-method simulators
    Payments {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the featured dormitory listings
    Dorms {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AssistantConfig::from_env();
    if cli.verbose {
        config.logging.level = "debug".into();
    }
    init_logging(&config.logging)?;

    match cli.command {
        Command::Chat => run_chat(&config).await,
        Command::Ask { prompt } => run_ask(&config, &prompt.join(" ")).await,
        Command::Partners { category, json } => print_partners(category.as_deref(), json),
        Command::Payments { json } => print_payments(json),
        Command::Dorms { json } => print_dorms(json),
    }
}

/// Interactive transcript loop on stdin/stdout
///
/// One call in flight at a time: the loop blocks on the reply before
/// accepting the next line, matching the widget this replaces.
async fn run_chat(config: &AssistantConfig) -> Result<()> {
    let assistant = CampusAssistant::from_config(config);
    info!(configured = assistant.is_configured(), "Starting chat");

    let mut transcript = vec![TranscriptMessage::model(GREETING)];
    print_message(transcript.last());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Anda> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }
        if prompt == "/quit" || prompt == "/exit" {
            break;
        }

        transcript.push(TranscriptMessage::user(prompt));
        let reply = assistant.reply(prompt).await;
        transcript.push(TranscriptMessage::model(reply));
        print_message(transcript.last());
    }

    info!(messages = transcript.len(), "Chat ended");
    Ok(())
}

/// One-shot question
async fn run_ask(config: &AssistantConfig, prompt: &str) -> Result<()> {
    let assistant = CampusAssistant::from_config(config);
    let reply = assistant.reply(prompt).await;
    println!("{reply}");
    Ok(())
}

fn print_message(message: Option<&TranscriptMessage>) {
    if let Some(msg) = message {
        println!("UniConnect AI> {}", msg.text);
    }
}

fn print_partners(category: Option<&str>, json: bool) -> Result<()> {
    let directories: Vec<&ServiceDirectory> = match category {
        Some(value) => {
            let Some(parsed) = ServiceCategory::parse(value) else {
                bail!("unknown category '{value}' (expected laundry, print, or ojek)");
            };
            vec![service_directory(parsed)]
        }
        None => SERVICE_DIRECTORIES.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&directories)?);
        return Ok(());
    }

    for directory in directories {
        println!("{}", directory.title);
        for item in directory.items {
            println!("  - {item}");
        }
        println!();
    }
    Ok(())
}

fn print_payments(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(PAYMENT_SIMULATIONS)?);
        return Ok(());
    }

    for method in PAYMENT_SIMULATIONS {
        println!("{} - {}", method.title, method.details);
        for item in method.items {
            println!("  - {item}");
        }
        match method.action_url {
            Some(url) => println!("  [{}] {url}", method.action_label),
            None => println!("  [{}]", method.action_label),
        }
        println!();
    }
    Ok(())
}

fn print_dorms(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(DORM_LISTINGS)?);
        return Ok(());
    }

    for dorm in DORM_LISTINGS {
        println!(
            "{} ({:?}) - {} / bulan - {} - ⭐ {:.1}",
            dorm.name, dorm.occupancy, dorm.price, dorm.distance, dorm.rating
        );
        println!("  {}", dorm.description);
        println!("  Fasilitas: {}", dorm.facilities.join(", "));
        for review in dorm.reviews {
            println!("  \"{}\" - {} ({})", review.comment, review.user, review.date);
        }
        println!();
    }
    Ok(())
}
