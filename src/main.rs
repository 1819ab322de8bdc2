// SPDX-License-Identifier: PMPL-1.0-or-later

//! npc-tongues: fantasy-language translation for tabletop chat.
//!
//! CLI front end over the transform library: translate text into a chosen
//! fantasy language, generate pronunciations, or compose complete chat
//! message records ready to append to a campaign log.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use npc_tongues::message::{ChatMessage, MessageIdSource};
use npc_tongues::pronounce::pronounce_named;
use npc_tongues::translate::transform_named;
use npc_tongues::types::Language;

#[derive(Parser)]
#[command(name = "npc-tongues")]
#[command(version = "0.1.0")]
#[command(about = "Fantasy-language translation and pronunciation for tabletop chat")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate text into a fantasy language
    Translate {
        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,

        /// Target language (unknown names pass text through unchanged)
        #[arg(short, long)]
        language: String,

        /// Save the full result as JSON instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Pronounce already-translated text
    Pronounce {
        /// Translated text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language whose syllable pool to use
        #[arg(short, long)]
        language: String,
    },

    /// Compose a complete chat message record
    Compose {
        /// Message text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Target language
        #[arg(short, long)]
        language: String,

        /// Author name on the record
        #[arg(short, long, default_value = "You")]
        author: String,

        /// Save the record as JSON instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported languages
    Languages,
}

fn warn_unknown_language(name: &str) {
    if Language::from_name(name).is_none() {
        println!(
            "{} unknown language '{}' — passing text through unchanged",
            "warning:".yellow().bold(),
            name
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            text,
            language,
            output,
        } => {
            warn_unknown_language(&language);
            let result = transform_named(&text, &language);

            if let Some(output_path) = output {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&output_path, json)?;
                println!("Result saved to: {}", output_path.display());
            } else {
                println!("{}", format!("Translation ({})", result.language).bold().cyan());
                println!("  Original:      {}", result.original);
                println!("  Translated:    {}", result.translated);
                println!("  Pronunciation: {}", result.pronunciation.italic());
            }
        }

        Commands::Pronounce { text, language } => {
            warn_unknown_language(&language);
            println!("{}", pronounce_named(&text, &language));
        }

        Commands::Compose {
            text,
            language,
            author,
            output,
        } => {
            warn_unknown_language(&language);
            let mut ids = MessageIdSource::new();
            let msg = ChatMessage::compose(&author, &text, &language, &mut ids);

            if let Some(output_path) = output {
                let json = serde_json::to_string_pretty(&msg)?;
                std::fs::write(&output_path, json)?;
                println!("Message saved to: {}", output_path.display());
            } else {
                println!("{}", serde_json::to_string_pretty(&msg)?);
            }
        }

        Commands::Languages => {
            println!("{}", "Supported languages:".bold().cyan());
            for lang in Language::all() {
                let note = if lang.is_deterministic() {
                    "deterministic".green()
                } else {
                    "non-deterministic (chaotic by design)".yellow()
                };
                println!("  {:<10} {}", lang.name(), note);
            }
        }
    }

    Ok(())
}
