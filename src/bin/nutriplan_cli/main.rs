// ABOUTME: Nutriplan CLI - assembles and validates pattern-based nutrition plans from agent outputs
// ABOUTME: Reads upstream JSON documents, runs the engine, and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Assemble a 4-week plan from the three agent outputs
//! nutriplan-cli assemble --macros macros.json --foods foods.json --patterns patterns.json \
//!     --user-id 6f1c... --name "Cut phase" --weeks 4 --goal weight-loss
//!
//! # Assemble from a single pre-built input document, writing to a file
//! nutriplan-cli assemble --input plan-input.json --output plan.json
//!
//! # Check authored patterns against tolerance without assembling weeks
//! nutriplan-cli validate --macros macros.json --foods foods.json --patterns patterns.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriplan::logging::{LogFormat, LoggingConfig};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Pattern-based nutrition plan assembler",
    long_about = "Assembles multi-week nutrition plans from day patterns, a weekly rotation \
                  and macro targets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Assemble a complete plan and print the generation output
    Assemble {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        request: RequestArgs,

        /// Write the output here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print only the plan, without summary and statistics
        #[arg(long)]
        plan_only: bool,
    },

    /// Report tolerance and integrity warnings for the authored patterns
    Validate {
        #[command(flatten)]
        source: SourceArgs,

        /// Exit with an error when any warning is found
        #[arg(long)]
        strict: bool,
    },
}

/// Where the assembler input comes from
#[derive(Args)]
pub struct SourceArgs {
    /// Complete assembler input document
    #[arg(long, conflicts_with_all = ["macros", "foods", "patterns"])]
    pub input: Option<PathBuf>,

    /// Macro distribution agent output
    #[arg(long, requires_all = ["foods", "patterns"])]
    pub macros: Option<PathBuf>,

    /// Food selection agent output
    #[arg(long)]
    pub foods: Option<PathBuf>,

    /// Meal pattern agent output
    #[arg(long)]
    pub patterns: Option<PathBuf>,
}

/// Plan identity used with agent output documents
#[derive(Args)]
pub struct RequestArgs {
    /// Owner of the plan
    #[arg(long)]
    pub user_id: Option<Uuid>,

    /// Plan display name
    #[arg(long, default_value = "Pattern-based plan")]
    pub name: String,

    /// Plan description
    #[arg(long)]
    pub description: Option<String>,

    /// Number of weeks to assemble
    #[arg(long, default_value_t = 4)]
    pub weeks: u32,

    /// Plan goal (repeatable): weight-loss, maintenance, muscle-gain, performance, general-health
    #[arg(long = "goal")]
    pub goals: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env()
        .with_level(if cli.verbose { "debug" } else { "info" })
        .with_format(if cli.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        });
    logging.init()?;

    match cli.command {
        Command::Assemble {
            source,
            request,
            output,
            plan_only,
        } => commands::assemble::run(&source, &request, output.as_deref(), plan_only)?,
        Command::Validate { source, strict } => commands::validate::run(&source, strict)?,
    }

    Ok(())
}
