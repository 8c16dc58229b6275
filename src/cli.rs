//! Command-line argument parsing for the prompt resolver
//!
//! Supports:
//! - Resolving a prompt given as an argument, from a file, or from stdin
//! - Resolving every widget value inside a workflow JSON file
//! - Seeded draws for reproducible output
//! - Emitting several independent samples in one run

use clap::Parser;
use std::path::PathBuf;

/// Resolve prompt templates to concrete strings
#[derive(Parser, Debug)]
#[command(name = "promptpad", version, about = "Resolve prompt templates to concrete strings")]
pub struct CliArgs {
    /// Prompt text to resolve (reads stdin when omitted)
    #[arg(value_name = "PROMPT", conflicts_with_all = ["file", "workflow"])]
    pub prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "workflow")]
    pub file: Option<PathBuf>,

    /// Resolve a workflow JSON file instead of plain text; the resolved
    /// document is printed to stdout
    #[arg(short, long, value_name = "PATH")]
    pub workflow: Option<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(short, long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of independent samples to emit
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub count: usize,
}

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Prompt passed directly on the command line
    Inline(String),
    /// Prompt read from a file
    File(PathBuf),
    /// Workflow JSON read from a file
    Workflow(PathBuf),
    /// Prompt read from stdin
    Stdin,
}

impl CliArgs {
    /// Determine the input source from the parsed arguments
    pub fn input_source(&self) -> InputSource {
        if let Some(path) = &self.workflow {
            InputSource::Workflow(path.clone())
        } else if let Some(path) = &self.file {
            InputSource::File(path.clone())
        } else if let Some(prompt) = &self.prompt {
            InputSource::Inline(prompt.clone())
        } else {
            InputSource::Stdin
        }
    }
}
