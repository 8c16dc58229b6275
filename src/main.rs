use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use promptpad::cli::{CliArgs, InputSource};
use promptpad::expand::{resolve_prompt, RandomSource, SeededRandom, ThreadRandom};
use promptpad::workflow::resolve_workflow;
use promptpad::logging;

fn main() -> Result<()> {
    logging::init();

    let args = CliArgs::parse();
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    match args.input_source() {
        InputSource::Workflow(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read workflow {}", path.display()))?;
            let mut workflow: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("invalid workflow JSON in {}", path.display()))?;

            let resolved = resolve_workflow(&mut workflow, rng.as_mut());
            tracing::info!(resolved, "resolved workflow widget values");

            let output = serde_json::to_string_pretty(&workflow)
                .context("failed to serialize resolved workflow")?;
            println!("{}", output);
        }
        source => {
            let raw = match source {
                InputSource::Inline(prompt) => prompt,
                InputSource::File(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read prompt file {}", path.display()))?,
                InputSource::Stdin => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("failed to read prompt from stdin")?;
                    buffer
                }
                InputSource::Workflow(_) => unreachable!("handled above"),
            };

            for _ in 0..args.count {
                println!("{}", resolve_prompt(&raw, rng.as_mut()));
            }
        }
    }

    Ok(())
}
