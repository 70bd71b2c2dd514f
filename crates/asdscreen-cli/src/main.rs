//! Command-line surface for the screening predictor.
//!
//! `predict` scores a completed questionnaire (a JSON object of field →
//! answer strings) against the trained artifacts; `schema` prints the served
//! feature order so a collection form can be built from it.

mod display;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use asdscreen_model::{Artifacts, Screener};

#[derive(Parser)]
#[command(name = "asdscreen", version, about = "Questionnaire screening predictor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a completed questionnaire against the trained model.
    Predict {
        /// Directory holding schema.json, encoders.json, and model.json.
        #[arg(long, env = "ASDSCREEN_ARTIFACTS")]
        artifacts: PathBuf,
        /// JSON file mapping field names to raw answer strings.
        #[arg(long)]
        answers: PathBuf,
    },
    /// Show the served feature order, kinds, and categorical classes.
    Schema {
        /// Directory holding schema.json, encoders.json, and model.json.
        #[arg(long, env = "ASDSCREEN_ARTIFACTS")]
        artifacts: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("asdscreen v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    match cli.command {
        Command::Predict { artifacts, answers } => predict(&artifacts, &answers),
        Command::Schema { artifacts } => schema(&artifacts),
    }
}

fn load_screener(artifacts: &Path) -> anyhow::Result<Screener> {
    let artifacts = Artifacts::load(artifacts)
        .with_context(|| format!("loading artifacts from {}", artifacts.display()))?;
    Ok(Screener::new(artifacts))
}

fn predict(artifacts: &Path, answers_path: &Path) -> anyhow::Result<()> {
    let screener = load_screener(artifacts)?;

    let raw = fs::read_to_string(answers_path)
        .with_context(|| format!("reading answers from {}", answers_path.display()))?;
    let answers: HashMap<String, String> = serde_json::from_str(&raw)
        .context("answers file must be a JSON object of field → answer strings")?;

    let prediction = screener.predict(&answers)?;
    display::print_prediction(&prediction);
    Ok(())
}

fn schema(artifacts: &Path) -> anyhow::Result<()> {
    let screener = load_screener(artifacts)?;
    display::print_schema(screener.registry(), screener.encoders());
    Ok(())
}
