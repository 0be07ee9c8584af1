//! MyLuks tutorial CLI
//!
//! Command-line front end over the tutorial registry.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use myluks_core::{CompletionSet, RegistryBuilder, StepQuery};
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        completed,
        command,
    } = Args::parse();

    let registry = RegistryBuilder::new()
        .with_data_file(data_file)
        .with_user_data(true)
        .build()
        .context("Failed to initialize tutorial registry")?;

    let completed: CompletionSet = completed
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    let cli = Cli::new(registry, completed, TerminalRenderer::new(!no_color));

    info!("MyLuks tutorial started");

    match command {
        Some(List(args)) => cli.list_steps(&args.into()),
        Some(Show(args)) => cli.show_step(&args.id),
        Some(Recent(args)) => cli.recent_steps(&args.into()),
        Some(Complete(args)) => cli.complete_step(&args.id),
        Some(Validate) => cli.validate(),
        Some(Schema) => cli.schema(),
        None => cli.list_steps(&StepQuery::default()),
    }
}
