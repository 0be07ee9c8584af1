use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompleteStepArgs, ListStepsArgs, RecentStepsArgs, ShowStepArgs};

/// Terminal front end for the MyLuks Wallet tutorial
///
/// Lists, searches and inspects the tutorial steps shown in the wallet, and
/// checks tutorial datasets for authoring mistakes before they ship.
#[derive(Parser)]
#[command(version, about, name = "myluks")]
pub struct Args {
    /// Path to a JSON tutorial dataset. Defaults to
    /// $XDG_DATA_HOME/myluks/tutorial.json when present, otherwise the
    /// built-in tutorial
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Step IDs already completed, as a comma-separated list
    #[arg(long, global = true, value_delimiter = ',')]
    pub completed: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the MyLuks tutorial CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List tutorial steps
    #[command(aliases = ["l", "ls"])]
    List(ListStepsArgs),
    /// Show a single step
    #[command(alias = "s")]
    Show(ShowStepArgs),
    /// List steps updated recently
    #[command(alias = "r")]
    Recent(RecentStepsArgs),
    /// Mark a step as completed and list the result
    #[command(alias = "c")]
    Complete(CompleteStepArgs),
    /// Check the dataset and report every violation
    Validate,
    /// Print the JSON schema of the dataset format
    Schema,
}
