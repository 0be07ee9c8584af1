//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap derives and convert into the core's
//! framework-free parameter types with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Registry + Query Ops
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use jiff::Timestamp;
use log::debug;
use myluks_core::{
    params::{parse_cutoff, RecentSteps, StepQuery},
    query::{get_recently_updated, mark_completed},
    CompletionSet, CompletionStatus, StepRegistry, Steps, TutorialStep,
};

use crate::renderer::TerminalRenderer;

/// List tutorial steps
///
/// Steps are shown in creation order unless --sort-updated is given. Search
/// matches title and content, ignoring case.
#[derive(Args)]
pub struct ListStepsArgs {
    /// Only show steps whose title or content contains this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only show steps created at or before this date (YYYY-MM-DD or RFC 3339)
    #[arg(short, long, value_parser = parse_before)]
    pub before: Option<Timestamp>,
    /// Order by last update, newest first
    #[arg(short = 'u', long)]
    pub sort_updated: bool,
}

impl From<ListStepsArgs> for StepQuery {
    fn from(val: ListStepsArgs) -> Self {
        StepQuery {
            search: val.search,
            max_date: val.before,
            sort_by_updated: val.sort_updated,
        }
    }
}

fn parse_before(value: &str) -> std::result::Result<Timestamp, String> {
    parse_cutoff("before", value).map_err(|e| e.to_string())
}

/// Show details of a specific step
#[derive(Args)]
pub struct ShowStepArgs {
    #[arg(help = "Unique identifier of the step to show, e.g. step1")]
    pub id: String,
}

/// List steps updated within the last N days
#[derive(Args)]
pub struct RecentStepsArgs {
    /// Size of the window in days
    #[arg(short, long, default_value_t = RecentSteps::default().days)]
    pub days: u32,
}

impl From<RecentStepsArgs> for RecentSteps {
    fn from(val: RecentStepsArgs) -> Self {
        RecentSteps { days: val.days }
    }
}

/// Mark a step as completed
///
/// Combined with --completed, the listing reflects every step finished so
/// far. Nothing is written to disk.
#[derive(Args)]
pub struct CompleteStepArgs {
    #[arg(help = "Unique identifier of the step to mark as completed")]
    pub id: String,
}

/// Runs commands against one registry and renders the output.
pub struct Cli {
    registry: StepRegistry,
    completed: CompletionSet,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        registry: StepRegistry,
        completed: CompletionSet,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            registry,
            completed,
            renderer,
        }
    }

    /// Steps from the registry with the caller's completion marks applied.
    fn steps(&self) -> Result<Vec<TutorialStep>> {
        let steps = self
            .registry
            .steps()
            .context("Failed to load tutorial steps")?;
        Ok(self.completed.apply(&steps))
    }

    pub fn list_steps(&self, query: &StepQuery) -> Result<()> {
        let steps = self.steps()?;
        let view = query.apply(&steps);
        debug!("Listing {} of {} steps", view.len(), steps.len());

        let progress = self.completed.progress(&steps);
        self.renderer.render(&format!(
            "# Tutorial ({progress})\n\n{}",
            Steps(view)
        ));
        Ok(())
    }

    pub fn show_step(&self, id: &str) -> Result<()> {
        let step = self.registry.get(id)?;
        let step = if self.completed.contains(&step.id) {
            step.into_completed()
        } else {
            step
        };
        self.renderer.render(&step.to_string());
        Ok(())
    }

    pub fn recent_steps(&self, params: &RecentSteps) -> Result<()> {
        let steps = self.steps()?;
        let recent = get_recently_updated(&steps, params.days);

        self.renderer.render(&format!(
            "# Updated in the last {} days\n\n{}",
            params.days,
            Steps(recent)
        ));
        Ok(())
    }

    pub fn complete_step(&self, id: &str) -> Result<()> {
        // Unknown ids are a no-op in the query layer; the CLI reports them.
        self.registry.get(id)?;

        let steps = mark_completed(&self.steps()?, id);
        let progress = self.completed.progress(&steps);
        let status = if self.completed.contains(id) {
            CompletionStatus::AlreadyCompleted(id.to_string())
        } else {
            CompletionStatus::Marked(id.to_string())
        };

        self.renderer.render(&format!(
            "{status}\n# Tutorial ({progress})\n\n{}",
            Steps(steps)
        ));
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let report = self
            .registry
            .report()
            .context("Failed to load tutorial steps")?;
        self.renderer.render(&report.to_string());

        if !report.is_valid() {
            bail!("{} violation(s) found in tutorial data", report.len());
        }
        Ok(())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(Vec<TutorialStep>);
        let json =
            serde_json::to_string_pretty(&schema).context("Failed to serialize dataset schema")?;
        println!("{json}");
        Ok(())
    }
}
