//! Step registry: the cached, validated tutorial collection.
//!
//! A [`StepRegistry`] owns its source and a lazily built cache. The first
//! read decodes the source, sorts the steps by `createdAt`, validates them
//! and stores the result; later reads share the cached [`Arc`]s. Violations
//! are logged at warn level and the collection is served anyway.
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Source    │───▶│ Sort by     │───▶│  Validator  │───▶│   Cache     │
//! │ (builtin,   │    │ createdAt   │    │ (log + keep)│    │ Arc<[Step]> │
//! │  file, vec) │    │             │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! Construction happens under a mutex, so concurrent first readers never
//! build or validate twice. [`StepRegistry::reset`] drops the cache.
//!
//! # Examples
//!
//! ```rust
//! use myluks_core::registry::{get_steps, RegistryBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Process-wide registry over the built-in dataset
//! let steps = get_steps()?;
//! assert_eq!(steps[0].id, "step1");
//!
//! // Registry over a custom dataset
//! let registry = RegistryBuilder::new()
//!     .with_data_file(Some("tutorial.json"))
//!     .build()?;
//! let report = registry.report()?;
//! println!("{} violations", report.len());
//! # Ok(())
//! # }
//! ```

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use log::debug;

use crate::{
    error::{Result, TutorialError},
    models::TutorialStep,
    validator::{validate, ValidationReport},
};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::RegistryBuilder;

/// Dataset shipped with the library.
const BUILTIN_DATASET: &str = include_str!("../../data/tutorial.json");

/// Where a registry reads its steps from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSource {
    /// The dataset embedded in the library
    Builtin,
    /// A JSON dataset on disk
    File(PathBuf),
    /// Steps supplied by the caller
    Inline(Vec<TutorialStep>),
}

#[derive(Debug, Clone)]
struct Loaded {
    steps: Arc<[TutorialStep]>,
    report: Arc<ValidationReport>,
}

/// Lazily built, validated collection of tutorial steps.
#[derive(Debug)]
pub struct StepRegistry {
    source: StepSource,
    cache: Mutex<Option<Loaded>>,
}

impl StepRegistry {
    /// Creates a registry over the given source. Nothing is read until the
    /// first access.
    pub fn new(source: StepSource) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    /// Registry over the built-in dataset.
    pub fn builtin() -> Self {
        Self::new(StepSource::Builtin)
    }

    /// Registry over caller-supplied steps.
    pub fn from_steps(steps: Vec<TutorialStep>) -> Self {
        Self::new(StepSource::Inline(steps))
    }

    /// The source this registry reads from.
    pub fn source(&self) -> &StepSource {
        &self.source
    }

    /// Steps sorted ascending by `createdAt`.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::FileSystem` if a file source cannot be read
    /// Returns `TutorialError::Serialization` if the dataset cannot be decoded
    pub fn steps(&self) -> Result<Arc<[TutorialStep]>> {
        self.loaded().map(|loaded| loaded.steps)
    }

    /// Violations found when the collection was built.
    pub fn report(&self) -> Result<Arc<ValidationReport>> {
        self.loaded().map(|loaded| loaded.report)
    }

    /// Looks up a single step by id.
    pub fn get(&self, id: &str) -> Result<TutorialStep> {
        self.steps()?
            .iter()
            .find(|step| step.id == id)
            .cloned()
            .ok_or_else(|| TutorialError::step_not_found(id))
    }

    /// Whether the cache is populated.
    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    /// Drops the cached collection; the next read rebuilds it.
    pub fn reset(&self) {
        debug!("Resetting tutorial step cache");
        self.lock().take();
    }

    fn loaded(&self) -> Result<Loaded> {
        let mut cache = self.lock();
        if let Some(loaded) = cache.as_ref() {
            return Ok(loaded.clone());
        }

        let loaded = self.build()?;
        *cache = Some(loaded.clone());
        Ok(loaded)
    }

    fn build(&self) -> Result<Loaded> {
        let mut steps = self.read_source()?;
        steps.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let report = validate(&steps);
        report.log();

        debug!(
            "Built tutorial step cache: {} steps, {} violations",
            steps.len(),
            report.len()
        );

        Ok(Loaded {
            steps: steps.into(),
            report: Arc::new(report),
        })
    }

    fn read_source(&self) -> Result<Vec<TutorialStep>> {
        match &self.source {
            StepSource::Builtin => Ok(serde_json::from_str(BUILTIN_DATASET)?),
            StepSource::File(path) => {
                let raw = fs::read_to_string(path).map_err(|e| TutorialError::FileSystem {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(serde_json::from_str(&raw)?)
            }
            StepSource::Inline(steps) => Ok(steps.clone()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Loaded>> {
        // The cache is only ever replaced whole, so a poisoned lock still
        // holds a consistent value.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-wide registry over the built-in dataset.
pub fn global() -> &'static StepRegistry {
    static GLOBAL: OnceLock<StepRegistry> = OnceLock::new();
    GLOBAL.get_or_init(StepRegistry::builtin)
}

/// Built-in tutorial steps, sorted ascending by `createdAt`.
///
/// The first call decodes and validates the dataset; later calls return the
/// cached collection.
pub fn get_steps() -> Result<Arc<[TutorialStep]>> {
    global().steps()
}
