//! Builder for creating and configuring StepRegistry instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::{StepRegistry, StepSource};
use crate::{
    error::{Result, TutorialError},
    models::TutorialStep,
};

/// File name looked up under the XDG data directories.
const USER_DATASET: &str = "tutorial.json";

/// Builder for creating and configuring StepRegistry instances.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    data_file: Option<PathBuf>,
    steps: Option<Vec<TutorialStep>>,
    user_data: bool,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings (built-in dataset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads steps from a JSON dataset file.
    pub fn with_data_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Serves the given steps instead of a dataset.
    pub fn with_steps(mut self, steps: Vec<TutorialStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Looks for a user dataset when no explicit file is set.
    ///
    /// The lookup follows the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/myluks/tutorial.json` or
    /// `~/.local/share/myluks/tutorial.json`, then `$XDG_DATA_DIRS`.
    pub fn with_user_data(mut self, enabled: bool) -> Self {
        self.user_data = enabled;
        self
    }

    /// Builds the configured registry. The dataset itself is read lazily.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::FileSystem` if an explicit data file does not
    /// exist or is not a regular file
    /// Returns `TutorialError::Configuration` if both a data file and inline
    /// steps were given
    pub fn build(self) -> Result<StepRegistry> {
        let source = match (self.data_file, self.steps) {
            (Some(_), Some(_)) => {
                return Err(TutorialError::Configuration {
                    message: "a data file and inline steps cannot both be set".to_string(),
                })
            }
            (Some(path), None) => {
                Self::check_file(&path)?;
                StepSource::File(path)
            }
            (None, Some(steps)) => StepSource::Inline(steps),
            (None, None) => match self.user_data.then(Self::user_dataset).flatten() {
                Some(path) => StepSource::File(path),
                None => StepSource::Builtin,
            },
        };

        match &source {
            StepSource::Builtin => info!("Using built-in tutorial dataset"),
            StepSource::File(path) => info!("Using tutorial dataset {}", path.display()),
            StepSource::Inline(steps) => info!("Using {} inline tutorial steps", steps.len()),
        }

        Ok(StepRegistry::new(source))
    }

    /// Returns the user dataset path if one exists in the XDG data dirs.
    fn user_dataset() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("myluks").find_data_file(USER_DATASET)
    }

    fn check_file(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| TutorialError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.is_file() {
            Ok(())
        } else {
            Err(TutorialError::FileSystem {
                path: path.to_path_buf(),
                source: std::io::Error::other("not a regular file"),
            })
        }
    }
}
