//! Core library for the MyLuks Wallet tutorial.
//!
//! This crate holds the tutorial content model, the registry that loads and
//! caches it, the validator that checks each step, and the pure query
//! operations a front end uses to derive what it shows.
//!
//! # Quick Start
//!
//! ```rust
//! use myluks_core::{
//!     query::{mark_completed, sort_by_last_updated_desc},
//!     registry::get_steps,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let steps = get_steps()?;
//!
//! let newest_first = sort_by_last_updated_desc(&steps);
//! assert_eq!(newest_first[0].id, "step2");
//!
//! let marked = mark_completed(&steps, "step1");
//! assert!(marked[0].completed);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod completion;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod query;
pub mod registry;
pub mod validator;

// Re-export commonly used types
pub use completion::CompletionSet;
pub use display::{CompletionStatus, StepDate, Steps};
pub use error::{Result, TutorialError, Violation};
pub use models::{Progress, StepKind, TutorialStep};
pub use params::{RecentSteps, StepQuery};
pub use registry::{get_steps, RegistryBuilder, StepRegistry, StepSource};
pub use validator::{validate, ValidationReport};
