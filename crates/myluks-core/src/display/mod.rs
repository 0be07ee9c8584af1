//! Display formatting for steps, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and status messages get newtype wrappers. Every formatter
//! produces markdown for the terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Formatted     │
//! │ (TutorialStep)  │───▶│ (Steps, Status) │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper type (Steps)
//! - [`status`]: Feedback after completing a step (CompletionStatus)
//! - [`datetime`]: Calendar dates for step timestamps (StepDate)
//! - [`models`]: Display implementations for domain models and reports
//!
//! ```rust
//! use myluks_core::display::CompletionStatus;
//!
//! let status = CompletionStatus::Marked("step1".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::Steps;
pub use datetime::StepDate;
pub use status::CompletionStatus;
