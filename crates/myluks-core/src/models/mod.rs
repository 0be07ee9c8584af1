//! Data models for tutorial steps.
//!
//! A [`TutorialStep`] carries the fields every step shares plus a
//! [`StepKind`] payload decided when the record is built: an image with a
//! recommended action, a list of related links, or nothing. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use myluks_core::models::{StepKind, TutorialStep};
//!
//! let step = TutorialStep {
//!     id: "step2".to_string(),
//!     title: "Paso 2: Seguridad".to_string(),
//!     content: "Importancia de mantener tus claves privadas seguras.".to_string(),
//!     created_at: "2023-02-01T00:00:00Z".parse::<Timestamp>().unwrap(),
//!     last_updated: "2023-02-15T00:00:00Z".parse::<Timestamp>().unwrap(),
//!     completed: false,
//!     kind: StepKind::Link {
//!         related_links: vec!["https://crypto-security.com/guide".to_string()],
//!     },
//! };
//!
//! assert_eq!(step.kind.as_str(), "link");
//! assert!(step.clone().into_completed().completed);
//! assert!(!step.completed);
//! ```

pub mod kind;
pub mod progress;
pub mod step;


pub use kind::StepKind;
pub use progress::Progress;
pub use step::TutorialStep;
