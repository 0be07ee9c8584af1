//! Collection wrapper types for displaying groups of steps.

use std::{fmt, ops::Index};

use crate::models::TutorialStep;

/// Newtype wrapper for displaying collections of tutorial steps.
///
/// Formats each step with its own Display implementation and prints a
/// placeholder line for empty collections.
///
/// # Examples
///
/// ```rust
/// use myluks_core::{display::Steps, registry::get_steps};
///
/// let steps = Steps(get_steps().unwrap().to_vec());
/// let output = format!("{}", steps);
/// assert!(output.contains("Paso 2: Seguridad"));
///
/// assert_eq!(format!("{}", Steps(vec![])), "No tutorial steps found.\n");
/// ```
pub struct Steps(pub Vec<TutorialStep>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the step at the given index.
    pub fn get(&self, index: usize) -> Option<&TutorialStep> {
        self.0.get(index)
    }

    /// Get an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, TutorialStep> {
        self.0.iter()
    }
}

impl From<Vec<TutorialStep>> for Steps {
    fn from(steps: Vec<TutorialStep>) -> Self {
        Self(steps)
    }
}

impl Index<usize> for Steps {
    type Output = TutorialStep;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Steps {
    type Item = TutorialStep;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a TutorialStep;
    type IntoIter = std::slice::Iter<'a, TutorialStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tutorial steps found.")
        } else {
            for step in &self.0 {
                write!(f, "{}", step)?;
            }
            Ok(())
        }
    }
}
