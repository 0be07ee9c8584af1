use std::fs;

use myluks_core::{RegistryBuilder, StepRegistry};
use tempfile::TempDir;

/// Helper function to create a registry over a dataset written to a temp dir
pub fn create_test_registry(dataset: &str) -> (TempDir, StepRegistry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tutorial.json");
    fs::write(&path, dataset).expect("Failed to write dataset");
    let registry = RegistryBuilder::new()
        .with_data_file(Some(&path))
        .build()
        .expect("Failed to create registry");
    (temp_dir, registry)
}
