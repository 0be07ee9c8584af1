use std::{fs, sync::Arc, thread};

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::{error::Violation, models::StepKind};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn create_test_step(id: &str, created: &str, updated: &str) -> TutorialStep {
    TutorialStep {
        id: id.to_string(),
        title: format!("Title {id}"),
        content: format!("Content {id}"),
        created_at: ts(created),
        last_updated: ts(updated),
        completed: false,
        kind: StepKind::Plain,
    }
}

#[test]
fn test_builtin_dataset_is_sorted_and_valid() {
    let registry = StepRegistry::builtin();
    let steps = registry.steps().unwrap();

    let ids: Vec<_> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["step1", "step2"]);
    assert!(steps
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));
    assert!(steps.iter().all(|s| s.created_at <= s.last_updated));
    assert!(registry.report().unwrap().is_valid());
}

#[test]
fn test_builtin_dataset_contents() {
    let registry = StepRegistry::builtin();

    let step1 = registry.get("step1").unwrap();
    assert_eq!(step1.title, "Paso 1: Crear una Billetera");
    assert_eq!(step1.image_url(), Some("https://example.com/wallet-image.jpg"));
    assert_eq!(step1.action(), Some("Crear billetera"));
    assert_eq!(step1.created_at, ts("2023-01-01T00:00:00Z"));
    assert_eq!(step1.last_updated, ts("2023-01-10T00:00:00Z"));

    let step2 = registry.get("step2").unwrap();
    assert_eq!(step2.title, "Paso 2: Seguridad");
    assert_eq!(step2.related_links().len(), 2);
    assert!(!step2.completed);
}

#[test]
fn test_get_unknown_step() {
    let registry = StepRegistry::builtin();
    let err = registry.get("nonexistent").unwrap_err();
    assert!(matches!(err, TutorialError::StepNotFound { id } if id == "nonexistent"));
}

#[test]
fn test_steps_are_cached() {
    let registry = StepRegistry::builtin();
    assert!(!registry.is_loaded());

    let first = registry.steps().unwrap();
    assert!(registry.is_loaded());
    let second = registry.steps().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[test]
fn test_reset_rebuilds_cache() {
    let registry = StepRegistry::builtin();
    let first = registry.steps().unwrap();

    registry.reset();
    assert!(!registry.is_loaded());

    let second = registry.steps().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[test]
fn test_inline_steps_are_sorted_stably() {
    let registry = StepRegistry::from_steps(vec![
        create_test_step("c", "2023-03-01T00:00:00Z", "2023-03-01T00:00:00Z"),
        create_test_step("a1", "2023-01-01T00:00:00Z", "2023-01-02T00:00:00Z"),
        create_test_step("b", "2023-02-01T00:00:00Z", "2023-02-01T00:00:00Z"),
        create_test_step("a2", "2023-01-01T00:00:00Z", "2023-01-03T00:00:00Z"),
    ]);

    let ids: Vec<_> = registry
        .steps()
        .unwrap()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(ids, vec!["a1", "a2", "b", "c"]);
}

#[test]
fn test_inverted_dates_are_flagged_and_still_served() {
    let registry = StepRegistry::from_steps(vec![
        create_test_step("ok", "2023-01-01T00:00:00Z", "2023-01-10T00:00:00Z"),
        create_test_step("bad", "2023-05-01T00:00:00Z", "2023-04-01T00:00:00Z"),
    ]);

    let steps = registry.steps().unwrap();
    assert_eq!(steps.len(), 2);

    let report = registry.report().unwrap();
    assert_eq!(
        report.violations(),
        &[Violation::InvalidDateRange {
            id: "bad".to_string(),
            created_at: ts("2023-05-01T00:00:00Z"),
            last_updated: ts("2023-04-01T00:00:00Z"),
        }]
    );
}

#[test]
fn test_file_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tutorial.json");
    fs::write(
        &path,
        r#"[
            {
                "id": "intro",
                "kind": "plain",
                "title": "Introducción",
                "content": "Bienvenido a MyLuks.",
                "createdAt": "2022-12-01T00:00:00Z",
                "lastUpdated": "2022-12-02T00:00:00Z"
            }
        ]"#,
    )
    .unwrap();

    let registry = StepRegistry::new(StepSource::File(path));
    let steps = registry.steps().unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].id, "intro");
}

#[test]
fn test_decode_error_is_not_cached() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tutorial.json");
    fs::write(&path, "{ not json").unwrap();

    let registry = StepRegistry::new(StepSource::File(path.clone()));
    assert!(matches!(
        registry.steps(),
        Err(TutorialError::Serialization { .. })
    ));
    assert!(!registry.is_loaded());

    fs::write(&path, "[]").unwrap();
    assert!(registry.steps().unwrap().is_empty());
}

#[test]
fn test_missing_file_source() {
    let temp_dir = TempDir::new().unwrap();
    let registry = StepRegistry::new(StepSource::File(temp_dir.path().join("missing.json")));
    assert!(matches!(
        registry.steps(),
        Err(TutorialError::FileSystem { .. })
    ));
}

#[test]
fn test_concurrent_first_reads_share_one_build() {
    let registry = Arc::new(StepRegistry::builtin());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.steps().unwrap())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
fn test_global_registry_is_idempotent() {
    let first = get_steps().unwrap();
    let second = get_steps().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_builder_defaults_to_builtin() {
    let registry = RegistryBuilder::new().build().unwrap();
    assert_eq!(registry.source(), &StepSource::Builtin);
}

#[test]
fn test_builder_with_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tutorial.json");
    fs::write(&path, "[]").unwrap();

    let registry = RegistryBuilder::new()
        .with_data_file(Some(&path))
        .build()
        .unwrap();
    assert_eq!(registry.source(), &StepSource::File(path));

    let registry = RegistryBuilder::new()
        .with_data_file(None::<&str>)
        .build()
        .unwrap();
    assert_eq!(registry.source(), &StepSource::Builtin);
}

#[test]
fn test_builder_rejects_missing_or_directory_data_file() {
    let temp_dir = TempDir::new().unwrap();

    let missing = RegistryBuilder::new()
        .with_data_file(Some(temp_dir.path().join("missing.json")))
        .build();
    assert!(matches!(missing, Err(TutorialError::FileSystem { .. })));

    let directory = RegistryBuilder::new()
        .with_data_file(Some(temp_dir.path()))
        .build();
    match directory {
        Err(TutorialError::FileSystem { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::Other);
            assert_eq!(source.to_string(), "not a regular file");
        }
        other => panic!("expected a file system error, got {other:?}"),
    }
}

#[test]
fn test_builder_rejects_conflicting_sources() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tutorial.json");
    fs::write(&path, "[]").unwrap();

    let result = RegistryBuilder::new()
        .with_data_file(Some(&path))
        .with_steps(vec![])
        .build();
    assert!(matches!(result, Err(TutorialError::Configuration { .. })));
}

#[test]
fn test_builder_with_steps() {
    let registry = RegistryBuilder::new()
        .with_steps(vec![create_test_step(
            "only",
            "2023-01-01T00:00:00Z",
            "2023-01-01T00:00:00Z",
        )])
        .build()
        .unwrap();
    assert_eq!(registry.get("only").unwrap().title, "Title only");
}
