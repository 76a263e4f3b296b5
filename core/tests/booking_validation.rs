use fixval_core::patcher::backup_path;
use fixval_core::{apply_to_file, booking_validation, AppError, ApplyOptions, PatchOutcome};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const BEFORE: &str = include_str!("fixtures/page_before.tsx");
const AFTER: &str = include_str!("fixtures/page_after.tsx");

fn write_page(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("page.tsx");
    fs::write(&path, content).unwrap();
    path
}

fn apply(path: &Path) -> Result<PatchOutcome, AppError> {
    let patch = booking_validation().unwrap();
    apply_to_file(path, &patch, &ApplyOptions::default())
}

#[test]
fn test_rewrites_unconditional_single_booking_validation() {
    let dir = tempdir().unwrap();
    let path = write_page(dir.path(), BEFORE);

    assert_eq!(apply(&path).unwrap(), PatchOutcome::Applied);
    assert_eq!(fs::read_to_string(&path).unwrap(), AFTER);
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = tempdir().unwrap();
    let path = write_page(dir.path(), BEFORE);

    apply(&path).unwrap();
    let modified = fs::metadata(&path).unwrap().modified().unwrap();

    assert_eq!(apply(&path).unwrap(), PatchOutcome::NotFound);
    assert_eq!(fs::read_to_string(&path).unwrap(), AFTER);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
}

#[test]
fn test_near_miss_indentation_is_left_alone() {
    let dir = tempdir().unwrap();
    let reindented = BEFORE.replace("    reasons.push(\n", "  reasons.push(\n");
    assert_ne!(reindented, BEFORE);
    let path = write_page(dir.path(), &reindented);

    assert_eq!(apply(&path).unwrap(), PatchOutcome::NotFound);
    assert_eq!(fs::read_to_string(&path).unwrap(), reindented);
}

#[test]
fn test_near_miss_renamed_identifier_is_left_alone() {
    let dir = tempdir().unwrap();
    let renamed = BEFORE.replace("carritoState));", "cartState));");
    let path = write_page(dir.path(), &renamed);

    assert_eq!(apply(&path).unwrap(), PatchOutcome::NotFound);
    assert_eq!(fs::read_to_string(&path).unwrap(), renamed);
}

#[test]
fn test_only_first_occurrence_is_replaced() {
    let dir = tempdir().unwrap();
    let doubled = format!("{}\n{}", BEFORE, BEFORE);
    let path = write_page(dir.path(), &doubled);

    assert_eq!(apply(&path).unwrap(), PatchOutcome::Applied);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\n{}", AFTER, BEFORE)
    );
}

#[test]
fn test_empty_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = write_page(dir.path(), "");

    assert_eq!(apply(&path).unwrap(), PatchOutcome::NotFound);
    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_unrelated_file_is_byte_identical() {
    let dir = tempdir().unwrap();
    let unrelated = "export const PRICE = 10;\r\n// validateSingleBooking\r\n";
    let path = write_page(dir.path(), unrelated);

    assert_eq!(apply(&path).unwrap(), PatchOutcome::NotFound);
    assert_eq!(fs::read(&path).unwrap(), unrelated.as_bytes());
}

#[test]
fn test_missing_target_is_fatal_and_creates_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app/pago/page.tsx");

    let err = apply(&path).unwrap_err();

    match err {
        AppError::FileAccess { path: failed, source } => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileAccess, got {:?}", other),
    }
    assert!(!path.exists());
    assert!(!backup_path(&path).exists());
}
