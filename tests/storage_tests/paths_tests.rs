//! Tests for PathResolver
//!
//! These tests verify:
//! - Path construction for collections, records and temp files
//! - Suffixes appended to the full name (dots preserved)
//! - Existence checks with the bare-name fallback
//! - Name validation

use std::fs;
use std::path::PathBuf;

use scribedb::storage::PathResolver;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_resolver() -> (TempDir, PathResolver) {
    let temp_dir = TempDir::new().unwrap();
    let resolver = PathResolver::new(temp_dir.path());
    (temp_dir, resolver)
}

// =============================================================================
// Path Construction Tests
// =============================================================================

#[test]
fn test_paths_layout() {
    let resolver = PathResolver::new("/data/db");

    assert_eq!(resolver.root(), PathBuf::from("/data/db").as_path());
    assert_eq!(resolver.collection_dir("Dinner"), PathBuf::from("/data/db/Dinner"));
    assert_eq!(resolver.entry_path("Dinner", "Taco"), PathBuf::from("/data/db/Dinner/Taco"));
    assert_eq!(
        resolver.resource_path("Dinner", "Taco"),
        PathBuf::from("/data/db/Dinner/Taco.json")
    );
    assert_eq!(
        resolver.temp_path("Dinner", "Taco"),
        PathBuf::from("/data/db/Dinner/Taco.json.tmp")
    );
}

#[test]
fn test_paths_temp_file_in_record_directory() {
    let resolver = PathResolver::new("/data/db");

    let record = resolver.resource_path("Dinner", "Taco");
    let temp = resolver.temp_path("Dinner", "Taco");

    assert_eq!(record.parent(), temp.parent());
}

#[test]
fn test_paths_suffix_keeps_dots() {
    let resolver = PathResolver::new("/data/db");

    assert_eq!(
        resolver.resource_path("releases", "v1.2"),
        PathBuf::from("/data/db/releases/v1.2.json")
    );
    assert_eq!(
        PathResolver::with_suffix(&PathBuf::from("a/b.c"), "json"),
        PathBuf::from("a/b.c.json")
    );
}

#[test]
fn test_paths_is_temp_file() {
    assert!(PathResolver::is_temp_file(&PathBuf::from("/x/Taco.json.tmp")));
    assert!(!PathResolver::is_temp_file(&PathBuf::from("/x/Taco.json")));
    assert!(!PathResolver::is_temp_file(&PathBuf::from("/x/tmp")));
}

// =============================================================================
// Existence Tests
// =============================================================================

#[test]
fn test_exists_by_bare_resource_name() {
    let (_temp, resolver) = setup_resolver();

    fs::create_dir_all(resolver.collection_dir("Dinner")).unwrap();
    fs::write(resolver.resource_path("Dinner", "Taco"), b"{}\n").unwrap();

    // Only Taco.json is on disk; the bare name must still resolve
    assert!(PathResolver::exists(&resolver.entry_path("Dinner", "Taco")).unwrap());
}

#[test]
fn test_exists_by_file_name() {
    let (_temp, resolver) = setup_resolver();

    fs::create_dir_all(resolver.collection_dir("Dinner")).unwrap();
    fs::write(resolver.resource_path("Dinner", "Taco"), b"{}\n").unwrap();

    assert!(PathResolver::exists(&resolver.resource_path("Dinner", "Taco")).unwrap());
}

#[test]
fn test_exists_missing() {
    let (_temp, resolver) = setup_resolver();

    assert!(!PathResolver::exists(&resolver.entry_path("Dinner", "Taco")).unwrap());
    assert!(!PathResolver::exists(&resolver.collection_dir("Dinner")).unwrap());
}

#[test]
fn test_exists_does_not_match_suffix_without_dot() {
    let (_temp, resolver) = setup_resolver();

    fs::create_dir_all(resolver.collection_dir("Dinner")).unwrap();
    fs::write(resolver.collection_dir("Dinner").join("Tacojson"), b"{}").unwrap();

    assert!(!PathResolver::exists(&resolver.entry_path("Dinner", "Taco")).unwrap());
}

#[test]
fn test_locate_prefers_path_as_given() {
    let (_temp, resolver) = setup_resolver();

    let dir = resolver.entry_path("Dinner", "Taco");
    fs::create_dir_all(&dir).unwrap();
    fs::write(resolver.resource_path("Dinner", "Taco"), b"{}\n").unwrap();

    let found = PathResolver::locate(&dir).unwrap().unwrap();
    assert_eq!(found.path, dir);
    assert!(found.is_dir());
}

#[test]
fn test_locate_falls_back_to_record_file() {
    let (_temp, resolver) = setup_resolver();

    fs::create_dir_all(resolver.collection_dir("Dinner")).unwrap();
    fs::write(resolver.resource_path("Dinner", "Taco"), b"{}\n").unwrap();

    let found = PathResolver::locate(&resolver.entry_path("Dinner", "Taco"))
        .unwrap()
        .unwrap();

    assert_eq!(found.path, resolver.resource_path("Dinner", "Taco"));
    assert!(found.is_file());
}

#[test]
fn test_exists_reports_io_errors() {
    let (_temp, resolver) = setup_resolver();

    // A regular file where the collection directory should be
    fs::write(resolver.collection_dir("Dinner"), b"x").unwrap();

    let result = PathResolver::exists(&resolver.entry_path("Dinner", "Taco"));
    assert!(result.is_err());
}

#[test]
fn test_is_dir_and_is_file_use_exact_path() {
    let (_temp, resolver) = setup_resolver();

    fs::create_dir_all(resolver.collection_dir("Dinner")).unwrap();
    fs::write(resolver.resource_path("Dinner", "Taco"), b"{}\n").unwrap();
    let bare = resolver.entry_path("Dinner", "Taco");

    assert!(!PathResolver::is_file(&bare).unwrap());
    assert!(!PathResolver::is_dir(&bare).unwrap());
    assert!(PathResolver::is_file(&resolver.resource_path("Dinner", "Taco")).unwrap());
    assert!(PathResolver::is_dir(&resolver.collection_dir("Dinner")).unwrap());
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_accepts_plain_names() {
    for name in ["Dinner", "Stir Fry", "v1.2", "with-dash_und", ".hidden"] {
        PathResolver::validate_collection(name).unwrap();
        PathResolver::validate_resource(name).unwrap();
    }
}

#[test]
fn test_validate_rejects_empty_names() {
    assert!(PathResolver::validate_collection("").unwrap_err().is_validation());
    assert!(PathResolver::validate_resource("").unwrap_err().is_validation());
}

#[test]
fn test_validate_rejects_escaping_names() {
    for name in [".", "..", "a/b", "../up", "a\\b", "nul\0byte"] {
        assert!(PathResolver::validate_collection(name).is_err(), "{:?}", name);
        assert!(PathResolver::validate_resource(name).is_err(), "{:?}", name);
    }
}
