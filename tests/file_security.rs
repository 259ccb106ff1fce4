#![cfg(target_os = "windows")]

use acl_sphere::interface::file_security::FileSecurityTrait;
use acl_sphere::model::error::security::SecurityError;
use acl_sphere::platform::file_security::FileSecurity;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn create_file(directory: &TempDir) -> PathBuf {
    let path = directory.path().join("aFile.txt");
    std::fs::write(&path, "data").unwrap();
    path
}

fn deny_everyone_write_data(path: &Path) {
    let status = Command::new("icacls")
        .arg(path)
        .args(["/deny", "Everyone:(WD)"])
        .status()
        .unwrap();
    assert!(status.success(), "icacls failed to modify {}", path.display());
}

#[test]
fn fresh_file_has_owner_group_and_dacl() {
    let directory = TempDir::new().unwrap();
    let path = create_file(&directory);

    let descriptor = FileSecurity::new(&path)
        .unwrap()
        .get_security_descriptor()
        .unwrap();

    assert!(descriptor.is_complete());
    assert!(descriptor.owner.starts_with("S-1-"));
    assert!(descriptor.group.starts_with("S-1-"));
    assert!(descriptor.dacl.contains("D:"));
}

#[test]
fn external_acl_change_is_observed_and_restore_reverts_it() {
    let directory = TempDir::new().unwrap();
    let path = create_file(&directory);
    let file_security = FileSecurity::new(&path).unwrap();

    let original = file_security.get_security_descriptor().unwrap();

    deny_everyone_write_data(&path);
    let modified = file_security.get_security_descriptor().unwrap();
    assert_ne!(modified.dacl, original.dacl);

    file_security.set_security_descriptor(&original.dacl).unwrap();
    let restored = file_security.get_security_descriptor().unwrap();
    assert_eq!(restored.dacl, original.dacl);
}

#[test]
fn reapplying_current_descriptor_is_idempotent() {
    let directory = TempDir::new().unwrap();
    let path = create_file(&directory);
    let file_security = FileSecurity::new(&path).unwrap();

    let before = file_security.get_security_descriptor().unwrap();
    file_security.set_security_descriptor(&before.dacl).unwrap();
    let after = file_security.get_security_descriptor().unwrap();

    assert_eq!(after, before);
}

#[test]
fn missing_file_is_query_failure() {
    let directory = TempDir::new().unwrap();

    let error = FileSecurity::new(directory.path().join("missing.txt"))
        .unwrap()
        .get_security_descriptor()
        .unwrap_err();

    assert!(matches!(error, SecurityError::QueryFailed { .. }));
}

#[test]
fn applying_to_missing_file_is_apply_failure() {
    let directory = TempDir::new().unwrap();

    let error = FileSecurity::new(directory.path().join("missing.txt"))
        .unwrap()
        .set_security_descriptor("O:SYG:SYD:(A;;FA;;;SY)")
        .unwrap_err();

    assert!(matches!(error, SecurityError::ApplyFailed { .. }));
}

#[test]
fn malformed_sddl_is_parse_failure() {
    let directory = TempDir::new().unwrap();
    let path = create_file(&directory);

    let error = FileSecurity::new(&path)
        .unwrap()
        .set_security_descriptor("D:(this is not sddl")
        .unwrap_err();

    assert!(matches!(error, SecurityError::DescriptorParseFailed { .. }));
}
