#![cfg(target_os = "windows")]

use acl_sphere::core::app_config::AppConfig;
use acl_sphere::core::security_manager::SecurityManager;
use std::process::Command;
use std::sync::Arc;
use tempfile::TempDir;

fn manager(directory: &TempDir) -> SecurityManager {
    let path = directory.path().join("config.toml");
    let snapshot_directory = directory.path().join("snapshots");
    std::fs::write(
        &path,
        format!(
            "[Config]\nsnapshot_directory = '{}'\nenable_restore_privilege = false\n",
            snapshot_directory.display()
        ),
    )
    .unwrap();
    SecurityManager::new(Arc::new(AppConfig::new(&path).unwrap()))
}

#[tokio::test]
async fn captured_snapshot_restores_modified_file() {
    let directory = TempDir::new().unwrap();
    let manager = manager(&directory);
    let path = directory.path().join("aFile.txt");
    std::fs::write(&path, "data").unwrap();

    let (snapshot, written) = manager.capture(path.clone(), None).await.unwrap();
    assert!(written.starts_with(manager.store().directory()));
    assert!(snapshot.path.is_absolute());

    let status = Command::new("icacls")
        .arg(&path)
        .args(["/deny", "Everyone:(WD)"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_ne!(manager.describe(path.clone()).await.unwrap(), snapshot.descriptor);

    let report = manager.restore(&written, None).await.unwrap();

    assert!(report.matches());
    assert_eq!(report.target, path);
    assert_eq!(report.observed, snapshot.descriptor);
}
