use crate::core::app_config::AppConfig;
use crate::core::snapshot_store::SnapshotStore;
use crate::interface::file_security::FileSecurityTrait;
use crate::interface::repository::snapshot::SnapshotRepository;
use crate::model::error::security::SecurityError;
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use crate::model::log::security::SecurityLog;
use crate::model::log::system::SystemLog;
use crate::model::security_descriptor::SecurityDescriptor;
use crate::model::snapshot::SecuritySnapshot;
use crate::platform::file_security::FileSecurity;
use crate::utils::privilege::{enable_restore_privileges, privileged};
use anyhow::anyhow;
use macros::log;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RestoreReport {
    pub snapshot: SecuritySnapshot,
    pub target: PathBuf,
    pub observed: SecurityDescriptor,
}

impl RestoreReport {
    /// Whether the SDDL read back after applying equals the captured one.
    pub fn matches(&self) -> bool {
        self.observed.dacl == self.snapshot.descriptor.dacl
    }
}

pub struct SecurityManager {
    config: Arc<AppConfig>,
    store: SnapshotStore,
}

impl SecurityManager {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let store = SnapshotStore::new(config.snapshot_directory.clone());
        Self { config, store }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub async fn describe(&self, path: PathBuf) -> Result<SecurityDescriptor, Error> {
        Self::blocking(move || FileSecurity::new(&path)?.get_security_descriptor()).await
    }

    /// Captures the descriptor of `path` and writes it as a snapshot.
    pub async fn capture(
        &self,
        path: PathBuf,
        output: Option<PathBuf>,
    ) -> Result<(SecuritySnapshot, PathBuf), Error> {
        let path = Self::resolve_path(&path)?;
        let descriptor = self.describe(path.clone()).await?;
        let snapshot = SecuritySnapshot::new(path, descriptor);

        let written = self
            .store
            .save_snapshot(&snapshot, output.as_deref())
            .await?;

        log!(SecurityLog::SnapshotCaptured {
            uuid: snapshot.uuid.to_string(),
            path: snapshot.path.display().to_string(),
        });

        Ok((snapshot, written))
    }

    /// Snapshots are replayed from any working directory, so the stored path
    /// must not be relative.
    pub fn resolve_path(path: &Path) -> Result<PathBuf, Error> {
        let resolved = std::path::absolute(path)
            .map_err(|err| SecurityError::PathEncodingFailed(path.display().to_string(), err))?;
        Ok(resolved)
    }

    /// Applies a stored snapshot to its own path or to `target`, then reads the
    /// descriptor back.
    pub async fn restore(
        &self,
        snapshot_path: &Path,
        target: Option<PathBuf>,
    ) -> Result<RestoreReport, Error> {
        let snapshot = self.store.load_snapshot(snapshot_path).await?;
        let target = target.unwrap_or_else(|| snapshot.path.clone());

        if snapshot.descriptor.dacl.is_empty() {
            Err(SecurityError::DescriptorParseFailed(anyhow!(
                "snapshot {} holds no SDDL",
                snapshot.uuid
            )))?
        }

        if self.config.enable_restore_privilege {
            Self::prepare_privileges();
        }

        let sddl = snapshot.descriptor.dacl.clone();
        let observed = Self::blocking({
            let target = target.clone();
            move || {
                let file_security = FileSecurity::new(&target)?;
                file_security.set_security_descriptor(&sddl)?;
                file_security.get_security_descriptor()
            }
        })
        .await?;

        let report = RestoreReport {
            snapshot,
            target,
            observed,
        };

        if !report.matches() {
            log!(SecurityLog::DescriptorMismatch {
                path: report.target.display().to_string()
            });
        }
        log!(SecurityLog::SnapshotRestored {
            uuid: report.snapshot.uuid.to_string(),
            path: report.target.display().to_string(),
        });

        Ok(report)
    }

    fn prepare_privileges() {
        if !privileged() {
            log!(SystemLog::ReRunAsAdmin);
        }
        match enable_restore_privileges() {
            Ok(names) => {
                for name in names {
                    log!(SystemLog::PrivilegeEnabled {
                        name: name.to_string()
                    });
                }
            }
            Err(err) => log!(err),
        }
    }

    async fn blocking<T, F>(operation: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, SecurityError> + Send + 'static,
    {
        let result = tokio::task::spawn_blocking(operation)
            .await
            .map_err(SystemError::ThreadPanic)?;
        Ok(result?)
    }
}
