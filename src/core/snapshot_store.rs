use crate::interface::repository::snapshot::SnapshotRepository;
use crate::model::error::io::IOError;
use crate::model::error::misc::MiscError;
use crate::model::error::Error;
use crate::model::snapshot::SecuritySnapshot;
use crate::utils::file_lock::FileLock;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Stores snapshots as pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    directory: PathBuf,
}

impl SnapshotStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    async fn default_destination(&self, snapshot: &SecuritySnapshot) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.directory).await.map_err(|err| {
            IOError::CreateDirectoryFailed(self.directory.display().to_string(), err)
        })?;
        Ok(self.directory.join(snapshot.file_name()))
    }
}

impl SnapshotRepository for SnapshotStore {
    async fn save_snapshot(
        &self,
        snapshot: &SecuritySnapshot,
        destination: Option<&Path>,
    ) -> Result<PathBuf, Error> {
        let path = match destination {
            Some(destination) => destination.to_path_buf(),
            None => self.default_destination(snapshot).await?,
        };
        let display = path.display().to_string();

        let json = serde_json::to_vec_pretty(snapshot).map_err(MiscError::SerializeError)?;

        let mut file = FileLock::create(&path)
            .await
            .map_err(|err| IOError::LockFileFailed(display.as_str(), err))?;
        file.write_all(&json)
            .await
            .map_err(|err| IOError::WriteFileFailed(display.as_str(), err))?;
        file.flush()
            .await
            .map_err(|err| IOError::WriteFileFailed(display.as_str(), err))?;

        Ok(path)
    }

    async fn load_snapshot(&self, path: &Path) -> Result<SecuritySnapshot, Error> {
        let bytes = fs::read(path)
            .await
            .map_err(|err| IOError::ReadFileFailed(path.display().to_string(), err))?;
        let snapshot = serde_json::from_slice::<SecuritySnapshot>(&bytes)
            .map_err(MiscError::DeserializeError)?;
        Ok(snapshot)
    }
}
