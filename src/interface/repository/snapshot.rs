use crate::model::error::Error;
use crate::model::snapshot::SecuritySnapshot;
use std::path::{Path, PathBuf};

#[allow(async_fn_in_trait)]
pub trait SnapshotRepository {
    /// Writes the snapshot to `destination`, or to the repository's own
    /// location when none is given, and returns the path written.
    async fn save_snapshot(
        &self,
        snapshot: &SecuritySnapshot,
        destination: Option<&Path>,
    ) -> Result<PathBuf, Error>;

    async fn load_snapshot(&self, path: &Path) -> Result<SecuritySnapshot, Error>;
}
