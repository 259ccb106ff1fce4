use fs4::tokio::AsyncFileExt;
use std::io;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use tokio::fs::{File, OpenOptions};

/// Holds an exclusive advisory lock on a file until dropped.
#[derive(Debug)]
pub struct FileLock {
    file: File,
}

impl FileLock {
    /// Opens `path` for writing, locks it and only then truncates it, so a
    /// file held by another writer is left untouched.
    pub async fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .await?;
        let lock = Self::from_file(file)?;
        lock.file.set_len(0).await?;
        Ok(lock)
    }

    pub fn from_file(file: File) -> io::Result<Self> {
        if !file.try_lock_exclusive()? {
            return Err(io::Error::new(
                io::ErrorKind::WouldBlock,
                "file is locked by another writer",
            ));
        }
        Ok(Self { file })
    }
}

impl Deref for FileLock {
    type Target = File;

    fn deref(&self) -> &Self::Target {
        &self.file
    }
}

impl DerefMut for FileLock {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.file
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn create_truncates_existing_content() {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("snapshot.json");
        std::fs::write(&path, "previous snapshot content").unwrap();

        let mut lock = FileLock::create(&path).await.unwrap();
        lock.write_all(b"new").await.unwrap();
        lock.flush().await.unwrap();
        drop(lock);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn locked_file_is_neither_locked_again_nor_truncated() {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("snapshot.json");
        std::fs::write(&path, "held").unwrap();

        let held = FileLock::from_file(File::open(&path).await.unwrap()).unwrap();

        let error = FileLock::create(&path).await.unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::WouldBlock);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "held");
        drop(held);

        assert!(FileLock::create(&path).await.is_ok());
    }
}
