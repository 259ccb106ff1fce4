use crate::traceable;

traceable! {
    IOError {
        #[error("Failed to create directory: {path}")]
        CreateDirectoryFailed { path: String } => tracing::Level::ERROR,

        #[error("Failed to read file: {path}")]
        ReadFileFailed { path: String } => tracing::Level::ERROR,

        #[error("Failed to write file: {path}")]
        WriteFileFailed { path: String } => tracing::Level::ERROR,

        #[error("Failed to lock file: {path}")]
        LockFileFailed { path: String } => tracing::Level::ERROR,
    }
}
