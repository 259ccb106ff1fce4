use macros::loggable;

loggable! {
    SecurityLog {
        #[error("Queried security descriptor: {path}")]
        DescriptorQueried { path: String } => tracing::Level::DEBUG,

        #[error("Applied security descriptor: {path}")]
        DescriptorApplied { path: String } => tracing::Level::INFO,

        #[error("Captured security snapshot {uuid}: {path}")]
        SnapshotCaptured { uuid: String, path: String } => tracing::Level::INFO,

        #[error("Restored security snapshot {uuid}: {path}")]
        SnapshotRestored { uuid: String, path: String } => tracing::Level::INFO,

        /// The SDDL read back after a restore differs from the one applied.
        #[error("Security descriptor of {path} differs from the applied one after restore")]
        DescriptorMismatch { path: String } => tracing::Level::WARN,
    }
}
