use crate::traceable;

traceable! {
    SecurityError {
        #[error("Failed to convert {path} to a native path")]
        PathEncodingFailed { path: String } => tracing::Level::ERROR,

        #[error("Failed to query security information of {path}")]
        QueryFailed { path: String } => tracing::Level::ERROR,

        #[error("Security information of {path} has no {part}")]
        MissingDescriptorPart { path: String, part: String } => tracing::Level::ERROR,

        #[error("Failed to convert security descriptor of {path} to SDDL")]
        DescriptorToStringFailed { path: String } => tracing::Level::ERROR,

        #[error("Failed to convert {part} SID of {path} to string")]
        SidToStringFailed { path: String, part: String } => tracing::Level::ERROR,

        #[error("Failed to parse SDDL")]
        DescriptorParseFailed => tracing::Level::ERROR,

        #[error("Failed to apply security descriptor to {path}")]
        ApplyFailed { path: String } => tracing::Level::ERROR,

        #[error("File security descriptors are only supported on Windows")]
        UnsupportedPlatform => tracing::Level::ERROR,
    }
}
