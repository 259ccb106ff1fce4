use macros::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Termination in process")]
        Terminating => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,

        #[error("Configuration not found, using defaults: {path}")]
        DefaultConfigUsed { path: String } => tracing::Level::WARN,

        #[error("Not running as administrator, owner changes may be rejected")]
        ReRunAsAdmin => tracing::Level::WARN,

        #[error("Enabled privilege: {name}")]
        PrivilegeEnabled { name: String } => tracing::Level::DEBUG,
    }
}
