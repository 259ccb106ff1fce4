use crate::traceable;

traceable! {
    SystemError {
        #[error("Failed to adjust token privileges")]
        AdjustTokenPrivilegesFailed => tracing::Level::ERROR,

        #[error("Failed to initialize logging")]
        LoggingInitializeFailed => tracing::Level::ERROR,

        #[error("Invalid configuration")]
        InvalidConfig => tracing::Level::ERROR,

        #[error("Worker thread panicked")]
        ThreadPanic => tracing::Level::ERROR,
    }
}
