pub mod io;
pub mod misc;
pub mod security;
pub mod system;

use crate::model::error::io::IOError;
use crate::model::error::misc::MiscError;
use crate::model::error::security::SecurityError;
use crate::model::error::system::SystemError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(IOError),
    #[error(transparent)]
    Misc(MiscError),
    #[error(transparent)]
    Security(SecurityError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::IO(error) => error.level(),
            Self::Misc(error) => error.level(),
            Self::Security(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }
}

impl From<IOError> for Error {
    fn from(error: IOError) -> Self {
        Self::IO(error)
    }
}

impl From<MiscError> for Error {
    fn from(error: MiscError) -> Self {
        Self::Misc(error)
    }
}

impl From<SecurityError> for Error {
    fn from(error: SecurityError) -> Self {
        Self::Security(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_error_carries_path_and_cause() {
        let error = SecurityError::QueryFailed("C:\\data\\a.txt", anyhow::anyhow!("Access is denied."));

        assert_eq!(
            error.to_string(),
            "Failed to query security information of C:\\data\\a.txt"
        );
        assert_eq!(error.name(), "QueryFailed");
        assert_eq!(error.level(), tracing::Level::ERROR);

        let source = std::error::Error::source(&error).map(|source| source.to_string());
        assert_eq!(source.as_deref(), Some("Access is denied."));
    }

    #[test]
    fn unit_variant_constructor_fits_map_err() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad sddl"));

        let error: Error = result
            .map_err(SecurityError::DescriptorParseFailed)
            .unwrap_err()
            .into();

        assert!(matches!(
            error,
            Error::Security(SecurityError::DescriptorParseFailed { .. })
        ));
        assert_eq!(error.to_string(), "Failed to parse SDDL");
    }

    #[test]
    fn wrapped_error_keeps_variant_level_and_message() {
        let error = Error::from(IOError::ReadFileFailed(
            "snapshots/a.json",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));

        assert_eq!(error.level(), tracing::Level::ERROR);
        assert_eq!(error.to_string(), "Failed to read file: snapshots/a.json");
        assert!(matches!(error, Error::IO(IOError::ReadFileFailed { .. })));
    }

    #[test]
    fn thread_panic_is_system_error() {
        let error = Error::from(SystemError::ThreadPanic(anyhow::anyhow!("join failed")));
        assert!(matches!(error, Error::System(SystemError::ThreadPanic { .. })));
    }
}
