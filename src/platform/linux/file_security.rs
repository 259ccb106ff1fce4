use crate::interface::file_security::FileSecurityTrait;
use crate::model::error::security::SecurityError;
use crate::model::security_descriptor::SecurityDescriptor;
use crate::utils::wide::{encode_wide_path, encode_wide_str};
use anyhow::anyhow;
use std::path::{Path, PathBuf};

/// Windows security descriptors have no counterpart here. Paths and SDDL are
/// still validated so callers see the same encoding errors on every platform.
#[derive(Debug, Clone)]
pub struct FileSecurity {
    path: PathBuf,
}

fn unsupported() -> SecurityError {
    SecurityError::UnsupportedPlatform(anyhow!(
        "target OS is {}",
        std::env::consts::OS
    ))
}

impl FileSecurityTrait for FileSecurity {
    fn new(path: impl AsRef<Path>) -> Result<Self, SecurityError> {
        encode_wide_path(path.as_ref())?;
        Err(unsupported())
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn get_security_descriptor(&self) -> Result<SecurityDescriptor, SecurityError> {
        Err(unsupported())
    }

    fn set_security_descriptor(&self, sddl: &str) -> Result<(), SecurityError> {
        encode_wide_str(sddl)?;
        Err(unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_reports_unsupported_platform() {
        let error = FileSecurity::new("aFile.txt").unwrap_err();
        assert!(matches!(error, SecurityError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn invalid_path_is_reported_first() {
        let error = FileSecurity::new("").unwrap_err();
        assert!(matches!(error, SecurityError::PathEncodingFailed { .. }));
    }
}
