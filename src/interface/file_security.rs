use crate::model::error::security::SecurityError;
use crate::model::security_descriptor::SecurityDescriptor;
use std::path::Path;

/// Reads and writes the security descriptor of a single file.
pub trait FileSecurityTrait: Sized {
    /// Prepares the native form of `path`. Nothing is queried yet.
    fn new(path: impl AsRef<Path>) -> Result<Self, SecurityError>;

    fn path(&self) -> &Path;

    fn get_security_descriptor(&self) -> Result<SecurityDescriptor, SecurityError>;

    /// Applies owner, group and DACL from `sddl` to the file.
    fn set_security_descriptor(&self, sddl: &str) -> Result<(), SecurityError>;
}
