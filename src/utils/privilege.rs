#[cfg(target_os = "windows")]
use crate::platform::windows::privilege as platform;
use crate::model::error::Error;
pub use ::privilege::user::privileged;

/// Enables the privileges needed to write arbitrary owners and groups.
#[cfg(target_os = "windows")]
pub fn enable_restore_privileges() -> Result<Vec<&'static str>, Error> {
    platform::enable_restore_privileges()
}

#[cfg(not(target_os = "windows"))]
pub fn enable_restore_privileges() -> Result<Vec<&'static str>, Error> {
    Ok(Vec::new())
}
