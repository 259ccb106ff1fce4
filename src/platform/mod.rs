#[cfg(not(target_os = "windows"))]
pub mod linux;
#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub use self::linux::*;
#[cfg(target_os = "windows")]
pub use self::windows::*;
