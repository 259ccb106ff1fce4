use std::ffi::c_void;
use std::string::FromUtf16Error;
use windows::core::PWSTR;
use windows::Win32::Foundation::{CloseHandle, LocalFree, HANDLE, HLOCAL};
use windows::Win32::Security::PSECURITY_DESCRIPTOR;

/// Owns a security descriptor allocated by the system with `LocalAlloc`.
///
/// Owner and group `PSID`s obtained together with the descriptor point into
/// this buffer and must not outlive the guard.
pub struct SecurityDescriptorGuard {
    descriptor: PSECURITY_DESCRIPTOR,
}

impl SecurityDescriptorGuard {
    pub fn new(descriptor: PSECURITY_DESCRIPTOR) -> Self {
        Self { descriptor }
    }

    pub fn get(&self) -> PSECURITY_DESCRIPTOR {
        self.descriptor
    }

    pub fn is_null(&self) -> bool {
        self.descriptor.0.is_null()
    }
}

impl Drop for SecurityDescriptorGuard {
    fn drop(&mut self) {
        if !self.is_null() {
            unsafe {
                let _ = LocalFree(Some(HLOCAL(self.descriptor.0)));
            }
        }
    }
}

/// Owns a NUL-terminated wide string allocated by the system with `LocalAlloc`.
pub struct WideStringGuard {
    text: PWSTR,
}

impl WideStringGuard {
    pub fn new(text: PWSTR) -> Self {
        Self { text }
    }

    pub fn is_null(&self) -> bool {
        self.text.is_null()
    }

    /// Decodes the text, rejecting unpaired surrogates. A null string decodes
    /// to an empty one.
    pub fn to_string_lossless(&self) -> Result<String, FromUtf16Error> {
        if self.is_null() {
            return Ok(String::new());
        }
        unsafe { self.text.to_string() }
    }
}

impl Drop for WideStringGuard {
    fn drop(&mut self) {
        if !self.is_null() {
            unsafe {
                let _ = LocalFree(Some(HLOCAL(self.text.0 as *mut c_void)));
            }
        }
    }
}

pub struct HandleGuard {
    handle: HANDLE,
}

impl HandleGuard {
    pub fn new(handle: HANDLE) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> HANDLE {
        self.handle
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        if !self.handle.is_invalid() {
            unsafe {
                let _ = CloseHandle(self.handle);
            }
        }
    }
}
