use crate::interface::file_security::FileSecurityTrait;
use crate::model::error::security::SecurityError;
use crate::model::log::security::SecurityLog;
use crate::model::security_descriptor::SecurityDescriptor;
use crate::platform::windows::raii_guard::{SecurityDescriptorGuard, WideStringGuard};
use crate::utils::wide::{encode_wide_path, encode_wide_str};
use anyhow::anyhow;
use macros::log;
use std::io;
use std::path::{Path, PathBuf};
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::ERROR_SUCCESS;
use windows::Win32::Security::Authorization::{
    ConvertSecurityDescriptorToStringSecurityDescriptorW, ConvertSidToStringSidW,
    ConvertStringSecurityDescriptorToSecurityDescriptorW, GetNamedSecurityInfoW, SDDL_REVISION_1,
    SE_FILE_OBJECT,
};
use windows::Win32::Security::{
    SetFileSecurityW, ATTRIBUTE_SECURITY_INFORMATION, DACL_SECURITY_INFORMATION,
    GROUP_SECURITY_INFORMATION, OBJECT_SECURITY_INFORMATION, OWNER_SECURITY_INFORMATION,
    PSECURITY_DESCRIPTOR, PSID,
};

/// Owner, group, DACL and resource attributes.
pub const SECURITY_INFORMATION: OBJECT_SECURITY_INFORMATION = OBJECT_SECURITY_INFORMATION(
    OWNER_SECURITY_INFORMATION.0
        | GROUP_SECURITY_INFORMATION.0
        | DACL_SECURITY_INFORMATION.0
        | ATTRIBUTE_SECURITY_INFORMATION.0,
);

#[derive(Debug, Clone)]
pub struct FileSecurity {
    path: PathBuf,
    wide_path: Vec<u16>,
}

impl FileSecurity {
    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn sid_to_string(&self, sid: PSID, part: &str) -> Result<String, SecurityError> {
        if sid.0.is_null() {
            return Err(SecurityError::MissingDescriptorPart(
                self.display(),
                part,
                anyhow!("GetNamedSecurityInfoW returned a null {part} SID"),
            ));
        }

        let mut text = PWSTR::null();
        let result = unsafe { ConvertSidToStringSidW(sid, &mut text) };
        let text = WideStringGuard::new(text);
        result.map_err(|err| SecurityError::SidToStringFailed(self.display(), part, err))?;

        text.to_string_lossless()
            .map_err(|err| SecurityError::SidToStringFailed(self.display(), part, err))
    }
}

impl FileSecurityTrait for FileSecurity {
    fn new(path: impl AsRef<Path>) -> Result<Self, SecurityError> {
        let path = path.as_ref().to_path_buf();
        let wide_path = encode_wide_path(&path)?;
        Ok(Self { path, wide_path })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn get_security_descriptor(&self) -> Result<SecurityDescriptor, SecurityError> {
        let mut owner = PSID::default();
        let mut group = PSID::default();
        let mut descriptor = PSECURITY_DESCRIPTOR::default();

        let status = unsafe {
            GetNamedSecurityInfoW(
                PCWSTR(self.wide_path.as_ptr()),
                SE_FILE_OBJECT,
                SECURITY_INFORMATION,
                Some(&mut owner as *mut PSID),
                Some(&mut group as *mut PSID),
                None,
                None,
                &mut descriptor,
            )
        };
        // Owner and group point into this buffer.
        let descriptor = SecurityDescriptorGuard::new(descriptor);

        if status != ERROR_SUCCESS {
            let err = io::Error::from_raw_os_error(status.0 as i32);
            return Err(SecurityError::QueryFailed(self.display(), err));
        }

        if descriptor.is_null() {
            return Err(SecurityError::MissingDescriptorPart(
                self.display(),
                "security descriptor",
                anyhow!("GetNamedSecurityInfoW returned a null descriptor"),
            ));
        }

        let mut text = PWSTR::null();
        let result = unsafe {
            ConvertSecurityDescriptorToStringSecurityDescriptorW(
                descriptor.get(),
                SDDL_REVISION_1,
                SECURITY_INFORMATION,
                &mut text,
                None,
            )
        };
        let text = WideStringGuard::new(text);
        result.map_err(|err| SecurityError::DescriptorToStringFailed(self.display(), err))?;
        let dacl = text
            .to_string_lossless()
            .map_err(|err| SecurityError::DescriptorToStringFailed(self.display(), err))?;

        let owner = self.sid_to_string(owner, "owner")?;
        let group = self.sid_to_string(group, "group")?;

        log!(SecurityLog::DescriptorQueried {
            path: self.display()
        });

        Ok(SecurityDescriptor::new(owner, group, dacl))
    }

    fn set_security_descriptor(&self, sddl: &str) -> Result<(), SecurityError> {
        let text = encode_wide_str(sddl)?;

        let mut descriptor = PSECURITY_DESCRIPTOR::default();
        let result = unsafe {
            ConvertStringSecurityDescriptorToSecurityDescriptorW(
                PCWSTR(text.as_ptr()),
                SDDL_REVISION_1,
                &mut descriptor,
                None,
            )
        };
        let descriptor = SecurityDescriptorGuard::new(descriptor);
        result.map_err(SecurityError::DescriptorParseFailed)?;

        unsafe {
            SetFileSecurityW(
                PCWSTR(self.wide_path.as_ptr()),
                SECURITY_INFORMATION,
                descriptor.get(),
            )
        }
        .ok()
        .map_err(|err| SecurityError::ApplyFailed(self.display(), err))?;

        log!(SecurityLog::DescriptorApplied {
            path: self.display()
        });

        Ok(())
    }
}
