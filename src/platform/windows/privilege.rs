use crate::model::error::system::SystemError;
use crate::model::error::Error;
use crate::platform::windows::raii_guard::HandleGuard;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{GetLastError, ERROR_NOT_ALL_ASSIGNED, HANDLE, LUID};
use windows::Win32::Security::{
    AdjustTokenPrivileges, LookupPrivilegeValueW, LUID_AND_ATTRIBUTES, SE_PRIVILEGE_ENABLED,
    SE_RESTORE_NAME, SE_SECURITY_NAME, TOKEN_ADJUST_PRIVILEGES, TOKEN_PRIVILEGES, TOKEN_QUERY,
};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

const RESTORE_PRIVILEGES: [(&str, PCWSTR); 2] = [
    ("SeRestorePrivilege", SE_RESTORE_NAME),
    ("SeSecurityPrivilege", SE_SECURITY_NAME),
];

/// Enables every restore-related privilege the process token holds and
/// returns the names of those that were enabled. Privileges missing from the
/// token are skipped.
pub fn enable_restore_privileges() -> Result<Vec<&'static str>, Error> {
    let token = open_process_token()?;

    let mut enabled = Vec::new();
    for (name, privilege) in RESTORE_PRIVILEGES {
        if unsafe { enable_privilege(&token, privilege)? } {
            enabled.push(name);
        }
    }
    Ok(enabled)
}

fn open_process_token() -> Result<HandleGuard, Error> {
    let mut token_handle = HANDLE::default();

    unsafe {
        OpenProcessToken(
            GetCurrentProcess(),
            TOKEN_ADJUST_PRIVILEGES | TOKEN_QUERY,
            &mut token_handle,
        )
    }
    .map_err(SystemError::AdjustTokenPrivilegesFailed)?;

    Ok(HandleGuard::new(token_handle))
}

unsafe fn enable_privilege(token: &HandleGuard, privilege: PCWSTR) -> Result<bool, Error> {
    unsafe {
        let mut luid = LUID::default();

        LookupPrivilegeValueW(PCWSTR::null(), privilege, &mut luid)
            .map_err(SystemError::AdjustTokenPrivilegesFailed)?;

        let token_privilege = TOKEN_PRIVILEGES {
            PrivilegeCount: 1,
            Privileges: [LUID_AND_ATTRIBUTES {
                Luid: luid,
                Attributes: SE_PRIVILEGE_ENABLED,
            }],
        };

        AdjustTokenPrivileges(
            token.get(),
            false,
            Some(&token_privilege as *const TOKEN_PRIVILEGES),
            0,
            None,
            None,
        )
        .map_err(SystemError::AdjustTokenPrivilegesFailed)?;

        // AdjustTokenPrivileges succeeds even when the token lacks the privilege.
        Ok(GetLastError() != ERROR_NOT_ALL_ASSIGNED)
    }
}
