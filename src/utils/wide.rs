use crate::model::error::security::SecurityError;
use anyhow::anyhow;
use std::path::Path;

/// Encodes `path` as a NUL-terminated UTF-16 string for the wide Win32 APIs.
pub fn encode_wide_path(path: &Path) -> Result<Vec<u16>, SecurityError> {
    let display = path.display().to_string();
    let units = path_units(path).ok_or_else(|| {
        SecurityError::PathEncodingFailed(display.clone(), anyhow!("path is not valid Unicode"))
    })?;
    terminate(units).map_err(|err| SecurityError::PathEncodingFailed(display, err))
}

/// Encodes SDDL text as a NUL-terminated UTF-16 string.
pub fn encode_wide_str(text: &str) -> Result<Vec<u16>, SecurityError> {
    terminate(text.encode_utf16().collect()).map_err(SecurityError::DescriptorParseFailed)
}

#[cfg(target_os = "windows")]
fn path_units(path: &Path) -> Option<Vec<u16>> {
    use std::os::windows::ffi::OsStrExt;
    Some(path.as_os_str().encode_wide().collect())
}

#[cfg(not(target_os = "windows"))]
fn path_units(path: &Path) -> Option<Vec<u16>> {
    path.to_str().map(|path| path.encode_utf16().collect())
}

fn terminate(mut units: Vec<u16>) -> anyhow::Result<Vec<u16>> {
    if units.is_empty() {
        return Err(anyhow!("input is empty"));
    }
    if units.contains(&0) {
        return Err(anyhow!("input contains an interior NUL"));
    }
    units.push(0);
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_nul_terminated() {
        let wide = encode_wide_path(Path::new("aFile.txt")).unwrap();

        assert_eq!(wide.last(), Some(&0));
        assert_eq!(String::from_utf16(&wide[..wide.len() - 1]).unwrap(), "aFile.txt");
    }

    #[test]
    fn non_ascii_path_round_trips() {
        let wide = encode_wide_path(Path::new("資料/報告.txt")).unwrap();

        assert_eq!(String::from_utf16(&wide[..wide.len() - 1]).unwrap(), "資料/報告.txt");
    }

    #[test]
    fn empty_path_is_rejected() {
        let error = encode_wide_path(Path::new("")).unwrap_err();
        assert!(matches!(error, SecurityError::PathEncodingFailed { .. }));
    }

    #[test]
    fn interior_nul_is_rejected() {
        let error = encode_wide_path(Path::new("a\0b.txt")).unwrap_err();
        assert!(matches!(error, SecurityError::PathEncodingFailed { .. }));

        let error = encode_wide_str("D:(A;;FA;;;SY)\0").unwrap_err();
        assert!(matches!(error, SecurityError::DescriptorParseFailed { .. }));
    }
}
