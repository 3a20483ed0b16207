//! Explicit taskbar identity for the shell process on Windows.

/// Upper bound Windows places on an AppUserModelID.
const APP_USER_MODEL_ID_MAX_LEN: usize = 128;

/// NUL-terminated UTF-16 form of `identifier`, rejected when Windows would
/// not accept it as an AppUserModelID.
#[cfg(any(target_os = "windows", test))]
pub(crate) fn app_user_model_id_wide(identifier: &str) -> Result<Vec<u16>, String> {
    if identifier.is_empty() {
        return Err("application identity is empty".to_string());
    }
    if identifier.contains(['\0', ' ']) {
        return Err(format!(
            "application identity {identifier:?} contains a space or NUL"
        ));
    }

    let mut wide: Vec<u16> = identifier.encode_utf16().collect();
    if wide.len() > APP_USER_MODEL_ID_MAX_LEN {
        return Err(format!(
            "application identity {identifier:?} exceeds {APP_USER_MODEL_ID_MAX_LEN} characters"
        ));
    }
    wide.push(0);
    Ok(wide)
}

#[cfg(target_os = "windows")]
pub(crate) fn apply_app_user_model_id(identifier: &str) -> Result<(), String> {
    use windows_sys::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;

    let wide = app_user_model_id_wide(identifier)?;
    // SAFETY: `wide` is NUL-terminated and outlives the call.
    let result = unsafe { SetCurrentProcessExplicitAppUserModelID(wide.as_ptr()) };
    if result < 0 {
        return Err(format!(
            "Failed to set application identity {identifier}: HRESULT {result:#010x}"
        ));
    }
    Ok(())
}
