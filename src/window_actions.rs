use crate::{app_types::WindowKind, window_host::WindowHost};

/// Shows and focuses a live window. Failures are logged, not propagated.
pub(crate) fn reveal_window<F>(host: &dyn WindowHost, kind: WindowKind, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = host.show(kind) {
        log(&error);
    }
    if let Err(error) = host.focus(kind) {
        log(&error);
    }
}

pub(crate) fn reveal_main_window<F>(host: &dyn WindowHost, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    if !host.is_live(WindowKind::Main) {
        log("main window not found, recreating");
        host.create(WindowKind::Main)?;
    }
    reveal_window(host, WindowKind::Main, log);
    Ok(())
}
