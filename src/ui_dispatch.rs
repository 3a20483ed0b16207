use tauri::{AppHandle, Manager};

use crate::{
    app_types::{HostState, ManagedHostState},
    window_host::TauriWindowHost,
};

/// Queues `task` on the event loop thread, where every lifecycle mutation
/// runs.
pub(crate) fn run_on_main_thread_dispatch<F>(
    app_handle: &AppHandle,
    action: &str,
    task: F,
) -> Result<(), String>
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    let dispatch_handle = app_handle.clone();
    app_handle
        .run_on_main_thread(move || task(&dispatch_handle))
        .map_err(|error| format!("Failed to dispatch {action} to main thread: {error}"))
}

/// Runs a controller against the live window registry with `HostState`
/// locked for the duration of the call.
pub(crate) fn with_host<T, F>(app_handle: &AppHandle, action: &str, run: F) -> Result<T, String>
where
    F: FnOnce(&TauriWindowHost<'_>, &mut HostState) -> T,
{
    let managed = app_handle
        .try_state::<ManagedHostState>()
        .ok_or_else(|| format!("host state unavailable for {action}"))?;
    let host = TauriWindowHost::new(app_handle);
    managed.with_state(action, |state| run(&host, state))
}
