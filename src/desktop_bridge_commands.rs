use tauri::{AppHandle, WebviewWindow};

use crate::{
    append_desktop_log, file_picker, session_controller, ui_dispatch, window_actions,
    window_host::TauriWindowHost,
};

fn log_failure(action: &str, result: Result<(), String>) {
    if let Err(error) = result {
        append_desktop_log(&format!("{action} failed: {error}"));
    }
}

#[tauri::command]
pub(crate) fn reveal_main_window(app_handle: AppHandle) -> Result<(), String> {
    ui_dispatch::run_on_main_thread_dispatch(&app_handle, "reveal main window", |app| {
        let host = TauriWindowHost::new(app);
        log_failure(
            "reveal main window",
            window_actions::reveal_main_window(&host, append_desktop_log),
        );
    })
}

#[tauri::command]
pub(crate) fn open_session(app_handle: AppHandle) -> Result<(), String> {
    ui_dispatch::run_on_main_thread_dispatch(&app_handle, "open session", |app| {
        let result = ui_dispatch::with_host(app, "open session", |host, state| {
            session_controller::open_session(host, state, append_desktop_log)
        })
        .and_then(|opened| opened)
        .map(|outcome| append_desktop_log(&format!("open session from window: {outcome:?}")));
        log_failure("open session", result);
    })
}

#[tauri::command]
pub(crate) fn open_file_picker(app_handle: AppHandle, webview_window: WebviewWindow) {
    file_picker::open_file_picker(&app_handle, webview_window.label().to_string());
}
