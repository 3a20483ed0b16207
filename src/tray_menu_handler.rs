use tauri::AppHandle;

use crate::{
    append_desktop_log, append_shutdown_log, session_controller, tray_actions, ui_dispatch,
    window_host::TauriWindowHost,
};

pub(crate) fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ConnectLastSession) => {
            let result = ui_dispatch::with_host(app_handle, "tray connect", |host, state| {
                session_controller::open_session(host, state, append_desktop_log)
            })
            .and_then(|opened| opened);
            match result {
                Ok(outcome) => append_desktop_log(&format!("tray connect: {outcome:?}")),
                Err(error) => append_desktop_log(&format!("tray connect failed: {error}")),
            }
        }
        Some(tray_actions::TrayMenuAction::DisconnectAllSessions) => {
            append_desktop_log("tray requested disconnect of all sessions");
            session_controller::disconnect_all_sessions(
                &TauriWindowHost::new(app_handle),
                append_desktop_log,
            );
        }
        Some(tray_actions::TrayMenuAction::Exit) => {
            append_shutdown_log("tray exit requested, exiting desktop process");
            app_handle.exit(0);
        }
        None => append_desktop_log(&format!("ignoring unknown tray menu id: {menu_id}")),
    }
}
