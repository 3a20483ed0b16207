use std::time::Instant;

use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    app_types::{ManagedHostState, WindowKind},
    append_desktop_log, append_shutdown_log, append_startup_log, desktop_bridge, logging,
    session_controller,
    shell_config::ShellConfig,
    surface_mode::SurfaceMode,
    tray_controller, tray_setup, ui_dispatch, window_actions,
    window_host::{TauriWindowHost, WindowHost},
    DESKTOP_LOG_FILE,
};

fn create_startup_windows(app_handle: &AppHandle) -> Result<(), String> {
    let host = TauriWindowHost::new(app_handle);
    for kind in [WindowKind::Main, WindowKind::TrayPopup] {
        if host.is_live(kind) {
            continue;
        }
        host.create(kind)?;
    }
    Ok(())
}

fn handle_window_destroyed(app_handle: &AppHandle, kind: WindowKind) {
    match kind {
        WindowKind::Session => {
            append_desktop_log("session window destroyed");
            let result = ui_dispatch::with_host(app_handle, "session teardown", |host, state| {
                session_controller::handle_session_destroyed(host, state, append_desktop_log)
            });
            if let Err(error) = result {
                append_desktop_log(&format!("session teardown failed: {error}"));
            }
        }
        WindowKind::Main | WindowKind::TrayPopup => {
            append_desktop_log(&format!("{} window destroyed", kind.label()));
        }
    }
}

fn handle_exit_event(app_handle: &AppHandle) {
    let result = ui_dispatch::with_host(app_handle, "exit cleanup", |_, state| {
        if let Some(listener) = state.tray_menu_listener.take() {
            state.events.unsubscribe(listener);
        }
    });
    if let Err(error) = result {
        append_shutdown_log(&format!("exit cleanup skipped: {error}"));
    }
    append_shutdown_log("desktop process exiting");
}

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(logging::default_shell_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    let config = ShellConfig::from_env();
    append_startup_log(&format!("shell config: {}", config.log_summary()));
    if config.development && !config.dev_host_has_ipc_access() {
        append_startup_log(&format!(
            "dev host {} is not granted IPC access; bridge calls will be rejected",
            config.dev_host
        ));
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            append_desktop_log("second launch detected, revealing main window");
            if let Err(error) =
                ui_dispatch::run_on_main_thread_dispatch(app, "reveal main window", |main_app| {
                    let host = TauriWindowHost::new(main_app);
                    if let Err(error) =
                        window_actions::reveal_main_window(&host, append_desktop_log)
                    {
                        append_desktop_log(&format!("reveal main window failed: {error}"));
                    }
                })
            {
                append_desktop_log(&error);
            }
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(ManagedHostState::new(&config))
        .manage(config)
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::reveal_main_window,
            crate::desktop_bridge_commands::open_session,
            crate::desktop_bridge_commands::open_file_picker,
        ])
        .on_window_event(|window, event| {
            let Some(kind) = WindowKind::from_label(window.label()) else {
                return;
            };

            match event {
                WindowEvent::Focused(false) if kind == WindowKind::TrayPopup => {
                    let blurred_at = Instant::now();
                    let result =
                        ui_dispatch::with_host(window.app_handle(), "tray blur", |host, state| {
                            tray_controller::hide_tray_popup_on_blur(
                                host,
                                state,
                                blurred_at,
                                append_desktop_log,
                            )
                        });
                    if let Err(error) = result {
                        append_desktop_log(&format!("tray blur hide failed: {error}"));
                    }
                }
                WindowEvent::Destroyed => handle_window_destroyed(window.app_handle(), kind),
                _ => {}
            }
        })
        .on_page_load(|webview, payload| {
            if !matches!(payload.event(), PageLoadEvent::Finished) {
                return;
            }
            append_desktop_log(&format!("page-load finished: {}", payload.url()));
            let Some(kind) = WindowKind::from_label(webview.label()) else {
                return;
            };
            if let Some(mismatch) =
                desktop_bridge::page_mode_mismatch(SurfaceMode::for_window(kind), payload.url())
            {
                append_desktop_log(&mismatch);
            }
        })
        .setup(|app| {
            #[cfg(target_os = "windows")]
            {
                let identifier = app.config().identifier.clone();
                match crate::app_identity::apply_app_user_model_id(&identifier) {
                    Ok(()) => append_startup_log(&format!("application identity: {identifier}")),
                    Err(error) => append_startup_log(&error),
                }
            }

            let app_handle = app.handle().clone();
            if let Err(error) = create_startup_windows(&app_handle) {
                append_startup_log(&format!("failed to create startup windows: {error}"));
                return Err(error.into());
            }

            if let Err(error) = tray_setup::setup_tray(&app_handle) {
                append_startup_log(&format!("failed to initialize tray: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            if let RunEvent::Exit = event {
                handle_exit_event(app_handle);
            }
        });
}
