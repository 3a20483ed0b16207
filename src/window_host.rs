use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    AppHandle, Emitter, Manager, PhysicalPosition, WebviewWindow,
};

use crate::{
    app_types::WindowKind,
    append_desktop_log,
    shell_config::ShellConfig,
    shell_signals::ShellSignal,
    tray_menu::TrayMenuItemSpec,
    tray_position::{PopupPosition, PopupSize, ScreenRect},
    window_factory, TRAY_ID,
};

/// Window registry and native surface used by the controllers.
pub(crate) trait WindowHost {
    fn is_live(&self, kind: WindowKind) -> bool;
    fn is_visible(&self, kind: WindowKind) -> Result<bool, String>;
    fn create(&self, kind: WindowKind) -> Result<(), String>;
    fn show(&self, kind: WindowKind) -> Result<(), String>;
    fn hide(&self, kind: WindowKind) -> Result<(), String>;
    fn focus(&self, kind: WindowKind) -> Result<(), String>;
    fn close(&self, kind: WindowKind) -> Result<(), String>;
    fn outer_size(&self, kind: WindowKind) -> Result<PopupSize, String>;
    fn set_position(&self, kind: WindowKind, position: PopupPosition) -> Result<(), String>;
    /// Usable area of the primary display, in physical pixels.
    fn work_area(&self) -> Option<ScreenRect>;
    fn emit(&self, kind: WindowKind, signal: &ShellSignal) -> Result<(), String>;
    fn rebuild_tray_menu(&self, items: &[TrayMenuItemSpec]) -> Result<(), String>;
}

pub(crate) struct TauriWindowHost<'a> {
    app_handle: &'a AppHandle,
}

impl<'a> TauriWindowHost<'a> {
    pub(crate) fn new(app_handle: &'a AppHandle) -> Self {
        Self { app_handle }
    }

    fn window(&self, kind: WindowKind) -> Result<WebviewWindow, String> {
        self.app_handle
            .get_webview_window(kind.label())
            .ok_or_else(|| format!("{} window not found", kind.label()))
    }
}

impl WindowHost for TauriWindowHost<'_> {
    fn is_live(&self, kind: WindowKind) -> bool {
        self.app_handle.get_webview_window(kind.label()).is_some()
    }

    fn is_visible(&self, kind: WindowKind) -> Result<bool, String> {
        self.window(kind)?.is_visible().map_err(|error| {
            format!("Failed to read {} window visibility: {error}", kind.label())
        })
    }

    fn create(&self, kind: WindowKind) -> Result<(), String> {
        let config = self
            .app_handle
            .try_state::<ShellConfig>()
            .map(|state| state.inner().clone())
            .unwrap_or_default();
        window_factory::create_window(self.app_handle, kind, &config).map(|_| ())
    }

    fn show(&self, kind: WindowKind) -> Result<(), String> {
        self.window(kind)?
            .show()
            .map_err(|error| format!("Failed to show {} window: {error}", kind.label()))
    }

    fn hide(&self, kind: WindowKind) -> Result<(), String> {
        self.window(kind)?
            .hide()
            .map_err(|error| format!("Failed to hide {} window: {error}", kind.label()))
    }

    fn focus(&self, kind: WindowKind) -> Result<(), String> {
        let window = self.window(kind)?;
        if window.is_minimized().unwrap_or(false) {
            window
                .unminimize()
                .map_err(|error| format!("Failed to restore {} window: {error}", kind.label()))?;
        }
        window
            .set_focus()
            .map_err(|error| format!("Failed to focus {} window: {error}", kind.label()))
    }

    fn close(&self, kind: WindowKind) -> Result<(), String> {
        self.window(kind)?
            .close()
            .map_err(|error| format!("Failed to close {} window: {error}", kind.label()))
    }

    fn outer_size(&self, kind: WindowKind) -> Result<PopupSize, String> {
        let size = self
            .window(kind)?
            .outer_size()
            .map_err(|error| format!("Failed to read {} window size: {error}", kind.label()))?;
        Ok(PopupSize {
            width: f64::from(size.width),
            height: f64::from(size.height),
        })
    }

    fn set_position(&self, kind: WindowKind, position: PopupPosition) -> Result<(), String> {
        self.window(kind)?
            .set_position(PhysicalPosition::new(position.x, position.y))
            .map_err(|error| format!("Failed to move {} window: {error}", kind.label()))
    }

    fn work_area(&self) -> Option<ScreenRect> {
        let monitor = match self.app_handle.primary_monitor() {
            Ok(Some(monitor)) => monitor,
            Ok(None) => return None,
            Err(error) => {
                append_desktop_log(&format!("failed to query primary monitor: {error}"));
                return None;
            }
        };
        let area = monitor.work_area();
        Some(ScreenRect {
            x: f64::from(area.position.x),
            y: f64::from(area.position.y),
            width: f64::from(area.size.width),
            height: f64::from(area.size.height),
        })
    }

    fn emit(&self, kind: WindowKind, signal: &ShellSignal) -> Result<(), String> {
        let label = kind.label();
        let event = signal.event_name();
        let result = self.app_handle.emit_to(label, event, signal.payload());
        result.map_err(|error| format!("Failed to emit {event} to {label}: {error}"))
    }

    fn rebuild_tray_menu(&self, items: &[TrayMenuItemSpec]) -> Result<(), String> {
        let tray = self
            .app_handle
            .tray_by_id(TRAY_ID)
            .ok_or_else(|| "tray icon not found".to_string())?;
        let menu = Menu::new(self.app_handle)
            .map_err(|error| format!("Failed to create tray menu: {error}"))?;

        for item in items {
            match item {
                TrayMenuItemSpec::Action(entry) => {
                    let menu_item = MenuItem::with_id(
                        self.app_handle,
                        entry.id,
                        entry.label,
                        entry.enabled,
                        None::<&str>,
                    )
                    .map_err(|error| {
                        format!("Failed to create tray menu item {}: {error}", entry.id)
                    })?;
                    menu.append(&menu_item).map_err(|error| {
                        format!("Failed to append tray menu item {}: {error}", entry.id)
                    })?;
                }
                TrayMenuItemSpec::Separator => {
                    let separator = PredefinedMenuItem::separator(self.app_handle)
                        .map_err(|error| format!("Failed to create tray separator: {error}"))?;
                    menu.append(&separator)
                        .map_err(|error| format!("Failed to append tray separator: {error}"))?;
                }
            }
        }

        tray.set_menu(Some(menu))
            .map_err(|error| format!("Failed to install tray menu: {error}"))
    }
}
