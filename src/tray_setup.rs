use std::time::Instant;

use tauri::{
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Rect,
};

use crate::{
    app_types::WindowKind, append_desktop_log, tray_controller, tray_menu, tray_menu_handler,
    tray_position::ScreenRect, ui_dispatch, window_host::WindowHost, TRAY_ID, TRAY_TOOLTIP,
};

pub(crate) fn tray_rect_to_screen(rect: &Rect, scale_factor: f64) -> ScreenRect {
    let position = rect.position.to_physical::<f64>(scale_factor);
    let size = rect.size.to_physical::<f64>(scale_factor);
    ScreenRect {
        x: position.x,
        y: position.y,
        width: size.width,
        height: size.height,
    }
}

fn primary_scale_factor(app_handle: &AppHandle) -> f64 {
    app_handle
        .primary_monitor()
        .ok()
        .flatten()
        .map(|monitor| monitor.scale_factor())
        .unwrap_or(1.0)
}

fn handle_tray_click(app_handle: &AppHandle, rect: &Rect) {
    let clicked_at = Instant::now();
    let tray_rect = tray_rect_to_screen(rect, primary_scale_factor(app_handle));
    let result = ui_dispatch::with_host(app_handle, "tray popup toggle", |host, state| {
        tray_controller::toggle_tray_popup(
            host,
            state,
            Some(tray_rect),
            clicked_at,
            append_desktop_log,
        )
    })
    .and_then(|toggled| toggled);
    if let Err(error) = result {
        append_desktop_log(&format!("tray popup toggle failed: {error}"));
    }
}

pub(crate) fn setup_tray(app_handle: &AppHandle) -> Result<(), String> {
    let mut tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .tooltip(TRAY_TOOLTIP)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                rect,
                ..
            } = event
            {
                handle_tray_click(tray.app_handle(), &rect);
            }
        });

    if let Some(icon) = app_handle.default_window_icon().cloned() {
        tray_builder = tray_builder.icon(icon);
    }

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .build(app_handle)
        .map_err(|error| format!("Failed to create tray icon: {error}"))?;

    ui_dispatch::with_host(app_handle, "tray setup", |host, state| {
        tray_controller::subscribe_menu_rebuilds(state, append_desktop_log);
        tray_menu::rebuild_context_menu(
            host,
            host.is_live(WindowKind::Session),
            append_desktop_log,
        );
    })
}

#[cfg(test)]
mod tests {
    use tauri::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};

    use super::*;

    #[test]
    fn tray_rect_to_screen_keeps_physical_bounds() {
        let rect = Rect {
            position: PhysicalPosition::new(1700, 1045).into(),
            size: PhysicalSize::new(24, 24).into(),
        };
        assert_eq!(
            tray_rect_to_screen(&rect, 1.5),
            ScreenRect {
                x: 1700.0,
                y: 1045.0,
                width: 24.0,
                height: 24.0,
            }
        );
    }

    #[test]
    fn tray_rect_to_screen_scales_logical_bounds() {
        let rect = Rect {
            position: LogicalPosition::new(100.0, 200.0).into(),
            size: LogicalSize::new(16.0, 16.0).into(),
        };
        assert_eq!(
            tray_rect_to_screen(&rect, 2.0),
            ScreenRect {
                x: 200.0,
                y: 400.0,
                width: 32.0,
                height: 32.0,
            }
        );
    }
}
