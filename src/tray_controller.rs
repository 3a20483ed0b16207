use std::time::Instant;

use crate::{
    app_types::{HostState, WindowKind},
    tray_menu,
    tray_position::{compute_popup_position, ScreenRect},
    window_actions::reveal_window,
    window_host::WindowHost,
    TRAY_BLUR_CLICK_GRACE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PopupToggle {
    Shown,
    Hidden,
}

/// Flips the tray popup. The position is computed on the first successful
/// show and reused for the rest of the process, even if the tray icon moves.
///
/// Pressing the tray icon while the popup is open blurs it before the click
/// arrives, so a click landing within [`TRAY_BLUR_CLICK_GRACE`] of a
/// blur-hide is reported as that hide.
pub(crate) fn toggle_tray_popup<F>(
    host: &dyn WindowHost,
    state: &mut HostState,
    tray_rect: Option<ScreenRect>,
    now: Instant,
    log: F,
) -> Result<PopupToggle, String>
where
    F: Fn(&str),
{
    let popup = WindowKind::TrayPopup;
    if !host.is_live(popup) {
        log("tray popup not found, recreating");
        host.create(popup)?;
    }

    let hidden_by_blur = state.take_recent_blur_hide(now, TRAY_BLUR_CLICK_GRACE);
    if host.is_visible(popup)? {
        host.hide(popup)?;
        return Ok(PopupToggle::Hidden);
    }
    if hidden_by_blur {
        log("tray click closes popup already hidden by blur");
        return Ok(PopupToggle::Hidden);
    }

    let position = state.tray_position_or_init(|margins| {
        let tray = tray_rect?;
        let work_area = host.work_area()?;
        let size = match host.outer_size(popup) {
            Ok(size) => size,
            Err(error) => {
                log(&error);
                return None;
            }
        };
        Some(compute_popup_position(tray, size, work_area, margins))
    });

    match position {
        Some(position) => {
            if let Err(error) = host.set_position(popup, position) {
                log(&error);
            }
        }
        None => log("tray popup position unavailable, showing at current position"),
    }

    reveal_window(host, popup, &log);
    Ok(PopupToggle::Shown)
}

pub(crate) fn hide_tray_popup_on_blur<F>(
    host: &dyn WindowHost,
    state: &mut HostState,
    now: Instant,
    log: F,
) where
    F: Fn(&str),
{
    let popup = WindowKind::TrayPopup;
    if !host.is_live(popup) {
        return;
    }
    if let Ok(true) = host.is_visible(popup) {
        match host.hide(popup) {
            Ok(()) => state.popup_blur_hidden_at = Some(now),
            Err(error) => log(&error),
        }
    }
}

/// Rebuilds the tray menu whenever the session lifecycle changes.
pub(crate) fn subscribe_menu_rebuilds(state: &mut HostState, log: fn(&str)) {
    if let Some(previous) = state.tray_menu_listener.take() {
        state.events.unsubscribe(previous);
    }
    let id = state.events.subscribe(move |event, host| {
        tray_menu::rebuild_context_menu(host, tray_menu::session_live_after(event), log)
    });
    state.tray_menu_listener = Some(id);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        host_events::HostEvent,
        shell_config::ShellConfig,
        tray_actions::TRAY_MENU_DISCONNECT_ALL,
        tray_menu::TrayMenuItemSpec,
        tray_position::{PopupPosition, PopupSize},
        window_host::fake::FakeHost,
    };

    const WORK_AREA: ScreenRect = ScreenRect {
        x: 0.0,
        y: 0.0,
        width: 1920.0,
        height: 1040.0,
    };
    const POPUP: PopupSize = PopupSize {
        width: 360.0,
        height: 540.0,
    };

    fn tray_at(x: f64) -> Option<ScreenRect> {
        Some(ScreenRect {
            x,
            y: 1045.0,
            width: 24.0,
            height: 24.0,
        })
    }

    fn disconnect_enabled(items: &[TrayMenuItemSpec]) -> bool {
        items.iter().any(|item| {
            matches!(item, TrayMenuItemSpec::Action(entry) if entry.id == TRAY_MENU_DISCONNECT_ALL && entry.enabled)
        })
    }

    #[test]
    fn clicks_alternate_visibility_and_keep_first_position() {
        let host = FakeHost::with_display(WORK_AREA, POPUP);
        host.insert_window(WindowKind::TrayPopup, false);
        let mut state = HostState::new(&ShellConfig::default());

        let mut shown_positions = Vec::new();
        for click in 0..6 {
            // The icon moves after the first click; the popup must not follow.
            let rect = tray_at(1000.0 + f64::from(click) * 200.0);
            let toggle =
                toggle_tray_popup(&host, &mut state, rect, Instant::now(), |_| {}).expect("toggle");
            let window = host.window(WindowKind::TrayPopup).unwrap();

            if click % 2 == 0 {
                assert_eq!(toggle, PopupToggle::Shown);
                assert!(window.visible);
                shown_positions.push(window.position);
            } else {
                assert_eq!(toggle, PopupToggle::Hidden);
                assert!(!window.visible);
            }
        }

        let expected = Some(PopupPosition { x: 832, y: 495 });
        assert_eq!(shown_positions, vec![expected; 3]);
        assert_eq!(state.tray_position, Some(PopupPosition { x: 832, y: 495 }));
    }

    #[test]
    fn toggle_recreates_destroyed_popup_and_shows_it() {
        let host = FakeHost::with_display(WORK_AREA, POPUP);
        let mut state = HostState::new(&ShellConfig::default());

        let toggle = toggle_tray_popup(&host, &mut state, tray_at(1000.0), Instant::now(), |_| {})
            .expect("toggle");

        assert_eq!(toggle, PopupToggle::Shown);
        assert_eq!(host.created(), vec![WindowKind::TrayPopup]);
        assert_eq!(host.focused(), vec![WindowKind::TrayPopup]);
    }

    #[test]
    fn toggle_without_display_info_shows_popup_and_leaves_cache_empty() {
        let host = FakeHost::default();
        host.insert_window(WindowKind::TrayPopup, false);
        let mut state = HostState::new(&ShellConfig::default());
        let logs = std::cell::RefCell::new(Vec::new());

        let toggle = toggle_tray_popup(&host, &mut state, None, Instant::now(), |line| {
            logs.borrow_mut().push(line.to_string())
        })
        .expect("toggle");

        assert_eq!(toggle, PopupToggle::Shown);
        assert_eq!(state.tray_position, None);
        assert_eq!(host.window(WindowKind::TrayPopup).unwrap().position, None);
        assert_eq!(logs.borrow().len(), 1);
    }

    #[test]
    fn blur_hides_visible_popup_and_ignores_missing_popup() {
        let host = FakeHost::default();
        let mut state = HostState::new(&ShellConfig::default());
        hide_tray_popup_on_blur(&host, &mut state, Instant::now(), |_| {});
        assert!(state.popup_blur_hidden_at.is_none());

        host.insert_window(WindowKind::TrayPopup, true);
        hide_tray_popup_on_blur(&host, &mut state, Instant::now(), |_| {});
        assert!(!host.window(WindowKind::TrayPopup).unwrap().visible);
        assert!(state.popup_blur_hidden_at.is_some());
    }

    #[test]
    fn click_right_after_blur_hide_keeps_popup_closed() {
        let host = FakeHost::with_display(WORK_AREA, POPUP);
        host.insert_window(WindowKind::TrayPopup, false);
        let mut state = HostState::new(&ShellConfig::default());
        let start = Instant::now();

        let opened = toggle_tray_popup(&host, &mut state, tray_at(1000.0), start, |_| {});
        assert_eq!(opened, Ok(PopupToggle::Shown));

        // Pressing the icon blurs the popup first; the click follows.
        let blurred_at = start + Duration::from_secs(2);
        hide_tray_popup_on_blur(&host, &mut state, blurred_at, |_| {});
        let click = toggle_tray_popup(
            &host,
            &mut state,
            tray_at(1000.0),
            blurred_at + Duration::from_millis(90),
            |_| {},
        );
        assert_eq!(click, Ok(PopupToggle::Hidden));
        assert!(!host.window(WindowKind::TrayPopup).unwrap().visible);

        let reopen = toggle_tray_popup(
            &host,
            &mut state,
            tray_at(1000.0),
            blurred_at + Duration::from_secs(1),
            |_| {},
        );
        assert_eq!(reopen, Ok(PopupToggle::Shown));
        assert!(host.window(WindowKind::TrayPopup).unwrap().visible);
    }

    #[test]
    fn click_long_after_blur_hide_reopens_popup() {
        let host = FakeHost::with_display(WORK_AREA, POPUP);
        host.insert_window(WindowKind::TrayPopup, true);
        let mut state = HostState::new(&ShellConfig::default());
        let blurred_at = Instant::now();

        hide_tray_popup_on_blur(&host, &mut state, blurred_at, |_| {});
        let click = toggle_tray_popup(
            &host,
            &mut state,
            tray_at(1000.0),
            blurred_at + Duration::from_secs(5),
            |_| {},
        );

        assert_eq!(click, Ok(PopupToggle::Shown));
        assert!(state.popup_blur_hidden_at.is_none());
    }

    #[test]
    fn menu_listener_rebuilds_menu_for_session_lifecycle() {
        let host = FakeHost::default();
        let mut state = HostState::new(&ShellConfig::default());
        subscribe_menu_rebuilds(&mut state, |_| {});
        subscribe_menu_rebuilds(&mut state, |_| {});
        assert_eq!(state.events.listener_count(), 1);

        state.events.publish(HostEvent::SessionOpened, &host);
        state.events.publish(HostEvent::SessionClosed, &host);

        let menus = host.menus();
        assert_eq!(menus.len(), 2);
        assert!(disconnect_enabled(&menus[0]));
        assert!(!disconnect_enabled(&menus[1]));
    }
}
