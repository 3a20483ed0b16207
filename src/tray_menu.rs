use crate::{
    host_events::HostEvent,
    tray_actions::{TRAY_MENU_CONNECT_LAST_SESSION, TRAY_MENU_DISCONNECT_ALL, TRAY_MENU_EXIT},
    window_host::WindowHost,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrayMenuEntry {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrayMenuItemSpec {
    Action(TrayMenuEntry),
    Separator,
}

pub(crate) fn tray_menu_items(session_live: bool) -> Vec<TrayMenuItemSpec> {
    vec![
        TrayMenuItemSpec::Action(TrayMenuEntry {
            id: TRAY_MENU_CONNECT_LAST_SESSION,
            label: "Connect to the last session",
            enabled: true,
        }),
        TrayMenuItemSpec::Action(TrayMenuEntry {
            id: TRAY_MENU_DISCONNECT_ALL,
            label: "Disconnect all sessions",
            enabled: session_live,
        }),
        TrayMenuItemSpec::Separator,
        TrayMenuItemSpec::Action(TrayMenuEntry {
            id: TRAY_MENU_EXIT,
            label: "Exit",
            enabled: true,
        }),
    ]
}

/// Replaces the whole tray context menu. Failures are logged; the previous
/// menu stays in place.
pub(crate) fn rebuild_context_menu<F>(host: &dyn WindowHost, session_live: bool, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = host.rebuild_tray_menu(&tray_menu_items(session_live)) {
        log(&format!("failed to rebuild tray menu: {error}"));
    }
}

pub(crate) fn session_live_after(event: HostEvent) -> bool {
    match event {
        HostEvent::SessionOpened => true,
        HostEvent::SessionClosed => false,
    }
}
