pub(crate) const TRAY_MENU_CONNECT_LAST_SESSION: &str = "tray_connect_last_session";
pub(crate) const TRAY_MENU_DISCONNECT_ALL: &str = "tray_disconnect_all_sessions";
pub(crate) const TRAY_MENU_EXIT: &str = "tray_exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrayMenuAction {
    ConnectLastSession,
    DisconnectAllSessions,
    Exit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<TrayMenuAction> {
    match menu_id {
        TRAY_MENU_CONNECT_LAST_SESSION => Some(TrayMenuAction::ConnectLastSession),
        TRAY_MENU_DISCONNECT_ALL => Some(TrayMenuAction::DisconnectAllSessions),
        TRAY_MENU_EXIT => Some(TrayMenuAction::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(
            action_from_menu_id(TRAY_MENU_CONNECT_LAST_SESSION),
            Some(TrayMenuAction::ConnectLastSession)
        );
        assert_eq!(
            action_from_menu_id(TRAY_MENU_DISCONNECT_ALL),
            Some(TrayMenuAction::DisconnectAllSessions)
        );
        assert_eq!(
            action_from_menu_id(TRAY_MENU_EXIT),
            Some(TrayMenuAction::Exit)
        );
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
