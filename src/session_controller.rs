use crate::{
    app_types::{HostState, WindowKind},
    host_events::HostEvent,
    shell_signals::ShellSignal,
    window_actions::reveal_window,
    window_host::WindowHost,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionOpen {
    Revealed,
    Created,
}

/// Reveals the live session window, or creates it. Never creates a second
/// session window.
pub(crate) fn open_session<F>(
    host: &dyn WindowHost,
    state: &HostState,
    log: F,
) -> Result<SessionOpen, String>
where
    F: Fn(&str),
{
    let session = WindowKind::Session;
    if host.is_live(session) {
        reveal_window(host, session, &log);
        return Ok(SessionOpen::Revealed);
    }

    host.create(session)?;
    reveal_window(host, session, &log);
    state.events.publish(HostEvent::SessionOpened, host);
    Ok(SessionOpen::Created)
}

pub(crate) fn disconnect_all_sessions<F>(host: &dyn WindowHost, log: F)
where
    F: Fn(&str),
{
    let session = WindowKind::Session;
    if !host.is_live(session) {
        log("disconnect requested with no live session window");
        return;
    }
    if let Err(error) = host.close(session) {
        log(&error);
    }
}

/// Teardown after the session window is gone: tells the tray popup and
/// republishes the lifecycle change.
pub(crate) fn handle_session_destroyed<F>(host: &dyn WindowHost, state: &HostState, log: F)
where
    F: Fn(&str),
{
    let popup = WindowKind::TrayPopup;
    if host.is_live(popup) {
        if let Err(error) = host.emit(popup, &ShellSignal::SessionClosed) {
            log(&error);
        }
    }

    state.events.publish(HostEvent::SessionClosed, host);
}
