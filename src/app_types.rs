use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::{
    host_events::{HostEvents, ListenerId},
    shell_config::ShellConfig,
    tray_position::{PlacementMargins, PopupPosition},
    MAIN_WINDOW_LABEL, SESSION_WINDOW_LABEL, TRAY_WINDOW_LABEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum WindowKind {
    Main,
    TrayPopup,
    Session,
}

impl WindowKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Main => MAIN_WINDOW_LABEL,
            Self::TrayPopup => TRAY_WINDOW_LABEL,
            Self::Session => SESSION_WINDOW_LABEL,
        }
    }

    pub(crate) fn from_label(label: &str) -> Option<Self> {
        match label {
            MAIN_WINDOW_LABEL => Some(Self::Main),
            TRAY_WINDOW_LABEL => Some(Self::TrayPopup),
            SESSION_WINDOW_LABEL => Some(Self::Session),
            _ => None,
        }
    }
}

/// Lifecycle state owned by the host. Window handles are not
/// stored here; liveness is always looked up through the window registry.
pub(crate) struct HostState {
    pub(crate) margins: PlacementMargins,
    pub(crate) tray_position: Option<PopupPosition>,
    pub(crate) events: HostEvents,
    pub(crate) tray_menu_listener: Option<ListenerId>,
    /// When blur last hid the tray popup.
    pub(crate) popup_blur_hidden_at: Option<Instant>,
}

impl HostState {
    pub(crate) fn new(config: &ShellConfig) -> Self {
        Self {
            margins: PlacementMargins {
                gap: config.tray_gap,
                inset: config.tray_inset,
            },
            tray_position: None,
            events: HostEvents::default(),
            tray_menu_listener: None,
            popup_blur_hidden_at: None,
        }
    }

    /// Returns the cached popup position, computing it at most once per
    /// process lifetime. A failed computation leaves the cache empty.
    pub(crate) fn tray_position_or_init<F>(&mut self, compute: F) -> Option<PopupPosition>
    where
        F: FnOnce(PlacementMargins) -> Option<PopupPosition>,
    {
        if self.tray_position.is_none() {
            self.tray_position = compute(self.margins);
        }
        self.tray_position
    }

    /// Clears the blur-hide stamp. Returns true when the popup was hidden by
    /// blur no more than `grace` before `now`.
    pub(crate) fn take_recent_blur_hide(&mut self, now: Instant, grace: Duration) -> bool {
        self.popup_blur_hidden_at
            .take()
            .is_some_and(|hidden_at| now.saturating_duration_since(hidden_at) <= grace)
    }
}

pub(crate) struct ManagedHostState(pub(crate) Mutex<HostState>);

impl ManagedHostState {
    pub(crate) fn new(config: &ShellConfig) -> Self {
        Self(Mutex::new(HostState::new(config)))
    }

    pub(crate) fn with_state<T, F>(&self, action: &str, run: F) -> Result<T, String>
    where
        F: FnOnce(&mut HostState) -> T,
    {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| format!("host state lock poisoned during {action}"))?;
        Ok(run(&mut guard))
    }
}
