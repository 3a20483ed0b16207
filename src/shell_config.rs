use std::env;

use serde::Serialize;

use crate::{
    append_startup_log, app_types::WindowKind, DEFAULT_DEV_HOST, DEFAULT_DEV_PORT_MAIN,
    DEFAULT_DEV_PORT_SESSION, DEFAULT_DEV_PORT_TRAY, DEFAULT_TRAY_GAP, DEFAULT_TRAY_INSET,
    DEV_HOST_ENV, DEV_PORT_MAIN_ENV, DEV_SERVER_IPC_HOSTS, DEV_PORT_SESSION_ENV, DEV_PORT_TRAY_ENV, SHELL_ENV_ENV,
    TRAY_GAP_ENV, TRAY_INSET_ENV,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DevServerPorts {
    pub(crate) main: u16,
    pub(crate) tray: u16,
    pub(crate) session: u16,
}

impl DevServerPorts {
    pub(crate) fn for_window(&self, kind: WindowKind) -> u16 {
        match kind {
            WindowKind::Main => self.main,
            WindowKind::TrayPopup => self.tray,
            WindowKind::Session => self.session,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ShellConfig {
    pub(crate) development: bool,
    pub(crate) dev_host: String,
    pub(crate) dev_ports: DevServerPorts,
    pub(crate) tray_gap: f64,
    pub(crate) tray_inset: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            development: false,
            dev_host: DEFAULT_DEV_HOST.to_string(),
            dev_ports: DevServerPorts {
                main: DEFAULT_DEV_PORT_MAIN,
                tray: DEFAULT_DEV_PORT_TRAY,
                session: DEFAULT_DEV_PORT_SESSION,
            },
            tray_gap: DEFAULT_TRAY_GAP,
            tray_inset: DEFAULT_TRAY_INSET,
        }
    }
}

impl ShellConfig {
    /// Single-line JSON form written to the startup log.
    pub(crate) fn log_summary(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|error| format!("<failed to serialize shell config: {error}>"))
    }

    /// Dev-server pages on other hosts load, but the bridge's commands and
    /// event listeners are refused.
    pub(crate) fn dev_host_has_ipc_access(&self) -> bool {
        DEV_SERVER_IPC_HOSTS.contains(&self.dev_host.as_str())
    }

    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), append_startup_log)
    }

    pub(crate) fn from_lookup<L, F>(lookup: L, log: F) -> Self
    where
        L: Fn(&str) -> Option<String>,
        F: Fn(&str),
    {
        let defaults = Self::default();
        let development = lookup(SHELL_ENV_ENV)
            .map(|value| value.trim().eq_ignore_ascii_case("development"))
            .unwrap_or(false);
        let dev_host = lookup(DEV_HOST_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.dev_host);

        let port = |key: &str, fallback: u16| -> u16 {
            match lookup(key) {
                None => fallback,
                Some(raw) => match raw.trim().parse::<u16>() {
                    Ok(value) if value > 0 => value,
                    _ => {
                        log(&format!("ignoring invalid {key}={raw}; using {fallback}"));
                        fallback
                    }
                },
            }
        };
        let distance = |key: &str, fallback: f64| -> f64 {
            match lookup(key) {
                None => fallback,
                Some(raw) => match raw.trim().parse::<f64>() {
                    Ok(value) if value.is_finite() && value >= 0.0 => value,
                    _ => {
                        log(&format!("ignoring invalid {key}={raw}; using {fallback}"));
                        fallback
                    }
                },
            }
        };

        Self {
            development,
            dev_host,
            dev_ports: DevServerPorts {
                main: port(DEV_PORT_MAIN_ENV, defaults.dev_ports.main),
                tray: port(DEV_PORT_TRAY_ENV, defaults.dev_ports.tray),
                session: port(DEV_PORT_SESSION_ENV, defaults.dev_ports.session),
            },
            tray_gap: distance(TRAY_GAP_ENV, defaults.tray_gap),
            tray_inset: distance(TRAY_INSET_ENV, defaults.tray_inset),
        }
    }
}
