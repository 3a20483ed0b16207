use std::time::Duration;

pub(crate) const TRAY_ID: &str = "cloudpc-shell-tray";
pub(crate) const TRAY_TOOLTIP: &str = "Windows App";
/// A tray click this soon after a blur-hide belongs to the same gesture.
pub(crate) const TRAY_BLUR_CLICK_GRACE: Duration = Duration::from_millis(250);

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const TRAY_WINDOW_LABEL: &str = "tray";
pub(crate) const SESSION_WINDOW_LABEL: &str = "session";

pub(crate) const SESSION_CLOSED_EVENT: &str = "session-closed";
pub(crate) const FILES_CHOSEN_EVENT: &str = "files-chosen";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const SHELL_ROOT_ENV: &str = "CLOUDPC_SHELL_ROOT";
pub(crate) const SHELL_ROOT_DIR_NAME: &str = ".cloudpc-shell";

pub(crate) const SHELL_ENV_ENV: &str = "CLOUDPC_SHELL_ENV";
pub(crate) const DEV_HOST_ENV: &str = "CLOUDPC_DEV_HOST";
pub(crate) const DEV_PORT_MAIN_ENV: &str = "CLOUDPC_DEV_PORT_MAIN";
pub(crate) const DEV_PORT_TRAY_ENV: &str = "CLOUDPC_DEV_PORT_TRAY";
pub(crate) const DEV_PORT_SESSION_ENV: &str = "CLOUDPC_DEV_PORT_SESSION";
pub(crate) const TRAY_GAP_ENV: &str = "CLOUDPC_TRAY_GAP";
pub(crate) const TRAY_INSET_ENV: &str = "CLOUDPC_TRAY_INSET";

pub(crate) const DEFAULT_DEV_HOST: &str = "localhost";
/// Hosts granted IPC access by `capabilities/dev-server.json`.
pub(crate) const DEV_SERVER_IPC_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];
pub(crate) const DEFAULT_DEV_PORT_MAIN: u16 = 4001;
pub(crate) const DEFAULT_DEV_PORT_TRAY: u16 = 4002;
pub(crate) const DEFAULT_DEV_PORT_SESSION: u16 = 4003;
pub(crate) const DEFAULT_TRAY_GAP: f64 = 10.0;
pub(crate) const DEFAULT_TRAY_INSET: f64 = 10.0;

pub(crate) const PACKAGED_ENTRY_FILE: &str = "index.html";
