#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_identity;
mod app_runtime;
mod app_types;
mod desktop_bridge;
mod desktop_bridge_commands;
mod file_picker;
mod host_events;
mod logging;
mod session_controller;
mod shell_config;
mod shell_signals;
mod surface_mode;
mod tray_actions;
mod tray_controller;
mod tray_menu;
mod tray_menu_handler;
mod tray_position;
mod tray_setup;
mod ui_dispatch;
mod window_actions;
mod window_factory;
mod window_host;

pub(crate) use app_constants::*;
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
