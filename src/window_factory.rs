use std::path::PathBuf;

use tauri::{
    image::Image, window::Color, AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use url::Url;

use crate::{
    append_desktop_log, app_types::WindowKind, desktop_bridge, shell_config::ShellConfig,
    surface_mode::{SurfaceMode, MODE_QUERY_KEY},
    PACKAGED_ENTRY_FILE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowIcon {
    App,
    Session,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSpec {
    pub(crate) title: &'static str,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) resizable: bool,
    pub(crate) decorations: bool,
    pub(crate) skip_taskbar: bool,
    pub(crate) always_on_top: bool,
    pub(crate) visible: bool,
    pub(crate) background: (u8, u8, u8),
    pub(crate) icon: WindowIcon,
}

pub(crate) fn window_spec(kind: WindowKind) -> WindowSpec {
    match kind {
        WindowKind::Main => WindowSpec {
            title: "Windows App",
            width: 1024.0,
            height: 768.0,
            resizable: true,
            decorations: true,
            skip_taskbar: false,
            always_on_top: false,
            visible: true,
            background: (0xdd, 0xdd, 0xdd),
            icon: WindowIcon::App,
        },
        // Created hidden; the tray controller positions it before first show.
        WindowKind::TrayPopup => WindowSpec {
            title: "Windows App",
            width: 360.0,
            height: 540.0,
            resizable: false,
            decorations: false,
            skip_taskbar: true,
            always_on_top: true,
            visible: false,
            background: (0xf3, 0xf3, 0xf3),
            icon: WindowIcon::App,
        },
        WindowKind::Session => WindowSpec {
            title: "Cloud PC",
            width: 1600.0,
            height: 900.0,
            resizable: true,
            decorations: true,
            skip_taskbar: false,
            always_on_top: false,
            visible: false,
            background: (0x00, 0x00, 0x00),
            icon: WindowIcon::Session,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentSource {
    DevServer(Url),
    Packaged(PathBuf),
}

pub(crate) fn packaged_entry(mode: SurfaceMode) -> String {
    match mode.query_tag() {
        Some(tag) => format!("{PACKAGED_ENTRY_FILE}?{MODE_QUERY_KEY}={tag}"),
        None => PACKAGED_ENTRY_FILE.to_string(),
    }
}

pub(crate) fn content_source(
    kind: WindowKind,
    config: &ShellConfig,
) -> Result<ContentSource, String> {
    let mode = SurfaceMode::for_window(kind);
    if !config.development {
        return Ok(ContentSource::Packaged(PathBuf::from(packaged_entry(mode))));
    }

    let raw = format!(
        "http://{}:{}/",
        config.dev_host,
        config.dev_ports.for_window(kind)
    );
    let mut url =
        Url::parse(&raw).map_err(|error| format!("Invalid dev server URL {raw}: {error}"))?;
    if let Some(tag) = mode.query_tag() {
        url.query_pairs_mut().append_pair(MODE_QUERY_KEY, tag);
    }
    Ok(ContentSource::DevServer(url))
}

fn window_icon(app_handle: &AppHandle, icon: WindowIcon) -> Option<Image<'_>> {
    match icon {
        WindowIcon::App => app_handle.default_window_icon().cloned(),
        WindowIcon::Session => Some(tauri::include_image!("./icons/session.png")),
    }
}

pub(crate) fn create_window(
    app_handle: &AppHandle,
    kind: WindowKind,
    config: &ShellConfig,
) -> Result<WebviewWindow, String> {
    let spec = window_spec(kind);
    let url = match content_source(kind, config)? {
        ContentSource::DevServer(url) => WebviewUrl::External(url),
        ContentSource::Packaged(path) => WebviewUrl::App(path),
    };
    let (red, green, blue) = spec.background;

    let mut builder = WebviewWindowBuilder::new(app_handle, kind.label(), url)
        .title(spec.title)
        .inner_size(spec.width, spec.height)
        .resizable(spec.resizable)
        .decorations(spec.decorations)
        .skip_taskbar(spec.skip_taskbar)
        .always_on_top(spec.always_on_top)
        .visible(spec.visible)
        .background_color(Color(red, green, blue, 0xff))
        .initialization_script(desktop_bridge::DESKTOP_BRIDGE_SCRIPT);

    if kind != WindowKind::TrayPopup {
        builder = builder.center();
    }
    if let Some(icon) = window_icon(app_handle, spec.icon) {
        builder = builder
            .icon(icon)
            .map_err(|error| format!("Failed to set {} window icon: {error}", kind.label()))?;
    }

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create {} window: {error}", kind.label()))?;
    append_desktop_log(&format!("created {} window", kind.label()));

    #[cfg(target_os = "windows")]
    if let Some(icon) = window_icon(app_handle, spec.icon) {
        if let Err(error) = window.set_icon(icon) {
            append_desktop_log(&format!(
                "failed to set taskbar icon for {} window: {error}",
                kind.label()
            ));
        }
    }

    #[cfg(debug_assertions)]
    if config.development {
        window.open_devtools();
    }

    Ok(window)
}
