use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DESKTOP_LOG_FILE, SHELL_ROOT_DIR_NAME, SHELL_ROOT_ENV};

pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(SHELL_ROOT_DIR_NAME))
}

pub(crate) fn resolve_desktop_log_path(
    shell_root_dir: Option<PathBuf>,
    log_file_name: &str,
) -> PathBuf {
    match shell_root_dir {
        Some(root) => root.join("logs").join(log_file_name),
        None => env::temp_dir().join(SHELL_ROOT_DIR_NAME).join(log_file_name),
    }
}

fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

pub(crate) fn append_log_line(path: &Path, category: &str, message: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    file.write_all(format_log_line(category, message).as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_categorized_log(category: &str, message: &str) {
    #[cfg(debug_assertions)]
    eprintln!("[{category}] {message}");

    let path = resolve_desktop_log_path(default_shell_root_dir(), DESKTOP_LOG_FILE);
    // Logging must never take the shell down.
    let _ = append_log_line(&path, category, message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_categorized_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_categorized_log("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_categorized_log("shutdown", message);
}
