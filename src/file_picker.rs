use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;

use crate::{
    app_types::WindowKind,
    append_desktop_log,
    shell_signals::{files_chosen_recipients, ShellSignal},
    window_host::{TauriWindowHost, WindowHost},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileFilter {
    pub(crate) name: &'static str,
    pub(crate) extensions: &'static [&'static str],
}

pub(crate) const FILE_PICKER_FILTERS: [FileFilter; 3] = [
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
    FileFilter {
        name: "Images",
        extensions: &["jpg", "png", "gif", "bmp"],
    },
    FileFilter {
        name: "Documents",
        extensions: &["pdf", "doc", "docx", "txt"],
    },
];

/// Cancelled dialogs and empty selections both yield `None`.
pub(crate) fn normalize_selection(selection: Option<Vec<String>>) -> Option<Vec<String>> {
    selection.filter(|paths| !paths.is_empty())
}

pub(crate) fn deliver_files_chosen<F>(
    host: &dyn WindowHost,
    requester: Option<WindowKind>,
    paths: Vec<String>,
    log: F,
) where
    F: Fn(&str),
{
    let signal = ShellSignal::FilesChosen(paths);
    for recipient in files_chosen_recipients(requester, host.is_live(WindowKind::Session)) {
        if let Err(error) = host.emit(recipient, &signal) {
            log(&error);
        }
    }
}

/// Opens the native multi-file dialog without blocking the event loop. The
/// selection is echoed to the requesting window and the live session window.
pub(crate) fn open_file_picker(app_handle: &AppHandle, requester_label: String) {
    let mut dialog = app_handle
        .dialog()
        .file()
        .set_title("Select files to upload");
    for filter in FILE_PICKER_FILTERS {
        dialog = dialog.add_filter(filter.name, filter.extensions);
    }

    let app_handle = app_handle.clone();
    dialog.pick_files(move |selection| {
        let selection =
            selection.map(|files| files.into_iter().map(|file| file.to_string()).collect());
        let Some(paths) = normalize_selection(selection) else {
            append_desktop_log("file picker closed without a selection");
            return;
        };

        append_desktop_log(&format!(
            "file picker returned {} path(s) for {requester_label}",
            paths.len()
        ));
        let requester = WindowKind::from_label(&requester_label);
        if requester.is_none() {
            append_desktop_log(&format!(
                "file picker requester {requester_label} is not a shell window"
            ));
        }
        let host = TauriWindowHost::new(&app_handle);
        deliver_files_chosen(&host, requester, paths, append_desktop_log);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window_host::fake::FakeHost;

    fn two_files() -> Vec<String> {
        vec![
            "C:\\Users\\me\\report.pdf".to_string(),
            "C:\\Users\\me\\photo.png".to_string(),
        ]
    }

    #[test]
    fn filters_offer_all_files_images_and_documents() {
        let names: Vec<&str> = FILE_PICKER_FILTERS.iter().map(|filter| filter.name).collect();
        assert_eq!(names, vec!["All Files", "Images", "Documents"]);
        assert_eq!(FILE_PICKER_FILTERS[1].extensions, &["jpg", "png", "gif", "bmp"]);
        assert_eq!(FILE_PICKER_FILTERS[2].extensions, &["pdf", "doc", "docx", "txt"]);
    }

    #[test]
    fn normalize_selection_treats_cancel_and_empty_as_no_selection() {
        assert_eq!(normalize_selection(None), None);
        assert_eq!(normalize_selection(Some(Vec::new())), None);
        assert_eq!(normalize_selection(Some(two_files())), Some(two_files()));
    }

    #[test]
    fn two_files_reach_requester_and_session_in_identical_order() {
        let host = FakeHost::default();
        host.insert_window(WindowKind::Main, true);
        host.insert_window(WindowKind::Session, true);

        deliver_files_chosen(&host, Some(WindowKind::Main), two_files(), |_| {});

        assert_eq!(
            host.emitted(),
            vec![
                (WindowKind::Main, ShellSignal::FilesChosen(two_files())),
                (WindowKind::Session, ShellSignal::FilesChosen(two_files())),
            ]
        );
    }

    #[test]
    fn cancelled_picker_sends_nothing() {
        let host = FakeHost::default();
        host.insert_window(WindowKind::Main, true);
        host.insert_window(WindowKind::Session, true);

        if let Some(paths) = normalize_selection(None) {
            deliver_files_chosen(&host, Some(WindowKind::Main), paths, |_| {});
        }

        assert!(host.emitted().is_empty());
    }

    #[test]
    fn delivery_logs_when_requester_window_closed_meanwhile() {
        let host = FakeHost::default();
        host.insert_window(WindowKind::Session, true);
        let logs = std::cell::RefCell::new(Vec::new());

        deliver_files_chosen(&host, Some(WindowKind::TrayPopup), two_files(), |line| {
            logs.borrow_mut().push(line.to_string())
        });

        assert_eq!(
            host.emitted(),
            vec![(WindowKind::Session, ShellSignal::FilesChosen(two_files()))]
        );
        assert_eq!(logs.borrow().len(), 1);
    }
}
