use url::Url;

use crate::surface_mode::SurfaceMode;

/// Injected into every shell window. Exposes the message bus as
/// `window.cloudPc`; each `on*` subscription returns a function that removes
/// exactly the listener it registered, even if called before the underlying
/// listener finished registering.
pub(crate) const DESKTOP_BRIDGE_SCRIPT: &str = r#"
(function () {
  if (window.cloudPc) {
    return;
  }

  function tauri() {
    return window.__TAURI__;
  }

  function invoke(command) {
    return tauri().core.invoke(command).catch(function (error) {
      console.error('[cloudPc] ' + command + ' failed', error);
    });
  }

  function subscribe(eventName, callback, mapPayload) {
    var disposed = false;
    var unlisten = null;
    tauri()
      .webviewWindow.getCurrentWebviewWindow()
      .listen(eventName, function (event) {
        callback(mapPayload(event.payload));
      })
      .then(function (fn) {
        if (disposed) {
          fn();
        } else {
          unlisten = fn;
        }
      });
    return function () {
      if (disposed) {
        return;
      }
      disposed = true;
      if (unlisten) {
        unlisten();
        unlisten = null;
      }
    };
  }

  function none() {
    return undefined;
  }

  function paths(payload) {
    return Array.isArray(payload) ? payload.slice() : [];
  }

  Object.defineProperty(window, 'cloudPc', {
    value: Object.freeze({
      showMainWindow: function () {
        return invoke('reveal_main_window');
      },
      openCloudPC: function () {
        return invoke('open_session');
      },
      openFilePicker: function () {
        return invoke('open_file_picker');
      },
      onCloudPCDisconnected: function (callback) {
        return subscribe('session-closed', callback, none);
      },
      onFilesSelected: function (callback) {
        return subscribe('files-chosen', callback, paths);
      },
    }),
    configurable: false,
    writable: false,
  });
})();
"#;

/// Describes a page load whose mode tag does not match its window.
pub(crate) fn page_mode_mismatch(expected: SurfaceMode, url: &Url) -> Option<String> {
    if url.scheme() == "about" {
        return None;
    }

    match SurfaceMode::from_url(url) {
        Some(mode) if mode == expected => None,
        Some(mode) => Some(format!(
            "page {url} loaded with mode {mode:?}, expected {expected:?}"
        )),
        None => Some(format!("page {url} carries an unknown mode tag")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_script_wires_every_signal() {
        for name in [
            "reveal_main_window",
            "open_session",
            "open_file_picker",
            "session-closed",
            "files-chosen",
        ] {
            assert!(
                DESKTOP_BRIDGE_SCRIPT.contains(name),
                "bridge script is missing {name}"
            );
        }
    }

    #[test]
    fn bridge_script_exposes_three_commands_and_two_events() {
        assert_eq!(DESKTOP_BRIDGE_SCRIPT.matches("return invoke('").count(), 3);
        assert_eq!(DESKTOP_BRIDGE_SCRIPT.matches("return subscribe('").count(), 2);
    }

    #[test]
    fn page_mode_mismatch_accepts_matching_mode() {
        let url = Url::parse("http://tauri.localhost/index.html?mode=cloudpc").unwrap();
        assert_eq!(page_mode_mismatch(SurfaceMode::Session, &url), None);
    }

    #[test]
    fn page_mode_mismatch_reports_wrong_or_unknown_mode() {
        let url = Url::parse("http://tauri.localhost/index.html?mode=tray").unwrap();
        assert!(page_mode_mismatch(SurfaceMode::Main, &url).is_some());

        let url = Url::parse("http://tauri.localhost/index.html?mode=kiosk").unwrap();
        assert!(page_mode_mismatch(SurfaceMode::Tray, &url).is_some());
    }

    #[test]
    fn page_mode_mismatch_ignores_blank_pages() {
        let url = Url::parse("about:blank").unwrap();
        assert_eq!(page_mode_mismatch(SurfaceMode::Tray, &url), None);
    }
}
